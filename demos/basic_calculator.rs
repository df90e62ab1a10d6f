//! Basic Calculator
//!
//! This example drives the calculator with key presses, the way a keypad or
//! keyboard handler would.
//!
//! Key concepts:
//! - Key names bound to actions (`"7"`, `"+"`, `"Enter"`, `"Escape"`)
//! - Chained evaluation: an operator after an operand computes the pending result
//! - Phases derived from the registers
//! - Display shortening for long entries
//!
//! Run with: cargo run --example basic_calculator

use tallyho::{Calculator, CalculatorBuilder, ChainErrorPolicy, State};

fn show(calc: &Calculator) {
    println!(
        "  [{:>16}]  history: {:<16} phase: {}",
        calc.display_text(),
        format!("{:?}", calc.history_text()),
        calc.phase().name()
    );
}

fn main() {
    println!("=== Basic Calculator Example ===\n");

    let mut calc = Calculator::new();
    println!("Fresh calculator:");
    show(&calc);

    // Simple expression
    println!("\nTyping 12 + 7 =");
    for key in ["1", "2", "+", "7", "="] {
        calc.press_key(key).unwrap();
        show(&calc);
    }

    // Chaining: each operator evaluates the pending operation first
    println!("\nTyping Escape, then 2 * 3 + 4 - 1 =");
    calc.press_key("Escape").unwrap();
    for key in ["2", "*", "3", "+", "4", "-", "1", "="] {
        calc.press_key(key).unwrap();
        show(&calc);
    }

    // Editing the entry
    println!("\nTyping Escape, 3.14159, Backspace twice, %");
    calc.press_keys(["Escape", "3", ".", "1", "4", "1", "5", "9"]).unwrap();
    show(&calc);
    calc.press_keys(["Backspace", "Backspace"]).unwrap();
    show(&calc);
    calc.press_key("%").unwrap();
    show(&calc);

    // Division by zero
    println!("\nTyping Escape, 5 / 0 =");
    calc.press_keys(["Escape", "5", "/", "0", "="]).unwrap();
    show(&calc);
    println!("  error phase: {}", calc.phase().is_error());

    // Long entries are shortened only on the display
    println!("\nTyping a 19-digit number");
    calc.press_key("Escape").unwrap();
    calc.press_keys("1234566500000000000".chars().map(String::from)).unwrap();
    println!("  entry:   {}", calc.entry());
    println!("  display: {}", calc.display_text());

    // Unbound keys are reported, not ignored silently
    println!("\nPressing an unbound key:");
    match calc.press_key("F5") {
        Ok(()) => println!("  accepted"),
        Err(e) => println!("  rejected: {}", e),
    }

    // A configured calculator
    println!("\nCalculator with an 8-character display:");
    let mut narrow = CalculatorBuilder::new()
        .max_display_len(8)
        .exponent_digits(3)
        .chain_error_policy(ChainErrorPolicy::Append)
        .build()
        .unwrap();
    narrow
        .press_keys(["9", "9", "9", "9", "*", "9", "9", "9", "9", "="])
        .unwrap();
    println!("  entry:   {}", narrow.entry());
    println!("  display: {}", narrow.display_text());

    println!("\nTransitions recorded: {}", calc.transitions().len());

    println!("\n=== Example Complete ===");
}
