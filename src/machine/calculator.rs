//! The calculator state machine.

use crate::builder::{BuildError, CalculatorBuilder};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::{CalculatorConfig, ChainErrorPolicy};
use crate::core::number::{format_display, number_to_text, parse_number};
use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::machine::action::{Action, Digit, KeyError};
use crate::machine::operator::{DomainError, Operator};
use crate::machine::phase::Phase;
use crate::machine::registers::Registers;
use crate::machine::screen::{Frame, Screen};
use chrono::Utc;

/// Four-function calculator.
///
/// Owns the [`Registers`], the history line and a [`Screen`]. Every action
/// runs to completion, pushes whatever texts it changed to the screen, and
/// appends one entry to the transition log. Arithmetic failures never
/// escape: they turn the entry into `"Error"`.
///
/// # Example
///
/// ```rust
/// use tallyho::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.press_keys(["5", "+", "3", "+", "2", "="]).unwrap();
///
/// assert_eq!(calc.entry(), "10");
/// assert_eq!(calc.display_text(), "10");
/// assert_eq!(calc.history_text(), "8 + 2 =");
/// ```
pub struct Calculator<S: Screen = Frame> {
    registers: Registers,
    history_text: String,
    display_text: String,
    config: CalculatorConfig,
    screen: S,
    transitions: StateHistory<Phase>,
    operator_guard: Guard<Phase>,
    equals_guard: Guard<Phase>,
}

impl Calculator<Frame> {
    /// A calculator with the default configuration, rendering into a
    /// [`Frame`].
    pub fn new() -> Self {
        Self::from_parts(Frame::new(), CalculatorConfig::default())
    }

    /// A calculator with a custom configuration, rendering into a [`Frame`].
    pub fn with_config(config: CalculatorConfig) -> Result<Self, BuildError> {
        CalculatorBuilder::new().config(config).build()
    }
}

impl Default for Calculator<Frame> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Screen> Calculator<S> {
    /// Assemble a calculator from an already validated configuration and
    /// perform the startup clear.
    pub(crate) fn from_parts(screen: S, config: CalculatorConfig) -> Self {
        let mut calc = Self {
            registers: Registers::new(),
            history_text: String::new(),
            display_text: String::new(),
            transitions: StateHistory::with_limit(config.transition_log_limit),
            config,
            screen,
            operator_guard: Guard::new(|phase: &Phase| !phase.is_error()),
            equals_guard: Guard::new(|phase: &Phase| {
                matches!(phase, Phase::OperatorPending | Phase::Chaining)
            }),
        };
        calc.dispatch(Action::Clear);
        calc
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) {
        let from = self.phase();
        tracing::debug!(action = %action, phase = from.name(), "dispatching action");

        match action {
            Action::Digit(digit) => self.apply_digit(digit),
            Action::Dot => self.apply_dot(),
            Action::Operator(op) => self.apply_operator(op),
            Action::Equals => self.apply_equals(),
            Action::Percent => self.apply_percent(),
            Action::Backspace => self.apply_backspace(),
            Action::Clear => self.apply_clear(),
        }

        let to = self.phase();
        if from != to {
            tracing::trace!(from = from.name(), to = to.name(), "phase changed");
        }
        self.transitions = std::mem::take(&mut self.transitions).record(StateTransition {
            from,
            to,
            trigger: action.label(),
            timestamp: Utc::now(),
        });
    }

    /// Translate a key name and apply the resulting action.
    pub fn press_key(&mut self, key: &str) -> Result<(), KeyError> {
        let action = Action::from_key(key)?;
        self.dispatch(action);
        Ok(())
    }

    /// Press a sequence of keys, stopping at the first unbound one.
    pub fn press_keys<I, K>(&mut self, keys: I) -> Result<(), KeyError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.press_key(key.as_ref())?;
        }
        Ok(())
    }

    pub fn input_digit(&mut self, digit: Digit) {
        self.dispatch(Action::Digit(digit));
    }

    pub fn input_dot(&mut self) {
        self.dispatch(Action::Dot);
    }

    pub fn backspace(&mut self) {
        self.dispatch(Action::Backspace);
    }

    pub fn percent(&mut self) {
        self.dispatch(Action::Percent);
    }

    pub fn choose_operator(&mut self, op: Operator) {
        self.dispatch(Action::Operator(op));
    }

    pub fn equals(&mut self) {
        self.dispatch(Action::Equals);
    }

    pub fn clear_all(&mut self) {
        self.dispatch(Action::Clear);
    }

    pub fn entry(&self) -> &str {
        self.registers.entry()
    }

    pub fn previous(&self) -> Option<&str> {
        self.registers.previous()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.registers.operator()
    }

    pub fn just_evaluated(&self) -> bool {
        self.registers.just_evaluated()
    }

    /// The history line as last pushed to the screen.
    pub fn history_text(&self) -> &str {
        &self.history_text
    }

    /// The display text as last pushed to the screen.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn phase(&self) -> Phase {
        self.registers.phase()
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    pub fn transitions(&self) -> &StateHistory<Phase> {
        &self.transitions
    }

    /// Capture everything needed to resume this session later.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(
            &self.registers,
            &self.history_text,
            &self.display_text,
            &self.config,
            &self.transitions,
        )
    }

    /// Resume from a checkpoint and re-render both texts.
    ///
    /// The checkpoint is validated first; on failure nothing changes.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), CheckpointError> {
        checkpoint.validate()?;
        let phase = checkpoint.registers.phase();
        tracing::info!(id = %checkpoint.id, phase = phase.name(), "restoring calculator");

        self.registers = checkpoint.registers;
        self.history_text = checkpoint.history_text;
        self.display_text = checkpoint.display_text;
        self.config = checkpoint.config;
        self.transitions = checkpoint.transitions;

        self.screen.show_history(&self.history_text);
        self.screen.show_display(&self.display_text);
        Ok(())
    }

    fn apply_digit(&mut self, digit: Digit) {
        self.registers.start_fresh_if_evaluated();
        let entry = &mut self.registers.entry;
        if *entry == "0" {
            *entry = digit.to_string();
        } else {
            entry.push(digit.as_char());
        }
        self.show_entry();
    }

    fn apply_dot(&mut self) {
        self.registers.start_fresh_if_evaluated();
        if !self.registers.entry.contains('.') {
            self.registers.entry.push('.');
        }
        self.show_entry();
    }

    fn apply_backspace(&mut self) {
        if self.registers.just_evaluated {
            return;
        }
        let entry = &mut self.registers.entry;
        if entry.chars().count() <= 1 {
            *entry = "0".to_string();
        } else {
            entry.pop();
        }
        self.show_entry();
    }

    fn apply_percent(&mut self) {
        let current = parse_number(&self.registers.entry);
        if !current.is_finite() {
            return;
        }

        let value = match (self.registers.previous.as_deref(), self.registers.operator) {
            (Some(previous), Some(_)) => {
                let base = parse_number(previous);
                if !base.is_finite() {
                    return;
                }
                base * (current / 100.0)
            }
            _ => current / 100.0,
        };

        self.registers.entry = number_to_text(value);
        self.show_entry();
    }

    fn apply_operator(&mut self, next: Operator) {
        if !self.operator_guard.check(&self.phase()) {
            return;
        }

        let regs = &self.registers;
        if let (Some(pending), Some(previous), false) =
            (regs.operator, regs.previous.as_deref(), regs.just_evaluated)
        {
            let outcome = pending.apply(parse_number(previous), parse_number(&regs.entry));
            match outcome {
                Ok(result) => {
                    self.registers.previous = Some(number_to_text(result));
                    self.registers.entry = "0".to_string();
                    self.registers.operator = Some(next);
                    self.show_pending();
                }
                Err(reason) => {
                    let reset = self.config.chain_error_policy == ChainErrorPolicy::Reset;
                    self.fail(reason, reset);
                }
            }
            return;
        }

        if self.registers.previous.is_none() {
            self.registers.previous = Some(self.registers.entry.clone());
        }
        self.registers.operator = Some(next);
        self.registers.entry = "0".to_string();
        self.registers.just_evaluated = false;
        self.show_pending();
    }

    fn apply_equals(&mut self) {
        if !self.equals_guard.check(&self.phase()) {
            return;
        }
        let (Some(previous), Some(op)) = (self.registers.previous.clone(), self.registers.operator)
        else {
            return;
        };

        match op.apply(parse_number(&previous), parse_number(&self.registers.entry)) {
            Ok(result) => {
                let equation = format!("{previous} {op} {} =", self.registers.entry);
                self.registers.entry = number_to_text(result);
                self.registers.previous = None;
                self.registers.operator = None;
                self.registers.just_evaluated = true;
                self.set_history(equation);
                self.show_entry();
            }
            Err(reason) => self.fail(reason, true),
        }
    }

    fn apply_clear(&mut self) {
        self.registers = Registers::new();
        self.set_history(String::new());
        self.show_entry();
    }

    fn fail(&mut self, reason: DomainError, just_evaluated: bool) {
        tracing::warn!(%reason, "calculation failed, entering error state");
        self.registers.fail(just_evaluated);
        self.set_history(self.registers.pending_text());
        self.show_entry();
    }

    /// Push the in-progress history line and show the left operand.
    fn show_pending(&mut self) {
        self.set_history(self.registers.pending_text());
        let previous = self.registers.previous.clone().unwrap_or_default();
        self.show_display(&previous);
    }

    fn show_entry(&mut self) {
        let entry = self.registers.entry.clone();
        self.show_display(&entry);
    }

    fn show_display(&mut self, raw: &str) {
        self.display_text = format_display(
            raw,
            self.config.max_display_len,
            self.config.exponent_digits,
        );
        self.screen.show_display(&self.display_text);
    }

    fn set_history(&mut self, text: String) {
        self.history_text = text;
        self.screen.show_history(&self.history_text);
    }
}
