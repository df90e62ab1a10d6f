//! Output sinks for the calculator.
//!
//! The calculator pushes two strings whenever they change: the display
//! (formatted value or `"Error"`) and the history line (`""`,
//! `"<prev> <op>"` or `"<prev> <op> <cur> ="`). A [`Screen`] receives them.

/// Receiver for the display and history texts.
pub trait Screen {
    /// Show the formatted display text.
    fn show_display(&mut self, text: &str);

    /// Show the history line.
    fn show_history(&mut self, text: &str);
}

impl<T: Screen + ?Sized> Screen for Box<T> {
    fn show_display(&mut self, text: &str) {
        (**self).show_display(text);
    }

    fn show_history(&mut self, text: &str) {
        (**self).show_history(text);
    }
}

impl<T: Screen + ?Sized> Screen for &mut T {
    fn show_display(&mut self, text: &str) {
        (**self).show_display(text);
    }

    fn show_history(&mut self, text: &str) {
        (**self).show_history(text);
    }
}

/// Screen that remembers the latest texts it was shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    display: String,
    history: String,
    display_refreshes: usize,
    history_refreshes: usize,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn history(&self) -> &str {
        &self.history
    }

    /// How many times the display was pushed.
    pub fn display_refreshes(&self) -> usize {
        self.display_refreshes
    }

    /// How many times the history line was pushed.
    pub fn history_refreshes(&self) -> usize {
        self.history_refreshes
    }
}

impl Screen for Frame {
    fn show_display(&mut self, text: &str) {
        self.display.clear();
        self.display.push_str(text);
        self.display_refreshes += 1;
    }

    fn show_history(&mut self, text: &str) {
        self.history.clear();
        self.history.push_str(text);
        self.history_refreshes += 1;
    }
}

/// Screen that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScreen;

impl Screen for NullScreen {
    fn show_display(&mut self, _text: &str) {}

    fn show_history(&mut self, _text: &str) {}
}

/// Screen that emits every refresh as a `tracing` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingScreen;

impl Screen for LoggingScreen {
    fn show_display(&mut self, text: &str) {
        tracing::debug!(display = text, "display refreshed");
    }

    fn show_history(&mut self, text: &str) {
        tracing::debug!(history = text, "history refreshed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_keeps_latest_texts() {
        let mut frame = Frame::new();
        frame.show_display("12");
        frame.show_display("123");
        frame.show_history("5 +");

        assert_eq!(frame.display(), "123");
        assert_eq!(frame.history(), "5 +");
        assert_eq!(frame.display_refreshes(), 2);
        assert_eq!(frame.history_refreshes(), 1);
    }

    #[test]
    fn boxed_screen_forwards() {
        let mut boxed: Box<dyn Screen> = Box::new(Frame::new());
        boxed.show_display("7");
        boxed.show_history("");
        // Should not panic
    }

    #[test]
    fn borrowed_frame_receives_pushes() {
        let mut frame = Frame::new();
        {
            let mut borrowed = &mut frame;
            Screen::show_display(&mut borrowed, "0.");
        }
        assert_eq!(frame.display(), "0.");
    }

    #[test]
    fn null_and_logging_screens_accept_text() {
        let mut null = NullScreen;
        null.show_display("1");
        null.show_history("1 +");

        let mut logging = LoggingScreen;
        logging.show_display("1");
        logging.show_history("1 +");
    }
}
