/// The synthetic key presses the action sequences need.
///
/// Values map onto the WebDriver key codepoints, so they can be dispatched
/// either into a focused element or as a page-level key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    ArrowDown,
}

impl Key {
    /// WebDriver codepoint for this key.
    pub fn code(self) -> char {
        match self {
            Key::Enter => '\u{e007}',
            Key::Tab => '\u{e004}',
            Key::ArrowDown => '\u{e015}',
        }
    }
}
