// src/app/input_key.rs
// =============================================================================
// Keyboard input, independent of the terminal library.
//
// The TUI layer converts crossterm key events into `InputKey` so the state
// machine in `app` can be driven (and tested) without a terminal.
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}
