// src/tui/terminal.rs
// =============================================================================
// Switching the terminal into dashboard mode and back.
//
// While the dashboard runs, the terminal is in raw mode on the alternate
// screen. A panic in that state would leave the shell unusable and print the
// panic message where nobody can read it, so `enter` chains a panic hook that
// puts the terminal back before the previous hook reports the panic.
// =============================================================================

use std::panic;

use ratatui::DefaultTerminal;

/// Raw mode + alternate screen, with the terminal restored on panic
pub fn enter() -> DefaultTerminal {
    let report_panic = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave();
        report_panic(info);
    }));

    ratatui::init()
}

/// Back to the normal screen and cooked mode. Safe to call more than once.
pub fn leave() {
    ratatui::restore();
}
