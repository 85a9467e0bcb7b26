use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

/// Puts the terminal back the way the user's shell expects it.
///
/// Card screens run in raw mode on the alternate screen with the cursor
/// hidden. All three are undone here: raw mode first so a failing write
/// below still leaves a usable line editor, then the alternate screen so no
/// card text is left over the user's scrollback, then the cursor.
/// Errors are ignored; there is nowhere left to report them.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Runs [`restore_terminal`] exactly once, on drop or from the panic hook,
/// whichever comes first.
pub struct TerminalGuard {
    restored: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn install() -> Self {
        let restored = Arc::new(Mutex::new(false));
        let hook_flag = Arc::clone(&restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            // Restore before printing so the panic message lands on the
            // main screen instead of vanishing with the alternate one.
            restore_once(&hook_flag);
            default_hook(info);
        }));
        Self { restored }
    }
}

fn restore_once(restored: &Mutex<bool>) {
    let mut done = restored.lock();
    if !*done {
        *done = true;
        restore_terminal();
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored);
    }
}

/// Enter the card UI's terminal mode. Keep the guard alive for as long as
/// the terminal is in use.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    // From here on a failure must still undo raw mode.
    let guard = TerminalGuard::install();
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_runs_at_most_once() {
        let restored = Mutex::new(true);
        restore_once(&restored);
        assert!(*restored.lock());
    }
}
