//! Raw-mode and alternate-screen lifetime.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, error};

/// Restores the terminal when dropped, on every exit path of `run_tui`.
pub struct TerminalGuard {
    restore: Option<Box<dyn FnOnce()>>,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> io::Result<Self> {
        enter_with(
            enable_raw_mode,
            || execute!(io::stdout(), EnterAlternateScreen),
            restore_terminal,
        )
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Runs `enable`, then `setup`; `restore` runs on drop once `enable` succeeded.
fn enter_with(
    enable: impl FnOnce() -> io::Result<()>,
    setup: impl FnOnce() -> io::Result<()>,
    restore: impl FnOnce() + 'static,
) -> io::Result<TerminalGuard> {
    enable()?;
    let guard = TerminalGuard {
        restore: Some(Box::new(restore)),
    };
    setup()?;
    debug!("Terminal entered raw mode");
    Ok(guard)
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        error!(error = %e, "Failed to leave alternate screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn tracker() -> (Rc<Cell<bool>>, impl FnOnce() + 'static) {
        let restored = Rc::new(Cell::new(false));
        let flag = Rc::clone(&restored);
        (restored, move || flag.set(true))
    }

    #[test]
    fn test_setup_failure_restores() {
        let (restored, restore) = tracker();
        let res = enter_with(|| Ok(()), || Err(io::Error::other("no tty")), restore);
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_enable_failure_skips_restore() {
        let (restored, restore) = tracker();
        let res = enter_with(|| Err(io::Error::other("no tty")), || Ok(()), restore);
        assert!(res.is_err());
        assert!(!restored.get());
    }

    #[test]
    fn test_restores_on_drop() {
        let (restored, restore) = tracker();
        let guard = enter_with(|| Ok(()), || Ok(()), restore).expect("enter");
        assert!(!restored.get());
        drop(guard);
        assert!(restored.get());
    }
}
