// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Lines moved by PageUp/PageDown in the logs modal
const LOG_PAGE: usize = 10;

/// Actions returned by modal input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing else to do
    None,
    /// Close the modal
    Close,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// Captured log entries; `scroll_back` counts lines up from the newest
    Logs { scroll_back: usize },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    /// Logs modal pinned to the newest entry
    pub fn logs() -> Self {
        Modal::Logs { scroll_back: 0 }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs { scroll_back } => {
                match key {
                    KeyCode::Esc | KeyCode::Char('L') | KeyCode::Char('q') => {
                        return ModalAction::Close
                    }
                    KeyCode::Up | KeyCode::Char('k') => *scroll_back += 1,
                    KeyCode::Down | KeyCode::Char('j') => {
                        *scroll_back = scroll_back.saturating_sub(1)
                    }
                    KeyCode::PageUp => *scroll_back += LOG_PAGE,
                    KeyCode::PageDown => *scroll_back = scroll_back.saturating_sub(LOG_PAGE),
                    KeyCode::End => *scroll_back = 0,
                    KeyCode::Home => *scroll_back = usize::MAX,
                    _ => {}
                }
                ModalAction::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_closes() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
    }

    #[test]
    fn test_logs_scrolls_back_and_returns_to_tail() {
        let mut modal = Modal::logs();
        modal.handle_input(KeyCode::Up);
        modal.handle_input(KeyCode::PageUp);
        assert_eq!(modal, Modal::Logs { scroll_back: 11 });

        modal.handle_input(KeyCode::Down);
        modal.handle_input(KeyCode::PageDown);
        modal.handle_input(KeyCode::Down);
        assert_eq!(modal, Modal::Logs { scroll_back: 0 });

        assert_eq!(modal.handle_input(KeyCode::Char('L')), ModalAction::Close);
    }
}
