//! Global keyboard shortcuts as a declarative dispatch table.
//!
//! The shell observes key presses, normalizes them into `Shortcut` values,
//! and asks the table for an action. Whether the action has a live target
//! (an add view to open, somewhere to go back to) is the shell's call; a
//! targetless action is silently dropped there.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Char(char),
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: ShortcutKey,
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub command: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    OpenAddStudent,
    GoBack,
}

const BINDINGS: &[(Shortcut, ShortcutAction)] = &[
    (
        Shortcut {
            key: ShortcutKey::Char('n'),
            command: true,
        },
        ShortcutAction::OpenAddStudent,
    ),
    (
        Shortcut {
            key: ShortcutKey::Escape,
            command: false,
        },
        ShortcutAction::GoBack,
    ),
];

/// A binding that requires the command modifier only matches when it is
/// held; one that does not is modifier-agnostic.
pub fn action_for(shortcut: Shortcut) -> Option<ShortcutAction> {
    BINDINGS
        .iter()
        .find(|(binding, _)| {
            binding.key == shortcut.key && (!binding.command || shortcut.command)
        })
        .map(|(_, action)| *action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_n_opens_the_add_view() {
        let action = action_for(Shortcut {
            key: ShortcutKey::Char('n'),
            command: true,
        });
        assert_eq!(action, Some(ShortcutAction::OpenAddStudent));
    }

    #[test]
    fn plain_n_is_not_a_shortcut() {
        let action = action_for(Shortcut {
            key: ShortcutKey::Char('n'),
            command: false,
        });
        assert_eq!(action, None);
    }

    #[test]
    fn escape_goes_back_with_or_without_modifiers() {
        for command in [false, true] {
            let action = action_for(Shortcut {
                key: ShortcutKey::Escape,
                command,
            });
            assert_eq!(action, Some(ShortcutAction::GoBack));
        }
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let action = action_for(Shortcut {
            key: ShortcutKey::Char('x'),
            command: true,
        });
        assert_eq!(action, None);
    }
}
