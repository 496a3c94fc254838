//! Notification events for the desktop controller.

use shared::domain::Theme;

/// Broadcast on the app event channel. Nothing subscribes to
/// `ThemeChanged` today beyond the drain loop's log line; the channel is
/// the extension point for components that want to react to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    ThemeChanged(Theme),
}
