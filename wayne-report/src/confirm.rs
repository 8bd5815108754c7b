//! Confirmation gate used before destructive form submissions.

use crate::settings::DEFAULT_CONFIRM_MESSAGE;

/// A blocking yes/no prompt.
pub trait ConfirmDialog {
    /// Show `message` and block until the user answers. `true` means accepted.
    fn confirm(&self, message: Option<&str>) -> bool;
}

impl<F> ConfirmDialog for F
where
    F: Fn(Option<&str>) -> bool,
{
    fn confirm(&self, message: Option<&str>) -> bool {
        self(message)
    }
}

/// Ask the user to confirm an action. The message is passed through unmodified.
pub fn confirm_action<D: ConfirmDialog + ?Sized>(dialog: &D, message: Option<&str>) -> bool {
    dialog.confirm(message)
}

/// Message for a bound button: its own `data-confirm-message`, or the default.
pub fn binding_message(attribute: Option<&str>) -> &str {
    match attribute {
        Some(message) if !message.is_empty() => message,
        _ => DEFAULT_CONFIRM_MESSAGE,
    }
}

/// Whether a click on a bound button must have its default action suppressed.
pub fn should_block_click<D: ConfirmDialog + ?Sized>(dialog: &D, attribute: Option<&str>) -> bool {
    !confirm_action(dialog, Some(binding_message(attribute)))
}
