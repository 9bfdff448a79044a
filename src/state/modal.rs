//! Modal dialog state for the UI.

/// Overlay drawn above the main view; while open it receives all key input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal.
    #[default]
    None,
    /// Key binding reference.
    Help,
    /// Message the user has to dismiss.
    Alert {
        /// Text shown in the dialog.
        message: String,
    },
}
