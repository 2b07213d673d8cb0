//! Modal dialog state.

/// Active modal dialog, if any.
///
/// Modals are exclusive: rendering draws at most one on top of the current
/// tab and key handling routes to it first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal; keys go to the focused pane.
    #[default]
    None,
    /// Keybinding overview.
    Help,
    /// Contact submission succeeded ("thank you").
    ThankYou,
    /// Something failed; carries the already-localized message to show.
    Alert(String),
}

impl Modal {
    /// What: Whether any modal is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Open-state check distinguishes `None` from every dialog
    ///
    /// - Input: Each modal variant
    /// - Output: `is_open` false only for `None`
    fn state_modal_open_check() {
        assert!(!Modal::None.is_open());
        assert!(Modal::Help.is_open());
        assert!(Modal::ThankYou.is_open());
        assert!(Modal::Alert("boom".into()).is_open());
    }
}
