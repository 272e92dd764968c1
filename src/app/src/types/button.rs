use serde::{Deserialize, Serialize};

/// Presentation state of a button that triggers a request.
///
/// The shell maps `disabled` onto the element's `disabled` property and
/// `loading` onto the `button-loading` class.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionButton {
    pub disabled: bool,
    pub loading: bool,
}

impl ActionButton {
    /// Toggle disabled + loading together. Calling twice with the same value
    /// is a no-op the second time.
    pub fn set_busy(&mut self, busy: bool) {
        self.disabled = busy;
        self.loading = busy;
    }

    /// A button is busy while it is both disabled and showing the loading marker
    pub fn busy(&self) -> bool {
        self.disabled && self.loading
    }
}
