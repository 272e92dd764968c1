use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::PanelConfig;
use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    pub config: PanelConfig,

    // Forms on the current page, in registration order
    pub forms: Vec<Form>,

    // Buttons keyed by element id; each in-flight request owns its own entry
    pub buttons: HashMap<String, ActionButton>,

    // Gate relay state
    pub is_connected: bool,
    pub relay_state: RelayState,
    /// Button that requested the current relay cycle
    pub gate_button: Option<String>,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|form| form.id == id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut Form> {
        self.forms.iter_mut().find(|form| form.id == id)
    }

    /// Insert a form, replacing one with the same id
    pub fn register_form(&mut self, form: Form) {
        match self.form_mut(&form.id) {
            Some(existing) => *existing = form,
            None => self.forms.push(form),
        }
    }

    /// Apply the busy state to a button, creating its entry on first use
    pub fn set_button_busy(&mut self, id: &str, busy: bool) {
        self.buttons
            .entry(id.to_string())
            .or_default()
            .set_busy(busy);
    }

    pub fn is_button_busy(&self, id: &str) -> bool {
        self.buttons.get(id).is_some_and(ActionButton::busy)
    }

    /// Set an error message and drop any stale success message
    pub fn set_error(&mut self, error: String) {
        self.success_message = None;
        self.error_message = Some(error);
    }

    pub fn set_success(&mut self, message: String) {
        self.error_message = None;
        self.success_message = Some(message);
    }

    /// Set an error message and return a render command
    pub fn set_error_and_render(
        &mut self,
        error: String,
    ) -> crux_core::Command<crate::Effect, crate::events::Event> {
        self.set_error(error);
        crux_core::render::render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_form_replaces_by_id() {
        let mut model = Model::default();
        model.register_form(Form::new("wifi", "/wifi", FormMethod::Post));
        model.register_form(Form::new("device", "/device", FormMethod::Post));
        model.register_form(Form::new("wifi", "/api/wifi", FormMethod::Post));

        assert_eq!(model.forms.len(), 2);
        assert_eq!(model.form("wifi").unwrap().action, "/api/wifi");
        assert_eq!(model.forms[0].id, "wifi");
    }

    #[test]
    fn unknown_button_is_not_busy() {
        let model = Model::default();
        assert!(!model.is_button_busy("reboot-button"));
    }

    #[test]
    fn buttons_are_tracked_independently() {
        let mut model = Model::default();
        model.set_button_busy("reboot-button", true);
        model.set_button_busy("wifi-submit", true);
        model.set_button_busy("wifi-submit", false);

        assert!(model.is_button_busy("reboot-button"));
        assert!(!model.is_button_busy("wifi-submit"));
    }

    #[test]
    fn error_and_success_replace_each_other() {
        let mut model = Model::default();
        model.set_success("Success".to_string());
        model.set_error("Error 500: boom".to_string());
        assert_eq!(model.success_message, None);

        model.set_success("Success".to_string());
        assert_eq!(model.error_message, None);
    }
}
