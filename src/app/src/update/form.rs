use crux_core::{render::render, Command};

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::update::dispatch::submit_form;
use crate::Effect;

/// Handle form validation and submission events
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::Register { form } => {
            model.register_form(form);
            render()
        }

        FormEvent::Validate { form_id } => match model.form_mut(&form_id) {
            Some(form) => {
                let valid = form.validate();
                log::debug!("form {form_id} valid: {valid}");
                render()
            }
            None => unknown_form(form_id, model),
        },

        FormEvent::FieldInput {
            form_id,
            row,
            value,
        } => match model.form_mut(&form_id) {
            Some(form) => {
                if !form.input(row, value) {
                    log::warn!("form {form_id} has no field in row {row}");
                    return Command::done();
                }
                render()
            }
            None => unknown_form(form_id, model),
        },

        FormEvent::Submit { form_id, button } => {
            let Some(form) = model.form_mut(&form_id) else {
                return unknown_form(form_id, model);
            };

            // invalid forms never reach the network
            if !form.validate() {
                log::debug!("form {form_id} failed validation, not submitting");
                return render();
            }

            let form = form.clone();
            submit_form(&form, button, model)
        }
    }
}

fn unknown_form(form_id: String, model: &mut Model) -> Command<Effect, Event> {
    log::warn!("event for unknown form {form_id}");
    model.set_error_and_render(format!("Unknown form: {form_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{catalog, Field, Form, FormMethod, REQUIRED_MESSAGE};

    fn model_with(form: Form) -> Model {
        let mut model = Model::default();
        model.register_form(form);
        model
    }

    fn http_request_count(cmd: &mut Command<Effect, Event>) -> usize {
        cmd.effects()
            .filter(|effect| matches!(effect, Effect::Http(_)))
            .count()
    }

    #[test]
    fn validate_writes_messages_into_model() {
        let mut model = model_with(catalog::device());

        let _ = handle(
            FormEvent::Validate {
                form_id: "device".to_string(),
            },
            &mut model,
        );

        let form = model.form("device").unwrap();
        assert_eq!(form.rows[0].error_text(), Some(REQUIRED_MESSAGE));
        assert!(form.novalidate);
    }

    #[test]
    fn field_input_rechecks_after_validation() {
        let mut model = model_with(catalog::device());
        let _ = handle(
            FormEvent::Validate {
                form_id: "device".to_string(),
            },
            &mut model,
        );

        let _ = handle(
            FormEvent::FieldInput {
                form_id: "device".to_string(),
                row: 0,
                value: "front gate".to_string(),
            },
            &mut model,
        );

        let form = model.form("device").unwrap();
        assert_eq!(form.rows[0].error_text(), Some(""));
        assert_eq!(form.rows[0].field.as_ref().unwrap().value, "front gate");
    }

    #[test]
    fn invalid_submit_sends_nothing_and_keeps_button_idle() {
        let mut model = model_with(catalog::device());

        let mut cmd = handle(
            FormEvent::Submit {
                form_id: "device".to_string(),
                button: "device-submit".to_string(),
            },
            &mut model,
        );

        assert_eq!(http_request_count(&mut cmd), 0);
        assert!(!model.is_button_busy("device-submit"));
        assert_eq!(
            model.form("device").unwrap().rows[0].error_text(),
            Some(REQUIRED_MESSAGE)
        );
    }

    #[test]
    fn valid_submit_sends_form_and_marks_button_busy() {
        let form = Form::new("device", "/device", FormMethod::Post)
            .with_field(Field::new("device_name").required().with_value("gate"));
        let mut model = model_with(form);

        let mut cmd = handle(
            FormEvent::Submit {
                form_id: "device".to_string(),
                button: "device-submit".to_string(),
            },
            &mut model,
        );

        assert_eq!(http_request_count(&mut cmd), 1);
        assert!(model.is_button_busy("device-submit"));
    }

    #[test]
    fn unknown_form_sets_error() {
        let mut model = Model::default();

        let _ = handle(
            FormEvent::Validate {
                form_id: "missing".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.error_message.as_deref(), Some("Unknown form: missing"));
    }
}
