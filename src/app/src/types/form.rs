use serde::{Deserialize, Serialize};

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Message shown when a value is shorter than its declared `minlength`
pub fn min_length_message(min: usize) -> String {
    format!("Minimum length is {min} characters.")
}

/// HTTP method declared on a form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

/// A single input with its declared constraints
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub minlength: Option<usize>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_minlength(mut self, min: usize) -> Self {
        self.minlength = Some(min);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Check the declared constraints, returning the message for the first
    /// one that fails. `required` wins over `minlength`.
    pub fn violation(&self) -> Option<String> {
        if self.required && self.value.trim().is_empty() {
            return Some(REQUIRED_MESSAGE.to_string());
        }

        match self.minlength {
            // length in UTF-16 code units, like the browser's `value.length`
            Some(min) if self.value.encode_utf16().count() < min => Some(min_length_message(min)),
            _ => None,
        }
    }
}

/// Place next to a field where its validation message is rendered
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorSlot {
    pub text: String,
}

/// One `.row` of a form: at most one field and at most one message slot
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Row {
    pub field: Option<Field>,
    pub error_slot: Option<ErrorSlot>,
}

impl Row {
    /// Row with a field and an empty message slot
    pub fn with_field(field: Field) -> Self {
        Self {
            field: Some(field),
            error_slot: Some(ErrorSlot::default()),
        }
    }

    /// Re-run the field check and rewrite the message slot.
    ///
    /// The slot is cleared before every check. A missing slot only skips the
    /// writes, the verdict is still computed.
    pub fn check(&mut self) -> bool {
        let Some(field) = &self.field else {
            return true;
        };

        let violation = field.violation();

        if let Some(slot) = self.error_slot.as_mut() {
            slot.text.clear();
            if let Some(message) = &violation {
                slot.text.clone_from(message);
            }
        }

        violation.is_none()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error_slot.as_ref().map(|slot| slot.text.as_str())
    }
}

/// A configuration form as laid out on the page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Form {
    pub id: String,
    pub action: String,
    pub method: FormMethod,
    pub rows: Vec<Row>,
    /// Native browser validation UI is turned off
    pub novalidate: bool,
    /// Input events re-check the edited row
    pub live_validation: bool,
}

impl Form {
    pub fn new(id: impl Into<String>, action: impl Into<String>, method: FormMethod) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            method,
            ..Default::default()
        }
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_field(self, field: Field) -> Self {
        self.with_row(Row::with_field(field))
    }

    /// Check every row in document order and return whether all passed.
    ///
    /// Also switches off native validation and attaches live re-validation,
    /// so subsequent [`Form::input`] calls keep the messages current.
    pub fn validate(&mut self) -> bool {
        self.novalidate = true;
        self.live_validation = true;

        // no short-circuit: every row gets its message
        self.rows
            .iter_mut()
            .fold(true, |all_valid, row| row.check() && all_valid)
    }

    /// Store a new value for the field in `row`.
    ///
    /// Returns `false` if the row does not exist or has no field.
    pub fn input(&mut self, row: usize, value: String) -> bool {
        let live = self.live_validation;
        let Some(target) = self.rows.get_mut(row) else {
            return false;
        };
        let Some(field) = target.field.as_mut() else {
            return false;
        };

        field.value = value;
        if live {
            target.check();
        }
        true
    }

    /// Name/value pairs of every field, in document order
    pub fn field_values(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .filter_map(|row| row.field.as_ref())
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect()
    }
}
