use super::form::{Field, Form, FormMethod};

/// WPA2 passphrases are at least 8 characters
const PASSWORD_MIN_LENGTH: usize = 8;

/// Forms served by the device firmware
pub fn device_forms() -> Vec<Form> {
    vec![
        initial_config(),
        access_point(),
        wifi(),
        credential(),
        device(),
    ]
}

/// First-boot setup, posted before the device has a configuration
pub fn initial_config() -> Form {
    Form::new("initial-config", "/", FormMethod::Post)
        .with_field(Field::new("device_name").required())
        .with_field(Field::new("admin_username").required())
        .with_field(
            Field::new("admin_pass")
                .required()
                .with_minlength(PASSWORD_MIN_LENGTH),
        )
        .with_field(Field::new("wifi_ssid"))
        .with_field(Field::new("wifi_pass").with_minlength(PASSWORD_MIN_LENGTH))
        .with_field(Field::new("ap_ssid").required())
        .with_field(Field::new("ap_pass"))
}

pub fn access_point() -> Form {
    Form::new("accesspoint", "/accesspoint", FormMethod::Post)
        .with_field(Field::new("ap_ssid").required())
        .with_field(Field::new("ap_pass"))
}

pub fn wifi() -> Form {
    Form::new("wifi", "/wifi", FormMethod::Post)
        .with_field(Field::new("wifi_ssid").required())
        .with_field(Field::new("wifi_pass").with_minlength(PASSWORD_MIN_LENGTH))
}

pub fn credential() -> Form {
    Form::new("credential", "/credential", FormMethod::Post)
        .with_field(Field::new("admin_username").required())
        .with_field(
            Field::new("admin_pass")
                .required()
                .with_minlength(PASSWORD_MIN_LENGTH),
        )
}

pub fn device() -> Form {
    Form::new("device", "/device", FormMethod::Post)
        .with_field(Field::new("device_name").required())
}
