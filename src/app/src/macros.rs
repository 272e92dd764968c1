/// Macro for model field updates with automatic rendering.
/// Renders only when at least one field actually changed.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.relay_state, RelayState::Open)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.is_connected, true;
///     model.error_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for firing a bodiless device action through the request dispatcher.
///
/// # Example
/// ```ignore
/// device_action!(model, button, reboot_endpoint, "Reboot")
/// ```
#[macro_export]
macro_rules! device_action {
    ($model:expr, $button:expr, $endpoint:ident, $action:expr) => {{
        let url = $crate::build_url(&$model.config.$endpoint);
        log::debug!("{} requested via button {}", $action, $button);
        $crate::update::dispatch::dispatch(
            $model,
            $button,
            $crate::update::dispatch::ActionRequest::post(url),
        )
    }};
}
