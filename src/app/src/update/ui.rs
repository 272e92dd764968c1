use crux_core::Command;

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update_field;
use crate::{Effect, PageCmd};

/// Handle UI-related events (clear messages, alert follow-ups)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::ClearError => update_field!(model.error_message, None),
        UiEvent::ClearSuccess => update_field!(model.success_message, None),

        // the page is only reloaded once the success alert is gone
        UiEvent::AlertDismissed { reload: true } => PageCmd::reload()
            .build()
            .then_send(|_| Event::Ui(UiEvent::Reloaded)),
        UiEvent::AlertDismissed { reload: false } => Command::done(),

        UiEvent::Reloaded => Command::done(),
    }
}
