//! Message processing loop
//!
//! Drains a message and all of its follow-ups through `handler::update`,
//! collecting the actions the event loop must perform afterwards.

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message to completion.
///
/// `update` may return a follow-up message (key events resolve to
/// semantic messages this way); the loop feeds those back in until the
/// chain ends. Actions are returned in emission order.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut current = Some(message);

    while let Some(message) = current {
        let result = handler::update(state, message);
        if let Some(action) = result.action {
            actions.push(action);
        }
        current = result.message;
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;

    #[test]
    fn test_key_follow_up_is_processed() {
        let mut state = AppState::new();
        state.panel.visible = false;

        let actions = process_message(&mut state, Message::Key(InputKey::Char('h')));

        assert!(actions.is_empty());
        assert!(state.panel.visible);
    }

    #[test]
    fn test_actions_are_collected() {
        let mut state = AppState::new();

        let actions = process_message(&mut state, Message::Key(InputKey::Char('f')));

        assert_eq!(actions, vec![UpdateAction::SetFullscreen(true)]);
    }

    #[test]
    fn test_message_without_effect_produces_nothing() {
        let mut state = AppState::new();

        let actions = process_message(&mut state, Message::Tick);

        assert!(actions.is_empty());
    }
}
