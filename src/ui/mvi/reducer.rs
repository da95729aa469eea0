use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The only place where state transitions happen. Must stay free of I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
