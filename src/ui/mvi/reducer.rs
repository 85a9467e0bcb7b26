use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: `(State, Intent) -> State`.
///
/// Anything impure (clocks, identifiers, randomness) must be resolved before
/// the intent is built so that reducing the same pair always yields the same
/// state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
