//! Unidirectional state primitives shared by the shell and its dialogs.
//!
//! ```text
//! event ──→ Intent ──→ Reducer ──→ State ──→ render
//!   ↑                                          │
//!   └──────────────────────────────────────────┘
//! ```
//!
//! The [`Store`] owns the current state and is the only writer. Screens never
//! hold authoritative state; they read a snapshot and report intents upward.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::{Store, Subscription};
