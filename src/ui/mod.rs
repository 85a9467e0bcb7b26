//! Terminal front end: event loop, chrome layout and rendering.

pub mod app;
pub mod events;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
