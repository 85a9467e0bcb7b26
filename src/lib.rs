//! DateSpark: a terminal companion for couples.
//!
//! [`shell`] is the core: it owns navigation, preferences, favorites and
//! history. [`screens`] are the components it drives, and [`ui`] runs the
//! whole thing in a terminal.

pub mod cli;
pub mod config;
pub mod content;
pub mod logging;
pub mod screens;
pub mod shell;
pub mod ui;
