//! Command Kit - command registry and shortcut dispatch for editor shells
//!
//! The host shell owns a [`dispatch::Dispatcher`], registers
//! [`commands::Command`]s against key combinations, and feeds it the
//! window's raw key-down/key-up events. The dispatcher tracks held keys,
//! broadcasts every event to hook observers, and invokes at most one
//! command per event, deterministically.

pub mod actions;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod hooks;
pub mod keymatch;
pub mod keystate;
pub mod labels;
pub mod logging;
pub mod platform;
