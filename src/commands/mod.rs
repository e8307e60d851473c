//! Commands: key tokens, definitions, and the store the dispatcher scans.

mod keys;
mod store;
mod types;

pub use keys::{parse_keys, KeyToken, KeysParseError};
pub use store::{CommandConflict, CommandStore};
pub use types::{Command, CommandHandler, GuardFn, HandlerFn};
