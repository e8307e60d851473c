//! Command definitions: identifier, key combination, handler, guard, metadata.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::keys::{parse_keys, KeyToken, KeysParseError};

/// Invocable a command carries directly.
pub type HandlerFn = Arc<dyn Fn() + Send + Sync>;

/// Predicate checked immediately before invocation. False means the
/// dispatcher keeps scanning for another candidate.
pub type GuardFn = Arc<dyn Fn() -> bool + Send + Sync>;

/// How a command is invoked: a closure held directly, or the name of a
/// handler looked up in the shell's action registry at dispatch time.
#[derive(Clone)]
pub enum CommandHandler {
    Direct(HandlerFn),
    ByName(String),
}

impl CommandHandler {
    pub fn direct(handler: impl Fn() + Send + Sync + 'static) -> Self {
        CommandHandler::Direct(Arc::new(handler))
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        CommandHandler::ByName(name.into())
    }
}

impl fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandHandler::Direct(_) => f.write_str("Direct(..)"),
            CommandHandler::ByName(name) => f.debug_tuple("ByName").field(name).finish(),
        }
    }
}

/// A registered command.
///
/// Cloning copies the data fields deeply; handler and guard closures are
/// shared through `Arc`, so a clone invokes the same code but owns its data.
/// That split is what lets store taps rewrite a transient copy without
/// touching the stored original.
#[derive(Clone)]
pub struct Command {
    pub id: String,
    /// Key combination that triggers the command. An empty combination is
    /// never matched by the dispatcher; the command stays reachable by id.
    pub keys: Vec<KeyToken>,
    pub handler: Option<CommandHandler>,
    pub guard: Option<GuardFn>,
    /// Display name for palettes and menus.
    pub title: Option<String>,
    pub icon: Option<String>,
    /// Descriptive metadata carried verbatim and never interpreted here.
    pub extra: Map<String, Value>,
}

impl Command {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            keys: Vec::new(),
            handler: None,
            guard: None,
            title: None,
            icon: None,
            extra: Map::new(),
        }
    }

    pub fn with_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<KeyToken>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the combination from a textual sequence like `"CtrlCmd+Shift+K"`.
    pub fn with_parsed_keys(mut self, sequence: &str) -> Result<Self, KeysParseError> {
        self.keys = parse_keys(sequence)?;
        Ok(self)
    }

    pub fn with_handler(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.handler = Some(CommandHandler::direct(handler));
        self
    }

    /// Bind the command to a named handler resolved at dispatch time.
    pub fn with_handler_name(mut self, name: impl Into<String>) -> Self {
        self.handler = Some(CommandHandler::by_name(name));
        self
    }

    pub fn with_guard(mut self, guard: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.guard = Some(Arc::new(guard));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("keys", &self.keys)
            .field("handler", &self.handler)
            .field("has_guard", &self.guard.is_some())
            .field("title", &self.title)
            .field("icon", &self.icon)
            .finish()
    }
}
