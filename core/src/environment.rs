//! The session environment: a flat, global table of bindings.
//!
//! Bindings hold independent copies. Binding copies a value in and lookup
//! copies it back out, so no holder can corrupt another holder's value.
//! There is a single scope; every symbol is global.

use crate::values::{Builtin, NativeFn, Value};

/// Mapping from symbol names to values, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    entries: Vec<(String, Value)>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment pre-populated with the builtin catalog.
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        crate::stdlib::register_builtins(&mut env);
        env
    }

    /// Look up `name`, returning a copy of its value.
    ///
    /// Unbound names produce an error value.
    pub fn get(&self, name: &str) -> Value {
        match self.lookup(name) {
            Some(value) => value.clone(),
            None => Value::error(format!("unbound symbol '{}'", name)),
        }
    }

    /// Borrow the value bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Bind `name` to a copy of `value`, replacing any previous binding.
    pub fn put(&mut self, name: &str, value: &Value) {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(n, _)| n == name) {
            tracing::debug!(name, "rebinding");
            *slot = value.clone();
            return;
        }
        tracing::debug!(name, "binding");
        self.entries.push((name.to_string(), value.clone()));
    }

    /// Bind a native function under `name`.
    pub fn register_builtin(&mut self, name: &'static str, func: NativeFn) {
        self.put(name, &Value::function(Builtin::new(name, func)));
    }

    /// Bound names, in the order they were first bound.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
