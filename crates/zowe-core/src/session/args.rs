//! Flat command argument map
//!
//! Arguments arrive already flattened from CLI flags, profile properties and
//! the environment. Names are looked up in camelCase first and then in the
//! kebab-case spelling a command-line parser would produce.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Read-only key/value arguments supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandArgs {
    values: Map<String, Value>,
}

impl CommandArgs {
    /// Create an empty argument map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace an argument
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value of an argument, in either spelling
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .get(name)
            .or_else(|| self.values.get(&to_kebab_case(name)))
    }

    /// String value of an argument, only when it is a non-empty string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// True when the argument holds something other than null or ""
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(value_is_present)
    }

    /// Layer these arguments over `lower`; entries here win
    pub fn layered_over(self, lower: CommandArgs) -> CommandArgs {
        let mut merged = lower.values;
        for (name, value) in self.values {
            if value_is_present(&value) {
                merged.insert(name, value);
            }
        }
        CommandArgs { values: merged }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl From<Map<String, Value>> for CommandArgs {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for CommandArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = CommandArgs::new();
        for (name, value) in iter {
            args.set(name, value);
        }
        args
    }
}

/// A value counts as present unless it is null or an empty string
pub fn value_is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

fn to_kebab_case(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    kebab
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_accepts_kebab_case() {
        let args = CommandArgs::new().with("token-value", "abc");
        assert_eq!(args.get_str("tokenValue"), Some("abc"));
        assert_eq!(to_kebab_case("certKeyFile"), "cert-key-file");
    }

    #[test]
    fn test_get_str_ignores_empty_and_non_strings() {
        let args = CommandArgs::new()
            .with("user", "")
            .with("port", 443)
            .with("authOrder", json!(null));
        assert_eq!(args.get_str("user"), None);
        assert_eq!(args.get_str("port"), None);
        assert!(args.has_value("port"));
        assert!(!args.has_value("authOrder"));
        assert!(!args.has_value("user"));
    }

    #[test]
    fn test_layering_prefers_upper_values() {
        let env = CommandArgs::new()
            .with("host", "env.example.com")
            .with("user", "envuser");
        let cli = CommandArgs::new()
            .with("host", "cli.example.com")
            .with("user", "");
        let merged = cli.layered_over(env);
        assert_eq!(merged.get_str("host"), Some("cli.example.com"));
        assert_eq!(merged.get_str("user"), Some("envuser"));
    }
}
