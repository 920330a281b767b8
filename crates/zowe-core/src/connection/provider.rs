//! External providers of connection values
//!
//! A provider replaces interactive prompting, for example to fetch values
//! from a single sign-on service. It receives the names of the properties
//! that are still missing and answers with whichever values it has.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// Values keyed by property name
pub type ProvidedValues = BTreeMap<String, Value>;

#[async_trait]
pub trait ValuesProvider: Send + Sync {
    async fn values_for(&self, needed: &[String]) -> anyhow::Result<ProvidedValues>;
}

/// Synchronous closures work as providers
#[async_trait]
impl<F> ValuesProvider for F
where
    F: Fn(&[String]) -> anyhow::Result<ProvidedValues> + Send + Sync,
{
    async fn values_for(&self, needed: &[String]) -> anyhow::Result<ProvidedValues> {
        self(needed)
    }
}
