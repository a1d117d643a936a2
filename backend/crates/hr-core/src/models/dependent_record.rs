use serde::Serialize;
use serde_json::{Map, Value};

/// A row of the externally owned `dependents` table.
///
/// The schema belongs to another system, so columns are kept as an ordered
/// name → value mapping in the order the store returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DependentRecord(Map<String, Value>);

impl DependentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.0.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
