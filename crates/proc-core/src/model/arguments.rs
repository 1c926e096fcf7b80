//! Lista ordenada de argumentos resuelta por el `Binder`.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Argumentos en el mismo orden que los parámetros de la firma.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedArguments(Vec<Value>);

impl ResolvedArguments {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn get(&self, position: usize) -> Option<&Value> {
        self.0.get(position)
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ResolvedArguments {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
