//! Identificador opaco de una instancia de proceso en ejecución.
//!
//! Lo genera y custodia el runtime de procesos; este crate sólo lo transporta
//! hasta el parámetro marcado. No se valida su forma salvo cuando el
//! parámetro destino declara `Uuid`.
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(String);

impl ProcessId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpreta el identificador como UUID (sólo si tiene esa forma).
    pub fn as_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProcessId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ProcessId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Uuid> for ProcessId {
    fn from(value: Uuid) -> Self {
        // forma hyphenated en minúsculas, la misma que produce `Uuid::to_string`
        Self(value.to_string())
    }
}

impl AsRef<str> for ProcessId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
