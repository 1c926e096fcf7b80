//! Errores del core de binding.
//!
//! - `BindingError`: fallos de registro (detectados una vez) y de resolución
//!   (sólo los que dependen del contexto de la llamada).
//! - `InteractionError`: fallos dentro de la propia acción.
//! - `DispatchError`: lo que ve quien invoca a través del `Dispatcher`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::marker::{Marker, MarkerTarget};
use crate::signature::DeclaredType;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum BindingError {
    #[error("action `{action}`: invalid placement of marker {marker:?} on {target}")]
    InvalidMarkerPlacement { action: String, marker: Marker, target: MarkerTarget },
    #[error("action `{action}`: parameter `{param}` declared as {declared} cannot receive a process identifier")]
    TypeMismatch { action: String, param: String, declared: DeclaredType },
    #[error("action `{action}`: parameter `{param}` requires a process identifier but none is available")]
    MissingProcessContext { action: String, param: String },
    #[error("action `{action}`: missing required parameter `{param}`")]
    MissingRequiredParameter { action: String, param: String },
    #[error("action `{action}`: parameter `{param}` declared more than once")]
    DuplicateParameter { action: String, param: String },
    #[error("action `{action}`: {count} parameters carry the process identifier marker")]
    MultipleProcessIdParameters { action: String, count: usize },
    #[error("action `{action}`: process identifier `{value}` is not valid for parameter `{param}` ({declared})")]
    ProcessIdConversion { action: String, param: String, value: String, declared: DeclaredType },
    #[error("action `{action}`: input `{key}` matches no parameter")]
    UnexpectedInput { action: String, key: String },
    #[error("action `{action}` already registered with a different signature")]
    AlreadyRegistered { action: String },
}

impl BindingError {
    /// Indica si el error se detecta al registrar (y no al invocar).
    pub fn is_registration_error(&self) -> bool {
        matches!(self,
                 BindingError::InvalidMarkerPlacement { .. }
                 | BindingError::TypeMismatch { .. }
                 | BindingError::DuplicateParameter { .. }
                 | BindingError::MultipleProcessIdParameters { .. }
                 | BindingError::AlreadyRegistered { .. })
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum InteractionError {
    #[error("argument `{param}` could not be decoded: {reason}")]
    ArgumentDecode { param: String, reason: String },
    #[error("interaction failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DispatchError {
    #[error("action `{0}` is not registered")]
    NotRegistered(String),
    #[error(transparent)]
    Binding(#[from] BindingError),
    #[error(transparent)]
    Interaction(#[from] InteractionError),
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {var}")]
    InvalidValue { var: &'static str, value: String },
}
