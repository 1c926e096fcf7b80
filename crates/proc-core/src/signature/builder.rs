//! Builder para declarar firmas por código.
//!
//! ```ignore
//! let sig = SignatureBuilder::new("cancelOrder")
//!     .process_id_param("processId", DeclaredType::String)
//!     .param("reason", DeclaredType::String)
//!     .build();
//! ```
use serde_json::Value;

use crate::marker::Marker;

use super::{ActionSignature, DeclaredType, ParamDescriptor};

#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    signature: ActionSignature,
}

impl SignatureBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { signature: ActionSignature::new(name, vec![]) }
    }

    /// Parámetro ordinario (se toma del input por nombre).
    pub fn param(self, name: impl Into<String>, declared_type: DeclaredType) -> Self {
        self.descriptor(ParamDescriptor::new(name, declared_type))
    }

    /// Parámetro ordinario con valor por defecto.
    pub fn param_with_default(self, name: impl Into<String>, declared_type: DeclaredType, default: Value) -> Self {
        self.descriptor(ParamDescriptor::new(name, declared_type).with_default(default))
    }

    /// Parámetro marcado con `ProcessId`.
    pub fn process_id_param(self, name: impl Into<String>, declared_type: DeclaredType) -> Self {
        self.descriptor(ParamDescriptor::new(name, declared_type).with_marker(Marker::ProcessId))
    }

    pub fn descriptor(mut self, param: ParamDescriptor) -> Self {
        self.signature.params.push(param);
        self
    }

    /// Marcador sobre la acción completa. Se acepta aquí y se rechaza (si
    /// corresponde) en `validate_signature`.
    pub fn action_marker(mut self, marker: Marker) -> Self {
        self.signature.action_markers.push(marker);
        self
    }

    /// Marcador sobre el valor de retorno.
    pub fn return_marker(mut self, marker: Marker) -> Self {
        self.signature.return_markers.push(marker);
        self
    }

    pub fn build(self) -> ActionSignature {
        self.signature
    }
}
