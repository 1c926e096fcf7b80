use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::BINDER_VERSION;
use crate::hashing::hash_value;
use crate::marker::Marker;

use super::{DeclaredType, SignatureBuilder};

/// Descripción de un parámetro formal de una acción.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    pub declared_type: DeclaredType,
    /// Marcadores colocados sobre el parámetro (vacío en el caso común).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<Marker>,
    /// Valor usado cuando el input no trae el parámetro.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        Self { name: name.into(),
               declared_type,
               markers: vec![],
               default: None }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// El parámetro lleva el marcador `ProcessId`.
    pub fn requires_process_id(&self) -> bool {
        self.has_marker(Marker::ProcessId)
    }
}

/// Firma completa de una acción: parámetros en orden y marcadores colocados
/// sobre la acción o su valor de retorno (estos últimos siempre inválidos
/// para `ProcessId`, pero se conservan para poder rechazarlos al registrar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSignature {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub action_markers: Vec<Marker>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub return_markers: Vec<Marker>,
}

impl ActionSignature {
    pub fn new(name: impl Into<String>, params: Vec<ParamDescriptor>) -> Self {
        Self { name: name.into(),
               params,
               action_markers: vec![],
               return_markers: vec![] }
    }

    pub fn builder(name: impl Into<String>) -> SignatureBuilder {
        SignatureBuilder::new(name)
    }

    pub fn param(&self, name: &str) -> Option<&ParamDescriptor> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Posiciones de los parámetros marcados con `ProcessId`.
    pub fn process_id_positions(&self) -> Vec<usize> {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, p)| p.requires_process_id())
            .map(|(i, _)| i)
            .collect()
    }

    /// La acción no puede resolverse sin identificador de proceso: algún
    /// parámetro marcado no es opcional.
    pub fn requires_process_context(&self) -> bool {
        self.params
            .iter()
            .any(|p| p.requires_process_id() && !p.declared_type.is_optional())
    }

    /// Fingerprint estable de la firma (independiente del orden de claves).
    pub fn fingerprint(&self) -> String {
        let params: Vec<Value> = self.params
                                     .iter()
                                     .map(|p| {
                                         json!({
                                             "name": p.name,
                                             "type": p.declared_type.to_string(),
                                             "markers": p.markers.iter().map(Marker::attribute_name).collect::<Vec<_>>(),
                                             "default": p.default,
                                         })
                                     })
                                     .collect();
        let markers = |ms: &[Marker]| ms.iter().map(Marker::attribute_name).collect::<Vec<_>>();
        hash_value(&json!({
            "binder_version": BINDER_VERSION,
            "name": self.name,
            "params": params,
            "action_markers": markers(&self.action_markers),
            "return_markers": markers(&self.return_markers),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cancel_order() -> ActionSignature {
        ActionSignature::new("cancelOrder",
                             vec![ParamDescriptor::new("processId", DeclaredType::String).with_marker(Marker::ProcessId),
                                  ParamDescriptor::new("reason", DeclaredType::String)])
    }

    #[test]
    fn marker_presence_is_queryable() {
        let sig = cancel_order();
        assert!(sig.params[0].requires_process_id());
        assert!(!sig.params[1].requires_process_id());
        // consultar no altera nada
        assert!(sig.params[0].requires_process_id());
        assert_eq!(sig.process_id_positions(), vec![0]);
        assert!(sig.requires_process_context());
    }

    #[test]
    fn fingerprint_changes_with_markers() {
        let a = cancel_order();
        let mut b = cancel_order();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.params[0].markers.clear();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn signature_loads_from_declarative_json() {
        let sig: ActionSignature = serde_json::from_value(json!({
            "name": "cancelOrder",
            "params": [
                {"name": "processId", "declared_type": "String", "markers": ["ProcessId"]},
                {"name": "reason", "declared_type": "String"}
            ]
        })).expect("signature json");
        assert_eq!(sig, cancel_order());
    }
}
