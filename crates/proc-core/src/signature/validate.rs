//! Validación en tiempo de registro.
//!
//! Todo lo que puede comprobarse sin conocer la llamada concreta se comprueba
//! aquí, una sola vez: posición de marcadores, compatibilidad de tipos,
//! nombres duplicados y la política de varios parámetros marcados. Lo que
//! sale de aquí es una `ValidatedSignature` inmutable.
use std::collections::HashSet;

use log::debug;

use crate::binder::{BinderConfig, MultipleProcessIdPolicy};
use crate::errors::BindingError;
use crate::marker::{Marker, MarkerTarget};

use super::ActionSignature;

/// Firma validada y congelada. Sólo se obtiene vía `validate_signature`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSignature {
    signature: ActionSignature,
    process_id_positions: Vec<usize>,
    requires_process_context: bool,
    fingerprint: String,
}

impl ValidatedSignature {
    pub fn signature(&self) -> &ActionSignature {
        &self.signature
    }

    pub fn name(&self) -> &str {
        &self.signature.name
    }

    pub fn process_id_positions(&self) -> &[usize] {
        &self.process_id_positions
    }

    pub fn requires_process_context(&self) -> bool {
        self.requires_process_context
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn into_inner(self) -> ActionSignature {
        self.signature
    }
}

/// Valida `signature` según `config` y la congela.
pub fn validate_signature(signature: ActionSignature, config: &BinderConfig) -> Result<ValidatedSignature, BindingError> {
    let action = signature.name.as_str();

    check_placement(action, &signature.action_markers, MarkerTarget::Action)?;
    check_placement(action, &signature.return_markers, MarkerTarget::Return)?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(signature.params.len());
    for p in signature.params.iter() {
        if !seen.insert(p.name.as_str()) {
            return Err(BindingError::DuplicateParameter { action: action.to_string(),
                                                          param: p.name.clone() });
        }

        check_placement(action, &p.markers, MarkerTarget::Parameter)?;
        // a lo sumo un marcador por parámetro
        if let Some(extra) = p.markers.get(1) {
            return Err(BindingError::InvalidMarkerPlacement { action: action.to_string(),
                                                              marker: *extra,
                                                              target: MarkerTarget::Parameter });
        }

        if p.requires_process_id() && !p.declared_type.accepts_process_id() {
            return Err(BindingError::TypeMismatch { action: action.to_string(),
                                                    param: p.name.clone(),
                                                    declared: p.declared_type.clone() });
        }
    }

    let process_id_positions = signature.process_id_positions();
    if process_id_positions.len() > 1 && config.multiple_process_id == MultipleProcessIdPolicy::Reject {
        return Err(BindingError::MultipleProcessIdParameters { action: action.to_string(),
                                                               count: process_id_positions.len() });
    }

    let requires_process_context = signature.requires_process_context();
    let fingerprint = signature.fingerprint();
    debug!("validate_signature:ok action={action} params={} process_id_positions={process_id_positions:?}",
           signature.params.len());

    Ok(ValidatedSignature { signature,
                            process_id_positions,
                            requires_process_context,
                            fingerprint })
}

fn check_placement(action: &str, markers: &[Marker], target: MarkerTarget) -> Result<(), BindingError> {
    match markers.iter().find(|m| !m.allows(target)) {
        Some(m) => Err(BindingError::InvalidMarkerPlacement { action: action.to_string(),
                                                              marker: *m,
                                                              target }),
        None => Ok(()),
    }
}
