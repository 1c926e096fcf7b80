//! Registro de acciones.
//!
//! Registrar = validar + congelar. Una acción registrada queda invocable
//! mientras viva el registro; no existe estado terminal. El mapa es
//! concurrente (`DashMap`) y las firmas se comparten vía `Arc`, así que
//! registrar y consultar desde varios hilos no requiere locks externos.
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;

use crate::binder::BinderConfig;
use crate::errors::BindingError;
use crate::signature::{validate_signature, ActionSignature, ValidatedSignature};

/// Acción ya validada y congelada.
#[derive(Debug, Clone)]
pub struct RegisteredAction {
    pub signature: Arc<ValidatedSignature>,
    pub registered_at: DateTime<Utc>, // metadato (no entra en fingerprint)
}

impl RegisteredAction {
    pub fn name(&self) -> &str {
        self.signature.name()
    }

    pub fn fingerprint(&self) -> &str {
        self.signature.fingerprint()
    }
}

#[derive(Debug, Default)]
pub struct ActionRegistry {
    config: BinderConfig,
    actions: DashMap<String, RegisteredAction>,
}

impl ActionRegistry {
    pub fn new(config: BinderConfig) -> Self {
        Self { config,
               actions: DashMap::new() }
    }

    /// Valida y registra la firma.
    ///
    /// Registrar de nuevo una firma idéntica (mismo fingerprint) devuelve la
    /// entrada existente; una firma distinta bajo el mismo nombre es
    /// `AlreadyRegistered`.
    pub fn register(&self, signature: ActionSignature) -> Result<RegisteredAction, BindingError> {
        let validated = validate_signature(signature, &self.config)?;
        match self.actions.entry(validated.name().to_string()) {
            Entry::Occupied(existing) => {
                if existing.get().fingerprint() == validated.fingerprint() {
                    Ok(existing.get().clone())
                } else {
                    Err(BindingError::AlreadyRegistered { action: validated.name().to_string() })
                }
            }
            Entry::Vacant(slot) => {
                debug!("register action={} fingerprint={}", validated.name(), validated.fingerprint());
                let action = RegisteredAction { signature: Arc::new(validated),
                                                registered_at: Utc::now() };
                slot.insert(action.clone());
                Ok(action)
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<RegisteredAction> {
        self.actions.get(name).map(|a| a.value().clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Nombres registrados, ordenados.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.actions.iter().map(|a| a.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
