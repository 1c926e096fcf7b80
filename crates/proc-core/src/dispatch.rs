//! `Dispatcher`: registro + binder + invocación.
//!
//! Es el consumidor de `Binder::resolve_parameters`: al invocar una acción
//! por nombre resuelve sus argumentos con la firma congelada en el registro y
//! entrega la lista ordenada a la implementación.
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;
use serde_json::Value;

use crate::binder::Binder;
use crate::errors::{BindingError, DispatchError};
use crate::interaction::Interaction;
use crate::model::{InvocationContext, InvocationInput, ResolvedArguments};
use crate::registry::{ActionRegistry, RegisteredAction};

#[derive(Debug)]
pub struct Dispatcher {
    binder: Binder,
    registry: ActionRegistry,
    handlers: DashMap<String, Arc<dyn Interaction>>,
}

impl Dispatcher {
    pub fn new(binder: Binder) -> Self {
        let registry = ActionRegistry::new(binder.config().clone());
        Self { binder,
               registry,
               handlers: DashMap::new() }
    }

    /// Registra la acción: valida su firma (fallo => la acción no queda
    /// registrada) y guarda la implementación bajo el nombre de la firma.
    pub fn register<I>(&self, interaction: I) -> Result<RegisteredAction, BindingError>
        where I: Interaction + 'static
    {
        self.register_arc(Arc::new(interaction))
    }

    /// Re-registrar una firma idéntica no sustituye la implementación ya
    /// registrada: se conserva la primera.
    pub fn register_arc(&self, interaction: Arc<dyn Interaction>) -> Result<RegisteredAction, BindingError> {
        let registered = self.registry.register(interaction.signature())?;
        match self.handlers.entry(registered.name().to_string()) {
            Entry::Occupied(_) => debug!("register:keep action={} (handler already present)", registered.name()),
            Entry::Vacant(slot) => {
                slot.insert(interaction);
            }
        }
        Ok(registered)
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    /// Sólo resuelve los argumentos (sin invocar).
    pub fn resolve(&self, name: &str, input: &InvocationInput, ctx: &InvocationContext)
                   -> Result<ResolvedArguments, DispatchError> {
        let action = self.registry
                         .get(name)
                         .ok_or_else(|| DispatchError::NotRegistered(name.to_string()))?;
        Ok(self.binder.resolve_parameters(&action.signature, input, ctx)?)
    }

    /// Resuelve e invoca la acción `name`. Una firma registrada sin
    /// implementación (directamente en el registro) no es invocable.
    pub fn invoke(&self, name: &str, input: &InvocationInput, ctx: &InvocationContext) -> Result<Value, DispatchError> {
        let handler = self.handlers
                          .get(name)
                          .map(|h| Arc::clone(h.value()))
                          .ok_or_else(|| DispatchError::NotRegistered(name.to_string()))?;
        let args = self.resolve(name, input, ctx)?;
        debug!("invoke:start action={name} args={}", args.len());
        let out = handler.invoke(&args)?;
        debug!("invoke:done action={name}");
        Ok(out)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Binder::default())
    }
}
