//! Contrato para inyectores de parámetros.
//!
//! Un `ParamInjector` recibe la descripción de un parámetro y el contexto de
//! la invocación y decide si aporta el valor. Los inyectores deben ser
//! deterministas y sin efectos secundarios: resolver dos veces con las mismas
//! entradas produce los mismos argumentos.

use serde_json::Value;

use crate::errors::BindingError;
use crate::model::InvocationContext;
use crate::signature::ParamDescriptor;

/// Trait para inyectores de parámetros.
pub trait ParamInjector: Send + Sync + std::fmt::Debug {
    /// - `Ok(Some(v))`: el inyector reclama el parámetro y `v` es el argumento.
    /// - `Ok(None)`: el parámetro no le corresponde.
    /// - `Err(_)`: le corresponde pero no puede producir el valor.
    fn inject(&self, action: &str, param: &ParamDescriptor, ctx: &InvocationContext)
              -> Result<Option<Value>, BindingError>;
}
