use serde_json::Value;

use crate::errors::BindingError;
use crate::model::InvocationContext;
use crate::signature::{DeclaredType, ParamDescriptor};

use super::ParamInjector;

/// Inyecta el identificador del proceso en curso en los parámetros marcados
/// con `Marker::ProcessId`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessIdInjector;

impl ParamInjector for ProcessIdInjector {
    fn inject(&self, action: &str, param: &ParamDescriptor, ctx: &InvocationContext)
              -> Result<Option<Value>, BindingError> {
        if !param.requires_process_id() {
            return Ok(None);
        }
        let Some(pid) = ctx.process_id.as_ref() else {
            if param.declared_type.is_optional() {
                return Ok(Some(Value::Null));
            }
            return Err(BindingError::MissingProcessContext { action: action.to_string(),
                                                             param: param.name.clone() });
        };

        match param.declared_type.innermost() {
            DeclaredType::Uuid => match pid.as_uuid() {
                // forma canónica, aunque llegue en mayúsculas o sin guiones
                Some(u) => Ok(Some(Value::String(u.to_string()))),
                None => Err(BindingError::ProcessIdConversion { action: action.to_string(),
                                                                param: param.name.clone(),
                                                                value: pid.to_string(),
                                                                declared: param.declared_type.clone() }),
            },
            _ => Ok(Some(Value::String(pid.to_string()))),
        }
    }
}
