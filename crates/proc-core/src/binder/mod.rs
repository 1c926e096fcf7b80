//! `Binder`: resuelve los argumentos de una acción justo antes de invocarla.
//!
//! Para cada parámetro, en el orden de la firma:
//! 1. un parámetro marcado con `#[process_id]` se liga siempre con
//!    `ProcessIdInjector`, con precedencia sobre el input y sobre cualquier
//!    otro inyector;
//! 2. los parámetros sin marcar pasan por los inyectores adicionales en
//!    orden; el primero que reclama el parámetro fija el argumento;
//! 3. si ninguno lo reclama se busca en el input por nombre, luego el valor
//!    por defecto, luego `null` si el tipo es opcional;
//! 4. si nada aplica, `MissingRequiredParameter`.
//!
//! La resolución es pura: no hay estado mutable compartido, por lo que un
//! mismo `Binder` puede usarse desde varios hilos a la vez.

mod config;

pub use config::{init_dotenv, BinderConfig, MultipleProcessIdPolicy};

use log::{debug, warn};
use serde_json::Value;

use crate::errors::BindingError;
use crate::injection::{ParamInjector, ProcessIdInjector};
use crate::model::{InvocationContext, InvocationInput, ResolvedArguments};
use crate::signature::{validate_signature, ActionSignature, ValidatedSignature};

#[derive(Debug)]
pub struct Binder {
    config: BinderConfig,
    process_id: ProcessIdInjector,
    injectors: Vec<Box<dyn ParamInjector>>,
}

impl Binder {
    /// Binder sin inyectores adicionales: sólo el del identificador de proceso.
    pub fn new(config: BinderConfig) -> Self {
        Self::with_injectors(config, Vec::new())
    }

    /// Binder con inyectores adicionales (se consultan en orden). Nunca ven
    /// los parámetros marcados: esos los liga siempre `ProcessIdInjector`.
    pub fn with_injectors(config: BinderConfig, injectors: Vec<Box<dyn ParamInjector>>) -> Self {
        Self { config,
               process_id: ProcessIdInjector,
               injectors }
    }

    /// Añade un inyector al final de la cadena.
    pub fn add_injector(&mut self, injector: Box<dyn ParamInjector>) {
        self.injectors.push(injector);
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Validación de registro con la configuración de este binder.
    pub fn validate_signature(&self, signature: ActionSignature) -> Result<ValidatedSignature, BindingError> {
        validate_signature(signature, &self.config)
    }

    /// Produce la lista ordenada de argumentos para invocar la acción.
    pub fn resolve_parameters(&self,
                              signature: &ValidatedSignature,
                              input: &InvocationInput,
                              ctx: &InvocationContext)
                              -> Result<ResolvedArguments, BindingError> {
        let sig = signature.signature();
        let action = sig.name.as_str();

        if self.config.strict_input {
            if let Some(key) = input.keys().find(|k| sig.param(k).is_none()) {
                return Err(BindingError::UnexpectedInput { action: action.to_string(),
                                                           key: key.to_string() });
            }
        }

        let mut args: Vec<Value> = Vec::with_capacity(sig.params.len());
        'params: for p in sig.params.iter() {
            let injected = if p.requires_process_id() {
                self.process_id.inject(action, p, ctx)?
            } else {
                let mut claimed = None;
                for inj in self.injectors.iter() {
                    claimed = inj.inject(action, p, ctx)?;
                    if claimed.is_some() {
                        break;
                    }
                }
                claimed
            };
            if let Some(v) = injected {
                if input.contains(&p.name) {
                    warn!("resolve:shadowed action={action} param={} (injected value wins over input)", p.name);
                }
                args.push(v);
                continue 'params;
            }

            let value = match (input.get(&p.name), &p.default) {
                (Some(v), _) => v.clone(),
                (None, Some(d)) => d.clone(),
                (None, None) if p.declared_type.is_optional() => Value::Null,
                (None, None) => {
                    return Err(BindingError::MissingRequiredParameter { action: action.to_string(),
                                                                        param: p.name.clone() })
                }
            };
            args.push(value);
        }

        debug!("resolve:done action={action} args={} process_id={:?}",
               args.len(),
               ctx.process_id.as_ref().map(|p| p.as_str()));
        Ok(ResolvedArguments::new(args))
    }
}

impl Default for Binder {
    fn default() -> Self {
        Self::new(BinderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{DeclaredType, ParamDescriptor, SignatureBuilder};
    use serde_json::json;

    fn cancel_order(binder: &Binder) -> ValidatedSignature {
        let sig = SignatureBuilder::new("cancelOrder").process_id_param("processId", DeclaredType::String)
                                                      .param("reason", DeclaredType::String)
                                                      .build();
        binder.validate_signature(sig).expect("valid")
    }

    #[test]
    fn cancel_order_scenario() {
        let binder = Binder::default();
        let sig = cancel_order(&binder);
        let input = InvocationInput::new().with("reason", json!("timeout"));
        let args = binder.resolve_parameters(&sig, &input, &InvocationContext::with_process_id("PROC-42"))
                         .expect("resolved");
        assert_eq!(args.as_slice(), &[json!("PROC-42"), json!("timeout")]);
    }

    #[test]
    fn cancel_order_without_process_fails() {
        let binder = Binder::default();
        let sig = cancel_order(&binder);
        let input = InvocationInput::new().with("reason", json!("timeout"));
        let err = binder.resolve_parameters(&sig, &input, &InvocationContext::detached()).unwrap_err();
        assert_eq!(err,
                   BindingError::MissingProcessContext { action: "cancelOrder".into(),
                                                         param: "processId".into() });
    }

    #[test]
    fn marker_wins_over_input_with_same_name() {
        let binder = Binder::default();
        let sig = cancel_order(&binder);
        let input = InvocationInput::new().with("processId", json!("FORGED"))
                                          .with("reason", json!("timeout"));
        let args = binder.resolve_parameters(&sig, &input, &InvocationContext::with_process_id("PROC-42"))
                         .expect("resolved");
        assert_eq!(args.get(0), Some(&json!("PROC-42")));
    }

    #[test]
    fn defaults_and_optionals_fill_missing_input() {
        let binder = Binder::default();
        let sig = SignatureBuilder::new("ship").param_with_default("carrier", DeclaredType::String, json!("dhl"))
                                               .param("note", DeclaredType::optional(DeclaredType::String))
                                               .param("qty", DeclaredType::Integer)
                                               .build();
        let sig = binder.validate_signature(sig).expect("valid");

        let args = binder.resolve_parameters(&sig,
                                             &InvocationInput::new().with("qty", json!(3)),
                                             &InvocationContext::detached())
                         .expect("resolved");
        assert_eq!(args.into_vec(), vec![json!("dhl"), json!(null), json!(3)]);

        let err = binder.resolve_parameters(&sig, &InvocationInput::new(), &InvocationContext::detached())
                        .unwrap_err();
        assert_eq!(err,
                   BindingError::MissingRequiredParameter { action: "ship".into(),
                                                            param: "qty".into() });
    }

    #[test]
    fn strict_input_rejects_unknown_keys() {
        let binder = Binder::new(BinderConfig { strict_input: true,
                                                ..BinderConfig::default() });
        let sig = cancel_order(&binder);
        let input = InvocationInput::new().with("reason", json!("timeout"))
                                          .with("extra", json!(1));
        let err = binder.resolve_parameters(&sig, &input, &InvocationContext::with_process_id("P"))
                        .unwrap_err();
        assert_eq!(err,
                   BindingError::UnexpectedInput { action: "cancelOrder".into(),
                                                   key: "extra".into() });

        // fuera de modo estricto la clave sobrante se ignora
        let lax = Binder::default();
        assert!(lax.resolve_parameters(&sig, &input, &InvocationContext::with_process_id("P")).is_ok());
    }

    #[derive(Debug)]
    struct TenantInjector;
    impl ParamInjector for TenantInjector {
        fn inject(&self, _action: &str, param: &ParamDescriptor, _ctx: &InvocationContext)
                  -> Result<Option<Value>, BindingError> {
            Ok((param.name == "tenant").then(|| json!("acme")))
        }
    }

    #[derive(Debug)]
    struct GreedyInjector;
    impl ParamInjector for GreedyInjector {
        fn inject(&self, _action: &str, _param: &ParamDescriptor, _ctx: &InvocationContext)
                  -> Result<Option<Value>, BindingError> {
            Ok(Some(json!("GREEDY")))
        }
    }

    #[test]
    fn marked_parameter_binds_process_id_without_explicit_injectors() {
        let binder = Binder::with_injectors(BinderConfig::default(), vec![]);
        let sig = cancel_order(&binder);
        let input = InvocationInput::new().with("processId", json!("FORGED"))
                                          .with("reason", json!("t"));
        let args = binder.resolve_parameters(&sig, &input, &InvocationContext::with_process_id("PROC-42"))
                         .expect("resolved");
        assert_eq!(args.into_vec(), vec![json!("PROC-42"), json!("t")]);

        let err = binder.resolve_parameters(&sig, &input, &InvocationContext::detached()).unwrap_err();
        assert!(matches!(err, BindingError::MissingProcessContext { .. }));
    }

    #[test]
    fn custom_injectors_never_claim_marked_parameters() {
        let binder = Binder::with_injectors(BinderConfig::default(), vec![Box::new(GreedyInjector)]);
        let sig = cancel_order(&binder);
        let args = binder.resolve_parameters(&sig, &InvocationInput::new(), &InvocationContext::with_process_id("PROC-42"))
                         .expect("resolved");
        assert_eq!(args.into_vec(), vec![json!("PROC-42"), json!("GREEDY")]);
    }

    #[test]
    fn custom_injectors_are_consulted_in_order() {
        let mut binder = Binder::default();
        binder.add_injector(Box::new(TenantInjector));
        let sig = SignatureBuilder::new("audit").process_id_param("processId", DeclaredType::String)
                                                .param("tenant", DeclaredType::String)
                                                .build();
        let sig = binder.validate_signature(sig).expect("valid");
        let args = binder.resolve_parameters(&sig, &InvocationInput::new(), &InvocationContext::with_process_id("P-7"))
                         .expect("resolved");
        assert_eq!(args.into_vec(), vec![json!("P-7"), json!("acme")]);
    }
}
