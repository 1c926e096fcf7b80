//! Escenarios de punta a punta sobre la capa de aplicación: configuración ->
//! dispatcher -> catálogo de acciones.

use procflow_rust::{AppConfig, AppError};
use proc_core::{Binder, BinderConfig, BindingError, DeclaredType, DispatchError, Dispatcher, InvocationContext,
                InvocationInput, MultipleProcessIdPolicy, SignatureBuilder};
use serde_json::json;

fn dispatcher_with(config: BinderConfig) -> Dispatcher {
    let d = Dispatcher::new(Binder::new(config));
    proc_adapters::register_all(&d).expect("catalog");
    d
}

#[test]
fn cancel_order_resolves_process_id_and_reason() {
    let d = dispatcher_with(BinderConfig::default());
    let input = InvocationInput::new().with("reason", json!("timeout"));
    let args = d.resolve("cancelOrder", &input, &InvocationContext::with_process_id("PROC-42"))
                .expect("resolved");
    assert_eq!(args.into_vec(), vec![json!("PROC-42"), json!("timeout")]);
}

#[test]
fn cancel_order_outside_process_maps_to_app_error() {
    let d = dispatcher_with(BinderConfig::default());
    let input = InvocationInput::new().with("reason", json!("timeout"));
    let err: AppError = d.invoke("cancelOrder", &input, &InvocationContext::detached())
                         .unwrap_err()
                         .into();
    assert!(matches!(err,
                     AppError::Dispatch(DispatchError::Binding(BindingError::MissingProcessContext { .. }))));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn log_event_is_independent_of_process_id() {
    let d = dispatcher_with(BinderConfig::default());
    let input = InvocationInput::new().with("message", json!("hi"));
    for ctx in [InvocationContext::detached(),
                InvocationContext::with_process_id("PROC-1"),
                InvocationContext::with_process_id("PROC-2")]
    {
        let args = d.resolve("logEvent", &input, &ctx).expect("resolved");
        assert_eq!(args.into_vec(), vec![json!("hi")]);
    }
}

#[test]
fn strict_config_rejects_unknown_input() {
    let d = dispatcher_with(BinderConfig { strict_input: true,
                                           ..BinderConfig::default() });
    let input = InvocationInput::new().with("message", json!("hi"))
                                      .with("level", json!("debug"));
    let err = d.invoke("logEvent", &input, &InvocationContext::detached()).unwrap_err();
    assert!(matches!(err, DispatchError::Binding(BindingError::UnexpectedInput { .. })));
}

#[test]
fn reject_policy_applies_at_registration() {
    let d = Dispatcher::new(Binder::new(BinderConfig { multiple_process_id: MultipleProcessIdPolicy::Reject,
                                                       ..BinderConfig::default() }));
    let sig = SignatureBuilder::new("mirror").process_id_param("a", DeclaredType::String)
                                             .process_id_param("b", DeclaredType::String)
                                             .build();
    let err: AppError = d.registry().register(sig).unwrap_err().into();
    assert!(matches!(err, AppError::Registration(BindingError::MultipleProcessIdParameters { count: 2, .. })));
    assert!(d.registry().is_empty());
}

#[test]
fn app_config_defaults_match_binder_defaults() {
    // Sólo aplica si el entorno de test no define variables PROCFLOW_*.
    if std::env::var_os("PROCFLOW_MULTIPLE_PROCESS_ID").is_none() && std::env::var_os("PROCFLOW_STRICT_INPUT").is_none() {
        let cfg = AppConfig::from_env().expect("config");
        assert_eq!(cfg.binder, BinderConfig::default());
    }
}
