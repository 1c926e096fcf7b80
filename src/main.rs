//! Demo: registra el catálogo de acciones y las invoca simulando el runtime
//! de procesos (que es quien genera y entrega el identificador).
use procflow_rust::{app_config, AppError};
use proc_core::{Binder, Dispatcher, InvocationContext, InvocationInput, ProcessId};
use serde_json::json;
use uuid::Uuid;

fn run() -> Result<(), AppError> {
    let config = app_config()?;
    let dispatcher = Dispatcher::new(Binder::new(config.binder.clone()));
    proc_adapters::register_all(&dispatcher)?;
    println!("acciones registradas: {:?}", dispatcher.registry().names());

    let process = InvocationContext::with_process_id(ProcessId::from(Uuid::new_v4()));

    let cancel = InvocationInput::new().with("reason", json!("timeout"));
    let out = dispatcher.invoke("cancelOrder", &cancel, &process)?;
    println!("cancelOrder -> {out}");

    let ship = InvocationInput::new().with("qty", json!(3)).with("express", json!(true));
    let out = dispatcher.invoke("shipOrder", &ship, &process)?;
    println!("shipOrder -> {out}");

    let log = InvocationInput::new().with("message", json!("hi"));
    let out = dispatcher.invoke("logEvent", &log, &InvocationContext::detached())?;
    println!("logEvent -> {out}");

    // Fuera de un proceso, cancelOrder no puede resolverse.
    match dispatcher.invoke("cancelOrder", &cancel, &InvocationContext::detached()) {
        Ok(v) => println!("cancelOrder (sin proceso) -> {v}"),
        Err(e) => println!("cancelOrder (sin proceso) rechazado: {e}"),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("[procflow] {e}");
        std::process::exit(e.exit_code());
    }
}
