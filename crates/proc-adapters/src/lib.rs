//! proc-adapters: acciones concretas sobre el core de binding
//!
//! Este crate provee:
//! - Acciones de pedidos (`cancelOrder`, `shipOrder`) que reciben el
//!   identificador de proceso vía `#[process_id]`.
//! - Acciones de auditoría (`logEvent`, `recordAudit`), una sin marcador y
//!   otra con identificador opcional (válida dentro y fuera de un proceso).
//! - `register_all` para cargar el catálogo completo en un `Dispatcher`.

pub mod interactions;

use proc_core::{BindingError, Dispatcher};

pub use interactions::audit::{LogEvent, RecordAudit};
pub use interactions::order::{CancelOrder, ShipOrder};

/// Registra todas las acciones del catálogo. Se detiene en el primer error.
pub fn register_all(dispatcher: &Dispatcher) -> Result<(), BindingError> {
    dispatcher.register(CancelOrder::new())?;
    dispatcher.register(ShipOrder::new("dhl".to_string()))?;
    dispatcher.register(LogEvent::new())?;
    dispatcher.register(RecordAudit::new())?;
    Ok(())
}
