//! Inyección de valores de runtime en parámetros marcados.
//!
//! El `Binder` liga siempre los parámetros marcados con `ProcessIdInjector`.
//! Para el resto consulta sus inyectores adicionales en orden; el primero que
//! devuelve `Some` fija el argumento. Los parámetros que ningún inyector
//! reclama se resuelven desde el input ordinario.

pub mod param_injector;
pub mod process_id;

pub use param_injector::ParamInjector;
pub use process_id::ProcessIdInjector;
