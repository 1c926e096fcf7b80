//! Acciones invocables (interactions).
//!
//! - `Interaction`: interfaz neutra que usa el `Dispatcher`.
//! - `interaction!`: declara una acción a partir de su lista de parámetros,
//!   marcando con `#[process_id]` el que recibe el identificador de proceso.

pub mod definition;
pub mod macros;

pub use definition::{decode_arg, Interaction, IntoOutcome};
