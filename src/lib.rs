//! ProcFlow Rust Library
//!
//! Este crate actúa como la capa de aplicación sobre `proc-core`:
//! - Expone `errors` con el error unificado de la aplicación.
//! - Expone `config` para cargar la configuración del binder una sola vez.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;

pub use config::{app_config, AppConfig};
pub use errors::AppError;
