use proc_core::{BindingError, ConfigError, DispatchError};
use thiserror::Error;

/// Errores de la aplicación (registro, invocación y configuración).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(#[from] ConfigError),
    #[error("Registro rechazado: {0}")]
    Registration(#[from] BindingError),
    #[error("Invocación fallida: {0}")]
    Dispatch(#[from] DispatchError),
}

impl AppError {
    /// Código de salida para el binario de demostración.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Registration(_) => 3,
            AppError::Dispatch(_) => 4,
        }
    }
}
