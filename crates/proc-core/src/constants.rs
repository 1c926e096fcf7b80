//! Constantes del binder.
//!
//! `BINDER_VERSION` forma parte del fingerprint de cada firma registrada: un
//! cambio incompatible en las reglas de validación o de resolución debe
//! incrementarla para que las firmas congeladas se recalculen.

/// Versión lógica de las reglas de binding.
pub const BINDER_VERSION: &str = "B1.0";

/// Variable de entorno que fija la política ante varios parámetros marcados.
pub const ENV_MULTIPLE_PROCESS_ID: &str = "PROCFLOW_MULTIPLE_PROCESS_ID";

/// Variable de entorno que activa el rechazo de claves de input desconocidas.
pub const ENV_STRICT_INPUT: &str = "PROCFLOW_STRICT_INPUT";
