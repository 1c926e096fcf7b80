//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone una estructura
//! inmutable (`app_config`). Hoy sólo contiene la sección del binder.
use log::info;
use once_cell::sync::OnceCell;
use proc_core::BinderConfig;

use crate::errors::AppError;

/// Configuración global de la aplicación (extensible con más secciones).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Reglas de validación y resolución de parámetros.
    pub binder: BinderConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let binder = BinderConfig::from_env()?;
        info!("config loaded: multiple_process_id={:?} strict_input={}",
              binder.multiple_process_id,
              binder.strict_input);
        Ok(Self { binder })
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Instancia global perezosa de configuración, evaluada una sola vez. Un
/// error no queda cacheado: la siguiente llamada vuelve a intentarlo.
pub fn app_config() -> Result<&'static AppConfig, AppError> {
    CONFIG.get_or_try_init(AppConfig::from_env)
}
