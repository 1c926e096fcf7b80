//! Configuración del binder desde variables de entorno.
//! Convención: `PROCFLOW_MULTIPLE_PROCESS_ID` (`allow` | `reject`) y
//! `PROCFLOW_STRICT_INPUT` (`true` | `false`). Ausentes => valores por defecto.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

use crate::constants::{ENV_MULTIPLE_PROCESS_ID, ENV_STRICT_INPUT};
use crate::errors::ConfigError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Qué hacer cuando más de un parámetro de una misma acción lleva el
/// marcador `ProcessId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultipleProcessIdPolicy {
    /// Todos reciben el mismo identificador.
    #[default]
    Allow,
    /// Se rechaza la acción al registrarla.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BinderConfig {
    pub multiple_process_id: MultipleProcessIdPolicy,
    /// Rechaza claves de input que no corresponden a ningún parámetro.
    pub strict_input: bool,
}

impl BinderConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Igual que `from_env` pero leyendo de `lookup` (tests, config embebida).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let multiple_process_id = match lookup(ENV_MULTIPLE_PROCESS_ID).as_deref().map(str::trim) {
            None | Some("") => MultipleProcessIdPolicy::default(),
            Some(v) if v.eq_ignore_ascii_case("allow") => MultipleProcessIdPolicy::Allow,
            Some(v) if v.eq_ignore_ascii_case("reject") => MultipleProcessIdPolicy::Reject,
            Some(v) => {
                return Err(ConfigError::InvalidValue { var: ENV_MULTIPLE_PROCESS_ID,
                                                       value: v.to_string() })
            }
        };
        let strict_input = match lookup(ENV_STRICT_INPUT).as_deref().map(str::trim) {
            None | Some("") => false,
            Some(v) => v.parse::<bool>()
                        .map_err(|_| ConfigError::InvalidValue { var: ENV_STRICT_INPUT,
                                                                 value: v.to_string() })?,
        };
        Ok(Self { multiple_process_id,
                  strict_input })
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn absent_variables_give_defaults() {
        let cfg = BinderConfig::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(cfg, BinderConfig::default());
    }

    #[test]
    fn parses_policy_and_strictness() {
        let cfg = BinderConfig::from_lookup(lookup(&[(ENV_MULTIPLE_PROCESS_ID, "Reject"), (ENV_STRICT_INPUT, "true")]))
            .expect("parsed");
        assert_eq!(cfg.multiple_process_id, MultipleProcessIdPolicy::Reject);
        assert!(cfg.strict_input);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = BinderConfig::from_lookup(lookup(&[(ENV_STRICT_INPUT, "sometimes")])).unwrap_err();
        assert_eq!(err,
                   ConfigError::InvalidValue { var: ENV_STRICT_INPUT,
                                               value: "sometimes".into() });
    }
}
