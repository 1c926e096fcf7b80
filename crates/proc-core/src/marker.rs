//! Marcadores de inyección.
//!
//! Un `Marker` no lleva datos: sólo importa su presencia sobre un elemento de
//! la firma. Dos apariciones del mismo marcador son indistinguibles.
//!
//! El único marcador actual es `ProcessId` ("inyectar aquí el identificador
//! del proceso en curso"). Los marcadores sólo pueden colocarse sobre un
//! parámetro; cualquier otra posición se rechaza al registrar la acción.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marcador de inyección (presencia pura, sin payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Marker {
    /// El parámetro recibe el identificador del proceso en curso.
    ProcessId,
}

/// Posición de la firma sobre la que se colocó un marcador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerTarget {
    Parameter,
    Action,
    Return,
}

impl Marker {
    /// Posiciones válidas para el marcador.
    pub fn allowed_targets(&self) -> &'static [MarkerTarget] {
        match self {
            Marker::ProcessId => &[MarkerTarget::Parameter],
        }
    }

    pub fn allows(&self, target: MarkerTarget) -> bool {
        self.allowed_targets().contains(&target)
    }

    /// Nombre con el que se escribe el marcador en `interaction!`.
    pub fn attribute_name(&self) -> &'static str {
        match self {
            Marker::ProcessId => "process_id",
        }
    }

    /// Inversa de `attribute_name`.
    pub fn from_attribute(name: &str) -> Option<Marker> {
        match name {
            "process_id" => Some(Marker::ProcessId),
            _ => None,
        }
    }
}

impl fmt::Display for MarkerTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerTarget::Parameter => f.write_str("parameter"),
            MarkerTarget::Action => f.write_str("action"),
            MarkerTarget::Return => f.write_str("return value"),
        }
    }
}

/// Traduce el nombre de un marcador escrito como atributo de parámetro a su
/// variante. Nombres desconocidos fallan en compilación.
#[doc(hidden)]
#[macro_export]
macro_rules! marker_of {
    (process_id) => {
        $crate::marker::Marker::ProcessId
    };
    ($other:ident) => {
        compile_error!(concat!("unknown parameter marker `#[", stringify!($other), "]`"))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_id_only_allowed_on_parameters() {
        assert!(Marker::ProcessId.allows(MarkerTarget::Parameter));
        assert!(!Marker::ProcessId.allows(MarkerTarget::Action));
        assert!(!Marker::ProcessId.allows(MarkerTarget::Return));
    }

    #[test]
    fn attribute_name_roundtrips() {
        let m = Marker::ProcessId;
        assert_eq!(Marker::from_attribute(m.attribute_name()), Some(m));
        assert_eq!(Marker::from_attribute("ingredient"), None);
        assert_eq!(marker_of!(process_id), Marker::ProcessId);
    }
}
