//! Tipos declarados de parámetros y su compatibilidad con el identificador de
//! proceso.
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::model::ProcessId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclaredType {
    String,
    Uuid,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    /// Cualquier valor JSON.
    Any,
    /// El parámetro admite ausencia (`null`).
    Optional(Box<DeclaredType>),
}

impl DeclaredType {
    pub fn optional(inner: DeclaredType) -> Self {
        DeclaredType::Optional(Box::new(inner))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, DeclaredType::Optional(_))
    }

    /// Tipo sin las capas `Optional`.
    pub fn innermost(&self) -> &DeclaredType {
        match self {
            DeclaredType::Optional(inner) => inner.innermost(),
            other => other,
        }
    }

    /// Indica si un parámetro de este tipo puede recibir el identificador de
    /// proceso (representación string o UUID).
    pub fn accepts_process_id(&self) -> bool {
        matches!(self.innermost(), DeclaredType::String | DeclaredType::Uuid | DeclaredType::Any)
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::String => f.write_str("String"),
            DeclaredType::Uuid => f.write_str("Uuid"),
            DeclaredType::Integer => f.write_str("Integer"),
            DeclaredType::Number => f.write_str("Number"),
            DeclaredType::Boolean => f.write_str("Boolean"),
            DeclaredType::Array => f.write_str("Array"),
            DeclaredType::Object => f.write_str("Object"),
            DeclaredType::Any => f.write_str("Any"),
            DeclaredType::Optional(inner) => write!(f, "Option<{inner}>"),
        }
    }
}

/// Tipos Rust que saben describirse como `DeclaredType`. Lo usa `interaction!`
/// para derivar la firma de la lista de parámetros.
pub trait Declared {
    fn declared_type() -> DeclaredType;
}

macro_rules! declared {
    ($variant:ident => $($t:ty),+ $(,)?) => {
        $(impl Declared for $t {
            fn declared_type() -> DeclaredType { DeclaredType::$variant }
        })+
    };
}

declared!(String => String, ProcessId);
declared!(Uuid => Uuid);
declared!(Integer => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
declared!(Number => f32, f64);
declared!(Boolean => bool);
declared!(Any => Value);
declared!(Object => Map<String, Value>);

impl<T> Declared for Vec<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::Array
    }
}

impl<V> Declared for HashMap<String, V> {
    fn declared_type() -> DeclaredType {
        DeclaredType::Object
    }
}

impl<V> Declared for BTreeMap<String, V> {
    fn declared_type() -> DeclaredType {
        DeclaredType::Object
    }
}

impl<T: Declared> Declared for Option<T> {
    fn declared_type() -> DeclaredType {
        DeclaredType::optional(T::declared_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_like_types_accept_process_id() {
        assert!(DeclaredType::String.accepts_process_id());
        assert!(DeclaredType::Uuid.accepts_process_id());
        assert!(DeclaredType::Any.accepts_process_id());
        assert!(<Option<String>>::declared_type().accepts_process_id());
        assert!(!DeclaredType::Integer.accepts_process_id());
        assert!(!<Option<Vec<String>>>::declared_type().accepts_process_id());
    }

    #[test]
    fn rust_types_map_to_declared_types() {
        assert_eq!(<ProcessId>::declared_type(), DeclaredType::String);
        assert_eq!(<u32>::declared_type(), DeclaredType::Integer);
        assert_eq!(<Option<Uuid>>::declared_type().to_string(), "Option<Uuid>");
        assert_eq!(<HashMap<String, i64>>::declared_type(), DeclaredType::Object);
    }
}
