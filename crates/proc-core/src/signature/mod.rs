//! Firmas de acciones.
//!
//! Una firma es la secuencia ordenada de parámetros (nombre, tipo declarado,
//! marcadores) de una acción. Se construye una vez al registrar la acción y
//! no cambia después:
//! - `ActionSignature`: descripción editable (builder, JSON declarativo).
//! - `ValidatedSignature`: firma congelada tras `validate_signature`; es la
//!   única forma que acepta el `Binder`.

pub mod builder;
pub mod declared_type;
pub mod descriptor;
pub mod validate;

pub use builder::SignatureBuilder;
pub use declared_type::{Declared, DeclaredType};
pub use descriptor::{ActionSignature, ParamDescriptor};
pub use validate::{validate_signature, ValidatedSignature};
