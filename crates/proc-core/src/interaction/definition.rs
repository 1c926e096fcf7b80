use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::InteractionError;
use crate::model::ResolvedArguments;
use crate::signature::ActionSignature;

/// Trait que define una acción. Implementaciones deben usar únicamente los
/// argumentos resueltos: el identificador de proceso llega como un argumento
/// más, nunca leyendo estado global.
pub trait Interaction: Send + Sync + std::fmt::Debug {
    /// Firma declarada; su `name` es la clave con la que se registra y se
    /// invoca. Se valida una única vez al registrar.
    fn signature(&self) -> ActionSignature;

    /// Ejecuta la acción con argumentos en el orden de la firma.
    fn invoke(&self, args: &ResolvedArguments) -> Result<Value, InteractionError>;
}

/// Decodifica el siguiente argumento posicional como `T`.
pub fn decode_arg<'a, T, I>(args: &mut I, param: &str) -> Result<T, InteractionError>
    where T: DeserializeOwned,
          I: Iterator<Item = &'a Value>
{
    let raw = args.next()
                  .ok_or_else(|| InteractionError::ArgumentDecode { param: param.to_string(),
                                                                    reason: "missing argument".into() })?;
    <T as Deserialize>::deserialize(raw).map_err(|e| InteractionError::ArgumentDecode { param: param.to_string(),
                                                                                        reason: e.to_string() })
}

/// Conversión del valor de un cuerpo de `interaction!` al resultado neutro.
pub trait IntoOutcome {
    fn into_outcome(self) -> Result<Value, InteractionError>;
}

impl IntoOutcome for Value {
    fn into_outcome(self) -> Result<Value, InteractionError> {
        Ok(self)
    }
}

impl IntoOutcome for Result<Value, InteractionError> {
    fn into_outcome(self) -> Result<Value, InteractionError> {
        self
    }
}
