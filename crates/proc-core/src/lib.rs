//! proc-core: inyección del identificador de proceso en parámetros de acciones
//!
//! Una acción (interaction) declara su firma una sola vez al registrarse; el
//! `Binder` resuelve, antes de cada invocación, qué parámetro recibe el
//! identificador del proceso en curso y cuáles se toman del input ordinario.
pub mod binder;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod hashing;
pub mod injection;
pub mod interaction;
pub mod marker;
pub mod model;
pub mod registry;
pub mod signature;

pub use binder::{Binder, BinderConfig, MultipleProcessIdPolicy};
pub use dispatch::Dispatcher;
pub use errors::{BindingError, ConfigError, DispatchError, InteractionError};
pub use injection::{ParamInjector, ProcessIdInjector};
pub use interaction::Interaction;
pub use marker::{Marker, MarkerTarget};
pub use model::{InvocationContext, InvocationInput, ProcessId, ResolvedArguments};
pub use registry::{ActionRegistry, RegisteredAction};
pub use signature::{validate_signature, ActionSignature, Declared, DeclaredType, ParamDescriptor, SignatureBuilder,
                    ValidatedSignature};
