//! Modelos neutrales (ProcessId, InvocationInput, InvocationContext, ResolvedArguments)

pub mod arguments;
pub mod context;
pub mod input;
pub mod process_id;

pub use arguments::ResolvedArguments;
pub use context::InvocationContext;
pub use input::InvocationInput;
pub use process_id::ProcessId;
