use super::ProcessId;

/// Contexto de una invocación entregado por el runtime de procesos.
///
/// `process_id` es `None` cuando la acción se invoca fuera de un proceso.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub process_id: Option<ProcessId>,
}

impl InvocationContext {
    pub fn with_process_id(id: impl Into<ProcessId>) -> Self {
        Self { process_id: Some(id.into()) }
    }

    /// Invocación sin proceso asociado.
    pub fn detached() -> Self {
        Self { process_id: None }
    }
}
