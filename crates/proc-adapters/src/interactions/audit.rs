use proc_core::interaction;
use serde_json::json;

// Sin marcador: el resultado no depende del proceso en curso.
interaction! {
    LogEvent {
        name: "logEvent",
        params: (message: String),
        run(_this) {
            json!({ "logged": message })
        }
    }
}

// Identificador opcional: fuera de un proceso llega `None`.
interaction! {
    RecordAudit {
        name: "recordAudit",
        params: (#[process_id] process_id: Option<String>, message: String, level: String = "info"),
        run(_this) {
            json!({
                "process_id": process_id,
                "message": message,
                "level": level,
                "detached": process_id.is_none(),
            })
        }
    }
}
