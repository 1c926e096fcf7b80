//! Acciones de pedidos.
//!
//! Ambas necesitan saber en qué proceso se ejecutan: el identificador se
//! inyecta en el parámetro marcado y nunca se toma del input del llamador.
use proc_core::{interaction, InteractionError};
use serde_json::json;
use uuid::Uuid;

interaction! {
    CancelOrder {
        name: "cancelOrder",
        params: (#[process_id] process_id: String, reason: String),
        run(_this) {
            if reason.trim().is_empty() {
                return Err(InteractionError::Failed("cancellation reason must not be empty".into()));
            }
            json!({ "process_id": process_id, "status": "cancelled", "reason": reason })
        }
    }
}

interaction! {
    ShipOrder {
        name: "shipOrder",
        params: (#[process_id] process_id: Uuid, qty: u32, express: bool = false),
        fields { carrier: String },
        run(this) {
            if qty == 0 {
                return Err(InteractionError::Failed("nothing to ship".into()));
            }
            json!({
                "process_id": process_id,
                "carrier": this.carrier,
                "qty": qty,
                "express": express,
            })
        }
    }
}
