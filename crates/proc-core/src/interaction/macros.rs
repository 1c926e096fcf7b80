//! Macro para declarar acciones sin boilerplate.
//!
//! Exportada en la raíz del crate:
//!   use proc_core::interaction;
//!
//! Formas soportadas:
//!
//! ```ignore
//! interaction! {
//!     CancelOrder {
//!         name: "cancelOrder",
//!         params: (#[process_id] process_id: String, reason: String = "unspecified"),
//!         run(this) { json!({ "cancelled": process_id }) }
//!     }
//! }
//!
//! interaction! {
//!     ShipOrder {
//!         name: "shipOrder",
//!         params: (#[process_id] process_id: Uuid, qty: u32),
//!         fields { carrier: String },
//!         run(this) { json!({ "carrier": this.carrier, "qty": qty }) }
//!     }
//! }
//! ```
//!
//! Los valores por defecto son literales (cadena, número o booleano); la
//! conversión a JSON no puede fallar, así que la firma registrada siempre
//! lleva el default declarado.
//!
//! Los marcadores sólo se aceptan delante de un parámetro. Un marcador
//! colocado sobre la acción no compila:
//!
//! ```compile_fail
//! use proc_core::interaction;
//!
//! interaction! {
//!     #[process_id]
//!     Broken {
//!         name: "broken",
//!         params: (reason: String),
//!         run(_this) { serde_json::Value::Null }
//!     }
//! }
//! ```
//!
//! Tampoco un nombre de marcador desconocido:
//!
//! ```compile_fail
//! use proc_core::interaction;
//!
//! interaction! {
//!     Broken {
//!         name: "broken",
//!         params: (#[tenant] tenant: String),
//!         run(_this) { serde_json::Value::Null }
//!     }
//! }
//! ```
//!
//! Ni un valor por defecto que no sea literal:
//!
//! ```compile_fail
//! use proc_core::interaction;
//!
//! interaction! {
//!     Broken {
//!         name: "broken",
//!         params: (tags: Vec<String> = Vec::new()),
//!         run(_this) { serde_json::Value::Null }
//!     }
//! }
//! ```
//!
//! La forma válida equivalente sí compila:
//!
//! ```
//! use proc_core::{interaction, Interaction, Marker};
//!
//! interaction! {
//!     Fine {
//!         name: "fine",
//!         params: (#[process_id] pid: String, level: String = "info"),
//!         run(_this) { serde_json::json!({ "pid": pid, "level": level }) }
//!     }
//! }
//!
//! let sig = Fine::new().signature();
//! assert_eq!(sig.params[0].markers, vec![Marker::ProcessId]);
//! assert_eq!(sig.params[1].default, Some(serde_json::json!("info")));
//! ```
//!
//! El cuerpo puede devolver `serde_json::Value` o
//! `Result<Value, InteractionError>`.

#[doc(hidden)]
pub use serde_json as __serde_json;

#[macro_export]
macro_rules! interaction {
    // ---------------- impl común ----------------
    (@impl $name:ident, $action:expr,
        ( $( $(#[$marker:ident])* $pname:ident : $pty:ty $(= $default:literal)? ),* ),
        $me:ident, $body:block
    ) => {
        impl $crate::interaction::Interaction for $name {
            fn signature(&self) -> $crate::signature::ActionSignature {
                $crate::signature::ActionSignature::new($action, vec![
                    $( $crate::signature::ParamDescriptor {
                        name: stringify!($pname).to_string(),
                        declared_type: <$pty as $crate::signature::Declared>::declared_type(),
                        markers: vec![$($crate::marker_of!($marker)),*],
                        default: {
                            #[allow(unused_mut)]
                            let mut d: Option<$crate::interaction::macros::__serde_json::Value> = None;
                            $( d = Some($crate::interaction::macros::__serde_json::Value::from($default)); )?
                            d
                        },
                    } ),*
                ])
            }

            fn invoke(&self, args: &$crate::model::ResolvedArguments)
                      -> Result<$crate::interaction::macros::__serde_json::Value, $crate::errors::InteractionError> {
                #[allow(unused_variables)]
                let $me = self;
                #[allow(unused_mut, unused_variables)]
                let mut __args = args.iter();
                $( let $pname: $pty = $crate::interaction::decode_arg(&mut __args, stringify!($pname))?; )*
                let out = { $body };
                $crate::interaction::IntoOutcome::into_outcome(out)
            }
        }
    };

    // ---------------- marcador fuera de un parámetro ----------------
    (#[$marker:ident] $($rest:tt)*) => {
        compile_error!(concat!("marker `#[", stringify!($marker), "]` can only be placed on an interaction parameter"));
    };

    // ---------------- con fields ----------------
    (
        $name:ident {
            name: $action:expr,
            params: ( $( $(#[$marker:ident])* $pname:ident : $pty:ty $(= $default:literal)? ),* $(,)? ),
            fields { $($fname:ident : $fty:ty),+ $(,)? },
            run($me:ident) $body:block
        }
    ) => {
        #[derive(Clone, Debug)]
        pub struct $name { $(pub $fname: $fty),+ }
        impl $name { pub fn new($($fname : $fty),+) -> Self { Self { $($fname),+ } } }
        $crate::interaction!(@impl $name, $action,
                             ( $( $(#[$marker])* $pname : $pty $(= $default)? ),* ),
                             $me, $body);
    };

    // ---------------- unit (sin fields) ----------------
    (
        $name:ident {
            name: $action:expr,
            params: ( $( $(#[$marker:ident])* $pname:ident : $pty:ty $(= $default:literal)? ),* $(,)? ),
            run($me:ident) $body:block
        }
    ) => {
        #[derive(Clone, Debug, Default)]
        pub struct $name;
        impl $name { pub fn new() -> Self { Self } }
        $crate::interaction!(@impl $name, $action,
                             ( $( $(#[$marker])* $pname : $pty $(= $default)? ),* ),
                             $me, $body);
    };
}
