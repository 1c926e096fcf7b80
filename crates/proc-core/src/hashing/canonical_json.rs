//! JSON canónico: claves de objeto ordenadas y sin espacios, de modo que dos
//! valores iguales producen siempre el mismo texto (y el mismo hash).

use std::fmt::Write;

use serde_json::Value;

pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, k) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(k, out);
                out.push(':');
                write_canonical(&map[k.as_str()], out);
            }
            out.push('}');
        }
        Value::String(s) => write_string(s, out),
        // null, bool y number ya tienen una forma textual única
        scalar => {
            let _ = write!(out, "{scalar}");
        }
    }
}

fn write_string(s: &str, out: &mut String) {
    // Display de Value::String escapa igual que el serializer de serde_json
    let _ = write!(out, "{}", Value::String(s.to_owned()));
}
