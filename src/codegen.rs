//! Rendering of the mapping as embeddable Rust source.
//!
//! Emits a static read-only table, one entry per line, in map iteration
//! order. Rendering cannot fail.

use crate::registry::MimeMap;

/// Renders `map` as a Rust fragment declaring a static lookup table.
///
/// Keys and values are emitted with `{:?}`, so quotes and backslashes in
/// registry entries are escaped and the fragment is always valid Rust.
pub fn render(map: &MimeMap) -> String {
    let mut out = String::new();
    out.push_str("// Generated by mimegen. Do not edit; rerun mimegen to refresh.\n\n");
    out.push_str("pub static MIME_TYPES: &[(&str, &str)] = &[\n");
    for (ext, mime) in map.iter() {
        out.push_str(&format!("    ({:?}, {:?}),\n", ext, mime));
    }
    out.push_str("];\n");
    out
}
