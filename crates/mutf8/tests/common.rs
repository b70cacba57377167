#![allow(missing_docs, dead_code)]

use core::fmt::Write;

/// Space-separated uppercase hex, `(empty)` for no bytes.
pub fn hex(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "(empty)".into();
    }
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{b:02X}").unwrap();
    }
    out
}

/// `[U+0041 U+1F608]`
pub fn code_points(text: &str) -> String {
    let points: Vec<String> = text.chars().map(|c| format!("U+{:04X}", u32::from(c))).collect();
    format!("[{}]", points.join(" "))
}
