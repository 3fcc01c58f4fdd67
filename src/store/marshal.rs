//! Schema-agnostic row marshaling
//!
//! Every column value is flattened to text regardless of its SQLite storage
//! class:
//!
//! - INTEGER is written in decimal
//! - REAL uses the shortest round-trip digits, switching to exponent form
//!   (`1e+20`, `1.5e-07`) when the decimal exponent is below -4 or at least 6
//! - TEXT is copied as is
//! - BLOB bytes are read as UTF-8 text (lossy for invalid sequences)
//! - NULL becomes the empty string
//!
//! Rows are maps keyed by column name, so a repeated column name keeps the
//! value of its last occurrence.

use std::collections::HashMap;

use rusqlite::types::ValueRef;

/// One result row: column name to textual value
pub type Row = HashMap<String, String>;

/// Render a single SQLite value as text
pub fn value_to_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => real_to_text(f),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Shortest round-trip rendering of a REAL, exponent form outside `1e-4..1e6`
pub fn real_to_text(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // LowerExp yields the shortest digits that round-trip, e.g. "1.5e-7"
    let sci = format!("{:e}", f);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.to_string();
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..6).contains(&exp) {
        f.to_string()
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
    }
}

/// Build a row map from an engine row using the statement's column names
pub fn marshal_row(row: &rusqlite::Row<'_>, columns: &[String]) -> rusqlite::Result<Row> {
    let mut out = Row::with_capacity(columns.len());
    for (idx, name) in columns.iter().enumerate() {
        let value = row.get_ref(idx)?;
        out.insert(name.clone(), value_to_text(value));
    }
    Ok(out)
}
