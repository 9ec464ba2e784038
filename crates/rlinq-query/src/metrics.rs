//! Tracing hooks for materializations and eager-operator failures.
//!
//! Without the `tracing` feature every hook compiles to a no-op.

use rlinq_core::error::Error;

#[cfg(feature = "tracing")]
pub fn emit_event(event: &str, key_values: &[(&str, String)]) {
    let span = tracing::span!(tracing::Level::TRACE, "rlinq", event);
    let _entered = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%event, %k, %v, "materialize");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_event(_event: &str, _key_values: &[(&str, String)]) {}

#[cfg(feature = "tracing")]
pub fn emit_failure(event: &str, err: &Error) {
    tracing::debug!(%event, error = %err, "eager operator failed");
}

#[cfg(not(feature = "tracing"))]
pub fn emit_failure(_event: &str, _err: &Error) {}

/// Key/value record for one materialized buffer.
pub(crate) fn materialized(len: usize, bytes: usize, used: usize) -> [(&'static str, String); 3] {
    [
        ("len", len.to_string()),
        ("bytes", bytes.to_string()),
        ("used", used.to_string()),
    ]
}
