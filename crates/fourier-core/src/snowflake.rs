//! Snowflake identifier construction.
//!
//! A snowflake is built from two clock readings: wall-clock milliseconds
//! since the UNIX epoch, and nanoseconds elapsed since a process-wide start
//! instant. Both are rendered as decimal strings, concatenated (wall clock
//! first), parsed back as one integer, and shifted right by four bits.
//!
//! The scheme trades rigor for simplicity:
//!
//! - No formal collision guarantee. Two calls that observe the same
//!   millisecond *and* the same elapsed-nanosecond reading produce the same
//!   identifier. In practice the elapsed reading advances between calls on
//!   every platform this targets, but callers must not assume uniqueness
//!   unconditionally.
//! - No cross-process ordering. The elapsed component restarts with the
//!   process, so identifiers from different processes are not comparable.
//! - No failure mode. Construction always returns a value.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;

use crate::id::DocumentId;

/// Process-wide origin for the elapsed-time component. Captured on first
/// use; monotonic for the lifetime of the process.
static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Construct a fresh snowflake identifier.
///
/// The decimal concatenation of the two clock readings does not fit in 64
/// bits (a 2026 wall clock alone is 13 digits), so it is evaluated at
/// 128-bit width and the shifted result is narrowed to its low 64 bits to
/// fit the document `_id` representation. The low digits are the ones that
/// vary call-to-call, so the narrowing keeps the varying part of the value.
pub fn construct_snowflake() -> DocumentId {
    let wall_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let elapsed_ns = PROCESS_START.elapsed().as_nanos();

    // 13-14 wall digits + at most 20 elapsed digits stays well inside the
    // 39 decimal digits a u128 holds, so the parse cannot fail.
    let concat: u128 = format!("{wall_ms}{elapsed_ns}").parse().unwrap_or_default();

    DocumentId::new((concat >> 4) as u64)
}
