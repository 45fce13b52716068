//! Cocoa timestamp normalization
//!
//! Core Data stores timestamps as seconds (fractional allowed) relative to
//! the Cocoa epoch, 2001-01-01T00:00:00Z. Conversion to an absolute instant
//! is total: any real number maps to a `DateTime<Utc>`, saturating at
//! chrono's representable bounds. Distinguishing a null column from a zero
//! timestamp is the caller's job; zero is a valid instant here.

use chrono::{DateTime, Utc};

/// Seconds between the Unix epoch and the Cocoa epoch (2001-01-01T00:00:00Z).
pub const COCOA_EPOCH_OFFSET_SECONDS: i64 = 978_307_200;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Converts a Cocoa-epoch-relative timestamp to an absolute instant.
///
/// Sub-second precision is preserved. `0.0` maps exactly to the Cocoa
/// reference instant. Non-finite input collapses to the reference instant
/// (NaN) or saturates (infinities), matching the saturating float-to-int
/// cast semantics.
pub fn cocoa_timestamp(seconds: f64) -> DateTime<Utc> {
    // Split into whole seconds and fractional nanos so that integral inputs
    // convert without float rounding error.
    let whole = seconds.div_euclid(1.0);
    let frac = seconds.rem_euclid(1.0);

    let mut secs = whole as i64;
    let mut nanos = if frac.is_finite() {
        (frac * NANOS_PER_SECOND).round() as u32
    } else {
        0
    };
    if nanos >= 1_000_000_000 {
        secs = secs.saturating_add(1);
        nanos = 0;
    }

    let unix_secs = secs.saturating_add(COCOA_EPOCH_OFFSET_SECONDS);
    DateTime::from_timestamp(unix_secs, nanos).unwrap_or(if unix_secs < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
