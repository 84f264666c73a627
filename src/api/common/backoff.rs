//
//  profilescout
//  api/common/backoff.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Exponential retry delays with jitter.

use std::time::Duration;

use rand::Rng;

/// Jitter as a fraction of the un-jittered delay, applied in both directions.
pub const JITTER_FRACTION: f64 = 0.1;

/// Computes the delay before retry number `attempt` (0-based).
///
/// The exponential term `base * 2^attempt` is clamped to `ceiling` first and
/// jitter of up to ±10% is applied afterwards, so the result can exceed
/// `ceiling` by at most [`JITTER_FRACTION`]. Two calls with the same inputs
/// generally return different values.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use profilescout::api::common::backoff_delay;
///
/// let d = backoff_delay(1, Duration::from_millis(1000), Duration::from_secs(30));
/// assert!(d >= Duration::from_millis(1800) && d <= Duration::from_millis(2200));
/// ```
pub fn backoff_delay(attempt: u32, base: Duration, ceiling: Duration) -> Duration {
    let exponent = attempt.min(63) as i32;
    let grown = base.as_secs_f64() * 2f64.powi(exponent);
    let clamped = grown.min(ceiling.as_secs_f64());

    let jitter = rand::rng().random_range(-JITTER_FRACTION..=JITTER_FRACTION);
    let micros = (clamped * (1.0 + jitter) * 1_000_000.0).round().max(0.0);
    Duration::from_micros(micros as u64)
}
