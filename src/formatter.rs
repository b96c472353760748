//! Turns an elapsed duration into a localized phrase.
//!
//! The duration is split into whole counts of each division, the largest
//! non-empty division is chosen, then exactly one correction applies:
//! promotion into the next division when the count reaches the division's
//! threshold, or rounding up when the leftover reaches the sub-division's
//! threshold. Results below the configured minimum division collapse to
//! the epsilon phrase.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;
use tracing::trace;

use crate::config::Config;
use crate::division::TimeDivision;
use crate::error::ElapsedError;
use crate::strings::{EPSILON_KEY, PLACEHOLDER};

/// Whole counts of each division within one duration.
struct Decomposition {
    counts: [u64; TimeDivision::ALL.len()],
}

impl Decomposition {
    fn new(duration: u64, largest: TimeDivision) -> Result<Self, ElapsedError> {
        let mut counts = [0; TimeDivision::ALL.len()];
        let mut remaining = duration;
        for division in largest.descending() {
            counts[division as usize] = remaining / division.millis();
            remaining %= division.millis();
        }
        if remaining != 0 {
            return Err(ElapsedError::Unreachable(format!(
                "{remaining} ms of {duration} ms left after dividing down to milliseconds"
            )));
        }
        Ok(Self { counts })
    }

    fn count(&self, division: TimeDivision) -> u64 {
        self.counts[division as usize]
    }
}

/// Format a duration given in milliseconds.
pub fn format_duration(duration_millis: i64, config: &Config) -> Result<String, ElapsedError> {
    let duration = u64::try_from(duration_millis).map_err(|_| {
        ElapsedError::InvalidArgument(format!(
            "duration must be non-negative, got {duration_millis} ms"
        ))
    })?;
    format_millis(duration, config)
}

pub fn format_std(duration: Duration, config: &Config) -> Result<String, ElapsedError> {
    let millis = u64::try_from(duration.as_millis()).map_err(|_| {
        ElapsedError::InvalidArgument(format!("duration {duration:?} is too large"))
    })?;
    format_millis(millis, config)
}

pub fn format_delta(delta: TimeDelta, config: &Config) -> Result<String, ElapsedError> {
    format_duration(delta.num_milliseconds(), config)
}

/// Format the time elapsed from `from` to `to`.
pub fn format_between(
    from: DateTime<Utc>,
    to: DateTime<Utc>,
    config: &Config,
) -> Result<String, ElapsedError> {
    if to < from {
        return Err(ElapsedError::InvalidArgument(format!(
            "end timestamp {to} is earlier than start timestamp {from}"
        )));
    }
    format_delta(to.signed_duration_since(from), config)
}

/// Format the time elapsed since `from`.
pub fn format_since(from: DateTime<Utc>, config: &Config) -> Result<String, ElapsedError> {
    format_between(from, Utc::now(), config)
}

/// [`format_duration`] with [`Config::shared_default`].
pub fn elapsed(duration_millis: i64) -> Result<String, ElapsedError> {
    format_duration(duration_millis, Config::shared_default())
}

/// [`format_since`] with [`Config::shared_default`].
pub fn elapsed_since(from: DateTime<Utc>) -> Result<String, ElapsedError> {
    format_since(from, Config::shared_default())
}

fn format_millis(duration: u64, config: &Config) -> Result<String, ElapsedError> {
    let largest = config.max_division();
    let parts = Decomposition::new(duration, largest)?;

    let Some(selected) = largest
        .descending()
        .find(|division| parts.count(*division) != 0)
    else {
        trace!(duration, "Empty duration");
        return epsilon(config);
    };

    let mut division = selected;
    let mut value = parts.count(selected);

    let super_division = selected.super_division().filter(|sup| *sup <= largest);
    match super_division {
        Some(sup) if value >= selected.threshold() => {
            trace!(duration, from = %selected, to = %sup, count = value, "Promoted");
            division = sup;
            value = 1;
        }
        _ => {
            if let Some(sub) = selected.sub_division()
                && duration % selected.millis() >= sub.threshold_millis()
            {
                trace!(duration, division = %selected, count = value, "Rounded up");
                value += 1;
            }
        }
    }

    if config.min_division().is_below(division) {
        trace!(duration, %division, min = %config.min_division(), "Below minimum division");
        return epsilon(config);
    }

    let key = if value > 1 {
        division.plural_key()
    } else {
        division.singular_key()
    };
    let template = config.template(key)?;
    Ok(template.replace(PLACEHOLDER, &value.to_string()))
}

fn epsilon(config: &Config) -> Result<String, ElapsedError> {
    config.template(EPSILON_KEY).map(str::to_string)
}
