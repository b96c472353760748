//! The time division ladder: millisecond through year, smallest first.
//!
//! Each division knows its length in milliseconds, the count at which it
//! promotes into the next larger division, and the template keys used to
//! render it. Neighbour links are derived from a division's position in
//! the ladder, so the whole chain is plain constant data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ElapsedError;

const SECOND_MS: u64 = 1_000;
const MINUTE_MS: u64 = 60 * SECOND_MS;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;
// Approximations: no calendar arithmetic.
const MONTH_MS: u64 = 30 * DAY_MS;
const YEAR_MS: u64 = 12 * MONTH_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeDivision {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

struct Rung {
    name: &'static str,
    millis: u64,
    threshold: u64,
    singular_key: &'static str,
    plural_key: &'static str,
}

// Indexed by `TimeDivision as usize`.
const LADDER: [Rung; 7] = [
    Rung {
        name: "millisecond",
        millis: 1,
        threshold: 750,
        singular_key: "millisecond_ago",
        plural_key: "milliseconds_ago",
    },
    Rung {
        name: "second",
        millis: SECOND_MS,
        threshold: 45,
        singular_key: "second_ago",
        plural_key: "seconds_ago",
    },
    Rung {
        name: "minute",
        millis: MINUTE_MS,
        threshold: 45,
        singular_key: "minute_ago",
        plural_key: "minutes_ago",
    },
    Rung {
        name: "hour",
        millis: HOUR_MS,
        threshold: 22,
        singular_key: "hour_ago",
        plural_key: "hours_ago",
    },
    Rung {
        name: "day",
        millis: DAY_MS,
        threshold: 26,
        singular_key: "day_ago",
        plural_key: "days_ago",
    },
    Rung {
        name: "month",
        millis: MONTH_MS,
        threshold: 11,
        singular_key: "month_ago",
        plural_key: "months_ago",
    },
    Rung {
        name: "year",
        millis: YEAR_MS,
        threshold: 0,
        singular_key: "year_ago",
        plural_key: "years_ago",
    },
];

const fn ladder_is_well_formed() -> bool {
    let last = LADDER.len() - 1;
    if LADDER[0].millis != 1 || LADDER[last].threshold != 0 {
        return false;
    }
    let mut i = 1;
    while i <= last {
        let sub = &LADDER[i - 1];
        let div = &LADDER[i];
        if sub.threshold == 0 || div.millis <= sub.millis || div.millis % sub.millis != 0 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(ladder_is_well_formed(), "time division ladder is malformed");

impl TimeDivision {
    /// Every division, smallest first.
    pub const ALL: [TimeDivision; 7] = [
        TimeDivision::Millisecond,
        TimeDivision::Second,
        TimeDivision::Minute,
        TimeDivision::Hour,
        TimeDivision::Day,
        TimeDivision::Month,
        TimeDivision::Year,
    ];

    pub const fn smallest() -> Self {
        TimeDivision::Millisecond
    }

    pub const fn largest() -> Self {
        TimeDivision::Year
    }

    fn rung(self) -> &'static Rung {
        &LADDER[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.rung().name
    }

    /// Length of one unit of this division.
    pub fn millis(self) -> u64 {
        self.rung().millis
    }

    /// Count at which this division promotes into its super-division.
    /// Zero for the largest division, which has nothing to promote into.
    pub fn threshold(self) -> u64 {
        self.rung().threshold
    }

    pub fn threshold_millis(self) -> u64 {
        self.threshold() * self.millis()
    }

    pub fn singular_key(self) -> &'static str {
        self.rung().singular_key
    }

    pub fn plural_key(self) -> &'static str {
        self.rung().plural_key
    }

    pub fn sub_division(self) -> Option<Self> {
        (self as usize)
            .checked_sub(1)
            .map(|index| Self::ALL[index])
    }

    pub fn super_division(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }

    /// This division followed by each of its sub-divisions, down to milliseconds.
    pub fn descending(self) -> impl Iterator<Item = TimeDivision> {
        std::iter::successors(Some(self), |division| division.sub_division())
    }

    /// Whether `other` sits anywhere below `self` in the sub-division chain.
    pub fn is_below(self, other: TimeDivision) -> bool {
        self.descending().skip(1).any(|division| division == other)
    }
}

impl fmt::Display for TimeDivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeDivision {
    type Err = ElapsedError;

    /// Accepts the singular or plural unit name in any case (`"Minute"`, `"hours"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        let wanted = wanted.strip_suffix('s').unwrap_or(&wanted);
        Self::ALL
            .into_iter()
            .find(|division| division.name() == wanted)
            .ok_or_else(|| {
                ElapsedError::InvalidArgument(format!(
                    "unknown time division `{s}`; expected one of millisecond, second, minute, hour, day, month, year"
                ))
            })
    }
}
