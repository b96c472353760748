//! Localized relative-time phrases such as "2 days ago" or "Moments ago".
//!
//! ```
//! use elapsed::{Config, TimeDivision, format_duration};
//!
//! let config = Config::default();
//! assert_eq!(format_duration(10_000, &config).unwrap(), "10 seconds ago");
//!
//! let french = Config::builder()
//!     .locale("fr")
//!     .min_division(TimeDivision::Minute)
//!     .build()
//!     .unwrap();
//! assert_eq!(format_duration(10_000, &french).unwrap(), "Il y a quelques instants");
//! ```

pub mod config;
pub mod division;
pub mod error;
pub mod formatter;
pub mod strings;

pub use config::{Config, ConfigBuilder, ConfigFile};
pub use division::TimeDivision;
pub use error::ElapsedError;
pub use formatter::{
    elapsed, elapsed_since, format_between, format_delta, format_duration, format_since,
    format_std,
};
pub use strings::StringTable;
