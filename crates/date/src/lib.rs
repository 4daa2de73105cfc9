//! # lichviet-date
//!
//! Solar (Gregorian) dates and the Julian Day Number anchor for the
//! Vietnamese almanac.
//!
//! Everything here is pure integer arithmetic: a [`SolarDate`] validates its
//! fields once at construction, converts to and from a JDN, and navigates by
//! whole calendar days. The JDN is the absolute day count the day pillar is
//! derived from, so `next`/`previous` are defined as JDN ± 1 rather than as
//! timestamp arithmetic.
//!
//! ## Quick start
//!
//! ```
//! use lichviet_date::{SolarDate, jdn_from_gregorian};
//!
//! let date = SolarDate::new(2024, 2, 10).unwrap();
//! assert_eq!(date.jdn(), 2_460_351);
//! assert_eq!(date.next().to_string(), "2024-02-11");
//! assert_eq!(jdn_from_gregorian(2000, 1, 1), 2_451_545);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `jdn` | Gregorian <-> Julian Day Number conversions |
//! | `solar` | Validated solar date with navigation |
//! | `sequence` | Contiguous date runs for month-grid consumers |
//! | `error` | Error types |

mod error;
mod jdn;
mod sequence;
mod solar;

pub use error::DateError;
pub use jdn::{gregorian_from_jdn, jdn_from_gregorian};
pub use sequence::solar_sequence;
pub use solar::{SolarDate, days_in_month, is_leap_year};
