//! # lichviet-almanac
//!
//! Orchestrates the almanac pipeline: a solar date plus its
//! externally-converted lunar date flow through the JDN anchor, the three
//! pillar derivations and the table lookups into one immutable
//! [`AlmanacDetails`] record.
//!
//! Solar-to-lunar conversion is an injected capability ([`LunarConverter`]),
//! so the pillar and table logic stays unit-testable with synthetic lunar
//! dates and the engine never learns about month lengths or leap months.
//!
//! # Quick start
//!
//! ```
//! use lichviet_almanac::{LunarDate, compute_details};
//! use lichviet_date::SolarDate;
//!
//! let solar = SolarDate::new(2024, 2, 10).unwrap(); // Tết Giáp Thìn
//! let lunar = LunarDate::new(2024, 1, 1, false).unwrap();
//!
//! let details = compute_details(solar, lunar).unwrap();
//! assert_eq!("Giáp Thìn", details.day_pillar().label());
//! assert_eq!("Phú Đăng Hỏa", details.nap_am());
//! assert!(details.is_auspicious());
//! ```

pub mod convert;
pub mod details;
pub mod error;
pub mod lunar;
pub mod output;

pub use convert::LunarConverter;
pub use details::{AlmanacDetails, compute_details, compute_or_fallback, compute_with};
pub use error::AlmanacError;
pub use lunar::{LunarDate, SUPPORTED_YEARS};
pub use output::DetailsOutput;
