//! # lichviet-canchi
//!
//! Sexagenary (Can-Chi) cycles, pillars and the dense almanac tables.
//!
//! The crate is a set of stateless pure functions over `'static` data: cyclic
//! modular arithmetic for the three pillars, and table lookups for the Nạp Âm
//! classification, the auspicious-day and lucky-hour rotations, and the
//! age-conflict group. Every cyclic computation routes through
//! [`normalized_mod`], so negative inputs (years before the epoch anchor)
//! still produce normalized indices.
//!
//! # Quick start
//!
//! ```
//! use lichviet_canchi::{day_pillar, nap_am, year_pillar};
//!
//! assert_eq!("Giáp Thìn", year_pillar(2024).label());
//!
//! let day = day_pillar(2_460_351); // 2024-02-10
//! assert_eq!("Giáp Thìn", day.label());
//! assert_eq!("Phú Đăng Hỏa", nap_am(day));
//! ```

pub mod branch;
pub mod conflict;
pub mod cycle;
pub mod error;
pub mod hoang_dao;
pub mod nap_am;
pub mod pillar;
pub mod stem;

pub use branch::Chi;
pub use conflict::conflict_group;
pub use cycle::normalized_mod;
pub use error::CanChiError;
pub use hoang_dao::{is_auspicious_day, lucky_hours};
pub use nap_am::{NAP_AM_PENDING, nap_am};
pub use pillar::{StemBranch, day_pillar, month_pillar, year_pillar};
pub use stem::Can;
