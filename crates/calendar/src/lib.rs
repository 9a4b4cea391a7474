//! # skillcast-calendar
//!
//! Pure date arithmetic for the 365-day no-leap calendar used by hindcast
//! verification times.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NoLeapDate"] -->|".days_since_epoch()"| B["day ordinal"]
//!     B -->|"from_days_since_epoch()"| A
//!     A -->|".at_midnight()"| C["NoLeapDateTime"]
//!     A -->|"month_sequence()"| D["monthly stamps"]
//!     D -->|"to_midmonth()"| E["mid-month stamps"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use skillcast_calendar::{NoLeapDate, NoLeapDateTime, month_sequence, to_midmonth};
//!
//! // End-of-month stamps of a monthly file, re-stamped to mid-month.
//! let start = NoLeapDate::new(1985, 2, 1).unwrap();
//! let raw = month_sequence(start, 3);
//! let centred = to_midmonth(&raw);
//! assert_eq!(centred[0], NoLeapDate::new(1985, 1, 15).unwrap());
//!
//! // Reference-period bounds for a climatology.
//! let d1 = NoLeapDateTime::start_of_year(1985);
//! assert!(centred[0].at_midnight() > d1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | No-leap date, day ordinal and date averaging |
//! | `datetime` | Instants with a time of day |
//! | `midmonth` | End-of-month to mid-month normalisation |
//! | `sequence` | Daily and monthly sequence generation |
//! | `error` | Error types |

mod date;
mod datetime;
mod error;
mod midmonth;
mod sequence;

pub use date::{DAYS_PER_YEAR, NoLeapDate};
pub use datetime::NoLeapDateTime;
pub use error::CalendarError;
pub use midmonth::{MID_MONTH_DAY, midmonth, to_midmonth};
pub use sequence::month_sequence;
