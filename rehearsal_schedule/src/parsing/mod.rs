//! Parsers and normalizers for schedule sources.
//!
//! Raw rows arrive either as structured JSON records or as lines of a
//! tab-separated export. Both are adapted into canonical
//! [`Event`](crate::core::domain::Event)s through the same field schema and
//! the same normalizers.
//!
//! # Modules
//!
//! - [`headers`]: Accent/case/whitespace-insensitive header matching and the shared field schema
//! - [`normalize`]: Date, status, time range and attendee normalizers
//! - [`json_parser`]: Structured-record adapter
//! - [`tsv_parser`]: Delimited-text adapter
//!
//! # Example
//!
//! ```
//! use rehearsal_schedule::parsing::tsv_parser::parse_events_tsv;
//!
//! let events = parse_events_tsv("Centro\tFecha\nLucero\t12/09/2025\n")
//!     .expect("valid export");
//! assert_eq!(events[0].date, "2025-09-12");
//! ```

pub mod headers;
pub mod json_parser;
pub mod normalize;
pub mod tsv_parser;

/// Leading marker some editors and sheet exports prepend to UTF-8 text.
pub(crate) const BYTE_ORDER_MARK: char = '\u{feff}';

#[cfg(test)]
mod json_parser_tests;

pub use headers::{find_column, normalize_header, Field};
pub use json_parser::parse_events_json_str;
pub use normalize::{join_time_range, normalize_date, normalize_status, split_attendees};
pub use tsv_parser::parse_events_tsv;
