//! Error type for parsing and timezone lookups.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot parse datetime string: {0}")]
    Parse(String),

    #[error("unknown timezone name: {0}")]
    UnknownTimezone(String),

    #[error("unix timestamp out of range: {0}")]
    OutOfRange(i64),
}
