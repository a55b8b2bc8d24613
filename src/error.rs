// ⚠️ Stats Errors - precondition violations against the reference tables
//
// None of these are recoverable: the tables are compiled into the binary,
// so any of them means the data itself is wrong and the run must stop.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("unknown state code: {0}")]
    UnknownStateCode(String),

    #[error("unknown state name: {0}")]
    UnknownStateName(String),

    /// DC has no color classification; the gap is kept as-is
    #[error("no political color classification for state code: {0}")]
    NoPoliticalColor(String),

    #[error("no gun law strength rank for state: {0}")]
    NoGunLawRank(String),

    #[error("no mass shooting stats for state: {0}")]
    NoMassShootingStats(String),

    #[error("state {0} has no mortality records in the year window")]
    NoQualifyingYears(String),

    #[error("duplicate state in reference table: {0}")]
    DuplicateState(String),

    #[error("zero deaths-per-capita rate for {code} in {year}")]
    InvalidRate { code: String, year: u16 },
}

pub type StatsResult<T> = std::result::Result<T, StatsError>;
