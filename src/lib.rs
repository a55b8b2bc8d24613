// Gun Violence Stats - Core Library
// Reference tables → aggregation → ranked reports, one linear pass

pub mod entities;
pub mod error;
pub mod reference;
pub mod aggregator;
pub mod config;
pub mod report;

// Re-export commonly used types
pub use entities::{
    AnnualMortalityRecord, MassShootingRecord, PoliticalColor, StateIdentity,
    StateMortalitySummary,
};
pub use error::{StatsError, StatsResult};
pub use reference::{ReferenceData, TableSources};
pub use aggregator::{Aggregation, Aggregator, StateYears, YearSeries, DEFAULT_YEAR_WINDOW};
pub use config::{ReportArg, ReportConfig, Section};
pub use report::{
    rank_by_death_rate, rank_by_mass_shootings, DeathRateRow, GunLawRow, MassShootingRow,
    Reporter,
};

use anyhow::{Context, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the full pipeline against the embedded tables and return the report text
pub fn run(config: &ReportConfig) -> Result<String> {
    let reference = ReferenceData::global()?;
    run_with(reference, config)
}

/// Run the full pipeline against a given reference store
pub fn run_with(reference: &ReferenceData, config: &ReportConfig) -> Result<String> {
    let aggregation = Aggregator::new(config.year_window.clone())
        .aggregate(reference.mortality_records(), reference)
        .context("Failed to aggregate gun mortality records")?;

    Reporter::new(reference, &aggregation)
        .render(config)
        .context("Failed to render reports")
}
