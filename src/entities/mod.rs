// Entity Models - the rows of the reference tables
//
// Each entity is created once (parsed from an embedded table or produced by
// one aggregation pass) and never mutated afterwards.
//
// - StateIdentity:      name / abbreviation / two-letter code
// - PoliticalColor:     five-level presidential leaning, 2008-2020
// - Mortality records:  yearly firearm deaths + per-state summaries
// - MassShootingRecord: 2023 population + mass shooting counts

pub mod state;
pub mod color;
pub mod mortality;
pub mod mass_shooting;

pub use state::StateIdentity;
pub use color::PoliticalColor;
pub use mortality::{AnnualMortalityRecord, StateMortalitySummary};
pub use mass_shooting::MassShootingRecord;
