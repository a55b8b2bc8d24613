// 💀 Gun Mortality - yearly firearm deaths per state
//
// Rates are deaths per 100,000 residents.
// The population column is carried from the source table but never read:
// population is back-calculated from deaths / rate instead.

use serde::Deserialize;

/// One row of the gun mortality table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnnualMortalityRecord {
    pub year: u16,

    /// Two-letter state code (join key)
    #[serde(rename = "state")]
    pub state_code: String,

    /// Deaths per 100,000 residents
    #[serde(rename = "rate")]
    pub deaths_per_capita: f64,

    #[serde(rename = "deaths")]
    pub death_count: i64,

    #[serde(rename = "population")]
    pub population_unused: i64,
}

impl AnnualMortalityRecord {
    pub fn new(year: u16, state_code: &str, deaths_per_capita: f64, death_count: i64) -> Self {
        AnnualMortalityRecord {
            year,
            state_code: state_code.to_string(),
            deaths_per_capita,
            death_count,
            population_unused: 0,
        }
    }

    /// Population implied by deaths and rate, truncated toward zero
    ///
    /// Returns None when the rate is zero and the division is undefined.
    pub fn implied_population(&self) -> Option<i64> {
        if self.deaths_per_capita == 0.0 {
            return None;
        }
        let num_capitas = self.death_count as f64 / self.deaths_per_capita;
        Some((num_capitas * 100.0 * 1000.0) as i64)
    }
}

/// Multi-year averages for one state
#[derive(Debug, Clone, PartialEq)]
pub struct StateMortalitySummary {
    pub state_name: String,

    /// Sum of yearly deaths floor-divided by the number of years present
    pub avg_annual_deaths: i64,

    /// Arithmetic mean of the yearly rates
    pub avg_annual_deaths_per_capita: f64,
}
