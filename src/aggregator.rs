// 🧮 Aggregator - multi-year mortality averages per state
//
// One pass over the mortality table:
//   1. drop records outside the year window (inclusive on both ends)
//   2. partition by state code, one value per (state, year)
//   3. average deaths (floor division) and rates (true mean) per state
//
// Alongside, every qualifying record contributes an implied population to a
// US-wide yearly total. Nothing in the default output reads that total; it
// is only printed by the population diagnostic.

use crate::entities::{AnnualMortalityRecord, StateMortalitySummary};
use crate::error::{StatsError, StatsResult};
use crate::reference::ReferenceData;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Years averaged by default
pub const DEFAULT_YEAR_WINDOW: RangeInclusive<u16> = 2014..=2020;

// ============================================================================
// YEAR SERIES
// ============================================================================

/// Values keyed by year, kept in first-insertion order
///
/// Inserting a year that is already present replaces the value in place, so
/// the summation order of the series never depends on later duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries<T> {
    entries: Vec<(u16, T)>,
}

impl<T: Copy> YearSeries<T> {
    pub fn new() -> Self {
        YearSeries { entries: Vec::new() }
    }

    pub fn insert(&mut self, year: u16, value: T) {
        match self.entries.iter_mut().find(|(y, _)| *y == year) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((year, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.entries.iter().map(|(y, _)| *y)
    }
}

impl<T: Copy> Default for YearSeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Yearly deaths and rates for one state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateYears {
    pub deaths: YearSeries<i64>,
    pub rates: YearSeries<f64>,
}

impl StateYears {
    /// Average the series into a summary
    ///
    /// Deaths use floor division by the number of years present, rates use
    /// the arithmetic mean. An empty series is a precondition violation.
    pub fn summarize(&self, state_code: &str, state_name: &str) -> StatsResult<StateMortalitySummary> {
        if self.deaths.is_empty() || self.rates.is_empty() {
            return Err(StatsError::NoQualifyingYears(state_code.to_string()));
        }

        let total_deaths: i64 = self.deaths.values().sum();
        let avg_annual_deaths = total_deaths.div_euclid(self.deaths.len() as i64);

        let total_rate = self.rates.values().fold(0.0, |acc, r| acc + r);
        let avg_annual_deaths_per_capita = total_rate / self.rates.len() as f64;

        Ok(StateMortalitySummary {
            state_name: state_name.to_string(),
            avg_annual_deaths,
            avg_annual_deaths_per_capita,
        })
    }
}

// ============================================================================
// AGGREGATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// Keyed by state code (iteration order = lexicographic by code)
    summaries: BTreeMap<String, StateMortalitySummary>,

    /// Sum of implied populations across all states, per year
    year_to_population: BTreeMap<u16, i64>,

    /// Records dropped by the year window
    filtered_out: usize,
}

impl Aggregation {
    /// (state code, summary) pairs in code order
    pub fn summaries(&self) -> impl Iterator<Item = (&str, &StateMortalitySummary)> {
        self.summaries.iter().map(|(code, s)| (code.as_str(), s))
    }

    pub fn summary_for_code(&self, code: &str) -> Option<&StateMortalitySummary> {
        self.summaries.get(code)
    }

    /// (year, US population) pairs in ascending year order
    pub fn yearly_population(&self) -> impl Iterator<Item = (u16, i64)> + '_ {
        self.year_to_population.iter().map(|(y, p)| (*y, *p))
    }

    pub fn filtered_out(&self) -> usize {
        self.filtered_out
    }

    pub fn state_count(&self) -> usize {
        self.summaries.len()
    }
}

// ============================================================================
// AGGREGATOR
// ============================================================================

#[derive(Debug, Clone)]
pub struct Aggregator {
    window: RangeInclusive<u16>,
}

impl Aggregator {
    pub fn new(window: RangeInclusive<u16>) -> Self {
        Aggregator { window }
    }

    /// Split qualifying records by state code
    ///
    /// Also returns the US-wide population per year and the number of
    /// records outside the window.
    pub fn partition(
        &self,
        records: &[AnnualMortalityRecord],
    ) -> StatsResult<(BTreeMap<String, StateYears>, BTreeMap<u16, i64>, usize)> {
        let mut by_state: BTreeMap<String, StateYears> = BTreeMap::new();
        let mut year_to_population: BTreeMap<u16, i64> = BTreeMap::new();
        let mut filtered_out = 0;

        for record in records {
            if !self.window.contains(&record.year) {
                filtered_out += 1;
                continue;
            }

            let population = record.implied_population().ok_or_else(|| StatsError::InvalidRate {
                code: record.state_code.clone(),
                year: record.year,
            })?;
            *year_to_population.entry(record.year).or_insert(0) += population;

            let years = by_state.entry(record.state_code.clone()).or_default();
            years.deaths.insert(record.year, record.death_count);
            years.rates.insert(record.year, record.deaths_per_capita);
        }

        Ok((by_state, year_to_population, filtered_out))
    }

    /// Run the full aggregation pass
    pub fn aggregate(
        &self,
        records: &[AnnualMortalityRecord],
        reference: &ReferenceData,
    ) -> StatsResult<Aggregation> {
        let (by_state, year_to_population, filtered_out) = self.partition(records)?;

        tracing::debug!(
            window_start = *self.window.start(),
            window_end = *self.window.end(),
            states = by_state.len(),
            filtered_out,
            "partitioned mortality records"
        );

        let mut summaries = BTreeMap::new();
        for (code, years) in &by_state {
            let name = reference.name_for_code(code)?;
            let summary = years.summarize(code, name)?;
            let abbreviation = reference.abbreviation_for_code(code)?;

            tracing::trace!(
                state = %code,
                abbreviation,
                years = ?years.deaths.years().collect::<Vec<_>>(),
                avg_deaths = summary.avg_annual_deaths,
                avg_rate = summary.avg_annual_deaths_per_capita,
                "aggregated state"
            );

            summaries.insert(code.clone(), summary);
        }

        Ok(Aggregation {
            summaries,
            year_to_population,
            filtered_out,
        })
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_YEAR_WINDOW)
    }
}

// ============================================================================
// TESTS
// ============================================================================
