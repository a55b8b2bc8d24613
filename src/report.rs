// 📊 Reporter - ranked tables joined against the reference data
//
// Every table is a stable sort by one numeric key, descending. Ties keep the
// iteration order of the source: state-code order for the death-rate tables,
// state-name order for the mass shooting table.
//
// The whole report is rendered into a String before anything is written, so
// a failed lookup never leaves a half-printed table behind.

use crate::aggregator::Aggregation;
use crate::config::{ReportConfig, Section};
use crate::entities::{MassShootingRecord, PoliticalColor, StateMortalitySummary};
use crate::error::StatsResult;
use crate::reference::ReferenceData;

// ============================================================================
// RANKED ROWS
// ============================================================================

/// One line of the mass shooting table
#[derive(Debug, Clone, PartialEq)]
pub struct MassShootingRow<'a> {
    pub rank: usize,
    pub record: &'a MassShootingRecord,
    pub color: PoliticalColor,
}

impl MassShootingRow<'_> {
    pub fn line(&self) -> String {
        format!(
            "{}, {}, {}, {:.2}, {}",
            self.rank,
            self.record.state_name,
            self.color,
            self.record.mass_shootings_per_capita,
            self.record.mass_shooting_count
        )
    }
}

/// One line of the death rate vs. political color table
#[derive(Debug, Clone, PartialEq)]
pub struct DeathRateRow<'a> {
    pub rank: usize,
    pub summary: &'a StateMortalitySummary,
    pub color: PoliticalColor,
}

impl DeathRateRow<'_> {
    pub fn line(&self) -> String {
        format!(
            "{}, {}, {}, {:.2}, {}",
            self.rank,
            self.summary.state_name,
            self.color,
            self.summary.avg_annual_deaths_per_capita,
            self.summary.avg_annual_deaths
        )
    }
}

/// One line of the death rate vs. gun law strength table
#[derive(Debug, Clone, PartialEq)]
pub struct GunLawRow<'a> {
    pub rank: usize,
    pub summary: &'a StateMortalitySummary,
    pub gun_law_rank: u32,
}

impl GunLawRow<'_> {
    pub fn line(&self) -> String {
        format!(
            "{}, {}, {}, {:.2}, {}",
            self.rank,
            self.summary.state_name,
            self.gun_law_rank,
            self.summary.avg_annual_deaths_per_capita,
            self.summary.avg_annual_deaths
        )
    }
}

/// Mass shooting records, highest per-capita first
pub fn rank_by_mass_shootings(reference: &ReferenceData) -> Vec<&MassShootingRecord> {
    let mut records: Vec<&MassShootingRecord> = reference.mass_shooting_records().collect();
    records.sort_by(|a, b| b.mass_shootings_per_capita.total_cmp(&a.mass_shootings_per_capita));
    records
}

/// Mortality summaries, highest average death rate first
pub fn rank_by_death_rate(aggregation: &Aggregation) -> Vec<&StateMortalitySummary> {
    let mut summaries: Vec<&StateMortalitySummary> =
        aggregation.summaries().map(|(_, s)| s).collect();
    summaries.sort_by(|a, b| {
        b.avg_annual_deaths_per_capita
            .total_cmp(&a.avg_annual_deaths_per_capita)
    });
    summaries
}

// ============================================================================
// REPORTER
// ============================================================================

pub struct Reporter<'a> {
    reference: &'a ReferenceData,
    aggregation: &'a Aggregation,
}

impl<'a> Reporter<'a> {
    pub fn new(reference: &'a ReferenceData, aggregation: &'a Aggregation) -> Self {
        Reporter {
            reference,
            aggregation,
        }
    }

    /// Report A
    pub fn mass_shooting_rows(&self) -> StatsResult<Vec<MassShootingRow<'a>>> {
        rank_by_mass_shootings(self.reference)
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let code = self.reference.code_for_name(&record.state_name)?;
                Ok(MassShootingRow {
                    rank: idx + 1,
                    record,
                    color: self.reference.color_for_code(code)?,
                })
            })
            .collect()
    }

    /// Report B
    pub fn death_rate_rows(&self) -> StatsResult<Vec<DeathRateRow<'a>>> {
        rank_by_death_rate(self.aggregation)
            .into_iter()
            .enumerate()
            .map(|(idx, summary)| {
                let code = self.reference.code_for_name(&summary.state_name)?;
                Ok(DeathRateRow {
                    rank: idx + 1,
                    summary,
                    color: self.reference.color_for_code(code)?,
                })
            })
            .collect()
    }

    /// Report C
    pub fn gun_law_rows(&self) -> StatsResult<Vec<GunLawRow<'a>>> {
        rank_by_death_rate(self.aggregation)
            .into_iter()
            .enumerate()
            .map(|(idx, summary)| {
                Ok(GunLawRow {
                    rank: idx + 1,
                    summary,
                    gun_law_rank: self.reference.gun_law_rank_for_name(&summary.state_name)?,
                })
            })
            .collect()
    }

    /// Render the configured sections as text
    pub fn render(&self, config: &ReportConfig) -> StatsResult<String> {
        let mut lines: Vec<String> = Vec::new();

        if config.show_population {
            for (year, population) in self.aggregation.yearly_population() {
                lines.push(format!("US has ~{} people in {}", population, year));
            }
        }

        if config.includes(Section::Summary) {
            let (start, end) = config.year_window.clone().into_inner();
            for (code, summary) in self.aggregation.summaries() {
                lines.push(format!(
                    "{}'s average deathes/capita in {}-{}: {:.2}",
                    code, start, end, summary.avg_annual_deaths_per_capita
                ));
            }
            tracing::info!(states = self.aggregation.state_count(), "rendered summary");
        }

        // Tables are separated by one blank line
        let mut tables: Vec<Vec<String>> = Vec::new();

        if config.includes(Section::MassShootings) {
            let mut table = vec!["Sorted by annual mass shootings per capita.".to_string()];
            table.extend(self.mass_shooting_rows()?.iter().map(MassShootingRow::line));
            tracing::info!(rows = table.len() - 1, "rendered mass shooting ranking");
            tables.push(table);
        }

        if config.includes(Section::DeathRates) {
            let mut table = vec![
                "Sorted by annual deathes per capita.".to_string(),
                "Gun death rate rank, State, Color, Death rate, Deathes".to_string(),
            ];
            table.extend(self.death_rate_rows()?.iter().map(DeathRateRow::line));
            tracing::info!(rows = table.len() - 2, "rendered death rate ranking");
            tables.push(table);
        }

        if config.includes(Section::GunLaws) {
            let mut table = vec![
                "Sorted by annual deathes per capita.".to_string(),
                "Gun death rate rank, State, Gun law strength rank, Deathes per capita, Deathes"
                    .to_string(),
            ];
            table.extend(self.gun_law_rows()?.iter().map(GunLawRow::line));
            tracing::info!(rows = table.len() - 2, "rendered gun law ranking");
            tables.push(table);
        }

        for (idx, table) in tables.into_iter().enumerate() {
            if idx > 0 {
                lines.push(String::new());
            }
            lines.extend(table);
        }

        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

// ============================================================================
// TESTS
// ============================================================================
