// 📚 Reference Data Store - the static tables, parsed once
//
// All tables live under data/ and are compiled into the binary, so a run
// never touches the filesystem. The parsed store is immutable and shared
// read-only through `ReferenceData::global()`.
//
// Join keys:
//   code → identity, political color, mortality records
//   name → gun law rank, mass shooting stats

use crate::entities::{
    AnnualMortalityRecord, MassShootingRecord, PoliticalColor, StateIdentity,
};
use crate::error::{StatsError, StatsResult};
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;

// ============================================================================
// EMBEDDED TABLES
// ============================================================================

const STATES_CSV: &str = include_str!("../data/states.csv");
const POLITICAL_COLORS_JSON: &str = include_str!("../data/political_colors.json");
const GUN_LAW_RANKS_JSON: &str = include_str!("../data/gun_law_ranks.json");
const GUN_MORTALITY_CSV: &str = include_str!("../data/gun_mortality.csv");
const MASS_SHOOTINGS_CSV: &str = include_str!("../data/mass_shootings.csv");

/// Raw table text, one field per table
#[derive(Debug, Clone, Copy)]
pub struct TableSources<'a> {
    pub states_csv: &'a str,
    pub political_colors_json: &'a str,
    pub gun_law_ranks_json: &'a str,
    pub gun_mortality_csv: &'a str,
    pub mass_shootings_csv: &'a str,
}

impl TableSources<'static> {
    /// The tables compiled into this binary
    pub fn embedded() -> Self {
        TableSources {
            states_csv: STATES_CSV,
            political_colors_json: POLITICAL_COLORS_JSON,
            gun_law_ranks_json: GUN_LAW_RANKS_JSON,
            gun_mortality_csv: GUN_MORTALITY_CSV,
            mass_shootings_csv: MASS_SHOOTINGS_CSV,
        }
    }
}

static GLOBAL: OnceCell<ReferenceData> = OnceCell::new();

// ============================================================================
// REFERENCE DATA
// ============================================================================

#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Keyed by two-letter code (iteration order = lexicographic by code)
    states_by_code: BTreeMap<String, StateIdentity>,

    /// Full name → code
    codes_by_name: BTreeMap<String, String>,

    colors_by_code: BTreeMap<String, PoliticalColor>,

    gun_law_ranks_by_name: BTreeMap<String, u32>,

    /// Table order, years outside the aggregation window included
    mortality: Vec<AnnualMortalityRecord>,

    /// Keyed by full name (iteration order = lexicographic by name)
    mass_shootings_by_name: BTreeMap<String, MassShootingRecord>,
}

impl ReferenceData {
    /// Shared store built from the embedded tables on first use
    pub fn global() -> Result<&'static ReferenceData> {
        GLOBAL.get_or_try_init(Self::load)
    }

    /// Build a fresh store from the embedded tables
    pub fn load() -> Result<Self> {
        Self::from_sources(TableSources::embedded())
    }

    /// Parse and validate a full set of tables
    pub fn from_sources(sources: TableSources<'_>) -> Result<Self> {
        let states: Vec<StateIdentity> =
            parse_csv(sources.states_csv).context("Failed to parse states table")?;
        let colors_by_code: BTreeMap<String, PoliticalColor> =
            serde_json::from_str(sources.political_colors_json)
                .context("Failed to parse political colors JSON")?;
        let gun_law_ranks_by_name: BTreeMap<String, u32> =
            serde_json::from_str(sources.gun_law_ranks_json)
                .context("Failed to parse gun law ranks JSON")?;
        let mortality: Vec<AnnualMortalityRecord> = parse_csv(sources.gun_mortality_csv)
            .context("Failed to parse gun mortality table")?;
        let mass_shootings: Vec<MassShootingRecord> = parse_csv(sources.mass_shootings_csv)
            .context("Failed to parse mass shootings table")?;

        let mut states_by_code = BTreeMap::new();
        let mut codes_by_name = BTreeMap::new();
        for state in states {
            if codes_by_name
                .insert(state.name.clone(), state.code.clone())
                .is_some()
            {
                return Err(StatsError::DuplicateState(state.name).into());
            }
            if states_by_code.contains_key(&state.code) {
                return Err(StatsError::DuplicateState(state.code).into());
            }
            states_by_code.insert(state.code.clone(), state);
        }

        let mut mass_shootings_by_name = BTreeMap::new();
        for record in mass_shootings {
            if !codes_by_name.contains_key(&record.state_name) {
                return Err(StatsError::UnknownStateName(record.state_name))
                    .context("Mass shooting table references an unknown state");
            }
            if mass_shootings_by_name.contains_key(&record.state_name) {
                return Err(StatsError::DuplicateState(record.state_name).into());
            }
            mass_shootings_by_name.insert(record.state_name.clone(), record);
        }

        if let Some(record) = mortality
            .iter()
            .find(|r| !states_by_code.contains_key(&r.state_code))
        {
            return Err(StatsError::UnknownStateCode(record.state_code.clone()))
                .context("Gun mortality table references an unknown state");
        }
        if let Some(code) = colors_by_code.keys().find(|c| !states_by_code.contains_key(*c)) {
            return Err(StatsError::UnknownStateCode(code.clone()))
                .context("Political color table references an unknown state");
        }
        if let Some(name) = gun_law_ranks_by_name
            .keys()
            .find(|n| !codes_by_name.contains_key(*n))
        {
            return Err(StatsError::UnknownStateName(name.clone()))
                .context("Gun law rank table references an unknown state");
        }

        tracing::debug!(
            states = states_by_code.len(),
            colors = colors_by_code.len(),
            gun_law_ranks = gun_law_ranks_by_name.len(),
            mortality_records = mortality.len(),
            mass_shooting_records = mass_shootings_by_name.len(),
            "loaded reference tables"
        );

        Ok(ReferenceData {
            states_by_code,
            codes_by_name,
            colors_by_code,
            gun_law_ranks_by_name,
            mortality,
            mass_shootings_by_name,
        })
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    pub fn name_for_code(&self, code: &str) -> StatsResult<&str> {
        self.states_by_code
            .get(code)
            .map(|s| s.name.as_str())
            .ok_or_else(|| StatsError::UnknownStateCode(code.to_string()))
    }

    pub fn code_for_name(&self, name: &str) -> StatsResult<&str> {
        self.codes_by_name
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| StatsError::UnknownStateName(name.to_string()))
    }

    pub fn abbreviation_for_code(&self, code: &str) -> StatsResult<&str> {
        self.states_by_code
            .get(code)
            .map(|s| s.abbreviation.as_str())
            .ok_or_else(|| StatsError::UnknownStateCode(code.to_string()))
    }

    /// Fails for codes without a classification (DC)
    pub fn color_for_code(&self, code: &str) -> StatsResult<PoliticalColor> {
        self.colors_by_code
            .get(code)
            .copied()
            .ok_or_else(|| StatsError::NoPoliticalColor(code.to_string()))
    }

    pub fn gun_law_rank_for_name(&self, name: &str) -> StatsResult<u32> {
        self.gun_law_ranks_by_name
            .get(name)
            .copied()
            .ok_or_else(|| StatsError::NoGunLawRank(name.to_string()))
    }

    pub fn mass_shooting_stats_for_name(&self, name: &str) -> StatsResult<&MassShootingRecord> {
        self.mass_shootings_by_name
            .get(name)
            .ok_or_else(|| StatsError::NoMassShootingStats(name.to_string()))
    }

    // ========================================================================
    // TABLE ACCESS
    // ========================================================================

    /// All states in code order
    pub fn states(&self) -> impl Iterator<Item = &StateIdentity> {
        self.states_by_code.values()
    }

    pub fn mortality_records(&self) -> &[AnnualMortalityRecord] {
        &self.mortality
    }

    /// Mass shooting rows in state-name order
    pub fn mass_shooting_records(&self) -> impl Iterator<Item = &MassShootingRecord> {
        self.mass_shootings_by_name.values()
    }

    pub fn state_count(&self) -> usize {
        self.states_by_code.len()
    }
}

fn parse_csv<T: serde::de::DeserializeOwned>(data: &str) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_reader(data.as_bytes());
    let mut rows = Vec::new();

    for (idx, result) in rdr.deserialize().enumerate() {
        // +2: header line, then 1-based numbering
        let row: T = result.with_context(|| format!("Failed to deserialize line {}", idx + 2))?;
        rows.push(row);
    }

    Ok(rows)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn small_sources() -> TableSources<'static> {
        TableSources {
            states_csv: "name,abbreviation,code\n\
                         Delaware,Del.,DE\n\
                         District of Columbia,D.C.,DC\n\
                         Maine,Maine,ME\n",
            political_colors_json: r#"{"DE": "BLUE", "ME": "BLUE"}"#,
            gun_law_ranks_json: r#"{"Delaware": 12, "Maine": 24}"#,
            gun_mortality_csv: "year,state,rate,deaths,population\n\
                                2014,DE,11.1,104,935000\n\
                                2014,ME,7.8,104,1330000\n",
            mass_shootings_csv: "state,population_2023,mass_shootings,mass_shootings_per_capita\n\
                                 Delaware,1017551,58,5.699960002004813\n\
                                 Maine,1395722,6,0.4298908479766599\n",
        }
    }

    #[test]
    fn test_embedded_tables_load() {
        let data = ReferenceData::load().unwrap();

        assert_eq!(data.state_count(), 51);
        assert_eq!(data.mass_shooting_records().count(), 50);
        assert!(!data.mortality_records().is_empty());
    }

    #[test]
    fn test_name_code_round_trip() {
        let data = ReferenceData::global().unwrap();

        for state in data.states() {
            let name = data.name_for_code(&state.code).unwrap();
            assert_eq!(data.code_for_name(name).unwrap(), state.code);
        }
    }

    #[test]
    fn test_dc_has_no_color() {
        let data = ReferenceData::global().unwrap();

        assert_eq!(data.name_for_code("DC").unwrap(), "District of Columbia");
        assert_eq!(
            data.color_for_code("DC"),
            Err(StatsError::NoPoliticalColor("DC".to_string()))
        );
        assert!(data.gun_law_rank_for_name("District of Columbia").is_err());
    }

    #[test]
    fn test_lookups() {
        let data = ReferenceData::global().unwrap();

        assert_eq!(data.code_for_name("Delaware").unwrap(), "DE");
        assert_eq!(data.abbreviation_for_code("DE").unwrap(), "Del.");
        assert_eq!(data.color_for_code("DE").unwrap(), PoliticalColor::Blue);
        assert_eq!(data.color_for_code("PA").unwrap(), PoliticalColor::LightBlue);
        assert_eq!(data.color_for_code("OH").unwrap(), PoliticalColor::Purple);
        assert_eq!(data.color_for_code("GA").unwrap(), PoliticalColor::LightRed);
        assert_eq!(data.color_for_code("WY").unwrap(), PoliticalColor::Red);
        assert_eq!(data.gun_law_rank_for_name("California").unwrap(), 1);

        let de = data.mass_shooting_stats_for_name("Delaware").unwrap();
        assert_eq!(de.mass_shooting_count, 58);
        assert_eq!(de.mass_shootings_per_capita, 5.699960002004813);

        assert_eq!(
            data.code_for_name("Atlantis"),
            Err(StatsError::UnknownStateName("Atlantis".to_string()))
        );
        assert!(data.name_for_code("XX").is_err());
        assert!(data.mass_shooting_stats_for_name("Atlantis").is_err());
    }

    #[test]
    fn test_every_ranked_state_has_color_and_stats() {
        let data = ReferenceData::global().unwrap();

        for record in data.mass_shooting_records() {
            let code = data.code_for_name(&record.state_name).unwrap();
            assert!(data.color_for_code(code).is_ok(), "{} has no color", code);
            assert!(data.gun_law_rank_for_name(&record.state_name).is_ok());
        }
        for record in data.mortality_records() {
            assert!(data.color_for_code(&record.state_code).is_ok());
        }
    }

    #[test]
    fn test_mass_shootings_in_name_order() {
        let data = ReferenceData::global().unwrap();
        let names: Vec<&str> = data
            .mass_shooting_records()
            .map(|r| r.state_name.as_str())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_from_sources_small_tables() {
        let data = ReferenceData::from_sources(small_sources()).unwrap();

        assert_eq!(data.state_count(), 3);
        assert_eq!(data.mortality_records().len(), 2);
        let codes: Vec<&str> = data.states().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["DC", "DE", "ME"]);
    }

    #[test]
    fn test_rejects_duplicate_state_code() {
        let mut sources = small_sources();
        sources.states_csv = "name,abbreviation,code\nDelaware,Del.,DE\nDelmarva,Dlm.,DE\n";
        sources.political_colors_json = "{}";
        sources.gun_law_ranks_json = "{}";
        sources.gun_mortality_csv = "year,state,rate,deaths,population\n";
        sources.mass_shootings_csv =
            "state,population_2023,mass_shootings,mass_shootings_per_capita\n";

        let err = ReferenceData::from_sources(sources).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::DuplicateState("DE".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_mortality_state() {
        let mut sources = small_sources();
        sources.gun_mortality_csv = "year,state,rate,deaths,population\n2014,XX,1.0,1,100000\n";

        let err = ReferenceData::from_sources(sources).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StatsError>(),
            Some(&StatsError::UnknownStateCode("XX".to_string()))
        );
    }

    #[test]
    fn test_rejects_malformed_row() {
        let mut sources = small_sources();
        sources.gun_mortality_csv = "year,state,rate,deaths,population\n2014,DE,lots,1,100000\n";

        assert!(ReferenceData::from_sources(sources).is_err());
    }
}
