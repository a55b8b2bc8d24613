// ⚙️ Report Configuration - what a run prints
//
// There are no config files and no environment lookups: the command line is
// the only input. The default configuration prints every section except the
// population diagnostic.

use crate::aggregator::DEFAULT_YEAR_WINDOW;
use clap::ValueEnum;
use std::ops::RangeInclusive;

/// Printable sections, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Summary,
    MassShootings,
    DeathRates,
    GunLaws,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Summary,
        Section::MassShootings,
        Section::DeathRates,
        Section::GunLaws,
    ];
}

/// Value of the `--report` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportArg {
    /// Every section below
    All,
    /// Per-state average death rate, in state-code order
    Summary,
    /// Ranked by mass shootings per capita
    MassShootings,
    /// Ranked by gun death rate, with political color
    DeathRates,
    /// Ranked by gun death rate, with gun law strength rank
    GunLaws,
}

impl ReportArg {
    fn sections(self) -> &'static [Section] {
        match self {
            ReportArg::All => &Section::ALL,
            ReportArg::Summary => &[Section::Summary],
            ReportArg::MassShootings => &[Section::MassShootings],
            ReportArg::DeathRates => &[Section::DeathRates],
            ReportArg::GunLaws => &[Section::GunLaws],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Mortality years averaged, inclusive
    pub year_window: RangeInclusive<u16>,

    /// Sorted and deduplicated
    pub sections: Vec<Section>,

    /// Print the US-wide yearly population diagnostic
    pub show_population: bool,
}

impl ReportConfig {
    /// Build from command-line values; no `--report` means all sections
    pub fn from_args(reports: &[ReportArg], show_population: bool) -> Self {
        let mut sections: Vec<Section> = if reports.is_empty() {
            Section::ALL.to_vec()
        } else {
            reports.iter().flat_map(|r| r.sections().iter().copied()).collect()
        };
        sections.sort();
        sections.dedup();

        ReportConfig {
            year_window: DEFAULT_YEAR_WINDOW,
            sections,
            show_population,
        }
    }

    pub fn includes(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::from_args(&[], false)
    }
}
