// 🔫 Mass Shootings - one row per state
//
// Per-capita values are mass shootings per 100,000 residents of the
// 2023 population, stored as given rather than recomputed.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MassShootingRecord {
    #[serde(rename = "state")]
    pub state_name: String,

    pub population_2023: i64,

    #[serde(rename = "mass_shootings")]
    pub mass_shooting_count: i64,

    pub mass_shootings_per_capita: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mass_shooting_row() {
        let data = "state,population_2023,mass_shootings,mass_shootings_per_capita\n\
                    Delaware,1017551,58,5.699960002004813\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let record: MassShootingRecord = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(record.state_name, "Delaware");
        assert_eq!(record.population_2023, 1017551);
        assert_eq!(record.mass_shooting_count, 58);
        assert_eq!(record.mass_shootings_per_capita, 5.699960002004813);
    }
}
