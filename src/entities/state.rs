// 🗺️ State Identity - the join key for every other table
//
// The two-letter code is the IDENTITY; name and abbreviation are values.
// Mortality and color tables join on code, rank and mass shooting tables
// join on full name, so both directions must stay bijective.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StateIdentity {
    /// Full name, e.g. "New Hampshire"
    pub name: String,

    /// AP style abbreviation, e.g. "N.H."
    pub abbreviation: String,

    /// USPS two-letter code, e.g. "NH"
    pub code: String,
}

impl StateIdentity {
    pub fn new(name: &str, abbreviation: &str, code: &str) -> Self {
        StateIdentity {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            code: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_state_row() {
        let data = "name,abbreviation,code\nNew Hampshire,N.H.,NH\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let state: StateIdentity = rdr.deserialize().next().unwrap().unwrap();

        assert_eq!(state, StateIdentity::new("New Hampshire", "N.H.", "NH"));
    }
}
