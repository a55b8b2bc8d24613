// 🎨 Political Color - presidential leaning across 2008, 2012, 2016, 2020
//
// BLUE       = Democratic in all four elections
// LIGHT_BLUE = Democratic in three
// PURPLE     = split two and two
// LIGHT_RED  = Republican in three
// RED        = Republican in all four

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoliticalColor {
    Blue,
    LightBlue,
    Purple,
    LightRed,
    Red,
}

impl PoliticalColor {
    /// Label used in printed reports
    pub fn as_str(&self) -> &'static str {
        match self {
            PoliticalColor::Blue => "Blue",
            PoliticalColor::LightBlue => "Light Blue",
            PoliticalColor::Purple => "Purple",
            PoliticalColor::LightRed => "Light Red",
            PoliticalColor::Red => "Red",
        }
    }
}

impl fmt::Display for PoliticalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
