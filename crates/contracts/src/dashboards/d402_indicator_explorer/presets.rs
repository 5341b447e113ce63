use super::dto::Country;
use serde::{Deserialize, Serialize};

pub const G20_CODES: [&str; 20] = [
    "ARG", "AUS", "BRA", "CAN", "CHN", "FRA", "DEU", "IND", "IDN", "ITA", "JPN", "MEX", "RUS",
    "SAU", "ZAF", "KOR", "TUR", "GBR", "USA", "EU",
];

pub const G7_CODES: [&str; 7] = ["CAN", "FRA", "DEU", "ITA", "JPN", "GBR", "USA"];

pub const BRICS_CODES: [&str; 5] = ["BRA", "RUS", "IND", "CHN", "ZAF"];

/// Named preset of countries that can be applied to or retracted from the
/// selection in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PresetGroup {
    All,
    G20,
    G7,
    Brics,
}

impl PresetGroup {
    pub const ALL: [PresetGroup; 4] = [
        PresetGroup::All,
        PresetGroup::G20,
        PresetGroup::G7,
        PresetGroup::Brics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PresetGroup::All => "All",
            PresetGroup::G20 => "G20",
            PresetGroup::G7 => "G7",
            PresetGroup::Brics => "BRICS",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PresetGroup::All => 0,
            PresetGroup::G20 => 1,
            PresetGroup::G7 => 2,
            PresetGroup::Brics => 3,
        }
    }

    /// Full defined code list of the preset.
    ///
    /// `All` has no fixed list: it stands for every country of the current
    /// availability set.
    pub fn codes(&self, available: &[Country]) -> Vec<String> {
        let fixed: &[&str] = match self {
            PresetGroup::All => {
                return available.iter().map(|c| c.code.clone()).collect();
            }
            PresetGroup::G20 => &G20_CODES,
            PresetGroup::G7 => &G7_CODES,
            PresetGroup::Brics => &BRICS_CODES,
        };
        fixed.iter().map(|c| c.to_string()).collect()
    }
}

impl std::fmt::Display for PresetGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
