//! Three-month seasons keyed by their representative (middle) month.

use std::fmt;

use crate::error::SkillError;

/// A meteorological season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Djf,
    Mam,
    Jja,
    Son,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Djf, Season::Mam, Season::Jja, Season::Son];

    /// Maps a representative month to its season: 1 → DJF, 4 → MAM,
    /// 7 → JJA, 10 → SON.
    ///
    /// # Errors
    ///
    /// [`SkillError::UnsupportedSeason`] for every other month.
    pub fn from_representative_month(month: u8) -> Result<Self, SkillError> {
        match month {
            1 => Ok(Season::Djf),
            4 => Ok(Season::Mam),
            7 => Ok(Season::Jja),
            10 => Ok(Season::Son),
            _ => Err(SkillError::UnsupportedSeason { month }),
        }
    }

    pub fn representative_month(self) -> u8 {
        match self {
            Season::Djf => 1,
            Season::Mam => 4,
            Season::Jja => 7,
            Season::Son => 10,
        }
    }

    /// Coordinate label on the observation `season` axis.
    pub fn label(self) -> &'static str {
        match self {
            Season::Djf => "DJF",
            Season::Mam => "MAM",
            Season::Jja => "JJA",
            Season::Son => "SON",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
