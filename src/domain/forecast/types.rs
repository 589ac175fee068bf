use crate::domain::errors::EncodingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seasonal event the demand model was trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Normal,
    Lebaran,
    Nataru,
    IdulAdha,
}

impl Season {
    /// Label shown in the selector, also the category name used at training time
    pub fn label(&self) -> &'static str {
        match self {
            Season::Normal => "Normal",
            Season::Lebaran => "Lebaran",
            Season::Nataru => "Nataru",
            Season::IdulAdha => "Idul Adha",
        }
    }

    /// Every season except Normal counts as a holiday period
    pub fn is_holiday(&self) -> bool {
        !matches!(self, Season::Normal)
    }

    /// Returns all seasons in selector order
    pub fn all() -> [Season; 4] {
        [
            Season::Normal,
            Season::Lebaran,
            Season::Nataru,
            Season::IdulAdha,
        ]
    }
}

impl FromStr for Season {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Season::Normal),
            "lebaran" => Ok(Season::Lebaran),
            "nataru" => Ok(Season::Nataru),
            "idul adha" | "iduladha" | "idul_adha" => Ok(Season::IdulAdha),
            _ => Err(EncodingError::UnknownSeason(s.to_string())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Day of week, Monday first. The index is the `DayOfWeek` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// 0 = Monday ... 6 = Sunday
    pub fn index(&self) -> u8 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    pub fn from_index(index: u8) -> Result<Self, EncodingError> {
        Self::all()
            .get(index as usize)
            .copied()
            .ok_or_else(|| EncodingError::UnknownWeekday(index.to_string()))
    }

    /// Indonesian day name
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Senin",
            Weekday::Tuesday => "Selasa",
            Weekday::Wednesday => "Rabu",
            Weekday::Thursday => "Kamis",
            Weekday::Friday => "Jumat",
            Weekday::Saturday => "Sabtu",
            Weekday::Sunday => "Minggu",
        }
    }

    pub fn all() -> [Weekday; 7] {
        [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }
}

impl FromStr for Weekday {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::all()
            .into_iter()
            .find(|day| day.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| EncodingError::UnknownWeekday(s.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One evaluation of the form, created when the forecast button is pressed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Planned selling price in IDR per kg
    pub price_per_kg: u32,
    pub day_of_week: Weekday,
    pub season: Season,
}
