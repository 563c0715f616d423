//! Listing query sent to the tours API.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourType {
    #[default]
    Excursion,
    Package,
}

impl TourType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excursion => "excursion",
            Self::Package => "package",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Excursion => "Excursions",
            Self::Package => "Tour Packages",
        }
    }
}

// route segments need Display + FromStr
impl Display for TourType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTourTypeError(pub String);

impl Display for ParseTourTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown tour type: {:?}", self.0)
    }
}

impl std::error::Error for ParseTourTypeError {}

impl FromStr for TourType {
    type Err = ParseTourTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excursion" => Ok(Self::Excursion),
            "package" => Ok(Self::Package),
            _ => Err(ParseTourTypeError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToursQuery {
    pub tour_type: TourType,
    /// Free-text search, matched by the tours API.
    pub search: Option<String>,
}

impl ToursQuery {
    pub fn new(tour_type: TourType) -> Self {
        Self { tour_type, search: None }
    }

    /// Blank text means no search.
    pub fn with_search(mut self, text: &str) -> Self {
        let text = text.trim();
        self.search = (!text.is_empty()).then(|| text.to_string());
        self
    }

    /// Path and query relative to the API root, e.g. `tours?type=excursion`.
    pub fn resource_query(&self) -> String {
        match &self.search {
            Some(text) => format!("tours?type={}&search={}", self.tour_type, urlencoding::encode(text)),
            None => format!("tours?type={}", self.tour_type),
        }
    }
}
