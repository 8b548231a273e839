//! Province/territory codes offered by the region selector.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Label of the empty "unselected" option.
pub const UNSELECTED_LABEL: &str = "Select Province/State";

/// A Canadian province or territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Province {
    Alberta,
    BritishColumbia,
    Manitoba,
    NewBrunswick,
    NewfoundlandAndLabrador,
    NovaScotia,
    Ontario,
    PrinceEdwardIsland,
    Quebec,
    Saskatchewan,
    NorthwestTerritories,
    Nunavut,
    Yukon,
}

impl Province {
    /// All provinces in selector order.
    pub const ALL: [Province; 13] = [
        Province::Alberta,
        Province::BritishColumbia,
        Province::Manitoba,
        Province::NewBrunswick,
        Province::NewfoundlandAndLabrador,
        Province::NovaScotia,
        Province::Ontario,
        Province::PrinceEdwardIsland,
        Province::Quebec,
        Province::Saskatchewan,
        Province::NorthwestTerritories,
        Province::Nunavut,
        Province::Yukon,
    ];

    /// Two-letter code stored in contacts and criteria.
    pub fn code(&self) -> &'static str {
        match self {
            Province::Alberta => "AB",
            Province::BritishColumbia => "BC",
            Province::Manitoba => "MB",
            Province::NewBrunswick => "NB",
            Province::NewfoundlandAndLabrador => "NL",
            Province::NovaScotia => "NS",
            Province::Ontario => "ON",
            Province::PrinceEdwardIsland => "PE",
            Province::Quebec => "QC",
            Province::Saskatchewan => "SK",
            Province::NorthwestTerritories => "NT",
            Province::Nunavut => "NU",
            Province::Yukon => "YT",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Province::Alberta => "Alberta",
            Province::BritishColumbia => "British Columbia",
            Province::Manitoba => "Manitoba",
            Province::NewBrunswick => "New Brunswick",
            Province::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Province::NovaScotia => "Nova Scotia",
            Province::Ontario => "Ontario",
            Province::PrinceEdwardIsland => "Prince Edward Island",
            Province::Quebec => "Quebec",
            Province::Saskatchewan => "Saskatchewan",
            Province::NorthwestTerritories => "Northwest Territories",
            Province::Nunavut => "Nunavut",
            Province::Yukon => "Yukon",
        }
    }

    /// Label for a code, if the code names a known province.
    pub fn label_for(code: &str) -> Option<&'static str> {
        code.parse::<Province>().ok().map(|p| p.label())
    }
}

impl FromStr for Province {
    type Err = String;

    /// Codes are matched exactly, as the region criterion is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Province::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| format!("Unknown province code: {}", s))
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One entry of the region selector.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProvinceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Selector options: the empty sentinel followed by every province.
pub fn selector_options() -> Vec<ProvinceOption> {
    std::iter::once(ProvinceOption {
        value: "",
        label: UNSELECTED_LABEL,
    })
    .chain(Province::ALL.iter().map(|p| ProvinceOption {
        value: p.code(),
        label: p.label(),
    }))
    .collect()
}
