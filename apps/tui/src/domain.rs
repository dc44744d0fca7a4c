use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u32")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    pub const fn number(self) -> u32 {
        match self {
            Self::January => 1,
            Self::February => 2,
            Self::March => 3,
            Self::April => 4,
            Self::May => 5,
            Self::June => 6,
            Self::July => 7,
            Self::August => 8,
            Self::September => 9,
            Self::October => 10,
            Self::November => 11,
            Self::December => 12,
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_number(number: i64) -> Option<Self> {
        if number < 1 || number > 12 {
            return None;
        }
        Self::from_index((number - 1) as usize)
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 12 {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Parses a month number or a Spanish/English month name.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        if let Ok(number) = value.parse::<i64>() {
            return Self::from_number(number);
        }
        let number = match value.trim_end_matches('.') {
            "ene" | "enero" | "jan" | "january" => 1,
            "feb" | "febrero" | "february" => 2,
            "mar" | "marzo" | "march" => 3,
            "abr" | "abril" | "apr" | "april" => 4,
            "may" | "mayo" => 5,
            "jun" | "junio" | "june" => 6,
            "jul" | "julio" | "july" => 7,
            "ago" | "agosto" | "aug" | "august" => 8,
            "sep" | "sept" | "septiembre" | "setiembre" | "september" => 9,
            "oct" | "octubre" | "october" => 10,
            "nov" | "noviembre" | "november" => 11,
            "dic" | "diciembre" | "dec" | "december" => 12,
            _ => return None,
        };
        Self::from_number(number)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::January => "Enero",
            Self::February => "Febrero",
            Self::March => "Marzo",
            Self::April => "Abril",
            Self::May => "Mayo",
            Self::June => "Junio",
            Self::July => "Julio",
            Self::August => "Agosto",
            Self::September => "Septiembre",
            Self::October => "Octubre",
            Self::November => "Noviembre",
            Self::December => "Diciembre",
        }
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

/// Inclusive month interval. A start after the end wraps past December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRange {
    pub start: Month,
    pub end: Month,
}

impl MonthRange {
    pub fn new(start: i64, end: i64) -> Result<Self> {
        match (Month::from_number(start), Month::from_number(end)) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(DashboardError::InvalidRange { start, end }),
        }
    }

    pub const fn from_months(start: Month, end: Month) -> Self {
        Self { start, end }
    }

    pub const fn wraps(&self) -> bool {
        self.start.number() > self.end.number()
    }

    pub fn months(&self) -> BTreeSet<u32> {
        let (start, end) = (self.start.number(), self.end.number());
        if start <= end {
            (start..=end).collect()
        } else {
            (start..=12).chain(1..=end).collect()
        }
    }

    pub const fn contains(&self, month: u32) -> bool {
        let (start, end) = (self.start.number(), self.end.number());
        if start <= end {
            start <= month && month <= end
        } else {
            month >= start || month <= end
        }
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        !self.months().is_disjoint(&other.months())
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.start.label(), self.end.label())
    }
}

/// A selector value where the "all" entry disables the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub const ALL_SENTINELS: [&'static str; 3] = ["Todos", "Todas", "all"];

    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if Self::ALL_SENTINELS.iter().any(|s| s.eq_ignore_ascii_case(value)) => {
                Self::All
            }
            Some(value) => Self::Only(value.to_string()),
        }
    }

    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value.as_str()),
        }
    }

    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Selector state applied to both tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub product: Selection,
    pub variety: Selection,
    pub months: Option<MonthRange>,
}

impl FilterCriteria {
    /// Each part filters on its own; a variety needs no product.
    pub const fn new(product: Selection, variety: Selection, months: Option<MonthRange>) -> Self {
        Self {
            product,
            variety,
            months,
        }
    }

    pub const fn is_unfiltered(&self) -> bool {
        self.product.is_all() && self.variety.is_all() && self.months.is_none()
    }
}
