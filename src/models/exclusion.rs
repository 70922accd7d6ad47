use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// The fixed set of diseases under review, one workbook sheet each.
///
/// Variant order matches the lexicographic order of the canonical labels,
/// so the derived `Ord` sorts the same way the rendered strings would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Pathogen {
    #[serde(rename = "COVID-19")]
    Covid19,
    #[serde(rename = "Influenza")]
    Influenza,
    #[serde(rename = "RSV")]
    Rsv,
}

impl Pathogen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pathogen::Covid19 => "COVID-19",
            Pathogen::Influenza => "Influenza",
            Pathogen::Rsv => "RSV",
        }
    }
}

impl fmt::Display for Pathogen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized exclusion row: a (report_date, state, pathogen) decision,
/// exploded to a single drop date (or none) per row.
///
/// `geo_value` carries the same abbreviation as `state_abb`; downstream
/// modeling consumers refer to the column by that name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExclusionRow {
    pub report_date: NaiveDate,
    pub state: String,
    pub state_abb: Option<String>,
    pub pathogen: Pathogen,
    pub review_1_decision: Option<String>,
    pub reviewer_2_decision: Option<String>,
    pub final_decision: Option<String>,
    pub reference_date: Option<NaiveDate>,
    pub geo_value: Option<String>,
}

/// A single (state, disease, date) data point to drop from modeling input.
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointExclusion {
    pub reference_date: Option<NaiveDate>,
    pub report_date: NaiveDate,
    pub state: Option<String>,
    pub disease: Pathogen,
}

impl PointExclusion {
    pub const CSV_HEADERS: [&'static str; 4] = ["reference_date", "report_date", "state", "disease"];
}

/// Whether a state is excluded from data ingestion or from modeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ExclusionType {
    Data,
    Model,
}

/// An entire state excluded for one pathogen. `exclusion_type` is absent for
/// final-decision strings that name neither known subtype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateExclusion {
    pub state_abb: Option<String>,
    pub pathogen: Pathogen,
    #[serde(rename = "type")]
    pub exclusion_type: Option<ExclusionType>,
}

impl StateExclusion {
    pub const CSV_HEADERS: [&'static str; 3] = ["state_abb", "pathogen", "type"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathogen_display() {
        assert_eq!(Pathogen::Covid19.to_string(), "COVID-19");
        assert_eq!(Pathogen::Influenza.to_string(), "Influenza");
        assert_eq!(Pathogen::Rsv.to_string(), "RSV");
    }

    #[test]
    fn test_pathogen_order_matches_label_order() {
        let mut labels = [Pathogen::Rsv, Pathogen::Covid19, Pathogen::Influenza];
        labels.sort();
        assert_eq!(
            labels.map(|p| p.as_str()),
            ["COVID-19", "Influenza", "RSV"]
        );
    }
}
