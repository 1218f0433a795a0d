use crate::simulation::domain::{Child, ScholarshipTier, SchoolingLevel};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub const CHILD_CSV_HEADERS: [&str; 11] = [
    "resides_with_guardian",
    "residence_region",
    "schooling_level",
    "school",
    "schooling_region",
    "eats_at_listed_cafeteria",
    "cafeteria_school",
    "scholarship_recipient",
    "scholarship_tier",
    "under_welfare_care",
    "wants_transit_pass",
];

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ChildRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<ChildRow>().collect()
}

/// Raw row; every cell is optional text until converted.
#[derive(Debug, Deserialize)]
pub(crate) struct ChildRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    resides_with_guardian: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    residence_region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    schooling_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    school: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    schooling_region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    eats_at_listed_cafeteria: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    cafeteria_school: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    scholarship_recipient: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    scholarship_tier: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    under_welfare_care: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    wants_transit_pass: Option<String>,
}

type CellError = (&'static str, String);

impl ChildRow {
    pub(crate) fn into_child(self, number: u8) -> Result<Child, CellError> {
        let mut child = Child::blank(number);

        if let Some(value) = flag("resides_with_guardian", self.resides_with_guardian)? {
            child.resides_with_guardian = value;
        }
        child.residence_region = self.residence_region;
        child.schooling_level = self
            .schooling_level
            .map(|raw| parse_level(&raw).ok_or(("schooling_level", raw)))
            .transpose()?;
        child.school = self.school;
        child.schooling_region = self.schooling_region;
        child.eats_at_listed_cafeteria =
            flag("eats_at_listed_cafeteria", self.eats_at_listed_cafeteria)?;
        child.cafeteria_school = self.cafeteria_school;
        child.scholarship_recipient =
            flag("scholarship_recipient", self.scholarship_recipient)?.unwrap_or(false);
        child.scholarship_tier = self
            .scholarship_tier
            .map(|raw| {
                raw.parse::<u8>()
                    .ok()
                    .and_then(|tier| ScholarshipTier::try_from(tier).ok())
                    .ok_or(("scholarship_tier", raw))
            })
            .transpose()?;
        child.under_welfare_care =
            flag("under_welfare_care", self.under_welfare_care)?.unwrap_or(false);
        child.wants_transit_pass =
            flag("wants_transit_pass", self.wants_transit_pass)?.unwrap_or(false);

        Ok(child)
    }
}

fn flag(column: &'static str, raw: Option<String>) -> Result<Option<bool>, CellError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "oui" => Ok(Some(true)),
        "false" | "no" | "n" | "0" | "non" => Ok(Some(false)),
        _ => Err((column, raw)),
    }
}

fn parse_level(raw: &str) -> Option<SchoolingLevel> {
    match raw.to_ascii_lowercase().replace('-', "_").as_str() {
        "secondary" | "college" => Some(SchoolingLevel::Secondary),
        "upper_secondary" | "lycee" => Some(SchoolingLevel::UpperSecondary),
        "other" | "autre" => Some(SchoolingLevel::Other),
        _ => None,
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
