use super::normalizer::{parse_min_age, set_constraint, token_constraint};
use crate::schemes::domain::{SchemeName, SchemeRecord, SchemeType};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use tracing::warn;

/// Parse the tabular export into records, in file order.
///
/// Missing columns and short rows fall back to field defaults. Rows without a
/// name are skipped since the name is the lookup key.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<SchemeRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<SchemeRow>().enumerate() {
        let row = row?;
        match row.into_record() {
            Some(record) => records.push(record),
            None => warn!(row = index + 1, "skipping scheme row without a name"),
        }
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SchemeRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(rename = "type", default)]
    scheme_type: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    min_age: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    gender: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    states: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    occupations: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    residence: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    minority: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    disabled: Option<String>,
}

impl SchemeRow {
    fn into_record(self) -> Option<SchemeRecord> {
        let name = self.name?;
        let scheme = name.as_str();

        Some(SchemeRecord {
            min_age: parse_min_age(self.min_age.as_deref(), scheme),
            gender: token_constraint(self.gender.as_deref(), scheme),
            states: set_constraint(self.states.as_deref()),
            occupations: set_constraint(self.occupations.as_deref()),
            residence: token_constraint(self.residence.as_deref(), scheme),
            minority: token_constraint(self.minority.as_deref(), scheme),
            disabled: token_constraint(self.disabled.as_deref(), scheme),
            scheme_type: SchemeType::classify(&self.scheme_type),
            description: self.description,
            website: self.website,
            name: SchemeName(name),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
