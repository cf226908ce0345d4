use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Schema (data model template) a reader uses to lay out a file's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schema {
    #[serde(rename = "imma1")]
    Imma1,
    #[serde(rename = "imma1_d701")]
    Imma1D701,
    #[serde(rename = "imma1_d702")]
    Imma1D702,
    #[serde(rename = "imma1_d704")]
    Imma1D704,
    #[serde(rename = "imma1_d705-707")]
    Imma1D705To707,
    #[serde(rename = "imma1_d714")]
    Imma1D714,
    #[serde(rename = "imma1_d721")]
    Imma1D721,
    #[serde(rename = "imma1_d730")]
    Imma1D730,
    #[serde(rename = "imma1_d781")]
    Imma1D781,
    #[serde(rename = "imma1_nodt")]
    Imma1Nodt,
    #[serde(rename = "gcc_immt")]
    GccImmt,
}

impl Schema {
    pub const ALL: [Schema; 11] = [
        Schema::Imma1,
        Schema::Imma1D701,
        Schema::Imma1D702,
        Schema::Imma1D704,
        Schema::Imma1D705To707,
        Schema::Imma1D714,
        Schema::Imma1D721,
        Schema::Imma1D730,
        Schema::Imma1D781,
        Schema::Imma1Nodt,
        Schema::GccImmt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Schema::Imma1 => "imma1",
            Schema::Imma1D701 => "imma1_d701",
            Schema::Imma1D702 => "imma1_d702",
            Schema::Imma1D704 => "imma1_d704",
            Schema::Imma1D705To707 => "imma1_d705-707",
            Schema::Imma1D714 => "imma1_d714",
            Schema::Imma1D721 => "imma1_d721",
            Schema::Imma1D730 => "imma1_d730",
            Schema::Imma1D781 => "imma1_d781",
            Schema::Imma1Nodt => "imma1_nodt",
            Schema::GccImmt => "gcc_immt",
        }
    }

    /// Format family the schema belongs to.
    pub fn family(&self) -> DataModelFamily {
        match self {
            Schema::GccImmt => DataModelFamily::Immt,
            _ => DataModelFamily::Imma1,
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Schema {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Schema::ALL
            .into_iter()
            .find(|schema| schema.as_str() == trimmed)
            .ok_or_else(|| CatalogError::unknown("schema", trimmed))
    }
}

impl FromStr for Schema {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Schema::try_from(s)
    }
}

impl PartialEq<&str> for Schema {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Format family (`dm`) of a sample file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataModelFamily {
    Imma1,
    Immt,
}

impl DataModelFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataModelFamily::Imma1 => "imma1",
            DataModelFamily::Immt => "immt",
        }
    }
}

impl fmt::Display for DataModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DataModelFamily {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "imma1" => Ok(DataModelFamily::Imma1),
            "immt" => Ok(DataModelFamily::Immt),
            other => Err(CatalogError::unknown("data model family", other)),
        }
    }
}

impl FromStr for DataModelFamily {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataModelFamily::try_from(s)
    }
}

impl PartialEq<&str> for DataModelFamily {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Dataset release (`ds`) a sample file was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    #[serde(rename = "icoads_r3000")]
    IcoadsR3000,
    #[serde(rename = "icoads_r3000_NRT")]
    IcoadsR3000Nrt,
    #[serde(rename = "gdac_r0000")]
    GdacR0000,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::IcoadsR3000 => "icoads_r3000",
            Dataset::IcoadsR3000Nrt => "icoads_r3000_NRT",
            Dataset::GdacR0000 => "gdac_r0000",
        }
    }

    /// Near-real-time releases carry no delayed-mode quality control.
    pub fn is_near_real_time(&self) -> bool {
        matches!(self, Dataset::IcoadsR3000Nrt)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Dataset {
    type Error = CatalogError;

    // Release tags are case-sensitive: "_NRT" is part of the token.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "icoads_r3000" => Ok(Dataset::IcoadsR3000),
            "icoads_r3000_NRT" => Ok(Dataset::IcoadsR3000Nrt),
            "gdac_r0000" => Ok(Dataset::GdacR0000),
            other => Err(CatalogError::unknown("dataset", other)),
        }
    }
}

impl FromStr for Dataset {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::try_from(s)
    }
}

impl PartialEq<&str> for Dataset {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Deck identifier, kept in its string form. `???` marks an unknown deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Deck(Cow<'static, str>);

impl Deck {
    pub const UNKNOWN: Deck = Deck(Cow::Borrowed("???"));

    pub(crate) const fn from_static(value: &'static str) -> Self {
        Deck(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Deck::UNKNOWN.0
    }

    /// Numeric deck value, `None` for the unknown placeholder.
    pub fn number(&self) -> Option<u16> {
        self.0.parse().ok()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Deck {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed == Deck::UNKNOWN.as_str() {
            return Ok(Deck::UNKNOWN);
        }
        if trimmed.is_empty() || trimmed.len() > 4 || !trimmed.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CatalogError::unknown("deck", trimmed));
        }
        Ok(Deck(Cow::Owned(trimmed.to_string())))
    }
}

impl TryFrom<String> for Deck {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Deck::try_from(value.as_str())
    }
}

impl FromStr for Deck {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Deck::try_from(s)
    }
}

impl From<Deck> for String {
    fn from(deck: Deck) -> Self {
        deck.0.into_owned()
    }
}

impl PartialEq<&str> for Deck {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// One registered sample file and the reader settings it is tested with.
///
/// Besides the five reader settings (`source`, `data_model`, `dm`, `ds`, `deck`)
/// the record carries its own catalog key in `name`, which also appears in the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureRecord {
    pub name: &'static str,
    pub source: PathBuf,
    pub data_model: Schema,
    pub dm: DataModelFamily,
    pub ds: Dataset,
    pub deck: Deck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_tokens_parse_back() {
        for schema in Schema::ALL {
            assert_eq!(Schema::try_from(schema.as_str()), Ok(schema));
        }
        assert_eq!(
            "imma1_d705-707".parse::<Schema>(),
            Ok(Schema::Imma1D705To707)
        );
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let err = "imma2".parse::<Schema>().unwrap_err();
        assert_eq!(
            err,
            CatalogError::UnknownToken {
                kind: "schema",
                value: "imma2".to_string()
            }
        );
    }

    #[test]
    fn schema_family_matches_prefix() {
        assert_eq!(Schema::GccImmt.family(), DataModelFamily::Immt);
        assert_eq!(Schema::Imma1Nodt.family(), DataModelFamily::Imma1);
    }

    #[test]
    fn family_parsing_is_case_sensitive() {
        assert_eq!(" immt ".parse::<DataModelFamily>(), Ok(DataModelFamily::Immt));
        assert_eq!(
            "IMMT".parse::<DataModelFamily>(),
            Err(CatalogError::UnknownToken {
                kind: "data model family",
                value: "IMMT".to_string()
            })
        );
        assert!("imma2".parse::<DataModelFamily>().is_err());
    }

    #[test]
    fn dataset_release_tag_is_case_sensitive() {
        assert_eq!(
            "icoads_r3000_NRT".parse::<Dataset>(),
            Ok(Dataset::IcoadsR3000Nrt)
        );
        assert!("icoads_r3000_nrt".parse::<Dataset>().is_err());
        assert!(Dataset::IcoadsR3000Nrt.is_near_real_time());
        assert!(!Dataset::GdacR0000.is_near_real_time());
    }

    #[test]
    fn deck_placeholder_has_no_number() {
        let deck: Deck = "???".parse().unwrap();
        assert!(deck.is_unknown());
        assert_eq!(deck.number(), None);
        assert_eq!(deck, "???");

        let deck: Deck = " 714 ".parse().unwrap();
        assert_eq!(deck.number(), Some(714));
        assert_eq!(deck.to_string(), "714");
    }

    #[test]
    fn deck_rejects_non_numeric_values() {
        assert!("".parse::<Deck>().is_err());
        assert!("7a4".parse::<Deck>().is_err());
        assert!("12345".parse::<Deck>().is_err());
    }

    #[test]
    fn tokens_serialize_as_literals() {
        assert_eq!(
            serde_json::to_string(&Schema::Imma1D705To707).unwrap(),
            "\"imma1_d705-707\""
        );
        assert_eq!(
            serde_json::to_string(&Dataset::IcoadsR3000Nrt).unwrap(),
            "\"icoads_r3000_NRT\""
        );
        assert_eq!(
            serde_json::to_string(&DataModelFamily::Immt).unwrap(),
            "\"immt\""
        );
        assert_eq!(serde_json::to_string(&Deck::UNKNOWN).unwrap(), "\"???\"");

        let deck: Deck = serde_json::from_str("\"792\"").unwrap();
        assert_eq!(deck.number(), Some(792));
        assert!(serde_json::from_str::<Deck>("\"deck\"").is_err());
    }
}
