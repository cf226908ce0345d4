use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::fixtures::{Fixture, FIXTURE_TABLE};
use crate::model::{DataModelFamily, Dataset, FixtureRecord, Schema};

/// Directory holding the sample files, next to this crate's manifest.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Fixed, read-only registry of sample observation files.
#[derive(Debug, Clone)]
pub struct FixtureCatalog {
    base_dir: PathBuf,
    records: Vec<FixtureRecord>,
}

impl FixtureCatalog {
    pub fn new() -> Self {
        Self::with_base_dir(default_data_dir())
    }

    /// Builds the catalog over `base_dir`. No file is opened or checked.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let records = FIXTURE_TABLE
            .iter()
            .map(|row| FixtureRecord {
                name: row.fixture.name(),
                source: base_dir.join(row.filename),
                data_model: row.schema,
                dm: row.family,
                ds: row.dataset,
                deck: row.deck.clone(),
            })
            .collect::<Vec<_>>();

        debug!(
            base_dir = %base_dir.display(),
            fixtures = records.len(),
            "built fixture catalog"
        );

        Self { base_dir, records }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn fixture(&self, fixture: Fixture) -> &FixtureRecord {
        &self.records[fixture.index()]
    }

    pub fn get(&self, name: &str) -> Option<&FixtureRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Keyed lookup; an unregistered name is a [`CatalogError::KeyNotFound`].
    pub fn lookup(&self, name: &str) -> Result<&FixtureRecord> {
        self.get(name).ok_or_else(|| {
            debug!(fixture = name, "fixture lookup missed");
            CatalogError::KeyNotFound(name.to_string())
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FixtureRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.iter().map(|record| record.name)
    }

    pub fn by_family(&self, family: DataModelFamily) -> impl Iterator<Item = &FixtureRecord> {
        self.records.iter().filter(move |record| record.dm == family)
    }

    pub fn by_dataset(&self, dataset: Dataset) -> impl Iterator<Item = &FixtureRecord> {
        self.records.iter().filter(move |record| record.ds == dataset)
    }

    pub fn by_schema(&self, schema: Schema) -> impl Iterator<Item = &FixtureRecord> {
        self.records
            .iter()
            .filter(move |record| record.data_model == schema)
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a FixtureCatalog {
    type Item = &'a FixtureRecord;
    type IntoIter = std::slice::Iter<'a, FixtureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

static TEST_DATA: Lazy<FixtureCatalog> = Lazy::new(FixtureCatalog::new);

/// Shared catalog over the default data directory, built on first use.
pub fn test_data() -> &'static FixtureCatalog {
    &TEST_DATA
}
