pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod model;

pub use catalog::{default_data_dir, test_data, FixtureCatalog};
pub use error::{CatalogError, Result};
pub use fixtures::Fixture;
pub use model::{DataModelFamily, Dataset, Deck, FixtureRecord, Schema};
