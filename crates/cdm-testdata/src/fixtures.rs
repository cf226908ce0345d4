use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::model::DataModelFamily::{self, Imma1, Immt};
use crate::model::Dataset::{self, GdacR0000, IcoadsR3000, IcoadsR3000Nrt};
use crate::model::{Deck, Schema};

/// Every registered fixture, in registration order.
///
/// The discriminant of each variant is its row in the fixture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fixture {
    Test063_714,
    Test069_701,
    Test084_706,
    Test085_705,
    Test096_702,
    Test098_707,
    Test103_794,
    Test125_704,
    Test125_721,
    Test133_730,
    Test143_781,
    Test144_703,
    Test091_201,
    Test077_892,
    Test147_700,
    Test103_792,
    Test114_992,
    TestGccMix,
}

impl Fixture {
    pub const ALL: [Fixture; 18] = [
        Fixture::Test063_714,
        Fixture::Test069_701,
        Fixture::Test084_706,
        Fixture::Test085_705,
        Fixture::Test096_702,
        Fixture::Test098_707,
        Fixture::Test103_794,
        Fixture::Test125_704,
        Fixture::Test125_721,
        Fixture::Test133_730,
        Fixture::Test143_781,
        Fixture::Test144_703,
        Fixture::Test091_201,
        Fixture::Test077_892,
        Fixture::Test147_700,
        Fixture::Test103_792,
        Fixture::Test114_992,
        Fixture::TestGccMix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Fixture::Test063_714 => "test_063_714",
            Fixture::Test069_701 => "test_069_701",
            Fixture::Test084_706 => "test_084_706",
            Fixture::Test085_705 => "test_085_705",
            Fixture::Test096_702 => "test_096_702",
            Fixture::Test098_707 => "test_098_707",
            Fixture::Test103_794 => "test_103_794",
            Fixture::Test125_704 => "test_125_704",
            Fixture::Test125_721 => "test_125_721",
            Fixture::Test133_730 => "test_133_730",
            Fixture::Test143_781 => "test_143_781",
            Fixture::Test144_703 => "test_144_703",
            Fixture::Test091_201 => "test_091_201",
            Fixture::Test077_892 => "test_077_892",
            Fixture::Test147_700 => "test_147_700",
            Fixture::Test103_792 => "test_103_792",
            Fixture::Test114_992 => "test_114_992",
            Fixture::TestGccMix => "test_gcc_mix",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fixture {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fixture::ALL
            .into_iter()
            .find(|fixture| fixture.name() == s)
            .ok_or_else(|| CatalogError::KeyNotFound(s.to_string()))
    }
}

#[derive(Debug)]
pub(crate) struct FixtureSpec {
    pub fixture: Fixture,
    pub filename: &'static str,
    pub schema: Schema,
    pub deck: Deck,
    pub family: DataModelFamily,
    pub dataset: Dataset,
}

const fn spec(
    fixture: Fixture,
    filename: &'static str,
    schema: Schema,
    deck: &'static str,
    family: DataModelFamily,
    dataset: Dataset,
) -> FixtureSpec {
    FixtureSpec {
        fixture,
        filename,
        schema,
        deck: Deck::from_static(deck),
        family,
        dataset,
    }
}

// test_114_992 registers deck 792, not 992; kept as shipped with the sample set.
#[rustfmt::skip]
pub(crate) static FIXTURE_TABLE: [FixtureSpec; 18] = [
    spec(Fixture::Test063_714, "063-714_2010-07-01_subset.imma", Schema::Imma1D714, "714", Imma1, IcoadsR3000),
    spec(Fixture::Test069_701, "069-701_1845-04-01_subset.imma", Schema::Imma1D701, "701", Imma1, IcoadsR3000),
    spec(Fixture::Test084_706, "084-706_1919-03-01_subset.imma", Schema::Imma1D705To707, "706", Imma1, IcoadsR3000),
    spec(Fixture::Test085_705, "085-705_1938-04-01_subset.imma", Schema::Imma1D705To707, "705", Imma1, IcoadsR3000),
    spec(Fixture::Test096_702, "096-702_1873-01-01_subset.imma", Schema::Imma1D702, "702", Imma1, IcoadsR3000),
    spec(Fixture::Test098_707, "098-707_1916-04-01_subset.imma", Schema::Imma1D705To707, "707", Imma1, IcoadsR3000),
    spec(Fixture::Test103_794, "103-794_2021-11-01_subset.imma", Schema::Imma1Nodt, "794", Imma1, IcoadsR3000Nrt),
    spec(Fixture::Test125_704, "125-704_1878-10-01_subset.imma", Schema::Imma1D704, "704", Imma1, IcoadsR3000),
    spec(Fixture::Test125_721, "125-721_1862-06-01_subset.imma", Schema::Imma1D721, "721", Imma1, IcoadsR3000),
    spec(Fixture::Test133_730, "133-730_1776-10-01_subset.imma", Schema::Imma1D730, "730", Imma1, IcoadsR3000),
    spec(Fixture::Test143_781, "143-781_1987-09-01_subset.imma", Schema::Imma1D781, "781", Imma1, IcoadsR3000),
    spec(Fixture::Test144_703, "144-703_1979-09-01_subset.imma", Schema::Imma1, "703", Imma1, IcoadsR3000),
    spec(Fixture::Test091_201, "091-201_1913-11-01_subset.imma", Schema::Imma1, "201", Imma1, IcoadsR3000),
    spec(Fixture::Test077_892, "077-892_1996-02-01_subset.imma", Schema::Imma1, "892", Imma1, IcoadsR3000),
    spec(Fixture::Test147_700, "147-700_2002-08-01_subset.imma", Schema::Imma1, "700", Imma1, IcoadsR3000),
    spec(Fixture::Test103_792, "103-792_2017-02-01_subset.imma", Schema::Imma1Nodt, "792", Imma1, IcoadsR3000Nrt),
    spec(Fixture::Test114_992, "114-992_2016-01-01_subset.imma", Schema::Imma1Nodt, "792", Imma1, IcoadsR3000Nrt),
    spec(Fixture::TestGccMix, "mix_out_20030201.immt", Schema::GccImmt, "???", Immt, GdacR0000),
];
