// Copyright 2021 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::variants::Orientation;

pub mod breakends;
pub mod single;

pub use breakends::PairedBreakend;
pub use single::SingleBreakend;

/// Structural variant shape of a paired breakend.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
pub enum PairedKind {
    #[strum(serialize = "BND")]
    Translocation,
    #[strum(serialize = "INV")]
    Inversion,
    #[strum(serialize = "DUP")]
    Duplication,
    #[strum(serialize = "DEL")]
    Deletion,
    #[strum(serialize = "INS")]
    Insertion,
}

/// A breakend record as classified from its ALT notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantRecord {
    /// Breakend without a resolved partner, e.g. `A.` or `.TA`.
    Single(SingleBreakend),
    /// Breakend joined to a partner locus, e.g. `A[2:500[`.
    Paired(PairedBreakend),
}

impl VariantRecord {
    /// Canonical breakend notation of this record.
    pub fn alt_string(&self) -> String {
        match self {
            VariantRecord::Single(single) => single.alt_string(),
            VariantRecord::Paired(paired) => paired.alt_string(),
        }
    }

    pub fn alt(&self) -> char {
        match self {
            VariantRecord::Single(single) => single.alt(),
            VariantRecord::Paired(paired) => paired.alt(),
        }
    }

    pub fn insert_sequence(&self) -> &str {
        match self {
            VariantRecord::Single(single) => single.insert_sequence(),
            VariantRecord::Paired(paired) => paired.insert_sequence(),
        }
    }

    pub fn start_orientation(&self) -> Orientation {
        match self {
            VariantRecord::Single(single) => single.start_orientation(),
            VariantRecord::Paired(paired) => paired.start_orientation(),
        }
    }

    /// VCF SVTYPE style code: `SGL` for single breakends, otherwise the
    /// code of the paired kind.
    pub fn sv_type(&self) -> &'static str {
        match self {
            VariantRecord::Single(_) => "SGL",
            VariantRecord::Paired(paired) => paired.kind().into(),
        }
    }

    pub fn paired(&self) -> Option<&PairedBreakend> {
        if let VariantRecord::Paired(paired) = self {
            Some(paired)
        } else {
            None
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, VariantRecord::Single(_))
    }

    /// Distance between the breakends; `None` for single breakends and
    /// translocations.
    pub fn length(&self) -> Option<u64> {
        self.paired().and_then(|paired| paired.length())
    }
}

impl fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alt_string())
    }
}
