// Copyright 2021 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::Not;

/// Side of a breakend from which the reference sequence continues.
///
/// In VCF notation, `Forward` corresponds to `+1` (reference continues to the
/// left of the junction, e.g. `A[2:500[` or a `]` mate bracket) and `Reverse`
/// to `-1`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
pub enum Orientation {
    #[strum(serialize = "+")]
    Forward,
    #[strum(serialize = "-")]
    Reverse,
}

impl Orientation {
    pub fn value(self) -> i8 {
        match self {
            Orientation::Forward => 1,
            Orientation::Reverse => -1,
        }
    }

    /// Orientation of the partner breakend as encoded by the bracket of a
    /// paired breakend ALT.
    pub(crate) fn from_bracket(bracket: &str) -> Self {
        if bracket == "]" {
            Orientation::Forward
        } else {
            Orientation::Reverse
        }
    }

    /// Bracket enclosing the partner locus when the partner has this orientation.
    pub(crate) fn bracket(self) -> char {
        match self {
            Orientation::Forward => ']',
            Orientation::Reverse => '[',
        }
    }
}

impl Not for Orientation {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Orientation::Forward => Orientation::Reverse,
            Orientation::Reverse => Orientation::Forward,
        }
    }
}
