// Copyright 2021 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use bio_types::genome::{self, AbstractLocus};

use crate::variants::types::PairedKind;
use crate::variants::Orientation;

/// Breakend joined to a partner locus.
///
/// The anchor side (`start_orientation`) and the partner side
/// (`end_orientation`) together select one of the four bracket forms of the
/// VCF breakend notation:
///
/// | start | end | ALT |
/// |---|---|---|
/// | + | - | `t[p[` |
/// | + | + | `t]p]` |
/// | - | - | `[p[t` |
/// | - | + | `]p]t` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
pub struct PairedBreakend {
    #[getset(get_copy = "pub")]
    kind: PairedKind,
    #[getset(get_copy = "pub")]
    alt: char,
    #[getset(get = "pub")]
    insert_sequence: String,
    #[getset(get = "pub")]
    other: genome::Locus,
    #[getset(get_copy = "pub")]
    start_orientation: Orientation,
    #[getset(get_copy = "pub")]
    end_orientation: Orientation,
    /// Distance to the partner, `None` for translocations.
    #[getset(get_copy = "pub")]
    length: Option<u64>,
}

impl PairedBreakend {
    pub(crate) fn new(
        kind: PairedKind,
        alt: char,
        insert_sequence: String,
        other: genome::Locus,
        start_orientation: Orientation,
        end_orientation: Orientation,
        length: Option<u64>,
    ) -> Self {
        PairedBreakend {
            kind,
            alt,
            insert_sequence,
            other,
            start_orientation,
            end_orientation,
            length,
        }
    }

    pub fn other_chromosome(&self) -> &str {
        self.other.contig()
    }

    pub fn other_position(&self) -> u64 {
        self.other.pos()
    }

    /// Length with translocations reported as `-1`, as in SVLEN-like output.
    pub fn length_or_sentinel(&self) -> i64 {
        self.length.map_or(-1, |length| length as i64)
    }

    pub fn alt_string(&self) -> String {
        self.alt_string_at(self.other.pos(), self.alt)
    }

    /// Render this breakend pointing at another partner position and with
    /// another anchor base, keeping partner chromosome and orientations.
    pub fn alt_string_at(&self, position: u64, alt: char) -> String {
        let bracket = self.end_orientation.bracket();
        let partner = format!("{}{}:{}{}", bracket, self.other.contig(), position, bracket);
        match self.start_orientation {
            Orientation::Forward => format!("{}{}{}", alt, self.insert_sequence, partner),
            Orientation::Reverse => format!("{}{}{}", partner, self.insert_sequence, alt),
        }
    }
}
