// Copyright 2021 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use crate::variants::Orientation;

/// Single breakend, i.e. a breakend whose partner could not be resolved.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, CopyGetters, new,
)]
pub struct SingleBreakend {
    #[getset(get_copy = "pub")]
    alt: char,
    #[getset(get = "pub")]
    insert_sequence: String,
    #[getset(get_copy = "pub")]
    start_orientation: Orientation,
}

impl SingleBreakend {
    pub fn alt_string(&self) -> String {
        self.alt_string_with(self.alt)
    }

    /// Render this breakend with the given anchor base instead of its own.
    pub fn alt_string_with(&self, alt: char) -> String {
        match self.start_orientation {
            Orientation::Forward => format!("{}{}.", alt, self.insert_sequence),
            Orientation::Reverse => format!(".{}{}", self.insert_sequence, alt),
        }
    }
}
