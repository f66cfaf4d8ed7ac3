// Copyright 2021 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashSet;

use anyhow::Result;

use crate::errors::Error;

/// A step of an alternate path, joining the breakend `vcf_id` to
/// `other_vcf_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Link {
    #[getset(get = "pub")]
    link: String,
    #[getset(get = "pub")]
    vcf_id: String,
    #[getset(get = "pub")]
    other_vcf_id: String,
}

/// Equivalence group of breakends: a path of links through other breakends
/// that realigns the breakend `vcf_id` (and its mate `mate_id`) onto the
/// same structural event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct AlternatePath {
    #[getset(get = "pub")]
    vcf_id: String,
    #[getset(get = "pub")]
    mate_id: String,
    #[getset(get = "pub")]
    path: Vec<Link>,
}

impl AlternatePath {
    /// Number of links in the path.
    pub fn size(&self) -> usize {
        self.path.len()
    }

    /// Every variant touched by this path, including the original breakend.
    pub fn path_vcf_ids(&self) -> HashSet<&str> {
        let mut ids = HashSet::new();
        ids.insert(self.vcf_id.as_str());
        for link in &self.path {
            ids.insert(link.vcf_id.as_str());
            ids.insert(link.other_vcf_id.as_str());
        }
        ids
    }

    pub(crate) fn first_link(&self) -> Result<&Link> {
        self.path.first().ok_or_else(|| {
            Error::EmptyAlternatePath {
                vcf_id: self.vcf_id.clone(),
            }
            .into()
        })
    }
}
