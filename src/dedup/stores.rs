// Copyright 2021 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Read-only lookups consulted while resolving duplicates. Both stores must
//! hold an entry for every variant referenced by an alternate path.

use std::collections::{HashMap, HashSet};
use std::iter::FromIterator;

use anyhow::Result;

use crate::constants::{DEDUP_FILTER, SOFT_FILTER_STORE, VARIANT_STORE};
use crate::dedup::DedupPair;
use crate::errors;

/// Active soft filters per variant.
pub trait SoftFilterStore {
    /// Soft filters of the given variant; empty if it passes.
    fn filters(&self, vcf_id: &str) -> Result<&HashSet<String>>;

    fn is_passing(&self, vcf_id: &str) -> Result<bool> {
        Ok(self.filters(vcf_id)?.is_empty())
    }
}

/// Attributes of a variant relevant for choosing between duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters, new)]
#[getset(get_copy = "pub")]
pub struct VariantAttributes {
    imprecise: bool,
    qual: f64,
}

pub trait VariantStore {
    fn select(&self, vcf_id: &str) -> Result<VariantAttributes>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoftFilters {
    filters: HashMap<String, HashSet<String>>,
}

impl SoftFilters {
    pub fn insert<I>(&mut self, vcf_id: &str, filters: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.filters
            .entry(vcf_id.to_owned())
            .or_insert_with(HashSet::new)
            .extend(filters);
    }

    /// Apply a dedup decision: duplicates receive the dedup filter, rescued
    /// variants lose all their filters. Nothing is changed if any of the
    /// variants is unknown.
    pub fn apply_dedup(&mut self, dedup: &DedupPair) -> Result<()> {
        if let Some(vcf_id) = dedup
            .duplicates()
            .iter()
            .chain(dedup.rescue())
            .find(|vcf_id| !self.filters.contains_key(vcf_id.as_str()))
        {
            return Err(errors::unknown_variant_id(vcf_id, SOFT_FILTER_STORE).into());
        }

        for vcf_id in dedup.duplicates() {
            self.filters_mut(vcf_id)?.insert(DEDUP_FILTER.to_owned());
        }
        for vcf_id in dedup.rescue() {
            self.filters_mut(vcf_id)?.clear();
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    fn filters_mut(&mut self, vcf_id: &str) -> Result<&mut HashSet<String>> {
        self.filters
            .get_mut(vcf_id)
            .ok_or_else(|| errors::unknown_variant_id(vcf_id, SOFT_FILTER_STORE).into())
    }
}

impl SoftFilterStore for SoftFilters {
    fn filters(&self, vcf_id: &str) -> Result<&HashSet<String>> {
        self.filters
            .get(vcf_id)
            .ok_or_else(|| errors::unknown_variant_id(vcf_id, SOFT_FILTER_STORE).into())
    }
}

impl FromIterator<(String, HashSet<String>)> for SoftFilters {
    fn from_iter<T: IntoIterator<Item = (String, HashSet<String>)>>(iter: T) -> Self {
        SoftFilters {
            filters: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantAttributesStore {
    attributes: HashMap<String, VariantAttributes>,
}

impl VariantAttributesStore {
    pub fn insert(&mut self, vcf_id: &str, attributes: VariantAttributes) {
        self.attributes.insert(vcf_id.to_owned(), attributes);
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl VariantStore for VariantAttributesStore {
    fn select(&self, vcf_id: &str) -> Result<VariantAttributes> {
        self.attributes
            .get(vcf_id)
            .copied()
            .ok_or_else(|| errors::unknown_variant_id(vcf_id, VARIANT_STORE).into())
    }
}

impl FromIterator<(String, VariantAttributes)> for VariantAttributesStore {
    fn from_iter<T: IntoIterator<Item = (String, VariantAttributes)>>(iter: T) -> Self {
        VariantAttributesStore {
            attributes: iter.into_iter().collect(),
        }
    }
}
