// Copyright 2021 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::BTreeSet;

use anyhow::Result;

pub mod alternate_path;
pub mod stores;

pub use alternate_path::{AlternatePath, Link};
pub use stores::{
    SoftFilterStore, SoftFilters, VariantAttributes, VariantAttributesStore, VariantStore,
};

/// Variants to discard as duplicates and variants to reinstate although they
/// fail soft filters. Both sets are disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct DedupPair {
    duplicates: BTreeSet<String>,
    rescue: BTreeSet<String>,
}

impl DedupPair {
    /// Decide on duplicates and rescues given all alternate paths of a call
    /// set.
    ///
    /// A path with a single link is a choice between two breakends: the
    /// original is kept if it is precise and the other is not, then if it
    /// passes and the other does not, then if it has the higher QUAL.
    /// Otherwise it becomes a duplicate. A longer path is a cluster of
    /// equivalent breakends: original and mate become duplicates, and if
    /// any member passes, all path members are rescued. Duplicates take
    /// precedence over rescues.
    ///
    /// # Errors
    ///
    /// `Error::UnknownVariantId` if a path or the mate of a collapsed path
    /// references a variant unknown to one of the stores, `Error::EmptyAlternatePath` for a path without links.
    pub fn resolve<'a, F, V, I>(
        filter_store: &F,
        alternate_paths: I,
        variant_store: &V,
    ) -> Result<Self>
    where
        F: SoftFilterStore + ?Sized,
        V: VariantStore + ?Sized,
        I: IntoIterator<Item = &'a AlternatePath>,
    {
        let mut duplicates = BTreeSet::new();
        let mut rescue = BTreeSet::new();

        for alt in alternate_paths {
            let original_passes = filter_store.is_passing(alt.vcf_id())?;
            let path_passes = alt
                .path_vcf_ids()
                .into_iter()
                .map(|vcf_id| filter_store.is_passing(vcf_id))
                .collect::<Result<Vec<bool>>>()?;
            let any_in_alt_path_passes = path_passes.into_iter().any(|passes| passes);

            if alt.size() == 1 {
                let variant = variant_store.select(alt.vcf_id())?;
                let other = variant_store.select(alt.first_link()?.other_vcf_id())?;

                if !keep_original(&variant, &other, original_passes, any_in_alt_path_passes) {
                    debug!(
                        "{} is a duplicate of {}",
                        alt.vcf_id(),
                        alt.first_link()?.other_vcf_id()
                    );
                    duplicates.insert(alt.vcf_id().to_owned());
                }
            } else {
                alt.first_link()?;
                // the mate is collapsed as well and must be a known call
                filter_store.filters(alt.mate_id())?;
                debug!(
                    "{} and mate {} collapse into an alternate path of {} links",
                    alt.vcf_id(),
                    alt.mate_id(),
                    alt.size()
                );
                duplicates.insert(alt.vcf_id().to_owned());
                duplicates.insert(alt.mate_id().to_owned());

                if original_passes || any_in_alt_path_passes {
                    rescue.extend(alt.path_vcf_ids().into_iter().map(|id| id.to_owned()));
                }
            }
        }

        rescue.retain(|vcf_id| !duplicates.contains(vcf_id));

        info!(
            "Found {} duplicate and {} rescued breakends.",
            duplicates.len(),
            rescue.len()
        );

        Ok(DedupPair { duplicates, rescue })
    }

    pub fn is_duplicate(&self, vcf_id: &str) -> bool {
        self.duplicates.contains(vcf_id)
    }

    pub fn is_rescued(&self, vcf_id: &str) -> bool {
        self.rescue.contains(vcf_id)
    }
}

/// Prefer precise over imprecise, then passing over failing, then higher QUAL.
fn keep_original(
    original: &VariantAttributes,
    other: &VariantAttributes,
    original_passes: bool,
    other_passes: bool,
) -> bool {
    if original.imprecise() != other.imprecise() {
        return !original.imprecise();
    }

    if original_passes != other_passes {
        return original_passes;
    }

    original.qual() > other.qual()
}
