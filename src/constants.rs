/// Soft filter attached to variants that are discarded as duplicates.
pub const DEDUP_FILTER: &str = "dedup";

pub(crate) const SOFT_FILTER_STORE: &str = "soft filter";
pub(crate) const VARIANT_STORE: &str = "variant";
