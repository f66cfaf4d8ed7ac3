use std::io::Write;

use svdedup::dedup::{AlternatePath, Link, SoftFilters, VariantAttributes, VariantAttributesStore};
use tempfile::NamedTempFile;

pub fn write_tempfile(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Alternate path visiting the given variants in order.
pub fn alternate_path(vcf_id: &str, mate_id: &str, steps: &[&str]) -> AlternatePath {
    let mut path = Vec::new();
    let mut from = vcf_id;
    for to in steps {
        path.push(Link::new(
            format!("{}-{}", from, to),
            from.to_owned(),
            (*to).to_owned(),
        ));
        from = *to;
    }
    AlternatePath::new(vcf_id.to_owned(), mate_id.to_owned(), path)
}

/// Stores from `(id, imprecise, qual, passing)` entries.
pub fn stores(entries: &[(&str, bool, f64, bool)]) -> (SoftFilters, VariantAttributesStore) {
    let mut filters = SoftFilters::default();
    let mut attributes = VariantAttributesStore::default();
    for (id, imprecise, qual, passing) in entries {
        let active = if *passing {
            vec![]
        } else {
            vec!["minQual".to_owned()]
        };
        filters.insert(id, active);
        attributes.insert(id, VariantAttributes::new(*imprecise, *qual));
    }
    (filters, attributes)
}
