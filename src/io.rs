//! Plain text inputs and outputs of the command line interface.

use std::collections::HashSet;
use std::io;

use anyhow::Result;

use crate::dedup::{
    AlternatePath, DedupPair, SoftFilters, VariantAttributes, VariantAttributesStore,
};
use crate::errors;
use crate::variants::{BreakendRecord, VariantRecord};

/// Read tab separated breakend records with header `id chrom pos ref alt`.
pub fn read_breakend_records<R: io::Read>(reader: R) -> Result<Vec<BreakendRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .from_reader(reader);

    reader
        .deserialize::<BreakendRecord>()
        .enumerate()
        .map(|(i, record)| {
            record.map_err(|e| {
                anyhow::Error::from(errors::invalid_input_record(i + 1, &e.to_string()))
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct ClassifiedRow<'a> {
    id: &'a str,
    svtype: &'static str,
    length: i64,
    orientation: &'static str,
    alt: String,
}

/// Writes classified breakends as tab separated rows
/// `id svtype length orientation alt`, with length `-1` for translocations
/// and `0` for single breakends.
pub struct ClassifiedWriter<W: io::Write> {
    inner: csv::Writer<W>,
}

impl<W: io::Write> ClassifiedWriter<W> {
    pub fn new(writer: W) -> Self {
        ClassifiedWriter {
            inner: csv::WriterBuilder::new()
                .delimiter(b'\t')
                .from_writer(writer),
        }
    }

    pub fn write(&mut self, record: &BreakendRecord, variant: &VariantRecord) -> Result<()> {
        let length = match variant {
            VariantRecord::Single(_) => 0,
            VariantRecord::Paired(paired) => paired.length_or_sentinel(),
        };
        self.inner.serialize(ClassifiedRow {
            id: record.id(),
            svtype: variant.sv_type(),
            length,
            orientation: variant.start_orientation().into(),
            alt: variant.alt_string(),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantEntry {
    id: String,
    #[serde(default)]
    imprecise: bool,
    qual: f64,
    #[serde(default)]
    filters: HashSet<String>,
}

/// Everything needed for resolving duplicates of a call set, as given in YAML:
///
/// ```yaml
/// variants:
///   - id: v1
///     qual: 300.0
///     imprecise: false
///     filters: [minQual]
/// alternate_paths:
///   - vcf_id: v1
///     mate_id: v2
///     path:
///       - link: asm1
///         vcf_id: v1
///         other_vcf_id: v3
/// ```
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct DedupInput {
    #[getset(get = "pub")]
    variants: Vec<VariantEntry>,
    #[serde(default)]
    #[getset(get = "pub")]
    alternate_paths: Vec<AlternatePath>,
}

impl DedupInput {
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Build the lookup stores. Variant ids have to be unique.
    pub fn stores(&self) -> Result<(SoftFilters, VariantAttributesStore)> {
        let mut seen = HashSet::new();
        let mut filters = SoftFilters::default();
        let mut attributes = VariantAttributesStore::default();
        for (i, entry) in self.variants.iter().enumerate() {
            if !seen.insert(entry.id.as_str()) {
                return Err(errors::invalid_input_record(
                    i + 1,
                    &format!("duplicate variant id {}", entry.id),
                )
                .into());
            }
            filters.insert(&entry.id, entry.filters.iter().cloned());
            attributes.insert(
                &entry.id,
                VariantAttributes::new(entry.imprecise, entry.qual),
            );
        }
        Ok((filters, attributes))
    }

    pub fn resolve(&self) -> Result<DedupPair> {
        let (filters, attributes) = self.stores()?;
        DedupPair::resolve(&filters, &self.alternate_paths, &attributes)
    }
}
