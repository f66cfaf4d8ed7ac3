use std::collections::BTreeSet;
use std::fs::File;

use svdedup::cli;
use svdedup::dedup::{DedupPair, SoftFilterStore};
use svdedup::variants::{classify, Orientation, PairedKind, SingleBreakend, VariantRecord};
use svdedup::Error;

mod common;

use common::{alternate_path, stores, write_tempfile};

#[test]
fn test_single_breakend_reverse() {
    let variant = classify("1", 100, "A", ".AT").unwrap();
    assert_eq!(
        variant,
        VariantRecord::Single(SingleBreakend::new('T', "A".to_owned(), Orientation::Reverse))
    );
    assert_eq!(variant.to_string(), ".AT");
}

#[test]
fn test_translocation() {
    let variant = classify("1", 100, "A", "A]2:500]").unwrap();
    let bnd = variant.paired().unwrap();
    assert_eq!(bnd.kind(), PairedKind::Translocation);
    assert_eq!(bnd.alt(), 'A');
    assert_eq!(bnd.insert_sequence(), "");
    assert_eq!(bnd.other_chromosome(), "2");
    assert_eq!(bnd.other_position(), 500);
    assert_eq!(bnd.start_orientation(), Orientation::Forward);
    assert_eq!(bnd.end_orientation(), Orientation::Forward);
    assert_eq!(bnd.length_or_sentinel(), -1);
}

#[test]
fn test_inversion() {
    let variant = classify("1", 100, "A", "A]1:102]").unwrap();
    assert_eq!(variant.sv_type(), "INV");
    assert_eq!(variant.length(), Some(2));
}

#[test]
fn test_duplication() {
    let variant = classify("1", 100, "A", "]1:200]A").unwrap();
    assert_eq!(variant.sv_type(), "DUP");
    assert_eq!(variant.length(), Some(100));
}

#[test]
fn test_malformed_alt() {
    let err = classify("1", 100, "A", "A<1:200>").unwrap_err();
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::InvalidBreakendAlt {
            alt: "A<1:200>".to_owned()
        })
    );
    assert!(err.to_string().contains("A<1:200>"));
}

#[test]
fn test_single_link_imprecise_is_duplicate() {
    let (filters, attributes) = stores(&[("v1", true, 500.0, true), ("v2", false, 20.0, true)]);
    let paths = vec![alternate_path("v1", "v1m", &["v2"])];

    let dedup = DedupPair::resolve(&filters, &paths, &attributes).unwrap();
    assert!(dedup.is_duplicate("v1"));
    assert!(!dedup.is_duplicate("v2"));
}

#[test]
fn test_multi_link_rescue() {
    let (filters, attributes) = stores(&[
        ("v1", false, 100.0, false),
        ("v2", false, 100.0, false),
        ("v3", false, 100.0, true),
        ("v4", false, 100.0, false),
    ]);
    let paths = vec![alternate_path("v1", "v2", &["v3", "v4"])];

    let dedup = DedupPair::resolve(&filters, &paths, &attributes).unwrap();
    assert!(dedup.is_duplicate("v1"));
    assert!(dedup.is_duplicate("v2"));
    assert!(dedup.is_rescued("v3"));
    assert!(dedup.is_rescued("v4"));
    assert!(!dedup.is_rescued("v1"));
}

#[test]
fn test_apply_dedup() {
    let (mut filters, attributes) = stores(&[
        ("v1", false, 100.0, true),
        ("v2", false, 100.0, false),
        ("v3", false, 100.0, false),
        ("v4", false, 100.0, false),
    ]);
    let paths = vec![alternate_path("v1", "v2", &["v3", "v4"])];

    let dedup = DedupPair::resolve(&filters, &paths, &attributes).unwrap();
    filters.apply_dedup(&dedup).unwrap();

    assert!(!filters.is_passing("v1").unwrap());
    assert!(filters.filters("v2").unwrap().contains("dedup"));
    assert!(filters.is_passing("v3").unwrap());
    assert!(filters.is_passing("v4").unwrap());
}

#[test]
fn test_classify_from_file() {
    let file = write_tempfile(
        "id\tchrom\tpos\tref\talt\n\
         del1\t1\t200\tA\tA[1:300[\n\
         del1m\t1\t300\tT\t]1:200]T\n\
         sgl\t2\t50\tG\tGTTA.\n\
         bad\t2\t50\tG\tG\n",
    );
    let mut out = Vec::new();
    let skipped = cli::classify(File::open(file.path()).unwrap(), &mut out, false).unwrap();
    assert_eq!(skipped, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "id\tsvtype\tlength\torientation\talt\n\
         del1\tDEL\t100\t+\tA[1:300[\n\
         del1m\tDEL\t100\t-\t]1:200]T\n\
         sgl\tSGL\t0\t+\tGTTA.\n"
    );
}

#[test]
fn test_dedup_from_file() {
    let file = write_tempfile(
        "variants:
  - id: v1
    qual: 300.0
    filters: [minQual]
  - id: v2
    qual: 10.0
    filters: [minQual]
  - id: v3
    qual: 100.0
  - id: v4
    qual: 50.0
    filters: [minQual]
  - id: v5
    qual: 50.0
    imprecise: true
  - id: v6
    qual: 20.0
alternate_paths:
  - vcf_id: v1
    mate_id: v2
    path:
      - {link: asm1, vcf_id: v1, other_vcf_id: v3}
      - {link: asm2, vcf_id: v3, other_vcf_id: v4}
  - vcf_id: v5
    mate_id: v5m
    path:
      - {link: asm3, vcf_id: v5, other_vcf_id: v6}
",
    );
    let mut out = Vec::new();
    cli::dedup(File::open(file.path()).unwrap(), &mut out).unwrap();
    let dedup: DedupPair = serde_json::from_slice(&out).unwrap();

    let ids = |ids: &[&str]| -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    };
    assert_eq!(dedup.duplicates(), &ids(&["v1", "v2", "v5"]));
    assert_eq!(dedup.rescue(), &ids(&["v3", "v4"]));
}

#[test]
fn test_dedup_unknown_variant() {
    let file = write_tempfile(
        "variants:
  - id: v1
    qual: 300.0
alternate_paths:
  - vcf_id: v1
    mate_id: v2
    path:
      - {link: asm1, vcf_id: v1, other_vcf_id: v9}
",
    );
    let err = cli::dedup(File::open(file.path()).unwrap(), Vec::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::UnknownVariantId { .. })
    ));
}
