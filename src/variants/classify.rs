// Copyright 2021 Johannes Köster.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use anyhow::Result;
use bio_types::genome::{self, AbstractLocus};
use rayon::prelude::*;
use regex::Regex;

use crate::errors;
use crate::variants::types::{PairedBreakend, PairedKind, SingleBreakend, VariantRecord};
use crate::variants::Orientation;

lazy_static! {
    /// Paired breakend ALT, e.g. `A[2:500[` or `]1:100]TA`. Exactly one of
    /// prefix and suffix carries the anchor base (plus inserted sequence).
    /// The contig may contain colons, the position is the last `:<digits>`.
    static ref PAIRED_BREAKEND: Regex = Regex::new(
        r"^(?P<prefix>[^\[\]]*)(?P<bracket>[\[\]])(?P<contig>[^\[\]]+):(?P<pos>[0-9]+)[\[\]](?P<suffix>[^\[\]]*)$"
    )
    .unwrap();
}

/// A breakend as given by a VCF record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters, new)]
pub struct BreakendRecord {
    #[getset(get = "pub")]
    id: String,
    #[getset(get = "pub")]
    chrom: String,
    #[getset(get_copy = "pub")]
    pos: u64,
    #[serde(rename = "ref")]
    #[getset(get = "pub")]
    ref_allele: String,
    #[getset(get = "pub")]
    alt: String,
}

impl BreakendRecord {
    pub fn classify(&self) -> Result<VariantRecord> {
        classify(&self.chrom, self.pos, &self.ref_allele, &self.alt)
    }
}

/// Classify all given records in parallel. Results are in input order, one per
/// record, so that the caller can decide whether to skip or abort on
/// malformed ALTs.
pub fn classify_all(records: &[BreakendRecord]) -> Vec<Result<VariantRecord>> {
    records.par_iter().map(|record| record.classify()).collect()
}

/// Classify a breakend given its locus, REF allele and ALT in breakend notation.
///
/// # Errors
///
/// `Error::InvalidBreakendAlt` if the ALT is neither a single breakend
/// (`t.` / `.t`) nor a paired breakend (`t[p[`, `t]p]`, `]p]t`, `[p[t`), or
/// if it is too short to hold the REF anchor.
pub fn classify(chrom: &str, pos: u64, ref_allele: &str, alt: &str) -> Result<VariantRecord> {
    let variant = if alt.starts_with('.') {
        VariantRecord::Single(single(ref_allele, alt, Orientation::Reverse)?)
    } else if alt.ends_with('.') {
        VariantRecord::Single(single(ref_allele, alt, Orientation::Forward)?)
    } else {
        VariantRecord::Paired(paired(chrom, pos, ref_allele, alt)?)
    };
    debug!(
        "classified breakend {}:{} {} as {}",
        chrom,
        pos,
        alt,
        variant.sv_type()
    );

    Ok(variant)
}

fn single(ref_allele: &str, alt: &str, orientation: Orientation) -> Result<SingleBreakend> {
    let (anchor, insert_sequence) = match orientation {
        Orientation::Reverse => (
            alt.chars().last(),
            alt.len()
                .checked_sub(1)
                .and_then(|end| alt.get(ref_allele.len()..end)),
        ),
        Orientation::Forward => (
            alt.chars().next(),
            alt.len()
                .checked_sub(ref_allele.len())
                .and_then(|end| alt.get(1..end)),
        ),
    };

    let (alt_base, insert_sequence) =
        checked_anchor(anchor, insert_sequence).ok_or_else(|| errors::invalid_breakend_alt(alt))?;

    Ok(SingleBreakend::new(
        alt_base,
        insert_sequence.to_owned(),
        orientation,
    ))
}

fn paired(chrom: &str, pos: u64, ref_allele: &str, alt: &str) -> Result<PairedBreakend> {
    let invalid = || errors::invalid_breakend_alt(alt);

    let caps = PAIRED_BREAKEND.captures(alt).ok_or_else(invalid)?;
    let prefix = &caps["prefix"];
    let suffix = &caps["suffix"];
    let other_pos: u64 = caps["pos"].parse().map_err(|_| invalid())?;
    let other = genome::Locus::new(caps["contig"].to_owned(), other_pos);
    let end_orientation = Orientation::from_bracket(&caps["bracket"]);

    let (start_orientation, anchor, insert_sequence) = match (prefix.is_empty(), suffix.is_empty())
    {
        (false, true) => (
            Orientation::Forward,
            alt.chars().next(),
            prefix.get(ref_allele.len()..),
        ),
        (true, false) => (
            Orientation::Reverse,
            alt.chars().last(),
            suffix
                .len()
                .checked_sub(ref_allele.len())
                .and_then(|end| suffix.get(..end)),
        ),
        // either no anchor at all or anchors on both sides
        _ => return Err(invalid().into()),
    };
    let (alt_base, insert_sequence) =
        checked_anchor(anchor, insert_sequence).ok_or_else(invalid)?;

    let (kind, length) = junction_kind(chrom, pos, &other, start_orientation, end_orientation);

    Ok(PairedBreakend::new(
        kind,
        alt_base,
        insert_sequence.to_owned(),
        other,
        start_orientation,
        end_orientation,
        length,
    ))
}

fn checked_anchor<'a>(
    anchor: Option<char>,
    insert_sequence: Option<&'a str>,
) -> Option<(char, &'a str)> {
    let is_base = |c: &char| c.is_ascii_alphabetic();
    match (anchor.filter(is_base), insert_sequence) {
        (Some(alt), Some(seq)) if seq.chars().all(|c| is_base(&c)) => Some((alt, seq)),
        _ => None,
    }
}

/// Shape of the junction between `chrom:pos` and `other`, together with the
/// distance between both breakends (`None` across chromosomes).
///
/// Equal orientations make an inversion. Otherwise the breakends form a
/// tandem duplication junction if the anchor points away from the partner
/// (reverse anchor upstream of the partner, or forward anchor downstream of
/// it). Remaining junctions are insertions when adjacent and deletions
/// otherwise.
pub(crate) fn junction_kind(
    chrom: &str,
    pos: u64,
    other: &genome::Locus,
    start_orientation: Orientation,
    end_orientation: Orientation,
) -> (PairedKind, Option<u64>) {
    if other.contig() != chrom {
        return (PairedKind::Translocation, None);
    }

    let other_pos = other.pos();
    let length = pos.abs_diff(other_pos);

    let kind = if start_orientation == end_orientation {
        PairedKind::Inversion
    } else if (pos <= other_pos && start_orientation == Orientation::Reverse)
        || (pos >= other_pos && start_orientation == Orientation::Forward)
    {
        PairedKind::Duplication
    } else if length <= 1 {
        PairedKind::Insertion
    } else {
        PairedKind::Deletion
    };

    (kind, Some(length))
}
