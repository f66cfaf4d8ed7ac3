use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid BND record: ALT {alt} does not follow breakend notation")]
    InvalidBreakendAlt { alt: String },
    #[error("variant {vcf_id} is referenced by an alternate path but missing from the {store} store")]
    UnknownVariantId { vcf_id: String, store: &'static str },
    #[error("alternate path of variant {vcf_id} does not contain any link")]
    EmptyAlternatePath { vcf_id: String },
    #[error("invalid input record {i}: {msg}")]
    InvalidInputRecord { i: usize, msg: String },
}

pub(crate) fn invalid_breakend_alt(alt: &str) -> Error {
    Error::InvalidBreakendAlt {
        alt: alt.to_owned(),
    }
}

pub(crate) fn unknown_variant_id(vcf_id: &str, store: &'static str) -> Error {
    Error::UnknownVariantId {
        vcf_id: vcf_id.to_owned(),
        store,
    }
}

pub(crate) fn invalid_input_record(i: usize, msg: &str) -> Error {
    Error::InvalidInputRecord {
        i,
        msg: msg.to_owned(),
    }
}
