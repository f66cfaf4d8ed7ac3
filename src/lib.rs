//! Classification of structural variant breakends given in VCF breakend
//! notation, and resolution of duplicate calls arising from alternate
//! realignment paths of the same structural event.

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate derive_new;
#[macro_use]
extern crate getset;
#[macro_use]
extern crate strum_macros;

pub mod cli;
pub mod constants;
pub mod dedup;
pub mod errors;
pub mod io;
pub mod variants;

pub use crate::dedup::{AlternatePath, DedupPair, Link};
pub use crate::errors::Error;
pub use crate::variants::{classify, classify_all, BreakendRecord, Orientation, VariantRecord};
