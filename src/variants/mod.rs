pub mod classify;
pub mod orientation;
pub mod types;

pub use classify::{classify, classify_all, BreakendRecord};
pub use orientation::Orientation;
pub use types::{PairedBreakend, PairedKind, SingleBreakend, VariantRecord};
