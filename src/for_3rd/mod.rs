//! Third-party trait implementations.

mod de;
mod ser;

pub use de::DfpSeed;
