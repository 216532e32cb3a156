#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image cropping module.
pub mod crop;

/// binary morphology module.
pub mod morphology;

/// image padding module.
pub mod padding;
