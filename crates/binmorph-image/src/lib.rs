#![deny(missing_docs)]
//! Image views and sizes for binmorph sample arrays

/// image view representation over a raw tensor.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{ImageSize, ImageView};
