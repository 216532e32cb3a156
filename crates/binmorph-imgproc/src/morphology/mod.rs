/// Error types used for morphological operations.
pub mod error;
pub use error::MorphologyError;

/// Structuring element (kernel) construction.
pub mod kernels;
pub use kernels::{kernel_from_shape, KernelShape};

/// Erosion and dilation of binary-thresholded arrays.
pub mod ops;
pub use ops::{
    dilate, erode, morph_transform, transform, transform_with_options, validate_kernel, MorphOp,
    TransformOptions,
};
