use binmorph_image::ImageError;

/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MorphologyError {
    /// The operation tag is neither erode nor dilate.
    #[error("Only erode and dilate are supported, not {0}")]
    InvalidOperation(String),

    /// Both kernel dimensions are even, so the kernel has no center row or column.
    #[error("Kernel of size {width}x{height} must have at least one odd dimension")]
    InvalidKernelShape {
        /// Width of the rejected kernel.
        width: usize,
        /// Height of the rejected kernel.
        height: usize,
    },

    /// Error raised by the padding or cropping of the image.
    #[error(transparent)]
    Image(#[from] ImageError),
}
