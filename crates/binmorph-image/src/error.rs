use binmorph_tensor::TensorError;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the backing tensor cannot be built.
    #[error("Failed to create image data")]
    InvalidTensor(#[from] TensorError),

    /// Error when an operation needs at least a height and a width axis.
    #[error("Expected an array with at least 2 axes, got {0}")]
    NotSpatial(usize),

    /// Error when the image size is not valid.
    #[error("Invalid image size ({0}x{1}), expected ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a crop removes more rows or columns than the image has.
    #[error("Cannot trim {trim_width}x{trim_height} from an image of size {width}x{height}")]
    InvalidCrop {
        /// Total columns to remove.
        trim_width: usize,
        /// Total rows to remove.
        trim_height: usize,
        /// Width of the source image.
        width: usize,
        /// Height of the source image.
        height: usize,
    },
}
