use std::ops;

use binmorph_tensor::Tensor;

use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use binmorph_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

/// A read-only, shape-aware view over a tensor of samples.
///
/// The first axis of the tensor is the image height, the second the width and
/// the third (if any) the depth, i.e. the number of channels. The view borrows
/// the tensor and never copies its data.
///
/// # Examples
///
/// ```
/// use binmorph_image::ImageView;
/// use binmorph_tensor::Tensor3;
///
/// let tensor = Tensor3::<u8>::from_shape_val([20, 10, 3], 0);
/// let view = ImageView::new(&tensor);
///
/// assert_eq!(view.width(), 10);
/// assert_eq!(view.height(), 20);
/// assert_eq!(view.depth(), 3);
/// ```
#[derive(Debug)]
pub struct ImageView<'a, T, const N: usize>(&'a Tensor<T, N>);

impl<T, const N: usize> Clone for ImageView<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for ImageView<'_, T, N> {}

/// helper to deference the inner tensor
impl<T, const N: usize> ops::Deref for ImageView<'_, T, N> {
    type Target = Tensor<T, N>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a, T, const N: usize> From<&'a Tensor<T, N>> for ImageView<'a, T, N> {
    fn from(tensor: &'a Tensor<T, N>) -> Self {
        Self(tensor)
    }
}

impl<'a, T, const N: usize> ImageView<'a, T, N> {
    /// Create a new view over the given tensor.
    pub fn new(tensor: &'a Tensor<T, N>) -> Self {
        Self(tensor)
    }

    /// Get the width of the image in pixels.
    ///
    /// This is the size of the second axis, or 1 if the tensor has a single axis.
    pub fn width(&self) -> usize {
        self.0.shape.get(1).copied().unwrap_or(1)
    }

    /// Get the height of the image in pixels.
    ///
    /// This is the size of the first axis.
    pub fn height(&self) -> usize {
        self.0.shape.first().copied().unwrap_or(0)
    }

    /// Get the depth (number of channels) of the image.
    ///
    /// This is the size of the third axis, or 1 if the tensor has fewer than three axes.
    pub fn depth(&self) -> usize {
        self.0.shape.get(2).copied().unwrap_or(1)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Number of contiguous samples that make up one pixel.
    ///
    /// Equals [`Self::depth`] for tensors of up to three axes.
    pub fn channel_stride(&self) -> usize {
        self.0.shape.iter().skip(2).product()
    }

    /// Get the underlying tensor.
    pub fn raw_view(&self) -> &'a Tensor<T, N> {
        self.0
    }

    /// Check that the tensor has both a height and a width axis.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::NotSpatial`] if the tensor has fewer than two axes.
    pub fn require_spatial(&self) -> Result<(), ImageError> {
        if N < 2 {
            return Err(ImageError::NotSpatial(N));
        }
        Ok(())
    }
}
