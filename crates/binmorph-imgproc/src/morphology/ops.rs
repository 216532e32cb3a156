use std::{borrow::Cow, fmt, str::FromStr};

use binmorph_image::ImageView;
use binmorph_tensor::{Tensor, Tensor2};
use num_traits::{One, Zero};

use super::MorphologyError;
use crate::{
    crop::crop_border,
    padding::{spatial_padding, Padding2D},
};

/// The binary morphological operation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// A sample is on iff every kernel-selected neighbor is on.
    Erode,
    /// A sample is on iff at least one kernel-selected neighbor is on.
    Dilate,
}

impl FromStr for MorphOp {
    type Err = MorphologyError;

    /// Parse an operation tag, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use binmorph_imgproc::morphology::{MorphOp, MorphologyError};
    ///
    /// assert_eq!("Erode".parse::<MorphOp>(), Ok(MorphOp::Erode));
    /// assert_eq!(
    ///     "open".parse::<MorphOp>(),
    ///     Err(MorphologyError::InvalidOperation("open".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "erode" => Ok(Self::Erode),
            "dilate" => Ok(Self::Dilate),
            _ => Err(MorphologyError::InvalidOperation(s.to_string())),
        }
    }
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Erode => write!(f, "erode"),
            Self::Dilate => write!(f, "dilate"),
        }
    }
}

/// Options for [`transform_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOptions {
    /// Surround the image with zeros before sliding the kernel, so that
    /// boundary samples see a full neighborhood. Defaults to `true`.
    pub apply_padding: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            apply_padding: true,
        }
    }
}

/// Check that a kernel can be used as a structuring element.
///
/// Only kernels whose width and height are both even are rejected. A kernel
/// with a single even dimension is accepted, although its window then extends
/// one sample further towards the bottom or right of the anchor.
///
/// # Errors
///
/// Returns [`MorphologyError::InvalidKernelShape`] if both dimensions are even.
pub fn validate_kernel<K>(kernel: &Tensor2<K>) -> Result<(), MorphologyError> {
    let view = ImageView::new(kernel);
    let (width, height) = (view.width(), view.height());

    if width % 2 == 0 && height % 2 == 0 {
        return Err(MorphologyError::InvalidKernelShape { width, height });
    }

    if width % 2 == 0 || height % 2 == 0 {
        log::debug!("kernel of size {width}x{height} has an even dimension and no single center");
    }

    Ok(())
}

/// Erode or dilate a binary-thresholded array with a structuring element.
///
/// Every sample greater than zero counts as "on". For each output position a
/// kernel-shaped window is laid over the (optionally zero-padded) image and
/// only the window cells where the kernel equals one are kept. Erosion sets
/// the output to one iff all kept samples are on, dilation iff any is on. A
/// kernel without ones therefore erodes everything to one and dilates
/// everything to zero.
///
/// For multi-channel images every channel of a selected pixel takes part in
/// the reduction and the result is written to every channel.
///
/// Without padding, positions where the window would leave the image are
/// not evaluated and stay zero. The output always has the shape of `image`.
///
/// # Arguments
///
/// * `image` - The source array, `[height, width]` or `[height, width, depth]`.
/// * `kernel` - The structuring element, `[height, width]`.
/// * `op` - The operation to apply.
/// * `apply_padding` - Whether to zero-pad the image before sliding the kernel.
///
/// # Errors
///
/// Returns [`MorphologyError::InvalidKernelShape`] if both kernel dimensions
/// are even, or [`MorphologyError::Image`] if `image` has fewer than two axes.
///
/// # Example
///
/// ```rust
/// use binmorph_imgproc::morphology::{transform, MorphOp};
/// use binmorph_tensor::Tensor2;
///
/// let image = Tensor2::<u8>::from_shape_val([3, 3], 1);
/// let kernel = Tensor2::<u8>::from_shape_val([3, 3], 1);
///
/// let eroded = transform(&image, &kernel, MorphOp::Erode, true).unwrap();
/// assert_eq!(eroded.as_slice(), &[0, 0, 0, 0, 1, 0, 0, 0, 0]);
/// ```
pub fn transform<T, K, const N: usize>(
    image: &Tensor<T, N>,
    kernel: &Tensor2<K>,
    op: MorphOp,
    apply_padding: bool,
) -> Result<Tensor<T, N>, MorphologyError>
where
    T: Copy + PartialOrd + Zero + One,
    K: Copy + PartialEq + One,
{
    validate_kernel(kernel)?;
    ImageView::new(image).require_spatial()?;

    let kernel_view = ImageView::new(kernel);
    let (k_width, k_height) = (kernel_view.width(), kernel_view.height());
    let half_w = k_width.saturating_sub(1) / 2;
    let half_h = k_height.saturating_sub(1) / 2;

    // an even kernel side reaches one sample further on the trailing border
    let border = if apply_padding {
        Padding2D {
            top: half_h,
            bottom: k_height.saturating_sub(1) - half_h,
            left: half_w,
            right: k_width.saturating_sub(1) - half_w,
        }
    } else {
        Padding2D::default()
    };

    log::debug!("{op} with {k_width}x{k_height} kernel, padding {border:?}");

    let padded: Cow<'_, Tensor<T, N>> = if apply_padding {
        Cow::Owned(spatial_padding(image, border, T::zero())?)
    } else {
        Cow::Borrowed(image)
    };

    // (row, col) offsets of the kernel cells taking part in the reduction
    let selected: Vec<(usize, usize)> = kernel
        .as_slice()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v == K::one())
        .map(|(i, _)| (i / k_width, i % k_width))
        .collect();

    let view = ImageView::new(&*padded);
    let (width, height) = (view.width(), view.height());
    let pixel_len = view.channel_stride();
    let stride = width * pixel_len;

    // anchors whose window lies fully inside the padded image
    let row_end = (height + half_h + 1).saturating_sub(k_height).min(height);
    let col_end = (width + half_w + 1).saturating_sub(k_width).min(width);

    let src = padded.as_slice();
    let mut dst = Tensor::<T, N>::zeros(padded.shape);
    let dst_data = dst.as_slice_mut();

    for row in half_h..row_end {
        for col in half_w..col_end {
            let (top, left) = (row - half_h, col - half_w);

            let mut samples = selected
                .iter()
                .flat_map(move |&(kr, kc)| {
                    let start = (top + kr) * stride + (left + kc) * pixel_len;
                    &src[start..start + pixel_len]
                })
                .map(|&v| v > T::zero());

            let on = match op {
                MorphOp::Erode => samples.all(|s| s),
                MorphOp::Dilate => samples.any(|s| s),
            };

            if on {
                let start = row * stride + col * pixel_len;
                dst_data[start..start + pixel_len].fill(T::one());
            }
        }
    }

    Ok(crop_border(&dst, border)?)
}

/// Same as [`transform`], taking its settings from [`TransformOptions`].
pub fn transform_with_options<T, K, const N: usize>(
    image: &Tensor<T, N>,
    kernel: &Tensor2<K>,
    op: MorphOp,
    options: TransformOptions,
) -> Result<Tensor<T, N>, MorphologyError>
where
    T: Copy + PartialOrd + Zero + One,
    K: Copy + PartialEq + One,
{
    transform(image, kernel, op, options.apply_padding)
}

/// Same as [`transform`], with the operation given as a case-insensitive tag.
///
/// The tag is checked before the kernel.
///
/// # Errors
///
/// Returns [`MorphologyError::InvalidOperation`] if `op` is neither `"erode"`
/// nor `"dilate"`, plus every error of [`transform`].
///
/// # Example
///
/// ```rust
/// use binmorph_imgproc::morphology::{morph_transform, MorphologyError};
/// use binmorph_tensor::Tensor2;
///
/// let image = Tensor2::<u8>::from_shape_val([3, 3], 1);
/// let kernel = Tensor2::<u8>::from_shape_val([3, 3], 1);
///
/// let dilated = morph_transform(&image, &kernel, "DILATE", true).unwrap();
/// assert_eq!(dilated, image);
///
/// let res = morph_transform(&image, &kernel, "dilatee", true);
/// assert_eq!(res, Err(MorphologyError::InvalidOperation("dilatee".to_string())));
/// ```
pub fn morph_transform<T, K, const N: usize>(
    image: &Tensor<T, N>,
    kernel: &Tensor2<K>,
    op: &str,
    apply_padding: bool,
) -> Result<Tensor<T, N>, MorphologyError>
where
    T: Copy + PartialOrd + Zero + One,
    K: Copy + PartialEq + One,
{
    let op = op.parse::<MorphOp>()?;
    transform(image, kernel, op, apply_padding)
}

/// Erode an array with zero padding.
pub fn erode<T, K, const N: usize>(
    image: &Tensor<T, N>,
    kernel: &Tensor2<K>,
) -> Result<Tensor<T, N>, MorphologyError>
where
    T: Copy + PartialOrd + Zero + One,
    K: Copy + PartialEq + One,
{
    transform(image, kernel, MorphOp::Erode, true)
}

/// Dilate an array with zero padding.
pub fn dilate<T, K, const N: usize>(
    image: &Tensor<T, N>,
    kernel: &Tensor2<K>,
) -> Result<Tensor<T, N>, MorphologyError>
where
    T: Copy + PartialOrd + Zero + One,
    K: Copy + PartialEq + One,
{
    transform(image, kernel, MorphOp::Dilate, true)
}
