#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `binmorph-tensor` provides the dense sample arrays consumed by the image and
//! morphology crates. A [`Tensor`] owns its data in a contiguous, row-major
//! buffer and carries its shape as a const-generic array, so a 2D grayscale
//! image is a `Tensor<T, 2>` and a multi-channel image is a `Tensor<T, 3>`
//! with shape `[height, width, depth]`.
//!
//! # Quick Start
//!
//! ```rust
//! use binmorph_tensor::Tensor;
//!
//! let data = vec![1u8, 2, 3, 4, 5, 6];
//! let tensor = Tensor::<u8, 2>::from_shape_vec([2, 3], data).unwrap();
//!
//! assert_eq!(tensor.get([0, 0]), Some(&1));
//! assert_eq!(tensor.get([1, 2]), Some(&6));
//! assert_eq!(tensor.get([2, 0]), None);
//! ```

/// Tensor module containing the main tensor implementation and error types.
pub mod tensor;

pub use crate::tensor::{get_strides_from_shape, Tensor, TensorError};

/// Type alias for a 1-dimensional tensor.
pub type Tensor1<T> = Tensor<T, 1>;

/// Type alias for a 2-dimensional tensor.
pub type Tensor2<T> = Tensor<T, 2>;

/// Type alias for a 3-dimensional tensor.
pub type Tensor3<T> = Tensor<T, 3>;
