//! # Matrix Module
//!
//! Provides [`Matrix2`], the immutable 2×2 integer matrix every group element wraps.

pub mod convert;
pub mod math;
pub mod render;

pub use convert::IntoMatrix2;
pub use math::Matrix2;
