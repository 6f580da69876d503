//! Elements of arithmetic subgroups of SL(2,Z): 2×2 integer matrices of determinant 1
//! tagged with the subgroup they are considered to belong to.

pub mod element;
pub mod errors;
pub mod group;
pub mod matrix;
pub mod preset;

pub use element::{Cusp, GroupElement, Point};
pub use errors::ArithGroupError;
pub use group::{ArithmeticSubgroup, Gamma0, Gamma1, GammaN, GroupRef, Parent, Sl2z};
pub use matrix::Matrix2;
