use crate::element::GroupElement;
use crate::group::{GroupRef, Sl2z};
use crate::matrix::Matrix2;

use lazy_static::lazy_static;

use std::sync::Arc;

lazy_static! {
    /// The universal group SL(2,Z). Serialization always reconstructs into this parent.
    pub static ref SL2Z: GroupRef = Arc::new(Sl2z);

    /// S = [[0, -1], [1, 0]], acting as z ↦ -1/z.
    pub static ref S: GroupElement = GroupElement::new_unchecked(SL2Z.clone(), Matrix2::new(0, -1, 1, 0));

    /// T = [[1, 1], [0, 1]], acting as z ↦ z + 1.
    pub static ref T: GroupElement = GroupElement::new_unchecked(SL2Z.clone(), Matrix2::new(1, 1, 0, 1));
}
