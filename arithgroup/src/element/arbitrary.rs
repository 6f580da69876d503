//! Random SL(2,Z) elements for property tests, built as words in S, T and T⁻¹.

use crate::element::GroupElement;
use crate::preset::generators::{S, SL2Z, T};

use quickcheck::{Arbitrary, Gen};

#[derive(Debug, Clone)]
pub(crate) struct Word(pub GroupElement);

impl Arbitrary for Word {
    fn arbitrary(g: &mut Gen) -> Self {
        let letters: Vec<u8> = Vec::arbitrary(g);
        let t_inv = T.inverse();

        let element = letters
            .iter()
            .take(24)
            .fold(GroupElement::identity(SL2Z.clone()), |acc, letter| {
                match letter % 3 {
                    0 => &acc * &*S,
                    1 => &acc * &*T,
                    _ => &acc * &t_inv,
                }
            });

        Word(element)
    }
}
