mod tree;

use quickcheck::{Arbitrary, Gen};

/// Something to do to a tree from the outside.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    Insert(i16),
    Delete(i16),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(i16::arbitrary(g)),
            1 => Op::Delete(i16::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
