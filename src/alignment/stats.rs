use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Error counts of one alignment, or of any merged set of alignments.
///
/// `distance == sub_num + del_num + ins_num` holds for every value built by
/// this crate; merging is component-wise addition, so accumulation order never
/// changes a total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorStats {
    pub ref_num: usize,
    pub sub_num: usize,
    pub del_num: usize,
    pub ins_num: usize,
    pub distance: usize,
}

impl ErrorStats {
    pub const ZERO: Self = Self {
        ref_num: 0,
        sub_num: 0,
        del_num: 0,
        ins_num: 0,
        distance: 0,
    };

    pub fn merge(self, other: Self) -> Self {
        Self {
            ref_num: self.ref_num + other.ref_num,
            sub_num: self.sub_num + other.sub_num,
            del_num: self.del_num + other.del_num,
            ins_num: self.ins_num + other.ins_num,
            distance: self.distance + other.distance,
        }
    }

    /// Reference tokens that were matched exactly.
    pub fn correct(&self) -> usize {
        self.ref_num.saturating_sub(self.sub_num + self.del_num)
    }

    pub fn has_errors(&self) -> bool {
        self.distance > 0
    }
}

impl Add for ErrorStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.merge(rhs)
    }
}

impl AddAssign for ErrorStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.merge(rhs);
    }
}

impl Sum for ErrorStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::merge)
    }
}

impl<'a> Sum<&'a ErrorStats> for ErrorStats {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
