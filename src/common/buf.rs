//! Buffer for holding mantissa digits.

use crate::defs::Digit;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 8;

/// Buffer for holding radix 10000 digits, least significant digit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitBuf {
    inner: SmallVec<[Digit; STATIC_ALLOCATION]>,
}

impl DigitBuf {
    /// New buffer of `sz` zero digits.
    #[inline]
    pub fn new(sz: usize) -> Self {
        DigitBuf {
            inner: SmallVec::from_elem(0, sz),
        }
    }

    #[inline]
    pub fn from_slice(s: &[Digit]) -> Self {
        DigitBuf {
            inner: SmallVec::from_slice(s),
        }
    }

    #[inline]
    pub fn fill(&mut self, d: Digit) {
        self.inner.fill(d);
    }

    #[inline]
    pub fn push(&mut self, d: Digit) {
        self.inner.push(d);
    }
}

impl<I: SliceIndex<[Digit]>> IndexMut<I> for DigitBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Digit]>> Index<I> for DigitBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for DigitBuf {
    type Target = [Digit];

    #[inline]
    fn deref(&self) -> &[Digit] {
        self.inner.deref()
    }
}

impl DerefMut for DigitBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Digit] {
        self.inner.deref_mut()
    }
}
