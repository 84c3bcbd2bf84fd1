use crate::{Bits, Flag, FlagsIter};
use std::marker::PhantomData;

/// A set of flags from one flag enum `E`, stored as its backing integer.
///
/// Combining a `Mask<E>` with anything other than `E` or `Mask<E>` is a type
/// error, as is shifting one. Every bit pattern of the backing integer is a
/// legal mask value; nothing checks that a bit corresponds to a declared
/// constant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask<E: Flag> {
    bits: E::Bits,
    _flag: PhantomData<E>,
}

impl<E: Flag> Mask<E> {
    /// The mask with no flags set.
    pub const fn empty() -> Self {
        Mask { bits: <E::Bits as Bits>::ZERO, _flag: PhantomData }
    }

    /// The mask of every declared constant.
    pub const fn all() -> Self {
        Mask::from_bits(E::ALL)
    }

    /// Wrap an arbitrary bit pattern.
    ///
    /// This is the one deliberate opening for raw integers: it never appears
    /// by accident in an assignment or an operator, it has to be spelled out.
    pub const fn from_bits(bits: E::Bits) -> Self {
        Mask { bits, _flag: PhantomData }
    }

    /// The stored bit pattern, unchanged.
    pub const fn bits(self) -> E::Bits {
        self.bits
    }

    pub fn is_empty(self) -> bool {
        self.bits.is_zero()
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: impl Into<Self>) -> bool {
        let other = other.into().bits;
        self.bits & other == other
    }

    /// Whether `self` and `other` have any bit in common.
    pub fn intersects(self, other: impl Into<Self>) -> bool {
        !(self.bits & other.into().bits).is_zero()
    }

    pub fn insert(&mut self, other: impl Into<Self>) {
        self.bits = self.bits | other.into().bits;
    }

    pub fn remove(&mut self, other: impl Into<Self>) {
        self.bits = self.bits & !other.into().bits;
    }

    pub fn toggle(&mut self, other: impl Into<Self>) {
        self.bits = self.bits ^ other.into().bits;
    }

    /// The declared constant whose bits equal this mask exactly, if any.
    pub fn single(self) -> Option<E> {
        E::VARIANTS.iter().copied().find(|flag| flag.bits() == self.bits)
    }

    /// Iterate over the declared constants contained in this mask.
    pub fn iter(self) -> FlagsIter<E> {
        FlagsIter::new(self)
    }
}

impl<E: Flag> From<E> for Mask<E> {
    fn from(flag: E) -> Self {
        Mask::from_bits(flag.bits())
    }
}

impl<E: Flag> Default for Mask<E> {
    fn default() -> Self {
        Mask::empty()
    }
}
