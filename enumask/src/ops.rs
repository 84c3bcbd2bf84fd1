use crate::{Flag, Mask};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

// The enum-on-the-left impls live in `flag_impl!`; operator traits cannot be
// implemented for a bare type parameter, so each opted-in enum gets its own.
macro_rules! mask_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<E: Flag> $trait for Mask<E> {
            type Output = Mask<E>;

            fn $method(self, rhs: Self) -> Mask<E> {
                Mask::from_bits(self.bits() $op rhs.bits())
            }
        }

        impl<E: Flag> $trait<E> for Mask<E> {
            type Output = Mask<E>;

            fn $method(self, rhs: E) -> Mask<E> {
                self $op Mask::from(rhs)
            }
        }

        impl<E: Flag> $assign_trait for Mask<E> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<E: Flag> $assign_trait<E> for Mask<E> {
            fn $assign_method(&mut self, rhs: E) {
                *self = *self $op rhs;
            }
        }
    };
}

mask_binop!(BitOr, bitor, BitOrAssign, bitor_assign, |);
mask_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
mask_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<E: Flag> Not for Mask<E> {
    type Output = Mask<E>;

    /// One's complement of the stored bits, undeclared bits included.
    fn not(self) -> Mask<E> {
        Mask::from_bits(!self.bits())
    }
}
