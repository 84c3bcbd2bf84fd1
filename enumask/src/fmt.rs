use crate::{Bits, Flag, Mask};
use itertools::Itertools;
use std::fmt;

impl<E: Flag> Mask<E> {
    fn format_flags(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }

        let mut rest = self.bits();
        let mut names = Vec::new();
        for (&flag, name) in E::VARIANTS.iter().zip(E::NAMES) {
            if !flag.bits().is_zero() && self.contains(flag) {
                rest = rest & !flag.bits();
                names.push(*name);
            }
        }

        // Bits that no declared constant accounts for are shown raw.
        if names.is_empty() {
            write!(f, "{rest:#b}")
        } else if rest.is_zero() {
            write!(f, "{}", names.iter().format(" | "))
        } else {
            write!(f, "{} | {rest:#b}", names.iter().format(" | "))
        }
    }
}

impl<E: Flag> fmt::Display for Mask<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.format_flags(f)
    }
}

impl<E: Flag> fmt::Debug for Mask<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}
