use crate::{Flag, Mask};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// A token in the input named no declared constant of the flag enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMaskError {
    token: String,
}

impl fmt::Display for ParseMaskError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown flag `{}`", self.token)
    }
}

impl std::error::Error for ParseMaskError {}

/// Parses the [`Display`](fmt::Display) form back: constant names joined by
/// `|`, or `0` for the empty mask.
impl<E: Flag> FromStr for Mask<E> {
    type Err = ParseMaskError;

    fn from_str(s: &str) -> Result<Self, ParseMaskError> {
        let src = s.trim();
        if src == "0" {
            return Ok(Mask::empty());
        }

        let mut mask = Mask::empty();
        for token in src.split('|') {
            let token = token.trim();
            let flag = E::VARIANTS
                .iter()
                .zip(E::NAMES)
                .find_map(|(&flag, &name)| (name == token).then_some(flag))
                .ok_or_else(|| ParseMaskError { token: token.to_string() })?;

            trace!("{token} -> {:#b}", flag.bits());
            mask |= flag;
        }

        Ok(mask)
    }
}
