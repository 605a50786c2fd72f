//! Validation of canto identifiers.
//!
//! Any integer type and any string can name a canto. Integers are range
//! checked; strings must first parse as an integer.

use std::num::IntErrorKind;

use canti_types::CantoNumber;

use crate::error::{CantiError, Result};

/// Something that may identify a canto of the corpus.
pub trait CantoArg {
    /// Resolve to a validated canto.
    ///
    /// # Errors
    /// - `InvalidArgument` when the value is not an integer.
    /// - `CantoNotFound` when the integer is outside `1..=34`.
    fn to_canto(&self) -> Result<CantoNumber>;
}

impl CantoArg for CantoNumber {
    fn to_canto(&self) -> Result<CantoNumber> {
        Ok(*self)
    }
}

impl CantoArg for i64 {
    fn to_canto(&self) -> Result<CantoNumber> {
        CantoNumber::new(*self).ok_or_else(|| CantiError::canto_not_found(self))
    }
}

macro_rules! canto_arg_via_i64 {
    ($($ty:ty),*) => {
        $(
            impl CantoArg for $ty {
                fn to_canto(&self) -> Result<CantoNumber> {
                    i64::try_from(*self)
                        .ok()
                        .and_then(CantoNumber::new)
                        .ok_or_else(|| CantiError::canto_not_found(self))
                }
            }
        )*
    };
}

canto_arg_via_i64!(i8, i16, i32, u8, u16, u32, u64, usize, isize);

impl CantoArg for str {
    fn to_canto(&self) -> Result<CantoNumber> {
        match self.parse::<i64>() {
            Ok(n) => n.to_canto(),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(CantiError::canto_not_found(self))
                }
                _ => Err(CantiError::invalid_argument(self)),
            },
        }
    }
}

impl CantoArg for String {
    fn to_canto(&self) -> Result<CantoNumber> {
        self.as_str().to_canto()
    }
}

impl<T: CantoArg + ?Sized> CantoArg for &T {
    fn to_canto(&self) -> Result<CantoNumber> {
        (**self).to_canto()
    }
}
