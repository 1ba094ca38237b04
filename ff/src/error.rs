use core::fmt;

/// This is an error that could occur during field arithmetic or decoding.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FieldError {
    /// An inversion (or a division) was requested for zero.
    NoInverse,
    /// The element is zero or a quadratic non-residue.
    NoSquareRoot,
    /// The encoded integer is not smaller than the modulus.
    NonCanonicalEncoding,
}

impl ark_std::error::Error for FieldError {}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            FieldError::NoInverse => write!(f, "zero has no multiplicative inverse"),
            FieldError::NoSquareRoot => write!(f, "element has no square root"),
            FieldError::NonCanonicalEncoding => {
                write!(f, "encoded integer is not reduced modulo the field modulus")
            },
        }
    }
}
