use core::fmt;
use verkle_ff::FieldError;

/// This is an error that could occur while decoding points or combining
/// them.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Error {
    /// A field operation or field decoding failed.
    Field(FieldError),
    /// The encoded `x` does not belong to the Banderwagon subgroup.
    NotInSubgroup,
    /// No curve point has the requested `x` coordinate.
    NoYCoordinate,
    /// The coordinates do not satisfy the curve equation.
    PointNotOnCurve,
    /// `msm` was given a different number of points and scalars.
    LengthMismatch {
        /// Number of points.
        points: usize,
        /// Number of scalars.
        scalars: usize,
    },
}

impl From<FieldError> for Error {
    fn from(e: FieldError) -> Error {
        Error::Field(e)
    }
}

impl ark_std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Field(e) => write!(f, "{}", e),
            Error::NotInSubgroup => write!(f, "point is not in the banderwagon subgroup"),
            Error::NoYCoordinate => write!(f, "no curve point has the given x coordinate"),
            Error::PointNotOnCurve => write!(f, "point is not on the curve"),
            Error::LengthMismatch { points, scalars } => write!(
                f,
                "got {} points but {} scalars for multi-scalar multiplication",
                points, scalars
            ),
        }
    }
}
