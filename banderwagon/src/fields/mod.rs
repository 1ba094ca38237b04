/// The Bandersnatch base field.
pub mod fq;
pub use self::fq::*;

/// The Banderwagon scalar field.
pub mod fr;
pub use self::fr::*;
