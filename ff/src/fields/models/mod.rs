pub mod fp256;
pub use self::fp256::*;
