//! Prime fields in Montgomery form over 256-bit moduli.
//!
//! This crate provides the generic field element [`Fp256`], parameterized by
//! a compile-time [`FpConfig`] that carries the modulus and every derived
//! constant (Montgomery `R`, `R^2`, the 2-adic factorization of `M - 1`, ...).
//! Two distinct configurations never mix: an `Fp256<A>` and an `Fp256<B>` are
//! different types and no conversion between them exists.
//!
//! Square roots are computed with one of two strategies selected by
//! [`FpConfig::SQRT_PRECOMP`]: generic Tonelli–Shanks, or a single
//! exponentiation followed by a lookup-table driven dyadic discrete log for
//! moduli with a precomputed table.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![allow(clippy::many_single_char_names)]
#![deny(unsafe_code)]

#[macro_use]
extern crate ark_std;

#[macro_use]
extern crate derivative;

/// Fixed-width unsigned integers and limb arithmetic.
pub mod biginteger;

/// Errors returned by fallible field operations.
pub mod error;

/// Field traits, the `Fp256` model and square-root strategies.
pub mod fields;

pub use ark_std::{One, UniformRand, Zero};
pub use biginteger::BigInteger256;
pub use error::FieldError;
pub use fields::{
    batch_inverse, batch_inversion, BitIteratorBE, BitIteratorLE, Field, Fp256, FpConfig,
    LegendreSymbol, PrimeField, SqrtPrecomputation, SquareRootField,
};

/// A result type specialized to `FieldError`.
pub type Result<T> = core::result::Result<T, FieldError>;

#[cfg(test)]
mod tests;
