//! The Banderwagon prime-order group.
//!
//! Banderwagon is the quotient of the Bandersnatch curve's `2r`-order
//! subgroup by its 2-torsion point `T = (0, -1)`. A point `P` and `P + T`
//! name the same [`Element`], encoded as the 32-byte big-endian `x`
//! coordinate of the representative with the lexicographically largest
//! `y`. Decoding always checks subgroup membership.

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

/// Twisted Edwards curves and the Bandersnatch parameters.
pub mod curves;

/// The Banderwagon group element.
pub mod element;

/// Errors returned by decoding and group operations.
pub mod error;

/// The base field `Fq` and the scalar field `Fr`.
pub mod fields;

/// Multi-scalar multiplication.
pub mod msm;

pub use curves::{
    bandersnatch::{BandersnatchConfig, EdwardsAffine, EdwardsProjective},
    twisted_edwards::{Affine, Projective, TECurveConfig},
};
pub use element::Element;
pub use error::Error;
pub use fields::{Fq, Fr};
pub use msm::msm;

/// A result type specialized to [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
