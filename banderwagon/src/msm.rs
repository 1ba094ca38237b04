use crate::{Element, Error, Fr, Result};
use ark_std::Zero;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes `Σ scalars[i]·points[i]` as a plain sum of scalar
/// multiplications.
///
/// Fails with [`Error::LengthMismatch`] when the slices differ in length.
/// The empty sum is the identity.
pub fn msm(points: &[Element], scalars: &[Fr]) -> Result<Element> {
    if points.len() != scalars.len() {
        return Err(Error::LengthMismatch {
            points: points.len(),
            scalars: scalars.len(),
        });
    }

    let _span = tracing::debug_span!("msm", len = points.len()).entered();

    let products = cfg_iter!(points)
        .zip(scalars)
        .filter(|(_, scalar)| !scalar.is_zero())
        .map(|(point, scalar)| point.scalar_mul(scalar));

    #[cfg(feature = "parallel")]
    let result: Element = products.reduce(Element::zero, |a, b| a + b);
    #[cfg(not(feature = "parallel"))]
    let result: Element = products.sum();

    Ok(result)
}
