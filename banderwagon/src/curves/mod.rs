/// Bandersnatch curve parameters.
pub mod bandersnatch;

/// Generic twisted Edwards points in affine and extended coordinates.
pub mod twisted_edwards;
