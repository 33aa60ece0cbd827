///
/// This module contains [`zn::Zn`], an implementation of the prime field `Z/pZ`
/// for a prime `p` chosen at runtime.
///
pub mod zn;

///
/// This module contains [`rational::RationalField`], an implementation of the rational
/// numbers, based on machine integers.
///
pub mod rational;

///
/// This module contains the types [`multivariate::Monomial`] and [`multivariate::Variable`],
/// the monomial orders, and [`multivariate::ordered::PolyRing`], an implementation of the
/// polynomial ring `k[X1, ..., Xn]` over a field `k`.
///
pub mod multivariate;
