///
/// Contains [`buchberger::find_basis()`] and related functions, for computing
/// Groebner bases using Buchberger's algorithm.
///
pub mod buchberger;
