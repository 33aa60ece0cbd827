#![allow(non_snake_case)]

//!
//! Symbolic computation with multivariate polynomial ideals over fields.
//!
//! Following the rest of this crate, rings are objects that perform arithmetic on
//! their elements, see [`ring::RingBase`]. The central ring is the polynomial ring
//! [`rings::multivariate::ordered::PolyRing`], whose elements are sorted w.r.t. one of
//! the monomial orders in [`rings::multivariate`]. On top of that, [`algorithms::buchberger`]
//! computes (reduced) Groebner bases.
//!
//! # Example
//! ```
//! # use polyideal::ring::*;
//! # use polyideal::rings::rational::*;
//! # use polyideal::rings::multivariate::*;
//! # use polyideal::rings::multivariate::ordered::*;
//! # use polyideal::algorithms::buchberger::*;
//! let ring = PolyRing::new(RationalField::RING, Lex);
//! let x = ring.indeterminate("x");
//! let y = ring.indeterminate("y");
//! // the ideal (x^2 + y^2 - 1, x - y)
//! let circle = ring.sum([ring.mul_ref(&x, &x), ring.mul_ref(&y, &y), ring.neg_one()]);
//! let line = ring.sub_ref(&x, &y);
//! let gb = groebner_basis(&ring, vec![circle, line]).unwrap();
//! // contains y^2 - 1/2, which only depends on y
//! assert!(gb.iter().any(|f| !ring.appearing_variables(f).contains_key("x")));
//! ```
//!

#[macro_use]
pub mod ring;

///
/// Contains [`error::AlgebraError`], the error type of all fallible operations.
///
pub mod error;

///
/// Contains the trait [`field::Field`] for rings that support division by nonzero
/// elements, which is what polynomial arithmetic requires of the coefficients.
///
pub mod field;

///
/// Contains [`computation::ComputationController`], which is used to observe the
/// progress of long-running algorithms.
///
#[macro_use]
pub mod computation;

///
/// Contains [`serialization::SerializableElementRing`], which allows deserializing
/// ring elements with validation through the ring.
///
pub mod serialization;

///
/// Contains implementations of various rings, most notably multivariate polynomial rings.
///
pub mod rings;

///
/// Contains algorithms for computing with polynomial ideals.
///
pub mod algorithms;
