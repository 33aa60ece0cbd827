use std::fmt::Formatter;

use serde::de::Error;
use serde::{Deserialize, Deserializer};

use crate::error::AlgebraError;
use crate::field::Field;
use crate::ring::*;
use crate::serialization::SerializableElementRing;

///
/// Checks primality of `n` by trial division. Only intended for the moduli of
/// [`Zn`], which are small enough for this to be fast.
///
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    return true;
}

///
/// The prime field `Z/pZ` for a prime `p < 2^63` chosen at runtime.
///
/// Elements are represented by their smallest nonnegative representative as `u64`.
/// Two instances with different moduli compare unequal, and using an element of one
/// in the other is a logic error that cannot be detected on the level of elements.
/// Whole polynomials can however be moved between polynomial rings safely, see
/// [`crate::rings::multivariate::ordered::PolyRing::lift()`].
///
/// # Example
/// ```
/// # use polyideal::assert_el_eq;
/// # use polyideal::ring::*;
/// # use polyideal::field::*;
/// # use polyideal::rings::zn::*;
/// let F7 = Zn::new(7);
/// let three = F7.from_int(3);
/// assert_el_eq!(F7, F7.from_int(5), F7.invert(&three).unwrap());
/// assert!(F7.invert(&F7.zero()).is_err());
/// ```
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Zn {
    modulus: u64
}

impl Zn {

    ///
    /// Creates the field `Z/pZ`. Panics if `p` is not a prime below `2^63`.
    ///
    pub fn new(p: u64) -> Self {
        assert!(p < (1u64 << 63));
        assert!(is_prime(p), "modulus {} is not a prime", p);
        Zn { modulus: p }
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    ///
    /// Computes `(d, s)` with `d = gcd(a, p)` and `s * a = d mod p`.
    ///
    fn eea(&self, a: u64) -> (u64, u64) {
        let (mut r0, mut r1) = (a as i128, self.modulus as i128);
        let (mut s0, mut s1) = (1i128, 0i128);
        while r1 != 0 {
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (s0, s1) = (s1, s0 - q * s1);
        }
        let s = s0.rem_euclid(self.modulus as i128) as u64;
        return (r0 as u64, s);
    }
}

impl RingBase for Zn {

    type Element = u64;

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        debug_assert!(*lhs < self.modulus && rhs < self.modulus);
        *lhs += rhs;
        if *lhs >= self.modulus {
            *lhs -= self.modulus;
        }
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        if *lhs != 0 {
            *lhs = self.modulus - *lhs;
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs = ((*lhs as u128 * rhs as u128) % (self.modulus as u128)) as u64
    }

    fn from_int(&self, value: i64) -> Self::Element {
        (value as i128).rem_euclid(self.modulus as i128) as u64
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        *lhs == *rhs
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        *value == 0
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut Formatter<'a>) -> std::fmt::Result {
        write!(out, "{}", *value)
    }
}

impl Field for Zn {

    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Result<Self::Element, AlgebraError> {
        if *rhs == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        let (d, rhs_inv) = self.eea(*rhs);
        debug_assert_eq!(1, d);
        return Ok(self.mul(*lhs, rhs_inv));
    }
}

impl SerializableElementRing for Zn {

    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        let value = u64::deserialize(deserializer)?;
        if value >= self.modulus {
            return Err(D::Error::custom(format!("{} is not a representative of an element of Z/{}Z", value, self.modulus)));
        }
        return Ok(value);
    }
}

#[cfg(test)]
fn edge_case_elements(ring: &Zn) -> impl Iterator<Item = u64> {
    let p = ring.modulus();
    [0, 1, 2, p / 2, p - 2, p - 1].into_iter()
}

#[test]
fn test_ring_axioms() {
    let ring = Zn::new(17);
    crate::ring::generic_tests::test_ring_axioms(ring, edge_case_elements(&ring));
    let ring = Zn::new(65537);
    crate::ring::generic_tests::test_ring_axioms(ring, edge_case_elements(&ring));
}

#[test]
fn test_field_axioms() {
    let ring = Zn::new(17);
    crate::field::generic_tests::test_field_axioms(ring, edge_case_elements(&ring));
    let ring = Zn::new(2);
    crate::field::generic_tests::test_field_axioms(ring, [0, 1].into_iter());
    let ring = Zn::new(65537);
    crate::field::generic_tests::test_field_axioms(ring, edge_case_elements(&ring));
}

#[test]
fn test_from_int() {
    let ring = Zn::new(7);
    assert_el_eq!(ring, 6, ring.from_int(-1));
    assert_el_eq!(ring, 0, ring.from_int(-14));
    assert_el_eq!(ring, ring.from_int(i64::MIN % 7 + 7), ring.from_int(i64::MIN));
}

#[test]
fn test_moduli_distinguish_rings() {
    assert!(Zn::new(7) == Zn::new(7));
    assert!(Zn::new(7) != Zn::new(11));
}

#[test]
#[should_panic]
fn test_non_prime_modulus() {
    Zn::new(15);
}

#[test]
fn test_is_prime() {
    assert!(!is_prime(0));
    assert!(!is_prime(1));
    assert!(is_prime(2));
    assert!(is_prime(3));
    assert!(!is_prime(4));
    assert!(is_prime(65537));
    assert!(!is_prime(65536));
}

#[test]
fn test_deserialize() {
    let ring = Zn::new(17);
    assert_el_eq!(ring, 16, ring.deserialize(&mut serde_json::Deserializer::from_str("16")).unwrap());
    assert!(ring.deserialize(&mut serde_json::Deserializer::from_str("17")).is_err());
    assert!(ring.deserialize(&mut serde_json::Deserializer::from_str("-1")).is_err());
}
