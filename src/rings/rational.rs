use std::fmt::{Debug, Formatter};

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AlgebraError;
use crate::field::Field;
use crate::ring::*;
use crate::serialization::SerializableElementRing;

///
/// An implementation of the rational numbers `Q`, based on representing them
/// as a tuple `(numerator, denominator)` of `i128`s in lowest terms.
///
/// Be careful with larger computations, since by nature of the rational numbers,
/// both numerator and denominator can increase dramatically, even when the numbers
/// itself are of moderate size. Groebner basis computations are notorious for this.
/// If the machine integers overflow, the arithmetic panics, in debug and release builds alike.
///
/// # Example
/// ```
/// # use polyideal::assert_el_eq;
/// # use polyideal::ring::*;
/// # use polyideal::field::*;
/// # use polyideal::rings::rational::*;
/// let QQ = RationalField::RING;
/// let one_half = QQ.checked_div(&QQ.one(), &QQ.from_int(2)).unwrap();
/// assert_el_eq!(QQ, QQ.from_fraction(1, 4), QQ.pow(one_half, 2));
/// assert_eq!((1, 4), (QQ.num(&QQ.from_fraction(-3, -12)), QQ.den(&QQ.from_fraction(-3, -12))));
/// ```
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RationalField;

impl RationalField {

    pub const RING: RationalField = RationalField;

    ///
    /// Returns the rational number `num / den`. Panics if `den` is zero.
    ///
    pub fn from_fraction(&self, num: i128, den: i128) -> RationalFieldEl {
        assert!(den != 0);
        RationalFieldEl::reduced(num, den)
    }

    pub fn num(&self, el: &RationalFieldEl) -> i128 {
        el.num
    }

    pub fn den(&self, el: &RationalFieldEl) -> i128 {
        el.den
    }
}

///
/// An element of [`RationalField`]. Always stored in lowest terms, with a positive
/// denominator, so equality of elements is equality of their representations.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RationalFieldEl {
    num: i128,
    den: i128
}

impl Debug for RationalFieldEl {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RationalFieldEl")
            .field("num", &self.num)
            .field("den", &self.den)
            .finish()
    }
}

fn overflow() -> ! {
    panic!("integer overflow in rational arithmetic, numerator or denominator exceeds the range of i128")
}

fn checked_add(a: i128, b: i128) -> i128 {
    a.checked_add(b).unwrap_or_else(|| overflow())
}

fn checked_mul(a: i128, b: i128) -> i128 {
    a.checked_mul(b).unwrap_or_else(|| overflow())
}

fn checked_neg(a: i128) -> i128 {
    a.checked_neg().unwrap_or_else(|| overflow())
}

fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    return a.checked_abs().unwrap_or_else(|| overflow());
}

impl RationalFieldEl {

    fn reduced(num: i128, den: i128) -> Self {
        debug_assert!(den != 0);
        if num == 0 {
            return RationalFieldEl { num: 0, den: 1 };
        }
        let d = gcd(num, den);
        if den < 0 {
            RationalFieldEl { num: checked_neg(num / d), den: checked_neg(den / d) }
        } else {
            RationalFieldEl { num: num / d, den: den / d }
        }
    }
}

impl RingBase for RationalField {

    type Element = RationalFieldEl;

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        if lhs.den == rhs.den {
            *lhs = RationalFieldEl::reduced(checked_add(lhs.num, rhs.num), lhs.den);
        } else {
            let d = gcd(lhs.den, rhs.den);
            let lhs_factor = rhs.den / d;
            let rhs_factor = lhs.den / d;
            *lhs = RationalFieldEl::reduced(
                checked_add(checked_mul(lhs.num, lhs_factor), checked_mul(rhs.num, rhs_factor)),
                checked_mul(lhs.den, lhs_factor)
            );
        }
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        lhs.num = checked_neg(lhs.num);
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        // cross-cancel first, to keep intermediate values small
        let d1 = gcd(lhs.num, rhs.den);
        let d2 = gcd(rhs.num, lhs.den);
        *lhs = RationalFieldEl {
            num: checked_mul(lhs.num / d1, rhs.num / d2),
            den: checked_mul(lhs.den / d2, rhs.den / d1)
        };
        if lhs.num == 0 {
            lhs.den = 1;
        }
    }

    fn from_int(&self, value: i64) -> Self::Element {
        RationalFieldEl { num: value as i128, den: 1 }
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        lhs == rhs
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        value.num == 0
    }

    fn is_one(&self, value: &Self::Element) -> bool {
        value.num == 1 && value.den == 1
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut Formatter<'a>) -> std::fmt::Result {
        if value.den == 1 {
            write!(out, "{}", value.num)
        } else {
            write!(out, "{}/{}", value.num, value.den)
        }
    }
}

impl Field for RationalField {

    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Result<Self::Element, AlgebraError> {
        if self.is_zero(rhs) {
            return Err(AlgebraError::DivisionByZero);
        }
        let rhs_inv = RationalFieldEl { num: rhs.den * rhs.num.signum(), den: rhs.num.checked_abs().unwrap_or_else(|| overflow()) };
        return Ok(self.mul_ref(lhs, &rhs_inv));
    }
}

impl SerializableElementRing for RationalField {

    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        #[derive(Deserialize)]
        struct Fraction {
            num: i128,
            den: i128
        }
        let Fraction { num, den } = Fraction::deserialize(deserializer)?;
        if den == 0 {
            return Err(D::Error::custom("denominator of a rational number must be nonzero"));
        }
        return Ok(RationalFieldEl::reduced(num, den));
    }
}

#[cfg(test)]
fn edge_case_elements() -> impl Iterator<Item = RationalFieldEl> {
    let QQ = RationalField::RING;
    [
        QQ.zero(),
        QQ.one(),
        QQ.neg_one(),
        QQ.from_fraction(1, 2),
        QQ.from_fraction(-7, 3),
        QQ.from_fraction(5, 6),
        QQ.from_int(12)
    ].into_iter()
}

#[test]
fn test_ring_axioms() {
    crate::ring::generic_tests::test_ring_axioms(RationalField::RING, edge_case_elements());
}

#[test]
fn test_field_axioms() {
    crate::field::generic_tests::test_field_axioms(RationalField::RING, edge_case_elements());
}

#[test]
fn test_lowest_terms() {
    let QQ = RationalField::RING;
    let a = QQ.from_fraction(6, -4);
    assert_eq!(-3, QQ.num(&a));
    assert_eq!(2, QQ.den(&a));
    let b = QQ.add(QQ.from_fraction(1, 6), QQ.from_fraction(1, 3));
    assert_el_eq!(QQ, QQ.from_fraction(1, 2), b);
    let c = QQ.add(QQ.from_fraction(1, 2), QQ.from_fraction(-1, 2));
    assert!(QQ.is_zero(&c));
    assert_eq!(1, QQ.den(&c));
}

#[test]
fn test_format() {
    let QQ = RationalField::RING;
    assert_eq!("-3/2", format!("{}", QQ.format(&QQ.from_fraction(3, -2))));
    assert_eq!("4", format!("{}", QQ.format(&QQ.from_fraction(8, 2))));
}

#[test]
fn test_deserialize() {
    let QQ = RationalField::RING;
    let serialized = serde_json::to_string(&QQ.from_fraction(-3, 2)).unwrap();
    assert_eq!(r#"{"num":-3,"den":2}"#, serialized);
    assert_el_eq!(QQ, QQ.from_fraction(-3, 2), QQ.deserialize(&mut serde_json::Deserializer::from_str(&serialized)).unwrap());
    assert_el_eq!(QQ, QQ.from_fraction(1, 2), QQ.deserialize(&mut serde_json::Deserializer::from_str(r#"{"num":2,"den":4}"#)).unwrap());
    assert_el_eq!(QQ, QQ.from_fraction(-1, 2), QQ.deserialize(&mut serde_json::Deserializer::from_str(r#"{"num":2,"den":-4}"#)).unwrap());
    assert!(QQ.deserialize(&mut serde_json::Deserializer::from_str(r#"{"num":1,"den":0}"#)).is_err());
}

#[test]
#[should_panic(expected = "integer overflow in rational arithmetic")]
fn test_mul_overflow() {
    let QQ = RationalField::RING;
    let a = QQ.from_fraction(1, 1 << 70);
    QQ.mul_ref(&a, &a);
}

#[test]
#[should_panic(expected = "integer overflow in rational arithmetic")]
fn test_add_overflow() {
    let QQ = RationalField::RING;
    let a = QQ.from_fraction(1, (1 << 64) + 1);
    let b = QQ.from_fraction(1, (1 << 64) - 1);
    QQ.add(a, b);
}
