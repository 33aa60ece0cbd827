use std::fmt::{Debug, Display, Formatter};

///
/// Basic trait for rings, i.e. objects that perform arithmetic on their elements.
///
/// Following the design of this crate, the ring is a value on its own, and its elements
/// are plain data that only get their meaning through the ring. For example, the elements
/// of [`crate::rings::zn::Zn`] are just `u64`s, and the modulus is stored in the ring.
/// Hence, all arithmetic is performed via the ring, as in
/// ```
/// # use polyideal::assert_el_eq;
/// # use polyideal::ring::*;
/// # use polyideal::rings::zn::*;
/// let ring = Zn::new(7);
/// let a = ring.from_int(5);
/// let b = ring.from_int(4);
/// assert_el_eq!(ring, ring.from_int(2), ring.add(a, b));
/// ```
/// The ring is always assumed to be commutative with one.
///
/// Two ring objects should compare equal (via [`PartialEq`]) if and only if their
/// elements can be used interchangeably.
///
pub trait RingBase: PartialEq {

    type Element: Clone;

    fn clone_el(&self, val: &Self::Element) -> Self::Element {
        val.clone()
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn negate_inplace(&self, lhs: &mut Self::Element);
    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element);
    fn from_int(&self, value: i64) -> Self::Element;
    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool;

    ///
    /// Writes a human-readable representation of `value` to the formatter.
    ///
    fn dbg<'a>(&self, value: &Self::Element, out: &mut Formatter<'a>) -> std::fmt::Result;

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.add_assign(lhs, self.clone_el(rhs))
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.sub_assign(lhs, self.clone_el(rhs))
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        self.mul_assign(lhs, self.clone_el(rhs))
    }

    fn zero(&self) -> Self::Element { self.from_int(0) }
    fn one(&self) -> Self::Element { self.from_int(1) }
    fn neg_one(&self) -> Self::Element { self.from_int(-1) }
    fn is_zero(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.zero()) }
    fn is_one(&self, value: &Self::Element) -> bool { self.eq_el(value, &self.one()) }

    fn sub_assign(&self, lhs: &mut Self::Element, mut rhs: Self::Element) {
        self.negate_inplace(&mut rhs);
        self.add_assign(lhs, rhs);
    }

    fn negate(&self, mut value: Self::Element) -> Self::Element {
        self.negate_inplace(&mut value);
        return value;
    }

    fn add_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.add_assign_ref(&mut result, rhs);
        return result;
    }

    fn add(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.add_assign(&mut lhs, rhs);
        return lhs;
    }

    fn sub_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.sub_assign_ref(&mut result, rhs);
        return result;
    }

    fn sub(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.sub_assign(&mut lhs, rhs);
        return lhs;
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        let mut result = self.clone_el(lhs);
        self.mul_assign_ref(&mut result, rhs);
        return result;
    }

    fn mul(&self, mut lhs: Self::Element, rhs: Self::Element) -> Self::Element {
        self.mul_assign(&mut lhs, rhs);
        return lhs;
    }

    ///
    /// Computes `x^e` by square-and-multiply. `x^0` is always one.
    ///
    fn pow(&self, x: Self::Element, e: usize) -> Self::Element {
        let mut result = self.one();
        let mut power = x;
        let mut e = e;
        while e > 0 {
            if e & 1 == 1 {
                self.mul_assign_ref(&mut result, &power);
            }
            e >>= 1;
            if e > 0 {
                power = self.mul_ref(&power, &power);
            }
        }
        return result;
    }

    ///
    /// Returns the sum of all elements yielded by the iterator.
    ///
    fn sum<I>(&self, els: I) -> Self::Element
        where I: IntoIterator<Item = Self::Element>
    {
        els.into_iter().fold(self.zero(), |current, x| self.add(current, x))
    }

    ///
    /// Returns an object that implements [`Display`] and [`Debug`] by printing
    /// the given element, using [`RingBase::dbg()`].
    ///
    fn format<'a>(&'a self, value: &'a Self::Element) -> RingElementDisplayWrapper<'a, Self>
        where Self: Sized
    {
        RingElementDisplayWrapper { ring: self, element: value }
    }
}

///
/// The type of elements of the ring `R`.
///
pub type El<R> = <R as RingBase>::Element;

impl<'b, R: RingBase> RingBase for &'b R {

    type Element = R::Element;

    fn clone_el(&self, val: &Self::Element) -> Self::Element { (**self).clone_el(val) }
    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) { (**self).add_assign(lhs, rhs) }
    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { (**self).add_assign_ref(lhs, rhs) }
    fn sub_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) { (**self).sub_assign(lhs, rhs) }
    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { (**self).sub_assign_ref(lhs, rhs) }
    fn negate_inplace(&self, lhs: &mut Self::Element) { (**self).negate_inplace(lhs) }
    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) { (**self).mul_assign(lhs, rhs) }
    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) { (**self).mul_assign_ref(lhs, rhs) }
    fn from_int(&self, value: i64) -> Self::Element { (**self).from_int(value) }
    fn zero(&self) -> Self::Element { (**self).zero() }
    fn one(&self) -> Self::Element { (**self).one() }
    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool { (**self).eq_el(lhs, rhs) }
    fn is_zero(&self, value: &Self::Element) -> bool { (**self).is_zero(value) }
    fn is_one(&self, value: &Self::Element) -> bool { (**self).is_one(value) }
    fn dbg<'a>(&self, value: &Self::Element, out: &mut Formatter<'a>) -> std::fmt::Result { (**self).dbg(value, out) }
}

///
/// Wrapper around a ring and one of its elements that implements [`Display`] and [`Debug`].
/// Returned by [`RingBase::format()`].
///
pub struct RingElementDisplayWrapper<'a, R: RingBase> {
    ring: &'a R,
    element: &'a R::Element
}

impl<'a, R: RingBase> Display for RingElementDisplayWrapper<'a, R> {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring.dbg(self.element, f)
    }
}

impl<'a, R: RingBase> Debug for RingElementDisplayWrapper<'a, R> {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.ring.dbg(self.element, f)
    }
}

///
/// Asserts that two ring elements are equal, w.r.t. the given ring. On failure,
/// both elements are printed using [`RingBase::dbg()`].
///
#[macro_export]
macro_rules! assert_el_eq {
    ($ring:expr, $lhs:expr, $rhs:expr) => {
        match (&$ring, &$lhs, &$rhs) {
            (ring_val, lhs_val, rhs_val) => {
                assert!(
                    $crate::ring::RingBase::eq_el(ring_val, lhs_val, rhs_val),
                    "Assertion failed: {} != {}",
                    $crate::ring::RingBase::format(ring_val, lhs_val),
                    $crate::ring::RingBase::format(ring_val, rhs_val)
                );
            }
        }
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Checks the ring axioms on all combinations of the given elements. Since this
    /// is cubic in the number of elements, only a moderate amount of elements should
    /// be passed.
    ///
    pub fn test_ring_axioms<R: RingBase, I: Iterator<Item = R::Element>>(ring: R, edge_case_elements: I) {
        let elements = edge_case_elements.collect::<Vec<_>>();
        let zero = ring.zero();
        let one = ring.one();

        // check self-subtraction
        for a in &elements {
            assert_el_eq!(ring, zero, ring.sub_ref(a, a));
        }

        // check identity elements
        for a in &elements {
            assert_el_eq!(ring, *a, ring.add_ref(a, &zero));
            assert_el_eq!(ring, *a, ring.mul_ref(a, &one));
        }

        // check commutativity
        for a in &elements {
            for b in &elements {
                assert_el_eq!(ring, ring.add_ref(a, b), ring.add_ref(b, a));
                assert_el_eq!(ring, ring.mul_ref(a, b), ring.mul_ref(b, a));
            }
        }

        // check associativity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_el_eq!(ring, ring.add_ref(a, &ring.add_ref(b, c)), ring.add_ref(&ring.add_ref(a, b), c));
                    assert_el_eq!(ring, ring.mul_ref(a, &ring.mul_ref(b, c)), ring.mul_ref(&ring.mul_ref(a, b), c));
                }
            }
        }

        // check distributivity
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_el_eq!(ring, ring.mul_ref(a, &ring.add_ref(b, c)), ring.add(ring.mul_ref(a, b), ring.mul_ref(a, c)));
                }
            }
        }

        // check that subtraction inverts addition
        for a in &elements {
            for b in &elements {
                assert_el_eq!(ring, *a, ring.sub(ring.add_ref(a, b), ring.clone_el(b)));
            }
        }
    }
}
