use crate::error::AlgebraError;
use crate::ring::*;

///
/// Trait for rings that are fields, i.e. every nonzero element has a multiplicative
/// inverse.
///
/// This is the capability that polynomial arithmetic and Groebner basis computations
/// require of the coefficients. Any type can be plugged in, as long as it implements
/// [`RingBase`] and division by nonzero elements.
///
pub trait Field: RingBase {

    ///
    /// Computes `lhs / rhs`. Fails with [`AlgebraError::DivisionByZero`] if `rhs` is zero.
    ///
    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Result<Self::Element, AlgebraError>;

    fn invert(&self, value: &Self::Element) -> Result<Self::Element, AlgebraError> {
        self.checked_div(&self.one(), value)
    }
}

impl<'b, F: Field> Field for &'b F {

    fn checked_div(&self, lhs: &Self::Element, rhs: &Self::Element) -> Result<Self::Element, AlgebraError> {
        (**self).checked_div(lhs, rhs)
    }
}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Checks that division behaves as expected on the given elements, including the
    /// failure when dividing by zero. The ring axioms are not checked, use
    /// [`crate::ring::generic_tests::test_ring_axioms()`] for that.
    ///
    pub fn test_field_axioms<F: Field, I: Iterator<Item = F::Element>>(field: F, edge_case_elements: I) {
        let elements = edge_case_elements.collect::<Vec<_>>();
        for a in &elements {
            assert_eq!(Err(AlgebraError::DivisionByZero), field.checked_div(a, &field.zero()).map(|_| ()));
            if !field.is_zero(a) {
                let a_inv = field.invert(a).unwrap();
                assert_el_eq!(field, field.one(), field.mul_ref(a, &a_inv));
                for b in &elements {
                    let quo = field.checked_div(b, a).unwrap();
                    assert_el_eq!(field, *b, field.mul_ref(&quo, a));
                }
            }
        }
    }
}
