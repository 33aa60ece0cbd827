use std::fmt::{Display, Formatter};

///
/// Errors that can occur when working with monomials, polynomials and
/// Groebner bases.
///
/// All of them indicate that a precondition of the called operation was
/// violated by its inputs; there is nothing transient about them, so retrying
/// the same call will fail again.
///
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum AlgebraError {
    /// A monomial was divided by one that does not divide it, i.e. the
    /// quotient would contain a negative exponent.
    IndivisibleMonomial,
    /// Division by the zero element of a field.
    DivisionByZero,
    /// An S-polynomial was requested where one of the operands is zero.
    ZeroOperand,
    /// Multivariate division against a list of divisors containing zero.
    ZeroDivisor,
    /// Elements of two different coefficient fields were combined.
    FieldMismatch,
    /// The generator at the given index of an ideal basis is zero.
    ZeroGenerator(usize)
}

impl Display for AlgebraError {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgebraError::IndivisibleMonomial => write!(f, "monomial is not divisible by the given monomial"),
            AlgebraError::DivisionByZero => write!(f, "division by zero"),
            AlgebraError::ZeroOperand => write!(f, "cannot compute the S-polynomial of a zero polynomial"),
            AlgebraError::ZeroDivisor => write!(f, "cannot reduce modulo a list of polynomials containing zero"),
            AlgebraError::FieldMismatch => write!(f, "elements belong to different coefficient fields"),
            AlgebraError::ZeroGenerator(i) => write!(f, "generator {} of the ideal is zero", i)
        }
    }
}

impl std::error::Error for AlgebraError {}

#[test]
fn test_display() {
    assert_eq!("division by zero", format!("{}", AlgebraError::DivisionByZero));
    assert_eq!("generator 3 of the ideal is zero", format!("{}", AlgebraError::ZeroGenerator(3)));
    let boxed: Box<dyn std::error::Error> = Box::new(AlgebraError::ZeroOperand);
    assert_eq!("cannot compute the S-polynomial of a zero polynomial", boxed.to_string());
}
