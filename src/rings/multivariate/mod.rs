use std::borrow::Borrow;
use std::cmp::{max, min, Ordering};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Peekable;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AlgebraError;

///
/// Contains [`ordered::PolyRing`], an implementation of multivariate polynomials
/// using a sparse representation, whose terms are kept sorted w.r.t. a fixed
/// monomial order.
///
pub mod ordered;

pub type MonomialExponent = u32;

///
/// An indeterminate, identified by its name.
///
/// Variables are ordered by their names, and this is the order that all monomial
/// orders refer to: For [`Lex`], the variable with the smallest name is the most
/// significant one, thus `x > y > z`.
///
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable {
    name: Arc<str>
}

impl Variable {

    pub fn new(name: &str) -> Self {
        Variable { name: Arc::from(name) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Variable {

    fn from(value: &str) -> Self {
        Variable::new(value)
    }
}

impl From<String> for Variable {

    fn from(value: String) -> Self {
        Variable { name: Arc::from(value) }
    }
}

impl Deref for Variable {

    type Target = str;

    fn deref(&self) -> &str {
        &self.name
    }
}

impl Borrow<str> for Variable {

    fn borrow(&self) -> &str {
        &self.name
    }
}

impl Debug for Variable {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for Variable {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Serialize for Variable {

    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

impl<'de> Deserialize<'de> for Variable {

    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Variable::from)
    }
}

///
/// A monomial, i.e. a power-product of indeterminates.
///
/// Only the variables that occur with a positive exponent are stored, so two
/// monomials are equal if and only if they have the same exponents, regardless of
/// how many variables the surrounding context has. In particular, the empty monomial
/// is the constant `1`.
///
/// Monomials are values; all arithmetic produces new monomials. They do not carry
/// an order, this is the job of [`MonomialOrder`].
///
/// # Example
/// ```
/// # use polyideal::rings::multivariate::*;
/// let xy = Monomial::new([("x", 1), ("y", 1)]);
/// let x2 = Monomial::new([("x", 2), ("z", 0)]);
/// assert_eq!(Monomial::new([("x", 2), ("y", 1)]), xy.lcm(&x2));
/// assert_eq!(Monomial::new([("y", 1)]), xy.div(&Monomial::variable("x")).unwrap());
/// assert!(x2.div(&xy).is_err());
/// ```
///
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    exponents: BTreeMap<Variable, MonomialExponent>
}

impl Monomial {

    ///
    /// Creates the monomial `prod_i var_i^e_i`. Zero exponents are omitted and
    /// repeated variables are multiplied.
    ///
    pub fn new<V, I>(exponents: I) -> Self
        where V: Into<Variable>,
            I: IntoIterator<Item = (V, MonomialExponent)>
    {
        let mut result = BTreeMap::new();
        for (var, e) in exponents {
            if e > 0 {
                *result.entry(var.into()).or_insert(0) += e;
            }
        }
        Monomial { exponents: result }
    }

    ///
    /// The constant monomial `1`.
    ///
    pub fn one() -> Self {
        Monomial { exponents: BTreeMap::new() }
    }

    pub fn variable<V: Into<Variable>>(var: V) -> Self {
        Self::new([(var, 1)])
    }

    pub fn is_one(&self) -> bool {
        self.exponents.is_empty()
    }

    ///
    /// Returns the total degree, i.e. the sum of all exponents.
    ///
    pub fn deg(&self) -> MonomialExponent {
        self.exponents.values().try_fold(0, |acc: MonomialExponent, e| acc.checked_add(*e)).unwrap_or_else(|| exponent_overflow())
    }

    pub fn degree_of(&self, var: &str) -> MonomialExponent {
        self.exponents.get(var).copied().unwrap_or(0)
    }

    ///
    /// Sets the exponent of `var`. Setting it to zero removes the variable.
    ///
    pub fn set_degree<V: Into<Variable>>(&mut self, var: V, e: MonomialExponent) {
        let var = var.into();
        if e == 0 {
            self.exponents.remove(&var);
        } else {
            self.exponents.insert(var, e);
        }
    }

    pub fn remove_var(&mut self, var: &str) {
        self.exponents.remove(var);
    }

    ///
    /// Returns the number of variables that occur in this monomial.
    ///
    pub fn var_count(&self) -> usize {
        self.exponents.len()
    }

    ///
    /// Iterates over the variables with positive exponent, sorted by name.
    ///
    pub fn iter(&self) -> btree_map::Iter<'_, Variable, MonomialExponent> {
        self.exponents.iter()
    }

    ///
    /// Returns whether `self` divides `rhs`.
    ///
    pub fn divides(&self, rhs: &Self) -> bool {
        self.exponents.iter().all(|(var, e)| *e <= rhs.degree_of(var))
    }

    ///
    /// Returns whether `self` is divisible by `rhs`, i.e. every exponent of `rhs`
    /// is at most the corresponding exponent of `self`.
    ///
    pub fn is_divisible_by(&self, rhs: &Self) -> bool {
        rhs.divides(self)
    }

    ///
    /// Returns whether no variable occurs in both monomials, which is equivalent
    /// to `lcm(self, rhs) = self * rhs`.
    ///
    pub fn is_coprime(&self, rhs: &Self) -> bool {
        self.exponents.keys().all(|var| !rhs.exponents.contains_key(var))
    }

    ///
    /// Computes the product of two monomials.
    ///
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut result = self.clone();
        result.mul_assign(rhs);
        return result;
    }

    ///
    /// Panics if an exponent exceeds [`MonomialExponent::MAX`].
    ///
    pub fn mul_assign(&mut self, rhs: &Self) {
        for (var, e) in &rhs.exponents {
            let entry = self.exponents.entry(var.clone()).or_insert(0);
            *entry = entry.checked_add(*e).unwrap_or_else(|| exponent_overflow());
        }
    }

    ///
    /// Computes the quotient of two monomials. Fails with [`AlgebraError::IndivisibleMonomial`]
    /// if the quotient is not a monomial, i.e. contains indeterminates raised to negative powers.
    ///
    pub fn div(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        if !rhs.divides(self) {
            return Err(AlgebraError::IndivisibleMonomial);
        }
        let mut result = self.clone();
        for (var, e) in &rhs.exponents {
            result.set_degree(var.clone(), self.degree_of(var) - *e);
        }
        return Ok(result);
    }

    ///
    /// Computes the lcm of two monomials, i.e. the exponent-wise maximum.
    ///
    pub fn lcm(&self, rhs: &Self) -> Self {
        let mut result = self.clone();
        for (var, e) in &rhs.exponents {
            let entry = result.exponents.entry(var.clone()).or_insert(0);
            *entry = max(*entry, *e);
        }
        return result;
    }

    ///
    /// Computes the gcd of two monomials, i.e. the exponent-wise minimum.
    ///
    pub fn gcd(&self, rhs: &Self) -> Self {
        Monomial::new(self.exponents.iter().map(|(var, e)| (var.clone(), min(*e, rhs.degree_of(var)))))
    }

    ///
    /// Computes `self^k`, by multiplying every exponent with `k`. Panics if an exponent
    /// exceeds [`MonomialExponent::MAX`].
    ///
    pub fn pow(&self, k: MonomialExponent) -> Self {
        Monomial::new(self.exponents.iter().map(|(var, e)| (var.clone(), e.checked_mul(k).unwrap_or_else(|| exponent_overflow()))))
    }
}

fn exponent_overflow() -> ! {
    panic!("exponent overflow, monomial degrees are limited to {}", MonomialExponent::MAX)
}

impl<'a> IntoIterator for &'a Monomial {

    type Item = (&'a Variable, &'a MonomialExponent);
    type IntoIter = btree_map::Iter<'a, Variable, MonomialExponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.exponents.iter()
    }
}

impl Display for Monomial {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.exponents.is_empty() {
            return write!(f, "1");
        }
        for (i, (var, e)) in self.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            write!(f, "{}", var)?;
            if *e > 1 {
                write!(f, "^{}", e)?;
            }
        }
        return Ok(());
    }
}

impl Debug for Monomial {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Serialize for Monomial {

    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.exponents.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Monomial {

    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let exponents = BTreeMap::<Variable, MonomialExponent>::deserialize(deserializer)?;
        Ok(Monomial::new(exponents))
    }
}

///
/// Walks through the exponents of two monomials, in the order of the given iterators
/// over their variables, and returns the two exponents at the first variable where they
/// differ. Returns `None` if the monomials are equal.
///
fn first_difference<'a, I>(mut lhs: Peekable<I>, mut rhs: Peekable<I>, var_order: Ordering) -> Option<(MonomialExponent, MonomialExponent)>
    where I: Iterator<Item = (&'a Variable, &'a MonomialExponent)>
{
    loop {
        match (lhs.peek(), rhs.peek()) {
            (None, None) => return None,
            (Some((_, l_e)), None) => return Some((**l_e, 0)),
            (None, Some((_, r_e))) => return Some((0, **r_e)),
            (Some((l_var, l_e)), Some((r_var, r_e))) => {
                // stored exponents are always positive, so a variable present in only one
                // of the monomials is already a difference
                match l_var.cmp(r_var) {
                    Ordering::Equal if l_e == r_e => {},
                    Ordering::Equal => return Some((**l_e, **r_e)),
                    ord if ord == var_order => return Some((**l_e, 0)),
                    _ => return Some((0, **r_e))
                }
            }
        }
        lhs.next();
        rhs.next();
    }
}

fn first_difference_forward(lhs: &Monomial, rhs: &Monomial) -> Option<(MonomialExponent, MonomialExponent)> {
    first_difference(lhs.iter().peekable(), rhs.iter().peekable(), Ordering::Less)
}

fn first_difference_backward(lhs: &Monomial, rhs: &Monomial) -> Option<(MonomialExponent, MonomialExponent)> {
    first_difference(lhs.iter().rev().peekable(), rhs.iter().rev().peekable(), Ordering::Greater)
}

///
/// Trait for orders on monomials, that is total orders on all monomials subject to
/// the constraint
///  - `mp < np` whenever `m < n`
///
/// for all monomials `m, n, p`.
///
/// Monomial orders are particularly important in the context of Groebner bases
/// (see e.g. [`crate::algorithms::buchberger::find_basis()`]), which however need
/// the order to additionally be a well-order. This is indicated by [`AdmissibleOrder`].
///
/// Orders are stateless strategies, and all implementations in this crate are
/// zero-sized types. Hence they are usually passed by value.
///
pub trait MonomialOrder: Clone + Copy + Debug + Default + 'static {

    ///
    /// Returns whether this monomial order is graded or degree-compatible.
    ///
    /// A degree-compatible monomial order is one where `m < m'` for all
    /// `m, m'` with `deg(m) < deg(m')`.
    ///
    fn is_graded(&self) -> bool;

    ///
    /// Compares to monomials according to this monomial order.
    ///
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering;

    ///
    /// Returns whether `lhs` is strictly greater than `rhs`.
    ///
    fn greater(&self, lhs: &Monomial, rhs: &Monomial) -> bool {
        self.compare(lhs, rhs) == Ordering::Greater
    }
}

///
/// Marker trait for monomial orders that are well-orders, i.e. `1` is the smallest
/// monomial. Exactly for those, every strictly decreasing sequence of monomials is
/// finite, which is what makes multivariate division and Buchberger's algorithm terminate.
///
pub trait AdmissibleOrder: MonomialOrder {}

///
/// Standard lexicographic order of monomials.
///
/// To compare two monomials lexicographically, compare the exponents of one
/// indeterminate after the other, in increasing order of their names, and return
/// the first comparison result that is not "equal".
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Lex;

impl MonomialOrder for Lex {

    fn is_graded(&self) -> bool {
        false
    }

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        match first_difference_forward(lhs, rhs) {
            Some((l, r)) => l.cmp(&r),
            None => Ordering::Equal
        }
    }
}

impl AdmissibleOrder for Lex {}

///
/// Lexicographic order w.r.t. the reversed order of variables, i.e. the exponents
/// are compared starting from the indeterminate with the largest name.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InvLex;

impl MonomialOrder for InvLex {

    fn is_graded(&self) -> bool {
        false
    }

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        match first_difference_backward(lhs, rhs) {
            Some((l, r)) => l.cmp(&r),
            None => Ordering::Equal
        }
    }
}

impl AdmissibleOrder for InvLex {}

///
/// Graded lexicographic order.
///
/// Monomials of larger degree are larger, and monomials of the same degree
/// are compared w.r.t. [`Lex`].
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DegLex;

impl MonomialOrder for DegLex {

    fn is_graded(&self) -> bool {
        true
    }

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        lhs.deg().cmp(&rhs.deg()).then_with(|| Lex.compare(lhs, rhs))
    }
}

impl AdmissibleOrder for DegLex {}

///
/// The reverse of [`InvLex`]: starting from the indeterminate with the largest
/// name, the first differing exponent decides, and the monomial with the *smaller*
/// exponent is the larger one.
///
/// This is a total order that is compatible with multiplication, but it is not a
/// well-order (we have `1 > x`), thus it is not an [`AdmissibleOrder`]. It is the
/// tie-break of [`DegRevLex`].
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevInvLex;

impl MonomialOrder for RevInvLex {

    fn is_graded(&self) -> bool {
        false
    }

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        InvLex.compare(rhs, lhs)
    }
}

///
/// Graded reverse lexicographic order.
///
/// It is defined by first comparing the degree of monomials, and
/// in case of equality, reverse the result of a lexicographic comparison,
/// using reversed variable order (see [`RevInvLex`]).
///
/// # Example
///
/// The smallest example where this differs from the graded lexicographic order
/// is as follows.
/// ```
/// # use polyideal::rings::multivariate::*;
/// let a = Monomial::new([("x", 1), ("z", 1)]);
/// let b = Monomial::new([("y", 2)]);
/// assert_eq!(std::cmp::Ordering::Less, DegRevLex.compare(&a, &b));
/// assert_eq!(std::cmp::Ordering::Greater, DegLex.compare(&a, &b));
/// ```
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DegRevLex;

impl MonomialOrder for DegRevLex {

    fn is_graded(&self) -> bool {
        true
    }

    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        lhs.deg().cmp(&rhs.deg()).then_with(|| RevInvLex.compare(lhs, rhs))
    }
}

impl AdmissibleOrder for DegRevLex {}

#[cfg(any(test, feature = "generic_tests"))]
pub mod generic_tests {

    use super::*;

    ///
    /// Checks that `order` is a strict total order on the given monomials that is
    /// compatible with multiplication by any of the given monomials.
    ///
    pub fn test_monomial_order_axioms<O: MonomialOrder>(order: O, monomials: &[Monomial]) {
        for a in monomials {
            assert!(!order.greater(a, a), "{:?} is not irreflexive at {}", order, a);
            assert_eq!(Ordering::Equal, order.compare(a, a));
        }
        for a in monomials {
            for b in monomials {
                if a != b {
                    assert!(order.greater(a, b) != order.greater(b, a), "{:?} violates trichotomy at {}, {}", order, a, b);
                } else {
                    assert_eq!(Ordering::Equal, order.compare(a, b));
                }
                assert_eq!(order.compare(a, b), order.compare(b, a).reverse());
            }
        }
        for a in monomials {
            for b in monomials {
                for c in monomials {
                    if order.greater(a, b) && order.greater(b, c) {
                        assert!(order.greater(a, c), "{:?} is not transitive at {}, {}, {}", order, a, b, c);
                    }
                    if order.greater(a, b) {
                        assert!(order.greater(&a.mul(c), &b.mul(c)), "{:?} is not multiplicative at {}, {}, {}", order, a, b, c);
                    }
                }
            }
        }
    }

    ///
    /// Returns `count` pseudo-random monomials in the variables `x, y, z, w`, with exponents
    /// at most `max_exponent`.
    ///
    pub fn random_monomials(seed: u128, count: usize, max_exponent: MonomialExponent) -> Vec<Monomial> {
        let mut rng = oorandom::Rand64::new(seed);
        (0..count).map(|_| Monomial::new(
            ["x", "y", "z", "w"].into_iter().map(|var| (var, rng.rand_range(0..(max_exponent as u64 + 1)) as MonomialExponent))
        )).collect()
    }
}

#[cfg(test)]
fn m(exponents: &[(&str, MonomialExponent)]) -> Monomial {
    Monomial::new(exponents.iter().copied())
}

#[cfg(test)]
fn all_monomials_up_to_degree_two() -> Vec<Monomial> {
    vec![
        m(&[]),
        m(&[("z", 1)]),
        m(&[("z", 2)]),
        m(&[("y", 1)]),
        m(&[("y", 1), ("z", 1)]),
        m(&[("y", 2)]),
        m(&[("x", 1)]),
        m(&[("x", 1), ("z", 1)]),
        m(&[("x", 1), ("y", 1)]),
        m(&[("x", 2)])
    ]
}

#[test]
fn test_monomial_arithmetic() {
    let a = m(&[("x", 2), ("y", 1)]);
    let b = m(&[("y", 3), ("z", 1)]);
    assert_eq!(m(&[("x", 2), ("y", 4), ("z", 1)]), a.mul(&b));
    assert_eq!(a.mul(&b), b.mul(&a));
    assert_eq!(a, a.mul(&b).div(&b).unwrap());
    assert_eq!(Err(AlgebraError::IndivisibleMonomial), a.div(&b));
    assert_eq!(Monomial::one(), a.div(&a).unwrap());
    assert_eq!(m(&[("x", 2), ("y", 3), ("z", 1)]), a.lcm(&b));
    assert_eq!(m(&[("y", 1)]), a.gcd(&b));
    assert_eq!(m(&[("x", 6), ("y", 3)]), a.pow(3));
    assert_eq!(Monomial::one(), a.pow(0));
    assert_eq!(3, a.deg());
    assert_eq!(0, Monomial::one().deg());
    assert!(a.is_divisible_by(&m(&[("x", 1)])));
    assert!(a.is_divisible_by(&Monomial::one()));
    assert!(a.is_divisible_by(&a));
    assert!(!a.is_divisible_by(&b));
    assert!(!a.is_coprime(&b));
    assert!(a.is_coprime(&m(&[("z", 4)])));
}

#[test]
fn test_monomial_canonical_form() {
    let a = Monomial::new([("x", 0), ("y", 2), ("x", 0)]);
    assert_eq!(1, a.var_count());
    assert_eq!(m(&[("y", 2)]), a);
    assert_eq!(Monomial::new([("x", 2)]), Monomial::new([("x", 1), ("x", 1)]));

    let mut b = m(&[("x", 1), ("y", 2)]);
    b.set_degree("x", 0);
    assert_eq!(m(&[("y", 2)]), b);
    b.set_degree("z", 3);
    assert_eq!(3, b.degree_of("z"));
    b.remove_var("y");
    assert_eq!(m(&[("z", 3)]), b);
    b.remove_var("unknown");
    assert_eq!(m(&[("z", 3)]), b);
}

#[test]
fn test_monomial_random_properties() {
    let monomials = generic_tests::random_monomials(3, 30, 3);
    for a in &monomials {
        for b in &monomials {
            let lcm = a.lcm(b);
            assert!(lcm.is_divisible_by(a));
            assert!(lcm.is_divisible_by(b));
            assert_eq!(a.mul(b), lcm.mul(&a.gcd(b)));
            assert_eq!(*a, a.mul(b).div(b).unwrap());
            for c in &monomials {
                assert_eq!(a.mul(b).mul(c), a.mul(&b.mul(c)));
                // lcm is the smallest common multiple
                if c.is_divisible_by(a) && c.is_divisible_by(b) {
                    assert!(c.is_divisible_by(&lcm));
                }
            }
        }
    }
}

#[test]
fn test_monomial_display() {
    assert_eq!("1", format!("{}", Monomial::one()));
    assert_eq!("x^2*y", format!("{}", m(&[("y", 1), ("x", 2)])));
}

#[test]
fn test_monomial_serialization() {
    let a = m(&[("x", 2), ("y", 1)]);
    let serialized = serde_json::to_string(&a).unwrap();
    assert_eq!(r#"{"x":2,"y":1}"#, serialized);
    let deserialized: Monomial = serde_json::from_str(&serialized).unwrap();
    assert_eq!(a, deserialized);
    let with_zero: Monomial = serde_json::from_str(r#"{"x":0,"z":1}"#).unwrap();
    assert_eq!(m(&[("z", 1)]), with_zero);
}

#[test]
fn test_lex() {
    let mut monomials = all_monomials_up_to_degree_two();
    monomials.sort_by(|l, r| Lex.compare(l, r).reverse());
    assert_eq!(vec![
        m(&[("x", 2)]),
        m(&[("x", 1), ("y", 1)]),
        m(&[("x", 1), ("z", 1)]),
        m(&[("x", 1)]),
        m(&[("y", 2)]),
        m(&[("y", 1), ("z", 1)]),
        m(&[("y", 1)]),
        m(&[("z", 2)]),
        m(&[("z", 1)]),
        m(&[])
    ], monomials);
}

#[test]
fn test_invlex() {
    let mut monomials = all_monomials_up_to_degree_two();
    monomials.sort_by(|l, r| InvLex.compare(l, r).reverse());
    assert_eq!(vec![
        m(&[("z", 2)]),
        m(&[("y", 1), ("z", 1)]),
        m(&[("x", 1), ("z", 1)]),
        m(&[("z", 1)]),
        m(&[("y", 2)]),
        m(&[("x", 1), ("y", 1)]),
        m(&[("y", 1)]),
        m(&[("x", 2)]),
        m(&[("x", 1)]),
        m(&[])
    ], monomials);
}

#[test]
fn test_deglex() {
    let mut monomials = all_monomials_up_to_degree_two();
    monomials.sort_by(|l, r| DegLex.compare(l, r).reverse());
    assert_eq!(vec![
        m(&[("x", 2)]),
        m(&[("x", 1), ("y", 1)]),
        m(&[("x", 1), ("z", 1)]),
        m(&[("y", 2)]),
        m(&[("y", 1), ("z", 1)]),
        m(&[("z", 2)]),
        m(&[("x", 1)]),
        m(&[("y", 1)]),
        m(&[("z", 1)]),
        m(&[])
    ], monomials);
}

#[test]
fn test_degrevlex() {
    let mut monomials = all_monomials_up_to_degree_two();
    monomials.sort_by(|l, r| DegRevLex.compare(l, r).reverse());
    assert_eq!(vec![
        m(&[("x", 2)]),
        m(&[("x", 1), ("y", 1)]),
        m(&[("y", 2)]),
        m(&[("x", 1), ("z", 1)]),
        m(&[("y", 1), ("z", 1)]),
        m(&[("z", 2)]),
        m(&[("x", 1)]),
        m(&[("y", 1)]),
        m(&[("z", 1)]),
        m(&[])
    ], monomials);

    // textbook example: x^2 y z^2 > x y^3 z in grevlex, but not in grlex
    let a = m(&[("x", 2), ("y", 1), ("z", 2)]);
    let b = m(&[("x", 1), ("y", 3), ("z", 1)]);
    assert!(DegLex.greater(&a, &b));
    assert!(DegRevLex.greater(&b, &a));
}

#[test]
fn test_revinvlex_is_not_well_ordered() {
    assert!(RevInvLex.greater(&Monomial::one(), &m(&[("x", 1)])));
    assert!(RevInvLex.greater(&m(&[("x", 1)]), &m(&[("y", 1)])));
}

#[test]
fn test_order_axioms() {
    let mut monomials = all_monomials_up_to_degree_two();
    monomials.extend(generic_tests::random_monomials(1, 12, 2));
    generic_tests::test_monomial_order_axioms(Lex, &monomials);
    generic_tests::test_monomial_order_axioms(InvLex, &monomials);
    generic_tests::test_monomial_order_axioms(DegLex, &monomials);
    generic_tests::test_monomial_order_axioms(RevInvLex, &monomials);
    generic_tests::test_monomial_order_axioms(DegRevLex, &monomials);
}

#[test]
fn test_admissible_orders_are_graded_or_not() {
    assert!(!Lex.is_graded());
    assert!(!InvLex.is_graded());
    assert!(DegLex.is_graded());
    assert!(DegRevLex.is_graded());
    for order_min in [Lex.compare(&Monomial::one(), &m(&[("w", 1)])), InvLex.compare(&Monomial::one(), &m(&[("w", 1)]))] {
        assert_eq!(Ordering::Less, order_min);
    }
}

#[test]
#[should_panic(expected = "exponent overflow")]
fn test_monomial_mul_exponent_overflow() {
    let a = m(&[("x", MonomialExponent::MAX)]);
    a.mul(&Monomial::variable("x"));
}

#[test]
#[should_panic(expected = "exponent overflow")]
fn test_monomial_pow_exponent_overflow() {
    m(&[("x", 1 << 20)]).pow(1 << 12);
}

#[test]
#[should_panic(expected = "exponent overflow")]
fn test_monomial_deg_overflow() {
    m(&[("x", MonomialExponent::MAX), ("y", 1)]).deg();
}
