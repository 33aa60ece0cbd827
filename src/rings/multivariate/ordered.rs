use std::cmp::{max, Ordering};
use std::collections::BTreeMap;
use std::fmt::Formatter;
use std::marker::PhantomData;

use serde::de::{DeserializeSeed, Error as _, SeqAccess, Visitor};
use serde::{Deserializer, Serialize, Serializer};
use tracing::instrument;

use crate::error::AlgebraError;
use crate::field::Field;
use crate::ring::*;
use crate::serialization::*;
use super::*;

///
/// Implementation of multivariate polynomials over a field, with a fixed monomial order.
///
/// Polynomials are stored as a vector of their nonzero terms, sorted ascending
/// w.r.t. the monomial order `O`. In particular, the leading term is the last entry.
/// Since the order is a type parameter, it is part of the element type [`Polynomial`],
/// and polynomials sorted w.r.t. different orders cannot be mixed by accident. To move
/// a polynomial between rings, use [`PolyRing::lift()`].
///
/// Variables are not fixed in advance, every [`Variable`] can occur in an element.
///
/// # Example
/// ```
/// # use polyideal::assert_el_eq;
/// # use polyideal::ring::*;
/// # use polyideal::rings::rational::*;
/// # use polyideal::rings::multivariate::*;
/// # use polyideal::rings::multivariate::ordered::*;
/// let ring = PolyRing::new(RationalField::RING, DegRevLex);
/// let x = ring.indeterminate("x");
/// let y = ring.indeterminate("y");
/// let f = ring.sub(ring.mul_ref(&x, &x), ring.mul_ref(&x, &y));
/// assert_eq!("x^2 - x*y", format!("{}", ring.format(&f)));
/// assert_el_eq!(ring, ring.zero(), ring.reduce(&f, &[x]).unwrap());
/// ```
///
#[derive(Clone, Copy, Debug)]
pub struct PolyRing<F: Field, O: MonomialOrder> {
    base_field: F,
    order: O
}

///
/// An element of [`PolyRing`].
///
pub struct Polynomial<F: Field, O: MonomialOrder> {
    data: Vec<(El<F>, Monomial)>,
    order: PhantomData<O>
}

impl<F: Field, O: MonomialOrder> Clone for Polynomial<F, O> {

    fn clone(&self) -> Self {
        Polynomial {
            data: self.data.clone(),
            order: PhantomData
        }
    }
}

impl<F: Field, O: MonomialOrder> Serialize for Polynomial<F, O>
    where El<F>: Serialize
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl<F: Field, O: MonomialOrder> PolyRing<F, O> {

    pub fn new(base_field: F, order: O) -> Self {
        PolyRing { base_field, order }
    }

    pub fn base_field(&self) -> &F {
        &self.base_field
    }

    pub fn order(&self) -> O {
        self.order
    }

    fn is_valid(&self, data: &[(El<F>, Monomial)]) -> bool {
        for i in 1..data.len() {
            if self.order.compare(&data[i - 1].1, &data[i].1) != Ordering::Less {
                return false;
            }
        }
        return data.iter().all(|(c, _)| !self.base_field.is_zero(c));
    }

    fn remove_zeros(&self, data: &mut Vec<(El<F>, Monomial)>) {
        data.retain(|(c, _)| !self.base_field.is_zero(c));
    }

    fn from_valid_data(&self, data: Vec<(El<F>, Monomial)>) -> Polynomial<F, O> {
        debug_assert!(self.is_valid(&data));
        Polynomial { data: data, order: PhantomData }
    }

    ///
    /// Computes `lhs + factor * m * rhs`. If `SCALED` is false, `factor` is ignored
    /// and assumed to be one.
    ///
    fn add_scaled<const SCALED: bool>(&self, lhs: &Polynomial<F, O>, rhs: &Polynomial<F, O>, m: &Monomial, factor: &El<F>) -> Polynomial<F, O> {
        debug_assert!(self.is_valid(&lhs.data));
        debug_assert!(self.is_valid(&rhs.data));

        let scale = |c: &El<F>| if SCALED {
            self.base_field.mul_ref(c, factor)
        } else {
            self.base_field.clone_el(c)
        };

        let mut result = Vec::with_capacity(lhs.data.len() + rhs.data.len());
        let mut i_l = 0;
        let mut i_r = 0;
        while i_l < lhs.data.len() && i_r < rhs.data.len() {
            let rhs_monomial = rhs.data[i_r].1.mul(m);
            match self.order.compare(&lhs.data[i_l].1, &rhs_monomial) {
                Ordering::Equal => {
                    let sum = self.base_field.add_ref(&lhs.data[i_l].0, &scale(&rhs.data[i_r].0));
                    result.push((sum, rhs_monomial));
                    i_l += 1;
                    i_r += 1;
                },
                Ordering::Greater => {
                    result.push((scale(&rhs.data[i_r].0), rhs_monomial));
                    i_r += 1;
                },
                Ordering::Less => {
                    result.push(lhs.data[i_l].clone());
                    i_l += 1;
                }
            }
        }
        result.extend(lhs.data[i_l..].iter().cloned());
        result.extend(rhs.data[i_r..].iter().map(|(c, rhs_monomial)| (scale(c), rhs_monomial.mul(m))));
        self.remove_zeros(&mut result);
        return self.from_valid_data(result);
    }

    ///
    /// Adds the given terms to `lhs`. The terms may be given in any order, and may
    /// contain repeated monomials or zero coefficients.
    ///
    pub fn add_assign_from_terms<I>(&self, lhs: &mut Polynomial<F, O>, rhs: I)
        where I: IntoIterator<Item = (El<F>, Monomial)>
    {
        let mut to_add = rhs.into_iter().collect::<Vec<_>>();
        to_add.sort_by(|(_, l), (_, r)| self.order.compare(l, r));
        let mut merged: Vec<(El<F>, Monomial)> = Vec::with_capacity(to_add.len());
        for (c, m) in to_add {
            if let Some((last_c, last_m)) = merged.last_mut() {
                if *last_m == m {
                    self.base_field.add_assign(last_c, c);
                    continue;
                }
            }
            merged.push((c, m));
        }
        self.remove_zeros(&mut merged);
        let rhs = self.from_valid_data(merged);
        self.add_assign(lhs, rhs);
    }

    ///
    /// Creates the polynomial `sum_i c_i m_i` from the given terms. Duplicate monomials
    /// are summed up and zero coefficients are dropped.
    ///
    pub fn from_terms<I>(&self, terms: I) -> Polynomial<F, O>
        where I: IntoIterator<Item = (El<F>, Monomial)>
    {
        let mut result = self.zero();
        self.add_assign_from_terms(&mut result, terms);
        return result;
    }

    ///
    /// Returns the constant polynomial `c`.
    ///
    pub fn from_base(&self, c: El<F>) -> Polynomial<F, O> {
        self.from_terms([(c, Monomial::one())])
    }

    pub fn indeterminate<V: Into<Variable>>(&self, var: V) -> Polynomial<F, O> {
        self.monomial(Monomial::variable(var))
    }

    pub fn monomial(&self, m: Monomial) -> Polynomial<F, O> {
        self.from_valid_data(vec![(self.base_field.one(), m)])
    }

    pub fn mul_scalar(&self, f: &Polynomial<F, O>, c: &El<F>) -> Polynomial<F, O> {
        if self.base_field.is_zero(c) {
            return self.zero();
        }
        // a field has no zero divisors, so no coefficient becomes zero
        self.from_valid_data(f.data.iter().map(|(a, m)| (self.base_field.mul_ref(a, c), m.clone())).collect())
    }

    ///
    /// Divides every coefficient of `f` by `c`. Fails with [`AlgebraError::DivisionByZero`]
    /// if `c` is zero, even if `f` is zero.
    ///
    pub fn div_scalar(&self, f: &Polynomial<F, O>, c: &El<F>) -> Result<Polynomial<F, O>, AlgebraError> {
        let c_inv = self.base_field.invert(c)?;
        return Ok(self.mul_scalar(f, &c_inv));
    }

    ///
    /// Multiplies `f` by the monomial `m`. Since monomial orders are compatible with
    /// multiplication, this does not change the order of the terms.
    ///
    pub fn mul_monomial(&self, f: &mut Polynomial<F, O>, m: &Monomial) {
        for (_, term) in &mut f.data {
            term.mul_assign(m);
        }
        debug_assert!(self.is_valid(&f.data));
    }

    ///
    /// Returns the terms of `f`, sorted ascending w.r.t. the monomial order.
    ///
    pub fn terms<'a>(&self, f: &'a Polynomial<F, O>) -> impl 'a + ExactSizeIterator<Item = (&'a El<F>, &'a Monomial)> + DoubleEndedIterator {
        f.data.iter().map(|(c, m)| (c, m))
    }

    pub fn term_count(&self, f: &Polynomial<F, O>) -> usize {
        f.data.len()
    }

    ///
    /// Returns the leading coefficient and monomial of `f`, or `None` if `f` is zero.
    ///
    pub fn lt<'a>(&self, f: &'a Polynomial<F, O>) -> Option<(&'a El<F>, &'a Monomial)> {
        f.data.last().map(|(c, m)| (c, m))
    }

    ///
    /// Returns the leading term of `f`. For `f = 0`, this is `(0, 1)`, so
    /// callers that have to distinguish this case should use [`PolyRing::lt()`].
    ///
    pub fn leading_term(&self, f: &Polynomial<F, O>) -> (El<F>, Monomial) {
        match self.lt(f) {
            Some((c, m)) => (self.base_field.clone_el(c), m.clone()),
            None => (self.base_field.zero(), Monomial::one())
        }
    }

    pub fn leading_monomial(&self, f: &Polynomial<F, O>) -> Monomial {
        self.leading_term(f).1
    }

    pub fn leading_coefficient(&self, f: &Polynomial<F, O>) -> El<F> {
        self.leading_term(f).0
    }

    ///
    /// Returns the coefficient of `m` in `f`, which is zero if `m` does not occur.
    ///
    pub fn coefficient_at(&self, f: &Polynomial<F, O>, m: &Monomial) -> El<F> {
        match f.data.binary_search_by(|(_, other)| self.order.compare(other, m)) {
            Ok(i) => self.base_field.clone_el(&f.data[i].0),
            Err(_) => self.base_field.zero()
        }
    }

    ///
    /// Returns all variables that occur in `f`, each with the largest exponent it
    /// has in a term of `f`.
    ///
    pub fn appearing_variables(&self, f: &Polynomial<F, O>) -> BTreeMap<Variable, MonomialExponent> {
        let mut result = BTreeMap::new();
        for (_, m) in &f.data {
            for (var, e) in m {
                let entry = result.entry(var.clone()).or_insert(0);
                *entry = max(*entry, *e);
            }
        }
        return result;
    }

    ///
    /// Returns the maximal degree of a term of `f`, or `None` if `f` is zero.
    ///
    pub fn total_degree(&self, f: &Polynomial<F, O>) -> Option<MonomialExponent> {
        f.data.iter().map(|(_, m)| m.deg()).max()
    }

    ///
    /// Scales `f` such that its leading coefficient is one. The zero polynomial
    /// is returned unchanged.
    ///
    pub fn normalize(&self, f: Polynomial<F, O>) -> Polynomial<F, O> {
        match self.lt(&f).map(|(lc, _)| self.base_field.invert(lc)) {
            None => f,
            Some(Ok(lc_inv)) => self.mul_scalar(&f, &lc_inv),
            Some(Err(_)) => unreachable!("stored coefficients are never zero")
        }
    }

    ///
    /// Replaces every occurrence of `var` in `f` by `g`.
    ///
    /// This groups the terms of `f` by their degree in `var`, and then uses the
    /// Horner schema to evaluate the resulting univariate polynomial at `g`.
    ///
    pub fn subst(&self, f: &Polynomial<F, O>, var: &str, g: &Polynomial<F, O>) -> Polynomial<F, O> {
        let deg = f.data.iter().map(|(_, m)| m.degree_of(var)).max().unwrap_or(0);
        if deg == 0 {
            return self.clone_el(f);
        }
        let mut parts = (0..=deg).map(|_| Vec::new()).collect::<Vec<_>>();
        for (c, m) in &f.data {
            let mut new_m = m.clone();
            new_m.remove_var(var);
            parts[m.degree_of(var) as usize].push((self.base_field.clone_el(c), new_m));
        }
        let mut result = self.zero();
        for part in parts.into_iter().rev() {
            self.mul_assign_ref(&mut result, g);
            // within the terms of equal degree in var, removing var preserves the order
            self.add_assign(&mut result, self.from_valid_data(part));
        }
        return result;
    }

    ///
    /// Evaluates `f` at the point given by `values`. Variables that do not have an
    /// assigned value are set to zero.
    ///
    pub fn evaluate(&self, f: &Polynomial<F, O>, values: &BTreeMap<Variable, El<F>>) -> El<F> {
        let zero = self.base_field.zero();
        self.base_field.sum(f.data.iter().map(|(c, m)| {
            let mut current = self.base_field.clone_el(c);
            for (var, e) in m {
                let value = values.get(var).unwrap_or(&zero);
                self.base_field.mul_assign(&mut current, self.base_field.pow(self.base_field.clone_el(value), *e as usize));
            }
            current
        }))
    }

    ///
    /// Maps a polynomial from a ring with the same coefficient field, but possibly another
    /// monomial order, into this ring. Fails with [`AlgebraError::FieldMismatch`] if the
    /// coefficient fields differ.
    ///
    pub fn lift<O2: MonomialOrder>(&self, from: &PolyRing<F, O2>, f: &Polynomial<F, O2>) -> Result<Polynomial<F, O>, AlgebraError> {
        if self.base_field != from.base_field {
            return Err(AlgebraError::FieldMismatch);
        }
        return Ok(self.from_terms(f.data.iter().cloned()));
    }

    ///
    /// Deserializes a polynomial that was serialized as a list of `(coefficient, monomial)`
    /// pairs. The list may be given in any order.
    ///
    /// Coefficients are deserialized through the base field, so invalid coefficients
    /// are rejected.
    ///
    pub fn deserialize_el<'de, D>(&self, deserializer: D) -> Result<Polynomial<F, O>, D::Error>
        where D: Deserializer<'de>,
            F: SerializableElementRing
    {
        let mut terms = Vec::new();
        deserialize_seq_helper(deserializer, |term| terms.push(term), DeserializeTermWithRing { base_field: &self.base_field })?;
        return Ok(self.from_terms(terms));
    }
}

impl<F: Field + SerializableElementRing, O: MonomialOrder> SerializableElementRing for PolyRing<F, O> {

    fn deserialize<'de, D>(&self, deserializer: D) -> Result<Self::Element, D::Error>
        where D: Deserializer<'de>
    {
        self.deserialize_el(deserializer)
    }
}

struct DeserializeTermWithRing<'a, F: Field + SerializableElementRing> {
    base_field: &'a F
}

impl<'a, F: Field + SerializableElementRing> Clone for DeserializeTermWithRing<'a, F> {

    fn clone(&self) -> Self {
        DeserializeTermWithRing { base_field: self.base_field }
    }
}

impl<'a, 'de, F: Field + SerializableElementRing> DeserializeSeed<'de> for DeserializeTermWithRing<'a, F> {

    type Value = (El<F>, Monomial);

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where D: Deserializer<'de>
    {
        deserializer.deserialize_tuple(2, self)
    }
}

impl<'a, 'de, F: Field + SerializableElementRing> Visitor<'de> for DeserializeTermWithRing<'a, F> {

    type Value = (El<F>, Monomial);

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a pair (coefficient, monomial)")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: SeqAccess<'de>
    {
        let coeff = seq.next_element_seed(DeserializeWithRing::new(self.base_field))?.ok_or_else(|| A::Error::invalid_length(0, &self))?;
        let monomial = seq.next_element::<Monomial>()?.ok_or_else(|| A::Error::invalid_length(1, &self))?;
        return Ok((coeff, monomial));
    }
}

impl<F: Field, O: AdmissibleOrder> PolyRing<F, O> {

    ///
    /// Computes the normal form of `f` w.r.t. the given divisors, using multivariate
    /// polynomial division.
    ///
    /// More concretely, as long as the leading monomial of the current dividend is
    /// divisible by the leading monomial of one of the divisors, the first such divisor
    /// is used to cancel the leading term. Otherwise, the leading term is moved to the
    /// remainder. Fails with [`AlgebraError::ZeroDivisor`] if one of the divisors is zero.
    ///
    /// If the divisors form a Groebner basis, the remainder is zero if and only if `f`
    /// is in the ideal generated by them.
    ///
    #[instrument(skip_all, level = "trace")]
    pub fn reduce(&self, f: &Polynomial<F, O>, divisors: &[Polynomial<F, O>]) -> Result<Polynomial<F, O>, AlgebraError> {
        let leading_terms = divisors.iter()
            .map(|d| self.lt(d).ok_or(AlgebraError::ZeroDivisor))
            .collect::<Result<Vec<_>, _>>()?;

        let mut dividend = self.clone_el(f);
        let mut remainder = Vec::new();
        while let Some((lc, lm)) = self.lt(&dividend) {
            let divisor = leading_terms.iter().zip(divisors.iter()).find(|((_, d_lm), _)| lm.is_divisible_by(d_lm));
            match divisor {
                Some(((d_lc, d_lm), d)) => {
                    let m = lm.div(d_lm)?;
                    let factor = self.base_field.negate(self.base_field.checked_div(lc, d_lc)?);
                    dividend = self.add_scaled::<true>(&dividend, d, &m, &factor);
                },
                None => {
                    remainder.extend(dividend.data.pop());
                }
            }
        }
        remainder.reverse();
        return Ok(self.from_valid_data(remainder));
    }
}

impl<F: Field, O: MonomialOrder> PartialEq for PolyRing<F, O> {

    fn eq(&self, other: &Self) -> bool {
        self.base_field == other.base_field
    }
}

impl<F: Field, O: MonomialOrder> RingBase for PolyRing<F, O> {

    type Element = Polynomial<F, O>;

    fn add_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        self.add_scaled::<false>(lhs, rhs, &Monomial::one(), &self.base_field.one())
    }

    fn sub_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        self.add_scaled::<true>(lhs, rhs, &Monomial::one(), &self.base_field.neg_one())
    }

    fn mul_ref(&self, lhs: &Self::Element, rhs: &Self::Element) -> Self::Element {
        if lhs.data.len() > rhs.data.len() {
            rhs.data.iter().fold(self.zero(), |current, (c, m)| self.add_scaled::<true>(&current, lhs, m, c))
        } else {
            lhs.data.iter().fold(self.zero(), |current, (c, m)| self.add_scaled::<true>(&current, rhs, m, c))
        }
    }

    fn add_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs = self.add_ref(lhs, rhs);
    }

    fn add_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs = self.add_ref(lhs, &rhs);
    }

    fn sub_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs = self.sub_ref(lhs, rhs);
    }

    fn sub_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs = self.sub_ref(lhs, &rhs);
    }

    fn negate_inplace(&self, lhs: &mut Self::Element) {
        for (c, _) in &mut lhs.data {
            self.base_field.negate_inplace(c);
        }
    }

    fn mul_assign(&self, lhs: &mut Self::Element, rhs: Self::Element) {
        *lhs = self.mul_ref(lhs, &rhs);
    }

    fn mul_assign_ref(&self, lhs: &mut Self::Element, rhs: &Self::Element) {
        *lhs = self.mul_ref(lhs, rhs);
    }

    fn from_int(&self, value: i64) -> Self::Element {
        self.from_base(self.base_field.from_int(value))
    }

    fn zero(&self) -> Self::Element {
        self.from_valid_data(Vec::new())
    }

    fn eq_el(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool {
        if lhs.data.len() != rhs.data.len() {
            return false;
        }
        for ((l_c, l_m), (r_c, r_m)) in lhs.data.iter().zip(rhs.data.iter()) {
            if l_m != r_m || !self.base_field.eq_el(l_c, r_c) {
                return false;
            }
        }
        return true;
    }

    fn is_zero(&self, value: &Self::Element) -> bool {
        value.data.is_empty()
    }

    fn is_one(&self, value: &Self::Element) -> bool {
        value.data.len() == 1 && value.data[0].1.is_one() && self.base_field.is_one(&value.data[0].0)
    }

    fn dbg<'a>(&self, value: &Self::Element, out: &mut Formatter<'a>) -> std::fmt::Result {
        if value.data.is_empty() {
            return write!(out, "{}", self.base_field.format(&self.base_field.zero()));
        }
        for (i, (c, m)) in value.data.iter().rev().enumerate() {
            let c_str = format!("{}", self.base_field.format(c));
            let (negative, c_abs) = match c_str.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, c_str.as_str())
            };
            match (i == 0, negative) {
                (true, true) => write!(out, "-")?,
                (true, false) => {},
                (false, true) => write!(out, " - ")?,
                (false, false) => write!(out, " + ")?
            }
            if m.is_one() {
                write!(out, "{}", c_abs)?;
            } else if c_abs == "1" {
                write!(out, "{}", m)?;
            } else {
                write!(out, "{}*{}", c_abs, m)?;
            }
        }
        return Ok(());
    }
}

#[cfg(test)]
use crate::rings::rational::RationalField;
#[cfg(test)]
use crate::rings::zn::Zn;

#[cfg(test)]
fn m(exponents: &[(&str, MonomialExponent)]) -> Monomial {
    Monomial::new(exponents.iter().copied())
}

#[test]
fn test_add() {
    let ring = PolyRing::new(Zn::new(17), Lex);
    let lhs = ring.from_terms([
        (1, m(&[("x", 1)]))
    ]);

    let rhs = ring.from_terms([
        (1, m(&[("x", 1)])),
        (1, m(&[("x", 1), ("z", 1)])),
    ]);

    let expected = ring.from_terms([
        (2, m(&[("x", 1)])),
        (1, m(&[("x", 1), ("z", 1)]))
    ]);

    let actual = ring.add_ref(&lhs, &rhs);
    assert_el_eq!(ring, expected, actual);

    let lhs = ring.from_terms([
        (1, m(&[("x", 1)])),
        (2, m(&[("x", 1), ("z", 1)])),
        (4, m(&[("y", 2), ("z", 1)])),
        (8, m(&[]))
    ]);

    let rhs = ring.from_terms([
        (16, m(&[("x", 1)])),
        (3, m(&[("x", 1), ("z", 1)])),
        (9, m(&[("z", 1)]))
    ]);

    let expected = ring.from_terms([
        (5, m(&[("x", 1), ("z", 1)])),
        (4, m(&[("y", 2), ("z", 1)])),
        (8, m(&[])),
        (9, m(&[("z", 1)]))
    ]);

    let actual = ring.add_ref(&lhs, &rhs);
    assert_el_eq!(ring, expected, actual);
    assert_eq!(4, ring.term_count(&actual));
}

#[cfg(test)]
fn edge_case_elements(ring: &PolyRing<RationalField, DegRevLex>) -> impl Iterator<Item = Polynomial<RationalField, DegRevLex>> {
    let QQ = RationalField::RING;
    let mut result = vec![ring.zero(), ring.one()];
    let monomials = [
        m(&[("x", 1)]),
        m(&[("x", 1), ("z", 1)]),
        m(&[("x", 2), ("z", 1)]),
        m(&[("x", 4), ("y", 2)])
    ];
    for m1 in &monomials {
        result.push(ring.from_terms([(QQ.one(), m1.clone())]));
    }
    for m1 in &monomials {
        for m2 in &monomials {
            result.push(ring.from_terms([(QQ.one(), m1.clone()), (QQ.from_fraction(-2, 3), m2.clone())]));
        }
    }
    return result.into_iter();
}

#[test]
fn test_ring_axioms() {
    let ring = PolyRing::new(RationalField::RING, DegRevLex);
    crate::ring::generic_tests::test_ring_axioms(&ring, edge_case_elements(&ring));
}

#[test]
fn test_add_assign_from_terms() {
    let ring = PolyRing::new(Zn::new(17), Lex);

    let mut lhs = ring.from_terms([
        (0, m(&[("y", 2)])),
        (1, m(&[("x", 1)])),
        (1, m(&[("x", 1), ("y", 1), ("z", 1)]))
    ]);

    ring.add_assign_from_terms(&mut lhs, [
        (1, m(&[])),
        (1, m(&[])),
        (0, m(&[("x", 1)])),
        (1, m(&[("x", 1)])),
        (0, m(&[("x", 1), ("y", 1)])),
        (1, m(&[("y", 1), ("z", 1)])),
        (16, m(&[("x", 1), ("y", 1), ("z", 1)]))
    ]);

    let expected = [
        (2, m(&[])),
        (1, m(&[("y", 1), ("z", 1)])),
        (2, m(&[("x", 1)]))
    ];

    assert_eq!(expected.len(), ring.terms(&lhs).count());
    for (e, a) in expected.iter().zip(ring.terms(&lhs)) {
        assert_eq!(e.1, *a.1);
        assert_el_eq!(ring.base_field(), e.0, *a.0);
    }

    let value = ring.from_terms((0..100).map(|i| (1, m(&[("x", i)]))).chain((0..100).map(|i| (0, m(&[("y", i)])))));
    assert_eq!(100, ring.terms(&value).count());

    assert_el_eq!(ring, ring.zero(), ring.from_terms([]));
    assert_el_eq!(ring, ring.one(), ring.from_terms([(1, Monomial::one())]));
}

#[test]
fn test_leading_term() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, DegLex);
    let f = ring.from_terms([
        (QQ.from_int(3), m(&[("y", 3)])),
        (QQ.from_int(-1), m(&[("x", 2), ("y", 1)])),
        (QQ.one(), m(&[("x", 2)]))
    ]);
    let (lc, lm) = ring.lt(&f).unwrap();
    assert_eq!(m(&[("x", 2), ("y", 1)]), *lm);
    assert_el_eq!(QQ, QQ.neg_one(), *lc);
    assert_eq!(m(&[("x", 2), ("y", 1)]), ring.leading_monomial(&f));
    assert_el_eq!(QQ, QQ.neg_one(), ring.leading_coefficient(&f));
    assert_eq!(Some(3), ring.total_degree(&f));
    assert_el_eq!(QQ, QQ.from_int(3), ring.coefficient_at(&f, &m(&[("y", 3)])));
    assert_el_eq!(QQ, QQ.zero(), ring.coefficient_at(&f, &m(&[("x", 3)])));
    assert_eq!(BTreeMap::from([(Variable::from("x"), 2), (Variable::from("y"), 3)]), ring.appearing_variables(&f));

    let zero = ring.zero();
    assert!(ring.lt(&zero).is_none());
    assert_eq!(Monomial::one(), ring.leading_monomial(&zero));
    assert_el_eq!(QQ, QQ.zero(), ring.leading_coefficient(&zero));
    assert_eq!(None, ring.total_degree(&zero));
}

#[test]
fn test_scalar_operations() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, DegRevLex);
    let f = ring.from_terms([
        (QQ.from_int(2), m(&[("x", 1)])),
        (QQ.from_int(4), m(&[]))
    ]);
    let expected = ring.from_terms([
        (QQ.one(), m(&[("x", 1)])),
        (QQ.from_int(2), m(&[]))
    ]);
    assert_el_eq!(ring, expected, ring.div_scalar(&f, &QQ.from_int(2)).unwrap());
    assert_el_eq!(ring, expected, ring.normalize(ring.clone_el(&f)));
    assert_el_eq!(ring, ring.zero(), ring.mul_scalar(&f, &QQ.zero()));
    assert_eq!(Err(AlgebraError::DivisionByZero), ring.div_scalar(&f, &QQ.zero()).map(|_| ()));
    assert_eq!(Err(AlgebraError::DivisionByZero), ring.div_scalar(&ring.zero(), &QQ.zero()).map(|_| ()));
    assert!(ring.is_zero(&ring.normalize(ring.zero())));

    let mut g = ring.clone_el(&f);
    ring.mul_monomial(&mut g, &m(&[("y", 1)]));
    assert_el_eq!(ring, ring.mul(f, ring.indeterminate("y")), g);
}

#[test]
fn test_polynomial_arithmetic_properties() {
    let ring = PolyRing::new(Zn::new(65537), DegLex);
    let mut rng = oorandom::Rand64::new(1);
    let mut random_poly = || ring.from_terms(
        crate::rings::multivariate::generic_tests::random_monomials(rng.rand_u64() as u128, 5, 3).into_iter().map(|mon| (rng.rand_range(0..65537), mon))
    );
    for _ in 0..10 {
        let f = random_poly();
        let g = random_poly();
        let h = random_poly();
        assert_el_eq!(ring, f, ring.sub_ref(&ring.add_ref(&f, &g), &g));
        assert_el_eq!(ring, ring.mul_ref(&f, &ring.add_ref(&g, &h)), ring.add(ring.mul_ref(&f, &g), ring.mul_ref(&f, &h)));
        if !ring.is_zero(&f) {
            assert!(ring.is_zero(&ring.reduce(&f, std::slice::from_ref(&f)).unwrap()));
        }
    }
}

#[test]
fn test_reduce() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, Lex);
    let x = ring.indeterminate("x");
    let y = ring.indeterminate("y");
    let f = ring.sum([
        ring.mul_ref(&ring.mul_ref(&x, &x), &y),
        ring.mul_ref(&x, &ring.mul_ref(&y, &y)),
        ring.mul_ref(&y, &y)
    ]);
    let g1 = ring.sub(ring.mul_ref(&x, &y), ring.one());
    let g2 = ring.sub(ring.mul_ref(&y, &y), ring.one());

    let expected = ring.sum([ring.clone_el(&x), ring.clone_el(&y), ring.one()]);
    assert_el_eq!(ring, expected, ring.reduce(&f, &[ring.clone_el(&g1), ring.clone_el(&g2)]).unwrap());

    // with the divisors swapped, the remainder is different
    let expected = ring.sum([ring.mul(ring.from_int(2), ring.clone_el(&x)), ring.one()]);
    assert_el_eq!(ring, expected, ring.reduce(&f, &[ring.clone_el(&g2), ring.clone_el(&g1)]).unwrap());

    assert_el_eq!(ring, f, ring.reduce(&f, &[]).unwrap());
    assert_eq!(Err(AlgebraError::ZeroDivisor), ring.reduce(&f, &[g1, ring.zero()]).map(|_| ()));
}

#[test]
fn test_evaluate() {
    let ring = PolyRing::new(Zn::new(17), Lex);
    let poly = ring.from_terms([
        (1, m(&[("y", 2)])),
        (2, m(&[("x", 1)])),
        (3, m(&[("x", 1), ("y", 1), ("z", 1)]))
    ]);
    let point = |x: u64, y: u64, z: u64| BTreeMap::from([(Variable::from("x"), x), (Variable::from("y"), y), (Variable::from("z"), z)]);
    assert_el_eq!(ring.base_field(), 3, ring.evaluate(&poly, &point(1, 1, 0)));
    assert_el_eq!(ring.base_field(), 0, ring.evaluate(&poly, &point(15, 2, 0)));
    assert_el_eq!(ring.base_field(), 1, ring.evaluate(&poly, &BTreeMap::from([(Variable::from("y"), 1)])));
    assert_el_eq!(ring.base_field(), 0, ring.evaluate(&ring.zero(), &point(1, 2, 3)));
}

#[test]
fn test_subst() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, DegRevLex);
    let x = ring.indeterminate("x");
    let y = ring.indeterminate("y");
    let z = ring.indeterminate("z");

    // f = x^2 y + 3 y z - 1
    let f = ring.sum([
        ring.mul(ring.mul_ref(&x, &x), ring.clone_el(&y)),
        ring.mul(ring.from_int(3), ring.mul_ref(&y, &z)),
        ring.neg_one()
    ]);
    // y -> x + 2
    let g = ring.add_ref(&x, &ring.from_int(2));
    let expected = ring.sum([
        ring.pow(ring.clone_el(&x), 3),
        ring.mul(ring.from_int(2), ring.mul_ref(&x, &x)),
        ring.mul(ring.from_int(3), ring.mul_ref(&x, &z)),
        ring.mul(ring.from_int(6), ring.clone_el(&z)),
        ring.neg_one()
    ]);
    assert_el_eq!(ring, expected, ring.subst(&f, "y", &g));

    // substituting a constant is the same as evaluating in this variable
    let point = BTreeMap::from([(Variable::from("x"), QQ.from_fraction(1, 2)), (Variable::from("z"), QQ.from_int(-3))]);
    let c = QQ.from_int(5);
    let mut full_point = point.clone();
    full_point.insert(Variable::from("y"), c);
    assert_el_eq!(QQ, ring.evaluate(&f, &full_point), ring.evaluate(&ring.subst(&f, "y", &ring.from_base(c)), &point));

    // no occurrence of the variable
    assert_el_eq!(ring, f, ring.subst(&f, "w", &g));
    assert_el_eq!(ring, ring.zero(), ring.subst(&ring.zero(), "x", &g));
}

#[test]
fn test_lift() {
    let ring_lex = PolyRing::new(Zn::new(17), Lex);
    let ring_degrevlex = PolyRing::new(Zn::new(17), DegRevLex);
    let f = ring_lex.from_terms([(1, m(&[("x", 1)])), (2, m(&[("y", 2)]))]);
    assert_eq!(m(&[("x", 1)]), ring_lex.leading_monomial(&f));

    let lifted = ring_degrevlex.lift(&ring_lex, &f).unwrap();
    assert_eq!(m(&[("y", 2)]), ring_degrevlex.leading_monomial(&lifted));
    assert_el_eq!(ring_lex, f, ring_lex.lift(&ring_degrevlex, &lifted).unwrap());

    let other_ring = PolyRing::new(Zn::new(19), DegRevLex);
    assert_eq!(Err(AlgebraError::FieldMismatch), other_ring.lift(&ring_lex, &f).map(|_| ()));
}

#[test]
fn test_format() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, DegLex);
    let f = ring.from_terms([
        (QQ.neg_one(), m(&[])),
        (QQ.from_int(2), m(&[("x", 1), ("y", 1)])),
        (QQ.one(), m(&[("x", 2)]))
    ]);
    assert_eq!("x^2 + 2*x*y - 1", format!("{}", ring.format(&f)));
    assert_eq!("-x + 1/2*y", format!("{}", ring.format(&ring.from_terms([(QQ.neg_one(), m(&[("x", 1)])), (QQ.from_fraction(1, 2), m(&[("y", 1)]))]))));
    assert_eq!("0", format!("{}", ring.format(&ring.zero())));
    assert_eq!("-3/2", format!("{}", ring.format(&ring.from_base(QQ.from_fraction(-3, 2)))));
}

#[test]
fn test_serialization() {
    let ring = PolyRing::new(Zn::new(17), DegRevLex);
    let f = ring.from_terms([(3, m(&[("x", 1)])), (16, m(&[]))]);
    let serialized = serde_json::to_string(&f).unwrap();
    assert_eq!(r#"[[16,{}],[3,{"x":1}]]"#, serialized);

    let mut deserializer = serde_json::Deserializer::from_str(&serialized);
    let deserialized = ring.deserialize_el(&mut deserializer).unwrap();
    assert_el_eq!(ring, f, deserialized);

    let mut deserializer = serde_json::Deserializer::from_str(r#"[[3,{"x":1}],[0,{"y":1}],[16,{}]]"#);
    let deserialized = ring.deserialize_el(&mut deserializer).unwrap();
    assert_el_eq!(ring, f, deserialized);
}

#[test]
fn test_deserialize_validates_coefficients() {
    let ring = PolyRing::new(Zn::new(17), DegRevLex);
    let mut deserializer = serde_json::Deserializer::from_str(r#"[[17,{"x":1}]]"#);
    assert!(ring.deserialize_el(&mut deserializer).is_err());
    let mut deserializer = serde_json::Deserializer::from_str(r#"[[3,{"x":1}],[20,{}]]"#);
    assert!(ring.deserialize_el(&mut deserializer).is_err());
    let mut deserializer = serde_json::Deserializer::from_str(r#"[[3]]"#);
    assert!(ring.deserialize_el(&mut deserializer).is_err());

    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, DegLex);
    let x = ring.indeterminate("x");
    let mut deserializer = serde_json::Deserializer::from_str(r#"[[{"num":2,"den":4},{"x":1}]]"#);
    let deserialized = ring.deserialize_el(&mut deserializer).unwrap();
    assert_el_eq!(ring, ring.mul_scalar(&x, &QQ.from_fraction(1, 2)), deserialized);
    let mut deserializer = serde_json::Deserializer::from_str(r#"[[{"num":1,"den":0},{"x":1}]]"#);
    assert!(ring.deserialize_el(&mut deserializer).is_err());
}
