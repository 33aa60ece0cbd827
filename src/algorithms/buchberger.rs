use std::collections::BTreeSet;
use std::fmt::Debug;

use tracing::instrument;

use crate::computation::*;
use crate::error::AlgebraError;
use crate::field::Field;
use crate::ring::*;
use crate::rings::multivariate::*;
use crate::rings::multivariate::ordered::*;

///
/// A pair `(i, j)` with `i < j` of indices into the current basis, whose S-polynomial
/// still has to be considered. Pairs are ordered lexicographically, and always processed
/// in ascending order.
///
#[stability::unstable(feature = "enable")]
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct SPair(pub usize, pub usize);

impl SPair {

    #[stability::unstable(feature = "enable")]
    pub fn new(i: usize, j: usize) -> Self {
        assert!(i != j);
        if i < j {
            SPair(i, j)
        } else {
            SPair(j, i)
        }
    }
}

impl Debug for SPair {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S({}, {})", self.0, self.1)
    }
}

///
/// Selects which of the Buchberger criteria are used to discard S-pairs without
/// computing their S-polynomial.
///
#[stability::unstable(feature = "enable")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Criteria {
    /// Discard `(i, j)` if the leading monomials of `f_i` and `f_j` are coprime.
    pub coprime: bool,
    /// Discard `(i, j)` if there is `k` such that `lm(f_k)` divides `lcm(lm(f_i), lm(f_j))`
    /// and both pairs `(i, k)` and `(j, k)` have already been processed.
    pub chain: bool
}

impl Criteria {

    pub const ALL: Criteria = Criteria { coprime: true, chain: true };

    pub const NONE: Criteria = Criteria { coprime: false, chain: false };
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Criterion {
    Coprime, Chain
}

///
/// Computes the S-polynomial
/// ```text
///   S(f, g) = L/lm(f) * f/lc(f) - L/lm(g) * g/lc(g)    with    L = lcm(lm(f), lm(g))
/// ```
/// in which the leading terms of both summands cancel. Fails with [`AlgebraError::ZeroOperand`]
/// if `f` or `g` is zero.
///
/// # Example
/// ```
/// # use polyideal::assert_el_eq;
/// # use polyideal::ring::*;
/// # use polyideal::rings::rational::*;
/// # use polyideal::rings::multivariate::*;
/// # use polyideal::rings::multivariate::ordered::*;
/// # use polyideal::algorithms::buchberger::*;
/// let ring = PolyRing::new(RationalField::RING, Lex);
/// let x = ring.indeterminate("x");
/// let y = ring.indeterminate("y");
/// // S(x^2 + y, x y) = y * (x^2 + y) - x * (x y) = y^2
/// let f = ring.add(ring.mul_ref(&x, &x), ring.clone_el(&y));
/// let g = ring.mul_ref(&x, &y);
/// assert_el_eq!(ring, ring.mul_ref(&y, &y), s_poly(&ring, &f, &g).unwrap());
/// ```
///
pub fn s_poly<F, O>(ring: &PolyRing<F, O>, f: &Polynomial<F, O>, g: &Polynomial<F, O>) -> Result<Polynomial<F, O>, AlgebraError>
    where F: Field,
        O: MonomialOrder
{
    let (f_lc, f_lm) = ring.lt(f).ok_or(AlgebraError::ZeroOperand)?;
    let (g_lc, g_lm) = ring.lt(g).ok_or(AlgebraError::ZeroOperand)?;
    let lcm = f_lm.lcm(g_lm);

    let mut f_scaled = ring.div_scalar(f, f_lc)?;
    ring.mul_monomial(&mut f_scaled, &lcm.div(f_lm)?);
    let mut g_scaled = ring.div_scalar(g, g_lc)?;
    ring.mul_monomial(&mut g_scaled, &lcm.div(g_lm)?);
    return Ok(ring.sub(f_scaled, g_scaled));
}

fn filter_spair<F, O>(ring: &PolyRing<F, O>, pair: SPair, basis: &[Polynomial<F, O>], open: &BTreeSet<SPair>, criteria: Criteria) -> Option<Criterion>
    where F: Field,
        O: MonomialOrder
{
    let SPair(i, j) = pair;
    let lm_i = ring.leading_monomial(&basis[i]);
    let lm_j = ring.leading_monomial(&basis[j]);

    if criteria.coprime && lm_i.is_coprime(&lm_j) {
        return Some(Criterion::Coprime);
    }
    if criteria.chain {
        let lcm = lm_i.lcm(&lm_j);
        let has_chain = (0..basis.len()).filter(|k| *k != i && *k != j).any(|k|
            !open.contains(&SPair::new(i, k)) &&
                !open.contains(&SPair::new(j, k)) &&
                lcm.is_divisible_by(&ring.leading_monomial(&basis[k]))
        );
        if has_chain {
            return Some(Criterion::Chain);
        }
    }
    return None;
}

fn check_generators<F, O>(ring: &PolyRing<F, O>, generators: &[Polynomial<F, O>]) -> Result<(), AlgebraError>
    where F: Field,
        O: MonomialOrder
{
    match generators.iter().position(|f| ring.is_zero(f)) {
        Some(i) => Err(AlgebraError::ZeroGenerator(i)),
        None => Ok(())
    }
}

///
/// Computes a Groebner basis of the ideal generated by `generators` w.r.t. the monomial
/// order of `ring`, using Buchberger's algorithm.
///
/// For variants of this function that use sensible defaults for most parameters, see
/// [`find_basis()`] and [`find_basis_brute_force()`].
///
/// The returned basis starts with the generators, in the given order, followed by all
/// nonzero normal forms of S-polynomials that were appended during the computation. It is
/// in general neither minimal nor reduced, use [`reduce_basis()`] for that. Which S-pairs
/// are discarded without computing the S-polynomial is controlled by `criteria`.
///
/// Fails with [`AlgebraError::ZeroGenerator`] if one of the generators is zero.
///
/// # Explanation of logging output
///
/// If the passed computation controller accepts the logging, it will receive the following symbols:
///  - `-` means an S-polynomial was reduced to zero
///  - `s` means an S-polynomial reduced to a nonzero value, which is added to the basis
///  - `c` means an S-pair was discarded since the leading monomials are coprime
///  - `h` means an S-pair was discarded by the chain criterion
///  - `(b=n)` means that the basis now has length `n`
///  - `(S=n)` means that the algorithm still has to consider `n` more S-pairs
///
#[stability::unstable(feature = "enable")]
#[instrument(skip_all, level = "trace")]
pub fn buchberger<F, O, Controller>(ring: &PolyRing<F, O>, generators: Vec<Polynomial<F, O>>, criteria: Criteria, controller: Controller) -> Result<Vec<Polynomial<F, O>>, AlgebraError>
    where F: Field,
        O: AdmissibleOrder,
        Controller: ComputationController
{
    check_generators(ring, &generators)?;

    controller.run_computation(format_args!("buchberger(len={})", generators.len()), |controller| -> Result<Vec<Polynomial<F, O>>, AlgebraError> {
        let mut basis = generators;
        let mut open = BTreeSet::new();
        for j in 0..basis.len() {
            for i in 0..j {
                open.insert(SPair(i, j));
            }
        }

        while let Some(pair) = open.first().copied() {
            // the pair itself is still in `open` here, it is removed only after processing it
            match filter_spair(ring, pair, &basis, &open, criteria) {
                Some(Criterion::Coprime) => log_progress!(controller, "c"),
                Some(Criterion::Chain) => log_progress!(controller, "h"),
                None => {
                    let s = s_poly(ring, &basis[pair.0], &basis[pair.1])?;
                    let remainder = ring.reduce(&s, &basis)?;
                    if ring.is_zero(&remainder) {
                        log_progress!(controller, "-");
                    } else {
                        // a nonzero normal form has a leading monomial that is not divisible by
                        // any leading monomial of the basis, so it cannot be in the basis yet
                        debug_assert!(basis.iter().all(|f| !ring.eq_el(f, &remainder)));
                        log_progress!(controller, "s");
                        let n = basis.len();
                        basis.push(remainder);
                        open.extend((0..n).map(|i| SPair(i, n)));
                        log_progress!(controller, "(b={})(S={})", basis.len(), open.len() - 1);
                    }
                }
            }
            open.remove(&pair);
        }
        return Ok(basis);
    })
}

///
/// Computes a Groebner basis of the ideal generated by `generators`, using Buchberger's
/// algorithm with the coprime criterion and the chain criterion.
///
/// This is [`buchberger()`] with all criteria enabled and without logging.
///
pub fn find_basis<F, O>(ring: &PolyRing<F, O>, generators: Vec<Polynomial<F, O>>) -> Result<Vec<Polynomial<F, O>>, AlgebraError>
    where F: Field,
        O: AdmissibleOrder
{
    buchberger(ring, generators, Criteria::ALL, DontObserve)
}

///
/// Computes a Groebner basis of the ideal generated by `generators`, using Buchberger's
/// algorithm without any criteria, i.e. the S-polynomial of every pair is reduced.
///
/// This is mainly useful as a reference for [`find_basis()`].
///
pub fn find_basis_brute_force<F, O>(ring: &PolyRing<F, O>, generators: Vec<Polynomial<F, O>>) -> Result<Vec<Polynomial<F, O>>, AlgebraError>
    where F: Field,
        O: AdmissibleOrder
{
    buchberger(ring, generators, Criteria::NONE, DontObserve)
}

///
/// Inter-reduces the given Groebner basis, such that it becomes the reduced Groebner basis
/// of the ideal. Every element is replaced by its normal form modulo all other elements,
/// scaled to have leading coefficient one; elements whose normal form is zero are deleted.
///
/// If `basis` is not a Groebner basis, the result still generates the same ideal, but is
/// in general not reduced.
///
/// Every deleted element is logged as `x`.
///
#[instrument(skip_all, level = "trace")]
pub fn inter_reduce<F, O, Controller>(ring: &PolyRing<F, O>, basis: &mut Vec<Polynomial<F, O>>, controller: Controller) -> Result<(), AlgebraError>
    where F: Field,
        O: AdmissibleOrder,
        Controller: ComputationController
{
    check_generators(ring, basis)?;

    controller.run_computation(format_args!("inter_reduce(len={})", basis.len()), |controller| -> Result<(), AlgebraError> {
        let mut i = 0;
        while i < basis.len() {
            let f = basis.remove(i);
            let remainder = ring.reduce(&f, basis)?;
            if ring.is_zero(&remainder) {
                // the next element moved to position `i`, so don't advance
                log_progress!(controller, "x");
            } else {
                basis.insert(i, ring.normalize(remainder));
                i += 1;
            }
        }
        return Ok(());
    })
}

///
/// Transforms the given Groebner basis in place into the reduced Groebner basis of the
/// ideal, i.e. the unique Groebner basis with leading coefficients one, in which no
/// term of any element is divisible by the leading monomial of another element.
///
/// See also [`inter_reduce()`].
///
/// # Example
/// ```
/// # use polyideal::assert_el_eq;
/// # use polyideal::ring::*;
/// # use polyideal::rings::zn::*;
/// # use polyideal::rings::multivariate::*;
/// # use polyideal::rings::multivariate::ordered::*;
/// # use polyideal::algorithms::buchberger::*;
/// let ring = PolyRing::new(Zn::new(7), DegRevLex);
/// let x = ring.indeterminate("x");
/// let mut basis = vec![ring.mul(ring.from_int(3), ring.clone_el(&x)), ring.mul_ref(&x, &x)];
/// reduce_basis(&ring, &mut basis).unwrap();
/// assert_eq!(1, basis.len());
/// assert_el_eq!(ring, x, basis[0]);
/// ```
///
pub fn reduce_basis<F, O>(ring: &PolyRing<F, O>, basis: &mut Vec<Polynomial<F, O>>) -> Result<(), AlgebraError>
    where F: Field,
        O: AdmissibleOrder
{
    inter_reduce(ring, basis, DontObserve)
}

///
/// Computes the reduced Groebner basis of the ideal generated by `generators`.
///
pub fn groebner_basis<F, O>(ring: &PolyRing<F, O>, generators: Vec<Polynomial<F, O>>) -> Result<Vec<Polynomial<F, O>>, AlgebraError>
    where F: Field,
        O: AdmissibleOrder
{
    let mut result = find_basis(ring, generators)?;
    reduce_basis(ring, &mut result)?;
    return Ok(result);
}

///
/// Checks whether `basis` is a Groebner basis, by checking that all S-polynomials
/// reduce to zero modulo `basis`.
///
#[instrument(skip_all, level = "trace")]
pub fn is_groebner_basis<F, O>(ring: &PolyRing<F, O>, basis: &[Polynomial<F, O>]) -> Result<bool, AlgebraError>
    where F: Field,
        O: AdmissibleOrder
{
    check_generators(ring, basis)?;
    for j in 0..basis.len() {
        for i in 0..j {
            let s = s_poly(ring, &basis[i], &basis[j])?;
            if !ring.is_zero(&ring.reduce(&s, basis)?) {
                return Ok(false);
            }
        }
    }
    return Ok(true);
}

///
/// Checks whether `f` is in the ideal generated by `groebner_basis`, which must be a
/// Groebner basis w.r.t. the order of `ring`.
///
pub fn ideal_contains<F, O>(ring: &PolyRing<F, O>, groebner_basis: &[Polynomial<F, O>], f: &Polynomial<F, O>) -> Result<bool, AlgebraError>
    where F: Field,
        O: AdmissibleOrder
{
    return Ok(ring.is_zero(&ring.reduce(f, groebner_basis)?));
}

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use crate::rings::rational::RationalField;
#[cfg(test)]
use crate::rings::zn::Zn;

#[cfg(test)]
#[derive(Clone, Default)]
struct RecordProgress(Rc<RefCell<String>>);

#[cfg(test)]
impl ComputationController for RecordProgress {

    fn log(&self, args: std::fmt::Arguments) {
        self.0.borrow_mut().push_str(&format!("{}", args));
    }
}

#[cfg(test)]
fn m(exponents: &[(&str, MonomialExponent)]) -> Monomial {
    Monomial::new(exponents.iter().copied())
}

#[cfg(test)]
fn sort_by_lm<F: Field, O: MonomialOrder>(ring: &PolyRing<F, O>, basis: &mut Vec<Polynomial<F, O>>) {
    basis.sort_by(|f, g| ring.order().compare(&ring.leading_monomial(f), &ring.leading_monomial(g)));
}

#[test]
fn test_s_poly() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, DegLex);
    let f = ring.from_terms([
        (QQ.one(), m(&[("x", 3), ("y", 2)])),
        (QQ.neg_one(), m(&[("x", 2), ("y", 3)])),
        (QQ.one(), m(&[("x", 1)]))
    ]);
    let g = ring.from_terms([
        (QQ.from_int(3), m(&[("x", 4), ("y", 1)])),
        (QQ.one(), m(&[("y", 2)]))
    ]);
    let expected = ring.from_terms([
        (QQ.neg_one(), m(&[("x", 3), ("y", 3)])),
        (QQ.one(), m(&[("x", 2)])),
        (QQ.from_fraction(-1, 3), m(&[("y", 3)]))
    ]);
    assert_el_eq!(ring, expected, s_poly(&ring, &f, &g).unwrap());
    assert_el_eq!(ring, ring.negate(expected), s_poly(&ring, &g, &f).unwrap());
    assert!(ring.is_zero(&s_poly(&ring, &f, &f).unwrap()));

    assert_eq!(Err(AlgebraError::ZeroOperand), s_poly(&ring, &f, &ring.zero()).map(|_| ()));
    assert_eq!(Err(AlgebraError::ZeroOperand), s_poly(&ring, &ring.zero(), &g).map(|_| ()));
}

#[test]
fn test_buchberger_small() {
    let ring = PolyRing::new(Zn::new(17), DegRevLex);

    let f1 = ring.from_terms([
        (1, m(&[("x", 2)])),
        (1, m(&[("y", 2)])),
        (16, m(&[]))
    ]);
    let f2 = ring.from_terms([
        (1, m(&[("x", 1), ("y", 1)])),
        (15, m(&[]))
    ]);

    let mut actual = buchberger(&ring, vec![ring.clone_el(&f1), ring.clone_el(&f2)], Criteria::ALL, crate::computation::TEST_LOG_PROGRESS).unwrap();

    let expected = ring.from_terms([
        (16, m(&[("y", 3)])),
        (15, m(&[("x", 1)])),
        (1, m(&[("y", 1)])),
    ]);

    assert_eq!(3, actual.len());
    assert!(ideal_contains(&ring, &actual, &f1).unwrap());
    assert!(ideal_contains(&ring, &actual, &f2).unwrap());
    assert!(ideal_contains(&ring, &actual, &expected).unwrap());
    assert!(is_groebner_basis(&ring, &actual).unwrap());

    reduce_basis(&ring, &mut actual).unwrap();
    assert_eq!(3, actual.len());
    assert_el_eq!(ring, f1, actual[0]);
    assert_el_eq!(ring, f2, actual[1]);
    assert_el_eq!(ring, ring.negate(expected), actual[2]);
}

#[test]
fn test_buchberger_larger() {
    let ring = PolyRing::new(Zn::new(17), DegRevLex);

    let f1 = ring.from_terms([
        (1, m(&[("x", 2), ("y", 1), ("z", 1)])),
        (1, m(&[("y", 2)])),
        (1, m(&[("x", 1), ("z", 1)])),
        (2, m(&[("x", 1)])),
        (1, m(&[]))
    ]);
    let f2 = ring.from_terms([
        (1, m(&[("y", 3), ("z", 1)])),
        (1, m(&[("z", 3)])),
        (1, m(&[("x", 1), ("y", 1)]))
    ]);
    let f3 = ring.from_terms([
        (1, m(&[("x", 1), ("z", 2)])),
        (1, m(&[("x", 1), ("z", 1)])),
        (2, m(&[("y", 1), ("z", 1)])),
        (7, m(&[]))
    ]);
    let generators = vec![f1, f2, f3];

    let mut optimized = buchberger(&ring, generators.clone(), Criteria::ALL, crate::computation::TEST_LOG_PROGRESS).unwrap();
    let mut brute_force = find_basis_brute_force(&ring, generators.clone()).unwrap();
    assert!(is_groebner_basis(&ring, &optimized).unwrap());
    assert!(is_groebner_basis(&ring, &brute_force).unwrap());
    for f in &generators {
        assert!(ideal_contains(&ring, &optimized, f).unwrap());
    }

    // the reduced Groebner basis is unique
    reduce_basis(&ring, &mut optimized).unwrap();
    reduce_basis(&ring, &mut brute_force).unwrap();
    sort_by_lm(&ring, &mut optimized);
    sort_by_lm(&ring, &mut brute_force);
    assert_eq!(optimized.len(), brute_force.len());
    for (f, g) in optimized.iter().zip(brute_force.iter()) {
        assert_el_eq!(ring, *f, *g);
    }
}

#[test]
fn test_gb_lex() {
    let ring = PolyRing::new(Zn::new(65537), Lex);
    let s = ring.indeterminate("s");
    let t = ring.indeterminate("t");
    let c = |c: i64| ring.from_int(c);
    let s_pow = |e: usize| ring.pow(ring.clone_el(&s), e);
    let t_pow = |e: usize| ring.pow(ring.clone_el(&t), e);

    let f = ring.sum([
        c(1), t_pow(2), ring.mul(c(2), s_pow(1)), ring.mul(ring.add(c(1), t_pow(1)), s_pow(2))
    ]);
    let g = ring.sum([
        c(3), t_pow(1), ring.mul(ring.add(c(2), t_pow(1)), s_pow(1)), ring.mul(ring.sum([c(1), t_pow(1), t_pow(2)]), s_pow(2))
    ]);
    let expected = [
        ring.sum([t_pow(8), ring.mul(c(2), t_pow(7)), ring.mul(c(3), t_pow(6)), ring.mul(c(-5), t_pow(5)), ring.mul(c(-10), t_pow(4)), ring.mul(c(-7), t_pow(3)), ring.mul(c(8), t_pow(2)), ring.mul(c(8), t_pow(1)), c(4)]),
        ring.sum([ring.mul(c(2), s_pow(1)), t_pow(6), ring.mul(c(3), t_pow(5)), ring.mul(c(6), t_pow(4)), t_pow(3), ring.mul(c(-7), t_pow(2)), ring.mul(c(-12), t_pow(1)), c(-2)])
    ];

    let mut gb = groebner_basis(&ring, vec![f, g]).unwrap();

    assert_eq!(2, gb.len());
    gb.sort_by_key(|f| ring.appearing_variables(f).len());
    for (f, e) in gb.into_iter().zip(expected.into_iter()) {
        assert_el_eq!(ring, ring.normalize(e), f);
    }
}

#[test]
fn test_criteria_logging() {
    let ring = PolyRing::new(Zn::new(17), DegRevLex);
    let generators = vec![
        ring.monomial(m(&[("x", 1), ("y", 1)])),
        ring.monomial(m(&[("y", 1), ("z", 1)])),
        ring.monomial(m(&[("x", 1), ("z", 1)]))
    ];

    let controller = RecordProgress::default();
    let basis = buchberger(&ring, generators.clone(), Criteria::ALL, controller.clone()).unwrap();
    assert_eq!(3, basis.len());
    assert_eq!("buchberger(len=3): --h done\n", *controller.0.borrow());

    let controller = RecordProgress::default();
    let basis = buchberger(&ring, generators.clone(), Criteria::NONE, controller.clone()).unwrap();
    assert_eq!(3, basis.len());
    assert_eq!("buchberger(len=3): --- done\n", *controller.0.borrow());

    let controller = RecordProgress::default();
    let coprime = vec![ring.monomial(m(&[("x", 3)])), ring.monomial(m(&[("y", 3)]))];
    let basis = buchberger(&ring, coprime, Criteria::ALL, controller.clone()).unwrap();
    assert_eq!(2, basis.len());
    assert_eq!("buchberger(len=2): c done\n", *controller.0.borrow());
}

#[test]
fn test_zero_generator() {
    let ring = PolyRing::new(Zn::new(17), DegRevLex);
    let x = ring.indeterminate("x");
    assert_eq!(Err(AlgebraError::ZeroGenerator(1)), find_basis(&ring, vec![ring.clone_el(&x), ring.zero()]).map(|_| ()));
    assert_eq!(Err(AlgebraError::ZeroGenerator(0)), find_basis_brute_force(&ring, vec![ring.zero()]).map(|_| ()));
    let mut basis = vec![ring.zero(), x];
    assert_eq!(Err(AlgebraError::ZeroGenerator(0)), reduce_basis(&ring, &mut basis));
    assert_eq!(2, basis.len());

    assert_eq!(0, find_basis(&ring, Vec::new()).unwrap().len());
    let mut empty = Vec::new();
    reduce_basis(&ring, &mut empty).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_reduce_basis_removes_redundant() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, Lex);
    let x = ring.indeterminate("x");
    let y = ring.indeterminate("y");
    // x^2 is redundant, and 2x + 4y has to be scaled
    let mut basis = vec![
        ring.mul_ref(&x, &x),
        ring.add(ring.mul(ring.from_int(2), ring.clone_el(&x)), ring.mul(ring.from_int(4), ring.clone_el(&y))),
        ring.mul_ref(&y, &y)
    ];
    let controller = RecordProgress::default();
    inter_reduce(&ring, &mut basis, controller.clone()).unwrap();
    assert_eq!("inter_reduce(len=3): x done\n", *controller.0.borrow());
    assert_eq!(2, basis.len());
    assert_el_eq!(ring, ring.add(ring.clone_el(&x), ring.mul(ring.from_int(2), ring.clone_el(&y))), basis[0]);
    assert_el_eq!(ring, ring.mul_ref(&y, &y), basis[1]);

    let before = basis.clone();
    reduce_basis(&ring, &mut basis).unwrap();
    assert_eq!(before.len(), basis.len());
    for (f, g) in before.iter().zip(basis.iter()) {
        assert_el_eq!(ring, *f, *g);
    }
}

#[test]
fn test_random_ideal_membership() {
    let ring = PolyRing::new(Zn::new(65537), DegRevLex);
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..3 {
        let generators = (0..2).map(|_| ring.from_terms(
            crate::rings::multivariate::generic_tests::random_monomials(rng.rand_u64() as u128, 3, 1).into_iter().map(|mon| (rng.rand_range(1..65537), mon))
        )).filter(|f| !ring.is_zero(f)).collect::<Vec<_>>();

        let gb = find_basis(&ring, generators.clone()).unwrap();
        let gb_brute_force = find_basis_brute_force(&ring, generators.clone()).unwrap();
        for f in &gb {
            assert!(ideal_contains(&ring, &gb_brute_force, f).unwrap());
        }
        for f in &gb_brute_force {
            assert!(ideal_contains(&ring, &gb, f).unwrap());
        }
        let combination = ring.sum(generators.iter().map(|f| ring.mul_ref(f, &ring.monomial(m(&[("x", 1), ("w", 1)])))));
        assert!(ideal_contains(&ring, &gb, &combination).unwrap());
    }
}
