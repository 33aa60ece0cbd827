//! End-to-end tests for Groebner basis computations over the rationals and prime fields

use polyideal::algorithms::buchberger::*;
use polyideal::assert_el_eq;
use polyideal::error::AlgebraError;
use polyideal::ring::*;
use polyideal::rings::multivariate::*;
use polyideal::rings::multivariate::ordered::*;
use polyideal::rings::rational::RationalField;
use polyideal::rings::zn::Zn;

#[test]
fn test_lex_elimination() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, Lex);
    let x = ring.indeterminate("x");
    let y = ring.indeterminate("y");

    let circle = ring.sum([ring.mul_ref(&x, &x), ring.mul_ref(&y, &y), ring.neg_one()]);
    let line = ring.sub_ref(&x, &y);

    let mut basis = find_basis(&ring, vec![ring.clone_el(&circle), ring.clone_el(&line)]).unwrap();
    assert!(is_groebner_basis(&ring, &basis).unwrap());
    reduce_basis(&ring, &mut basis).unwrap();

    // every leading coefficient is one
    for f in &basis {
        assert!(QQ.is_one(&ring.leading_coefficient(f)));
    }
    // some element only depends on y
    assert!(basis.iter().any(|f| {
        let vars = ring.appearing_variables(f);
        vars.len() == 1 && vars.contains_key("y")
    }));

    assert_eq!(2, basis.len());
    assert_el_eq!(ring, line, basis[0]);
    assert_el_eq!(ring, ring.sub(ring.mul_ref(&y, &y), ring.from_base(QQ.from_fraction(1, 2))), basis[1]);

    assert!(ideal_contains(&ring, &basis, &circle).unwrap());
    assert!(!ideal_contains(&ring, &basis, &x).unwrap());
}

#[test]
fn test_constant_generator() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, DegRevLex);
    let five = ring.from_int(5);

    let mut basis = find_basis(&ring, vec![five]).unwrap();
    assert_eq!(1, basis.len());
    reduce_basis(&ring, &mut basis).unwrap();
    assert_eq!(1, basis.len());
    assert_el_eq!(ring, ring.one(), basis[0]);

    let x = ring.indeterminate("x");
    let basis = groebner_basis(&ring, vec![ring.add_ref(&x, &ring.one()), ring.from_int(3)]).unwrap();
    assert_eq!(1, basis.len());
    assert!(ring.is_one(&basis[0]));
    assert!(ideal_contains(&ring, &basis, &ring.mul_ref(&x, &x)).unwrap());
}

#[test]
fn test_coprime_leading_monomials() {
    let ring = PolyRing::new(RationalField::RING, DegLex);
    let x = ring.indeterminate("x");
    let y = ring.indeterminate("y");
    let x3 = ring.pow(x, 3);
    let y3 = ring.pow(y, 3);

    let basis = find_basis(&ring, vec![ring.clone_el(&x3), ring.clone_el(&y3)]).unwrap();
    assert_eq!(2, basis.len());
    assert_el_eq!(ring, x3, basis[0]);
    assert_el_eq!(ring, y3, basis[1]);
}

#[test]
fn test_cyclic3() {
    let QQ = RationalField::RING;
    let ring = PolyRing::new(QQ, Lex);
    let x = ring.indeterminate("x");
    let y = ring.indeterminate("y");
    let z = ring.indeterminate("z");

    let generators = vec![
        ring.sum([ring.clone_el(&x), ring.clone_el(&y), ring.clone_el(&z)]),
        ring.sum([ring.mul_ref(&x, &y), ring.mul_ref(&y, &z), ring.mul_ref(&z, &x)]),
        ring.sub(ring.mul(ring.mul_ref(&x, &y), ring.clone_el(&z)), ring.one())
    ];

    let optimized = find_basis(&ring, generators.clone()).unwrap();
    let brute_force = find_basis_brute_force(&ring, generators.clone()).unwrap();

    // both bases generate the same ideal
    for f in &optimized {
        assert!(ideal_contains(&ring, &brute_force, f).unwrap());
    }
    for f in &brute_force {
        assert!(ideal_contains(&ring, &optimized, f).unwrap());
    }
    for f in &generators {
        assert!(ideal_contains(&ring, &optimized, f).unwrap());
    }

    let mut reduced = optimized;
    reduce_basis(&ring, &mut reduced).unwrap();
    reduced.sort_by(|f, g| Lex.compare(&ring.leading_monomial(g), &ring.leading_monomial(f)));

    let expected = [
        ring.sum([ring.clone_el(&x), ring.clone_el(&y), ring.clone_el(&z)]),
        ring.sum([ring.mul_ref(&y, &y), ring.mul_ref(&y, &z), ring.mul_ref(&z, &z)]),
        ring.sub(ring.pow(ring.clone_el(&z), 3), ring.one())
    ];
    assert_eq!(expected.len(), reduced.len());
    for (e, f) in expected.iter().zip(reduced.iter()) {
        assert_el_eq!(ring, *e, *f);
    }
}

#[test]
fn test_reduce_basis_idempotent() {
    let ring = PolyRing::new(Zn::new(65537), DegRevLex);
    let x = ring.indeterminate("x");
    let y = ring.indeterminate("y");
    let z = ring.indeterminate("z");

    let generators = vec![
        ring.sum([ring.mul_ref(&x, &x), ring.mul_ref(&y, &z), ring.from_int(2)]),
        ring.sub(ring.mul_ref(&x, &y), ring.mul_ref(&z, &z)),
        ring.sum([ring.mul_ref(&y, &y), ring.clone_el(&x), ring.from_int(-1)])
    ];

    let mut basis = groebner_basis(&ring, generators).unwrap();
    assert!(is_groebner_basis(&ring, &basis).unwrap());
    for f in &basis {
        for g in &basis {
            if !std::ptr::eq(f, g) {
                assert!(!ring.leading_monomial(f).is_divisible_by(&ring.leading_monomial(g)));
            }
        }
    }

    let before = basis.clone();
    reduce_basis(&ring, &mut basis).unwrap();
    assert_eq!(before.len(), basis.len());
    for (f, g) in before.iter().zip(basis.iter()) {
        assert_el_eq!(ring, *f, *g);
    }
}

#[test]
fn test_errors() {
    let ring = PolyRing::new(Zn::new(7), DegLex);
    let x = ring.indeterminate("x");
    assert_eq!(Err(AlgebraError::ZeroGenerator(2)), find_basis(&ring, vec![ring.one(), ring.clone_el(&x), ring.zero()]).map(|_| ()));
    assert_eq!(Err(AlgebraError::ZeroOperand), s_poly(&ring, &ring.zero(), &x).map(|_| ()));
    assert_eq!(Err(AlgebraError::ZeroDivisor), ring.reduce(&x, &[ring.zero()]).map(|_| ()));
    assert_eq!(Err(AlgebraError::IndivisibleMonomial), Monomial::variable("x").div(&Monomial::variable("y")));
}

#[test]
fn test_serialize_basis() {
    let ring = PolyRing::new(Zn::new(17), DegRevLex);
    let x = ring.indeterminate("x");
    let y = ring.indeterminate("y");
    let basis = groebner_basis(&ring, vec![
        ring.sum([ring.mul_ref(&x, &x), ring.mul_ref(&y, &y), ring.neg_one()]),
        ring.sub(ring.mul_ref(&x, &y), ring.from_int(2))
    ]).unwrap();

    let json = serde_json::to_value(&basis).unwrap();
    let restored = match json {
        serde_json::Value::Array(elements) => elements.into_iter().map(|f| ring.deserialize_el(f).unwrap()).collect::<Vec<_>>(),
        _ => panic!("expected a list")
    };
    assert_eq!(basis.len(), restored.len());
    for (f, g) in basis.iter().zip(restored.iter()) {
        assert_el_eq!(ring, *f, *g);
    }
}
