//! Algebraic properties of `Vector` and `Line` over random 3-place decimals.

use proptest::prelude::*;
use proptest::test_runner::Config;
use vecline::prelude::*;

fn coord() -> impl Strategy<Value = Decimal> {
    (-100_000i64..100_000).prop_map(|x| Decimal::new(x, 3))
}

fn vector(dim: usize) -> impl Strategy<Value = Vector> {
    prop::collection::vec(coord(), dim).prop_map(|c| Vector::from_decimals(c).unwrap())
}

fn vector_pair() -> impl Strategy<Value = (Vector, Vector)> {
    (1usize..=4).prop_flat_map(|n| (vector(n), vector(n)))
}

fn nonzero_vector() -> impl Strategy<Value = Vector> {
    (1usize..=4)
        .prop_flat_map(vector)
        .prop_filter("nonzero", |v| !v.is_zero())
}

fn proper_line() -> impl Strategy<Value = Line> {
    (vector(2), coord())
        .prop_filter("nonzero normal", |(n, _)| !n.is_zero())
        .prop_map(|(n, k)| Line::new(n, k).unwrap())
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn add_then_subtract_round_trips((v, w) in vector_pair()) {
        let back = v.add(&w).unwrap().subtract(&w).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn scalar_identity_and_annihilator((v, _) in vector_pair()) {
        prop_assert_eq!(v.scalar_multiply(1).unwrap(), v.clone());
        prop_assert!(v.scalar_multiply(0).unwrap().is_zero());
    }

    #[test]
    fn dot_product_commutes((v, w) in vector_pair()) {
        prop_assert_eq!(v.dot_product(&w).unwrap(), w.dot_product(&v).unwrap());
    }

    #[test]
    fn cross_product_is_orthogonal_to_operands(v in vector(3), w in vector(3)) {
        let c = v.cross_product(&w).unwrap();
        prop_assert!(c.is_orthogonal(&v).unwrap());
        prop_assert!(c.is_orthogonal(&w).unwrap());
    }

    #[test]
    fn nonzero_vector_is_parallel_not_orthogonal_to_itself(v in nonzero_vector()) {
        prop_assert!(v.is_parallel(&v).unwrap());
        prop_assert!(!v.is_orthogonal(&v).unwrap());
    }

    #[test]
    fn scaled_copies_are_parallel(v in nonzero_vector(), k in prop_oneof![-50i64..-1, 1i64..50]) {
        let w = v.scalar_multiply(k).unwrap();
        prop_assert!(v.is_parallel(&w).unwrap());
    }

    #[test]
    fn direction_ignores_decimal_scale(v in nonzero_vector(), e in -20i32..=20) {
        let factor = Decimal::from_scientific(&format!("1e{e}")).unwrap();
        let w = v.scalar_multiply(factor).unwrap();
        prop_assert!(w.magnitude().is_ok());
        let drift = w.normalize().unwrap().subtract(&v.normalize().unwrap()).unwrap();
        prop_assert!(drift.is_zero_eps(1e-20), "drift {}", drift);
    }

    #[test]
    fn components_sum_back((v, b) in vector_pair()) {
        prop_assume!(!b.is_zero());
        let par = v.parallel_component(&b).unwrap();
        let orth = v.orthogonal_component(&b).unwrap();
        let sum = par.add(&orth).unwrap();
        let diff = sum.subtract(&v).unwrap();
        prop_assert!(diff.is_zero_eps(1e-15));
        prop_assert!(par.is_parallel(&b).unwrap());
    }

    #[test]
    fn intersection_point_lies_on_both_lines(l1 in proper_line(), l2 in proper_line()) {
        if let Intersection::Point(p) = l1.intersect(&l2).unwrap() {
            for l in [&l1, &l2] {
                let residual = l.normal_vector().dot_product(&p).unwrap() - l.constant_term();
                prop_assert!(residual.abs() < Decimal::new(1, 12), "residual {}", residual);
            }
        }
    }

    #[test]
    fn shifted_lines_are_parallel_not_coincident(l in proper_line(), shift in 1i64..1000) {
        let k = l.constant_term() + Decimal::new(shift, 2);
        let moved = Line::new(l.normal_vector().clone(), k).unwrap();
        prop_assert!(l.is_parallel_to(&moved));
        prop_assert!(!l.is_coincident_with(&moved).unwrap());
        prop_assert_eq!(l.intersect(&moved).unwrap(), Intersection::Parallel);
        prop_assert_eq!(l.intersect(&l).unwrap(), Intersection::Coincident(l.clone()));
    }
}

#[test]
fn degenerate_line_has_no_basepoint() {
    let l = Line::new(Vector::new(["0", "0"]).unwrap(), "5").unwrap();
    assert!(l.basepoint().is_none());
}

#[test]
fn two_dimensional_sum_to_three_places() {
    let sum = Vector::new([8.218, -9.341])
        .unwrap()
        .add(&Vector::new([-1.129, 2.111]).unwrap())
        .unwrap();
    let rounded: Vec<Decimal> = sum.iter().map(|x| x.round_dp(3)).collect();
    assert_eq!(
        rounded,
        vec![Decimal::new(7089, 3), Decimal::new(-7230, 3)]
    );
}
