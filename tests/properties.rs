use fuzzy_primer::{alpha_cut, intersection, union, CompositionOp, MembershipFn, OrOp, Relation};
use proptest::prelude::*;

fn degrees(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..=1.0, len)
}

fn pair_of_sets() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (0usize..32).prop_flat_map(|len| (degrees(len), degrees(len)))
}

fn relation(rows: usize, cols: usize) -> impl Strategy<Value = Relation<f64>> {
    prop::collection::vec(degrees(cols), rows).prop_map(|rows| Relation::from_rows(rows).unwrap())
}

fn square_relation() -> impl Strategy<Value = Relation<f64>> {
    (1usize..6).prop_flat_map(|n| relation(n, n))
}

proptest! {
    #[test]
    fn triangular_stays_in_unit_interval(x in -100.0f64..100.0, a in -10.0f64..0.0, db in 0.1f64..5.0, dc in 0.1f64..5.0) {
        let (b, c) = (a + db, a + db + dc);
        let tri = MembershipFn::triangular(a, b, c).unwrap();
        let mu = tri.call(x);

        prop_assert!((0.0..=1.0).contains(&mu));
        prop_assert_eq!(tri.call(b), 1.0);

        if x <= a || x >= c {
            prop_assert_eq!(mu, 0.0);
        }
    }

    #[test]
    fn array_evaluation_matches_scalar(xs in prop::collection::vec(-20.0f64..20.0, 0..64)) {
        let shapes = [
            MembershipFn::triangular(-5., 0., 5.).unwrap(),
            MembershipFn::trapezoidal(-6., -2., 2., 6.).unwrap(),
            MembershipFn::gaussian(1., 2.).unwrap(),
            MembershipFn::bell(2., 3., 0.).unwrap(),
            MembershipFn::sigmoid(-1.5, 2.).unwrap(),
        ];

        for shape in shapes {
            let values = shape.eval(&xs);

            prop_assert_eq!(values.len(), xs.len());

            for (x, mu) in xs.iter().zip(values) {
                prop_assert_eq!(shape.call(*x), mu);
                prop_assert!((0.0..=1.0).contains(&mu));
            }
        }
    }

    #[test]
    fn alpha_cut_is_crisp(m in degrees(16), alpha in 0.0f64..=1.0) {
        let cut = alpha_cut(&m, alpha).unwrap();

        prop_assert_eq!(cut.len(), m.len());

        for (mu, c) in m.iter().zip(&cut) {
            prop_assert_eq!(*c, if *mu >= alpha { 1.0 } else { 0.0 });
        }

        prop_assert!(alpha_cut(&m, 0.0).unwrap().iter().all(|&c| c == 1.0));
        prop_assert!(alpha_cut(&m, 1.1).unwrap().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn union_and_intersection_commute((a, b) in pair_of_sets()) {
        prop_assert_eq!(union(&a, &b).unwrap(), union(&b, &a).unwrap());
        prop_assert_eq!(intersection(&a, &b).unwrap(), intersection(&b, &a).unwrap());
        prop_assert_eq!(OrOp::ProbOr.call(&a, &b).unwrap(), OrOp::ProbOr.call(&b, &a).unwrap());
    }

    #[test]
    fn union_and_intersection_are_idempotent(a in degrees(24)) {
        prop_assert_eq!(union(&a, &a).unwrap(), a.clone());
        prop_assert_eq!(intersection(&a, &a).unwrap(), a);
    }

    #[test]
    fn intersection_never_exceeds_union((a, b) in pair_of_sets()) {
        let lo = intersection(&a, &b).unwrap();
        let hi = union(&a, &b).unwrap();

        prop_assert!(lo.iter().zip(&hi).all(|(l, h)| l <= h));
    }

    #[test]
    fn max_min_composition_is_associative(
        r in relation(3, 4),
        s in relation(4, 2),
        t in relation(2, 5)
    ) {
        let left = r.max_min(&s).unwrap().max_min(&t).unwrap();
        let right = r.max_min(&s.max_min(&t).unwrap()).unwrap();

        prop_assert_eq!(left.shape(), (3, 5));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn max_min_dominates_max_prod(r in relation(3, 3), s in relation(3, 4)) {
        let max_min = r.compose(&s, CompositionOp::MaxMin).unwrap();
        let max_prod = r.compose(&s, CompositionOp::MaxProd).unwrap();

        for i in 0..3 {
            for k in 0..4 {
                prop_assert!(max_prod[(i, k)] <= max_min[(i, k)]);
            }
        }
    }

    #[test]
    fn transitive_iff_self_composition_is_contained(r in square_relation()) {
        let squared = r.max_min(&r).unwrap();
        let (n, _) = r.shape();
        let contained = (0..n).all(|i| (0..n).all(|k| squared[(i, k)] <= r[(i, k)]));

        prop_assert_eq!(r.is_transitive().unwrap(), contained);
    }

    #[test]
    fn transpose_symmetry(r in square_relation()) {
        let n = r.rows();
        let transposed = Relation::from_rows((0..n).map(|j| (0..n).map(|i| r[(i, j)]).collect::<Vec<_>>())).unwrap();

        prop_assert_eq!(r.is_symmetric().unwrap(), r == transposed);
    }
}
