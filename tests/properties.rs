use proptest::prelude::*;
use vector_algebra::{
    add, cross_product, dot_product, equals, invert, multiply_by_components, multiply_by_scalar,
    subtract, Vector, VectorError,
};

/// Small components keep every product and sum exact in i64.
fn vector(len: usize) -> impl Strategy<Value = Vector<i64>> {
    prop::collection::vec(-1000i64..=1000, len).prop_map(Vector::from)
}

fn scalar() -> impl Strategy<Value = i64> {
    -100i64..=100
}

fn dim() -> impl Strategy<Value = usize> {
    0usize..8
}

fn two_vectors() -> impl Strategy<Value = (Vector<i64>, Vector<i64>)> {
    dim().prop_flat_map(|d| (vector(d), vector(d)))
}

fn three_vectors() -> impl Strategy<Value = (Vector<i64>, Vector<i64>, Vector<i64>)> {
    dim().prop_flat_map(|d| (vector(d), vector(d), vector(d)))
}

/// A vector and a copy of it with one component nudged by `delta` (which may be zero).
fn nudged_pair() -> impl Strategy<Value = (Vector<i64>, Vector<i64>)> {
    (1usize..8)
        .prop_flat_map(|d| (prop::collection::vec(-1000i64..=1000, d), 0..d, -3i64..=3))
        .prop_map(|(components, index, delta)| {
            let mut nudged = components.clone();
            nudged[index] += delta;
            (Vector::from(components), Vector::from(nudged))
        })
}

/// Pairs that are identical, nearly identical, or unrelated.
fn comparable_pair() -> impl Strategy<Value = (Vector<i64>, Vector<i64>)> {
    prop_oneof![
        dim().prop_flat_map(vector).prop_map(|a| (a.clone(), a)),
        nudged_pair(),
        two_vectors(),
    ]
}

/// Two vectors whose lengths differ, in either order.
fn mismatched_pair() -> impl Strategy<Value = (Vector<i64>, Vector<i64>)> {
    (dim(), 1usize..4, any::<bool>())
        .prop_flat_map(|(len, extra, swap)| (vector(len), vector(len + extra), Just(swap)))
        .prop_map(|(a, b, swap)| if swap { (b, a) } else { (a, b) })
}

fn non_3d_vector() -> impl Strategy<Value = Vector<i64>> {
    prop_oneof![0usize..3, 4usize..8].prop_flat_map(vector)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn equals_is_reflexive_and_symmetric((a, b) in comparable_pair()) {
        prop_assert!(equals(&[a.clone()])?);
        prop_assert!(equals(&[a.clone(), a.clone(), a.clone()])?);
        prop_assert_eq!(
            equals(&[a.clone(), b.clone()])?,
            equals(&[b.clone(), a.clone()])?
        );
        prop_assert_eq!(equals(&[a.clone(), b.clone()])?, a == b);
    }

    #[test]
    fn equals_detects_a_single_changed_component((a, b) in nudged_pair()) {
        let same = a.iter().zip(b.iter()).all(|(x, y)| x == y);
        prop_assert_eq!(equals(&[a.clone(), b.clone()])?, same);
        prop_assert_eq!(equals(&[a.clone(), a.clone(), b])?, same);
    }

    #[test]
    fn addition_forms_an_abelian_group((u, v, w) in three_vectors()) {
        let zero = Vector::zero(u.len());

        prop_assert_eq!(
            add(&[u.clone(), add(&[v.clone(), w.clone()])?])?,
            add(&[add(&[u.clone(), v.clone()])?, w.clone()])?
        );
        prop_assert_eq!(add(&[u.clone(), v.clone()])?, add(&[v.clone(), u.clone()])?);
        prop_assert_eq!(add(&[v.clone(), zero.clone()])?, v.clone());
        prop_assert_eq!(add(&[v.clone(), invert(&v)])?, zero.clone());
        prop_assert_eq!(subtract(&[v.clone(), v.clone()])?, zero);
        prop_assert_eq!(
            subtract(&[u.clone(), v.clone(), w.clone()])?,
            subtract(&[subtract(&[u, v])?, w])?
        );
    }

    #[test]
    fn subtraction_is_not_commutative_for_distinct_vectors((u, v) in two_vectors()) {
        prop_assume!(u != v);
        prop_assert_ne!(subtract(&[u.clone(), v.clone()])?, subtract(&[v, u])?);
    }

    #[test]
    fn scalar_multiplication_axioms((v, w) in two_vectors(), c in scalar(), d in scalar()) {
        prop_assert_eq!(
            multiply_by_scalar(c + d, &v),
            add(&[multiply_by_scalar(c, &v), multiply_by_scalar(d, &v)])?
        );
        prop_assert_eq!(
            multiply_by_scalar(c, &add(&[v.clone(), w.clone()])?),
            add(&[multiply_by_scalar(c, &v), multiply_by_scalar(c, &w)])?
        );
        prop_assert_eq!(
            multiply_by_scalar(c * d, &v),
            multiply_by_scalar(c, &multiply_by_scalar(d, &v))
        );
        prop_assert_eq!(multiply_by_scalar(1, &v), v.clone());
        prop_assert_eq!(multiply_by_scalar(0, &v), Vector::zero(v.len()));
        prop_assert_eq!(multiply_by_scalar(-1, &v), invert(&v));
    }

    #[test]
    fn dot_product_is_commutative_and_distributive((u, v, w) in three_vectors()) {
        prop_assert_eq!(dot_product(&u, &v)?, dot_product(&v, &u)?);
        prop_assert_eq!(
            dot_product(&u, &add(&[v.clone(), w.clone()])?)?,
            dot_product(&u, &v)? + dot_product(&u, &w)?
        );
    }

    #[test]
    fn cross_product_is_anticommutative_and_distributive(
        u in vector(3),
        v in vector(3),
        w in vector(3)
    ) {
        prop_assert_eq!(cross_product(&v, &v)?, Vector::new([0, 0, 0]));
        prop_assert_eq!(
            cross_product(&u, &v)?,
            multiply_by_scalar(-1, &cross_product(&v, &u)?)
        );
        prop_assert_eq!(
            cross_product(&u, &add(&[v.clone(), w.clone()])?)?,
            add(&[cross_product(&u, &v)?, cross_product(&u, &w)?])?
        );
        // perpendicular to both operands
        let n = cross_product(&u, &v)?;
        prop_assert_eq!(dot_product(&n, &u)?, 0);
        prop_assert_eq!(dot_product(&n, &v)?, 0);
    }

    #[test]
    fn mismatched_lengths_are_rejected((a, b) in mismatched_pair()) {
        let expected = VectorError::DimensionMismatch {
            op: "add",
            expected: a.len(),
            actual: b.len(),
        };
        prop_assert_eq!(add(&[a.clone(), b.clone()]), Err(expected));
        prop_assert!(subtract(&[a.clone(), b.clone()]).is_err());
        prop_assert!(multiply_by_components(&[a.clone(), b.clone()]).is_err());
        prop_assert!(dot_product(&a, &b).is_err());
    }

    #[test]
    fn cross_product_rejects_non_3d_vectors(a in non_3d_vector(), b in vector(3)) {
        let expected = VectorError::DimensionMismatch {
            op: "cross product",
            expected: 3,
            actual: a.len(),
        };
        prop_assert_eq!(cross_product(&a, &b), Err(expected.clone()));
        prop_assert_eq!(cross_product(&b, &a), Err(expected));
    }
}

#[test]
fn errors_surface_through_anyhow() {
    let err: anyhow::Error = add::<i64>(&[]).unwrap_err().into();
    assert!(matches!(
        err.downcast_ref::<VectorError>(),
        Some(VectorError::Arity { op: "add" })
    ));
}
