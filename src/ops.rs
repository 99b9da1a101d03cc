//! Stateless vector algebra.
//!
//! Variadic operations take a slice of vectors and fold it left to right,
//! seeded by the first vector. Every operation returns a new vector.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use num_traits::{Float, One};

use crate::error::{Result, VectorError};
use crate::vector::{Vector, Vector3D};

fn fold_components<T, F>(
    op: &'static str,
    vectors: &[Vector<T>],
    combine: F,
) -> Result<Vector<T>>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    let (first, rest) = vectors.split_first().ok_or(VectorError::Arity { op })?;

    rest.iter().try_fold(first.clone(), |total, current| {
        if current.len() != total.len() {
            return Err(VectorError::DimensionMismatch {
                op,
                expected: total.len(),
                actual: current.len(),
            });
        }

        Ok(total
            .iter()
            .zip(current.iter())
            .map(|(&a, &b)| combine(a, b))
            .collect())
    })
}

/// Returns `true` when every vector equals its predecessor in `vectors`.
///
/// Vectors of different lengths are unequal, not an error.
pub fn equals<T: PartialEq>(vectors: &[Vector<T>]) -> Result<bool> {
    if vectors.is_empty() {
        return Err(VectorError::Arity { op: "compare" });
    }

    Ok(vectors.windows(2).all(|pair| pair[0] == pair[1]))
}

pub fn add<T>(vectors: &[Vector<T>]) -> Result<Vector<T>>
where
    T: Copy + Add<Output = T>,
{
    fold_components("add", vectors, |a, b| a + b)
}

/// Alias of [`add`].
pub fn sum<T>(vectors: &[Vector<T>]) -> Result<Vector<T>>
where
    T: Copy + Add<Output = T>,
{
    add(vectors)
}

/// Left-associative: `subtract(&[a, b, c])` is `(a - b) - c`.
pub fn subtract<T>(vectors: &[Vector<T>]) -> Result<Vector<T>>
where
    T: Copy + Sub<Output = T>,
{
    fold_components("subtract", vectors, |a, b| a - b)
}

pub fn multiply_by_components<T>(vectors: &[Vector<T>]) -> Result<Vector<T>>
where
    T: Copy + Mul<Output = T>,
{
    fold_components("multiply", vectors, |a, b| a * b)
}

pub fn multiply_by_scalar<T>(scalar: T, vector: &Vector<T>) -> Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    vector.iter().map(|&component| component * scalar).collect()
}

/// `multiply_by_scalar(-1, vector)`. Zero components of a float vector come
/// back as `-0.0`.
pub fn invert<T>(vector: &Vector<T>) -> Vector<T>
where
    T: Copy + One + Neg<Output = T> + Mul<Output = T>,
{
    multiply_by_scalar(-T::one(), vector)
}

pub fn dot_product<T>(a: &Vector<T>, b: &Vector<T>) -> Result<T>
where
    T: Copy + Default + Mul<Output = T> + AddAssign,
{
    if a.len() != b.len() {
        return Err(VectorError::DimensionMismatch {
            op: "dot product",
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut sum = T::default();
    for (&x, &y) in a.iter().zip(b.iter()) {
        sum += x * y;
    }

    Ok(sum)
}

fn as_3d<T: Copy>(vector: &Vector<T>) -> Result<Vector3D<T>> {
    <Vector3D<T>>::try_from(vector.as_slice()).map_err(|_| VectorError::DimensionMismatch {
        op: "cross product",
        expected: 3,
        actual: vector.len(),
    })
}

/// Cross product of two 3-dimensional vectors. Any other length is rejected.
pub fn cross_product<T>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    let [a0, a1, a2] = as_3d(a)?;
    let [b0, b1, b2] = as_3d(b)?;

    Ok(Vector::new([
        a1 * b2 - a2 * b1,
        a2 * b0 - a0 * b2,
        a0 * b1 - a1 * b0,
    ]))
}

/// Euclidean length. The empty vector has magnitude zero.
pub fn magnitude<T: Float>(vector: &Vector<T>) -> T {
    vector
        .iter()
        .fold(T::zero(), |sum, &component| sum + component.powi(2))
        .sqrt()
}

/// Scales `vector` so its magnitude becomes `target`.
///
/// A zero-magnitude vector stays the zero vector whatever the target.
/// Fails with [`VectorError::InvalidArgument`] if `target` is negative or NaN.
pub fn resize<T>(vector: &Vector<T>, target: T) -> Result<Vector<T>>
where
    T: Float + std::fmt::Display,
{
    if target.is_nan() || target < T::zero() {
        return Err(VectorError::InvalidArgument(format!(
            "target magnitude must be non-negative, got {}",
            target
        )));
    }

    let current = magnitude(vector);
    if current == T::zero() {
        log::trace!(
            "resize of a zero-magnitude vector of length {}, returning the zero vector",
            vector.len()
        );
        return Ok(multiply_by_scalar(T::zero(), vector));
    }

    Ok(multiply_by_scalar(target / current, vector))
}

pub fn normalize<T>(vector: &Vector<T>) -> Result<Vector<T>>
where
    T: Float + std::fmt::Display,
{
    resize(vector, T::one())
}

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
fn v<T: Clone>(components: &[T]) -> Vector<T> {
    Vector::new(components)
}

#[test]
fn test_add() -> anyhow::Result<()> {
    assert_eq!(add(&[v(&[1, 5, 3])])?, v(&[1, 5, 3]));
    assert_eq!(add(&[v(&[2, -1, 5]), v(&[1, 1, -1])])?, v(&[3, 0, 4]));
    assert_eq!(
        add(&[v(&[2, -1, 5]), v(&[0, 3, 7]), v(&[1, 1, -1])])?,
        v(&[3, 3, 11])
    );
    assert_eq!(sum(&[v(&[2, -1, 5]), v(&[1, 1, -1])])?, v(&[3, 0, 4]));
    Ok(())
}

#[test]
fn test_add_without_vectors() {
    let err = add::<i32>(&[]).unwrap_err();
    assert_eq!(err, VectorError::Arity { op: "add" });
}

#[test]
fn test_add_differing_lengths() {
    assert_eq!(
        add(&[v(&[1]), v(&[0, 3])]).unwrap_err(),
        VectorError::DimensionMismatch {
            op: "add",
            expected: 1,
            actual: 2
        }
    );
    assert!(add(&[v(&[1, 3]), v(&[0])]).is_err());
    // the accumulator length is what the third vector is checked against
    assert_eq!(
        add(&[v(&[1, 3]), v(&[0, 1]), v(&[4, 4, 4])]).unwrap_err(),
        VectorError::DimensionMismatch {
            op: "add",
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_add_leaves_inputs_untouched() -> anyhow::Result<()> {
    let vectors = [v(&[2, -1, 5]), v(&[1, 1, -1])];
    let total = add(&vectors)?;
    assert_eq!(total, v(&[3, 0, 4]));
    assert_eq!(vectors, [v(&[2, -1, 5]), v(&[1, 1, -1])]);
    Ok(())
}

#[test]
fn test_subtract() -> anyhow::Result<()> {
    assert_eq!(subtract(&[v(&[3, -15, 12])])?, v(&[3, -15, 12]));
    assert_eq!(subtract(&[v(&[2, -1, 5]), v(&[1, 1, -1])])?, v(&[1, -2, 6]));
    assert_eq!(
        subtract(&[v(&[2, -1, 5]), v(&[0, 3, 7]), v(&[1, 1, -1])])?,
        v(&[1, -5, -1])
    );
    Ok(())
}

#[test]
fn test_subtract_errors() {
    assert_eq!(
        subtract::<i32>(&[]).unwrap_err(),
        VectorError::Arity { op: "subtract" }
    );
    assert!(matches!(
        subtract(&[v(&[1]), v(&[0, 3])]),
        Err(VectorError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        subtract(&[v(&[1, 3]), v(&[0])]),
        Err(VectorError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_subtract_is_not_commutative() -> anyhow::Result<()> {
    let u = v(&[138, 923]);
    let w = v(&[-883, 3]);
    assert_ne!(
        subtract(&[u.clone(), w.clone()])?,
        subtract(&[w, u.clone()])?
    );
    assert_eq!(subtract(&[u.clone(), u])?, v(&[0, 0]));
    Ok(())
}

#[test]
fn test_multiply_by_components() -> anyhow::Result<()> {
    assert_eq!(multiply_by_components(&[v(&[1, 5, 3])])?, v(&[1, 5, 3]));
    assert_eq!(
        multiply_by_components(&[v(&[2, -1, 5]), v(&[1, 1, -1])])?,
        v(&[2, -1, -5])
    );
    assert_eq!(
        multiply_by_components(&[v(&[2, -1, 5]), v(&[0, 3, 7]), v(&[1, 1, -1])])?,
        v(&[0, -3, -35])
    );
    Ok(())
}

#[test]
fn test_multiply_by_components_errors() {
    assert_eq!(
        multiply_by_components::<i32>(&[]).unwrap_err(),
        VectorError::Arity { op: "multiply" }
    );
    assert!(multiply_by_components(&[v(&[1]), v(&[0, 3])]).is_err());
    assert!(multiply_by_components(&[v(&[1, 3]), v(&[0])]).is_err());
}

#[test]
fn test_multiply_by_scalar() {
    assert_eq!(multiply_by_scalar(3, &v(&[-3, 1, 12])), v(&[-9, 3, 36]));
    assert_eq!(multiply_by_scalar(-2, &v(&[11, -9])), v(&[-22, 18]));
    assert_eq!(multiply_by_scalar(1, &v(&[710, 92])), v(&[710, 92]));
    assert_eq!(multiply_by_scalar(0, &v(&[29, 39, 12])), v(&[0, 0, 0]));
    assert_eq!(multiply_by_scalar(-1, &v(&[-12, 4])), v(&[12, -4]));
    assert!(multiply_by_scalar(4.0, &Vector::<f64>::new([])).is_empty());
}

#[test]
fn test_invert() {
    assert_eq!(invert(&v(&[31])), v(&[-31]));
    assert_eq!(invert(&v(&[2, -8])), v(&[-2, 8]));
    assert_eq!(invert(&v(&[-1, 17, 381])), v(&[1, -17, -381]));
    assert!(invert(&Vector::<i32>::new([])).is_empty());
}

#[test]
fn test_invert_zero_component() {
    let inverted = invert(&v(&[0.0_f64]));
    assert_eq!(inverted, v(&[0.0]));
    assert!(inverted[0].is_sign_negative());
}

#[test]
fn test_equals() -> anyhow::Result<()> {
    assert!(equals(&[v(&[12, 3, 7]), v(&[12, 3, 7]), v(&[12, 3, 7])])?);
    assert!(equals(&[v(&[12, 3, 7])])?);

    assert!(!equals(&[v(&[12, 3]), v(&[12, 4])])?);
    assert!(!equals(&[v(&[12, 3]), v(&[12, 3]), v(&[12, 4])])?);
    assert!(!equals(&[v(&[12, 3, 7]), v(&[-12, -3, -7])])?);

    assert!(!equals(&[v(&[1, 3, 7]), v(&[1, 3])])?);
    assert!(!equals(&[v(&[3, 7]), v(&[3, 7, 12])])?);
    Ok(())
}

#[test]
fn test_equals_without_vectors() {
    assert_eq!(
        equals::<f64>(&[]).unwrap_err(),
        VectorError::Arity { op: "compare" }
    );
}

#[test]
fn test_dot_product() -> anyhow::Result<()> {
    assert_eq!(dot_product(&v(&[-1, -2, 3]), &v(&[4, 0, -8]))?, -28);
    assert_eq!(dot_product::<f32>(&v(&[]), &v(&[]))?, 0.0);
    assert_eq!(dot_product(&v(&[0.5, 1.5, -2.0]), &v(&[2.0, 4.0, 0.25]))?, 6.5);

    let u = v(&[-23, 9, 17, 3]);
    let w = v(&[-1, -13, 9, -1]);
    assert_eq!(dot_product(&u, &w)?, dot_product(&w, &u)?);
    Ok(())
}

#[test]
fn test_dot_product_differing_lengths() {
    assert_eq!(
        dot_product(&v(&[2, 4]), &v(&[-1, 3, 9])).unwrap_err(),
        VectorError::DimensionMismatch {
            op: "dot product",
            expected: 2,
            actual: 3
        }
    );
    assert!(dot_product(&v(&[-12, 7, 9, 199]), &v(&[4, 4])).is_err());
}

#[test]
fn test_dot_product_distributes_over_add() -> anyhow::Result<()> {
    let u = v(&[48, -9, 71, 104]);
    let a = v(&[-13, 33, 119, 63]);
    let b = v(&[0, 2, -98, 4]);
    assert_eq!(
        dot_product(&u, &add(&[a.clone(), b.clone()])?)?,
        dot_product(&u, &a)? + dot_product(&u, &b)?
    );
    Ok(())
}

#[test]
fn test_cross_product() -> anyhow::Result<()> {
    assert_eq!(
        cross_product(&v(&[1, -7, 1]), &v(&[5, 2, 4]))?,
        v(&[-30, 1, 37])
    );

    let same = v(&[3, -1, 12]);
    assert_eq!(cross_product(&same, &same)?, v(&[0, 0, 0]));

    let u = v(&[-330, 819, 12]);
    let w = v(&[9, -381, 138]);
    assert_eq!(
        cross_product(&u, &w)?,
        multiply_by_scalar(-1, &cross_product(&w, &u)?)
    );
    Ok(())
}

#[test]
fn test_cross_product_rejects_other_dimensions() {
    assert_eq!(
        cross_product(&v(&[]), &v(&[1, 3, 0])).unwrap_err(),
        VectorError::DimensionMismatch {
            op: "cross product",
            expected: 3,
            actual: 0
        }
    );
    assert_eq!(
        cross_product(&v(&[0, 3, -2]), &v(&[1, 3])).unwrap_err(),
        VectorError::DimensionMismatch {
            op: "cross product",
            expected: 3,
            actual: 2
        }
    );
    assert!(cross_product(&v(&[3, 5, 12, -8]), &v(&[-199, 3, 80, 10])).is_err());
}

#[test]
fn test_magnitude() {
    assert_eq!(magnitude(&v(&[1.0_f64, 3.0])), (1.0_f64 + 9.0).sqrt());
    assert_eq!(magnitude(&v(&[3.0_f64])), 3.0);
    assert_eq!(
        magnitude(&v(&[-23.0_f64, 199.0, 0.0, 99913.0])),
        (529.0_f64 + 39601.0 + 9982607569.0).sqrt()
    );
    assert_eq!(magnitude::<f64>(&v(&[])), 0.0);
    assert_eq!(magnitude(&v(&[0.0_f32, -0.0])), 0.0);
}

#[test]
fn test_resize() -> anyhow::Result<()> {
    init_logger();
    assert_eq!(resize(&v(&[0.0, 0.0]), 5.0)?, v(&[0.0, 0.0]));
    assert_eq!(resize(&v(&[3.0, 4.0]), 10.0)?, v(&[6.0, 8.0]));
    assert_eq!(resize(&v(&[3.0, 4.0]), 0.0)?, v(&[0.0, 0.0]));
    assert!(resize::<f64>(&v(&[]), 2.0)?.is_empty());
    Ok(())
}

#[test]
fn test_resize_rejects_negative_target() {
    let err = resize(&v(&[3.0, 4.0]), -1.0).unwrap_err();
    assert!(matches!(err, VectorError::InvalidArgument(_)));
    assert_eq!(
        err.to_string(),
        "invalid argument: target magnitude must be non-negative, got -1"
    );
    assert!(resize(&v(&[3.0, 4.0]), f64::NAN).is_err());
    // a zero-magnitude input does not bypass the check
    assert!(resize(&v(&[0.0, 0.0]), -2.0).is_err());
}

#[test]
fn test_normalize() -> anyhow::Result<()> {
    let unit = normalize(&v(&[3.0_f64, 4.0]))?;
    approx::assert_relative_eq!(unit[0], 0.6);
    approx::assert_relative_eq!(unit[1], 0.8);
    approx::assert_relative_eq!(magnitude(&unit), 1.0);

    assert_eq!(normalize(&v(&[0.0_f64, 0.0, 0.0]))?, v(&[0.0, 0.0, 0.0]));
    Ok(())
}
