use core::fmt;
use std::ops::{Deref, Mul, Neg};

use num_traits::One;

use crate::ops::{invert, multiply_by_scalar};

/// Compile-time 2-dimensional vector, convertible into a [`Vector`].
pub type Vector2D<T> = [T; 2];
/// Compile-time 3-dimensional vector, convertible into a [`Vector`].
pub type Vector3D<T> = [T; 3];

/// An ordered, finite sequence of numbers.
///
/// The components are fixed when the vector is built. Reads go through
/// `Deref<Target = Vec<T>>`; there is no mutable access, so every operation
/// in [`crate::ops`] produces a new vector instead of touching its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Deref for Vector<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> Vector<T> {
    pub fn new(data: impl Into<Vec<T>>) -> Self {
        Self { data: data.into() }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: Default + Clone> Vector<T> {
    /// The zero vector with `len` components.
    pub fn zero(len: usize) -> Self {
        Self {
            data: vec![T::default(); len],
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> fmt::Display for Vector<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, component) in self.data.iter().enumerate() {
            write!(f, "{}", component)?;
            if i != self.data.len() - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, "}}")
    }
}

impl<T> Mul<T> for Vector<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        multiply_by_scalar(rhs, &self)
    }
}

impl<T> Neg for Vector<T>
where
    T: Copy + One + Neg<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        invert(&self)
    }
}

#[test]
fn test_vector_display() -> anyhow::Result<()> {
    let v = Vector::new([3, 0, 4]);
    assert_eq!(format!("{}", v), "{3 0 4}");
    assert_eq!(format!("{}", Vector::<i32>::new([])), "{}");
    Ok(())
}

#[test]
fn test_vector_construction() {
    let from_slice = Vector::new(&[1.5, -2.0][..]);
    let from_vec: Vector<f64> = vec![1.5, -2.0].into();
    let collected: Vector<f64> = [1.5, -2.0].into_iter().collect();
    assert_eq!(from_slice, from_vec);
    assert_eq!(from_vec, collected);
    assert_eq!(collected.len(), 2);
    assert_eq!(collected.into_inner(), vec![1.5, -2.0]);

    let fixed: Vector3D<i32> = [1, 2, 3];
    assert_eq!(Vector::from(fixed), Vector::new(vec![1, 2, 3]));
    assert_eq!(Vector::<i64>::zero(3), Vector::new([0, 0, 0]));
    assert!(Vector::<i64>::zero(0).is_empty());
}

#[test]
fn test_vector_iteration() {
    let planar: Vector2D<i32> = [3, -4];
    let v = Vector::from(planar);
    assert_eq!(v, Vector::new([3, -4]));

    let mut seen = Vec::new();
    for component in &v {
        seen.push(*component);
    }
    assert_eq!(seen, vec![3, -4]);
    assert_eq!((&v).into_iter().map(|c| c * c).sum::<i32>(), 25);
}

#[test]
fn test_vector_operators() {
    let v = Vector::new([-12, 4]);
    assert_eq!(v.clone() * -1, Vector::new([12, -4]));
    assert_eq!(-v, Vector::new([12, -4]));
    assert_eq!(-Vector::<f32>::new([]), Vector::new([]));
}

#[test]
fn test_vector_is_not_mutated_by_operators() {
    let v = Vector::new([2.0, 3.0]);
    let scaled = v.clone() * 2.0;
    assert_eq!(scaled, Vector::new([4.0, 6.0]));
    assert_eq!(v, Vector::new([2.0, 3.0]));
}
