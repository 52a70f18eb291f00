//! Floating point numbers and complex numbers built from them.
//!
//! [F64] wraps `f64` so that it can be used as a ring element: equality and
//! hashing go through the bit pattern, with all NaNs identified and `-0`
//! normalized to `0`.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use rand::Rng;

use super::{EuclideanDomain, Field, Ring};

/// The field of double-precision floating point numbers.
pub type R = FloatField;
/// The field of double-precision floating point numbers.
pub const R: FloatField = FloatField::new();

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FloatField;

impl Default for FloatField {
    fn default() -> Self {
        Self::new()
    }
}

impl FloatField {
    pub const fn new() -> FloatField {
        FloatField
    }
}

/// A double-precision floating point number that can be used as a ring
/// element.
#[derive(Clone, Copy, Debug, Default)]
pub struct F64(f64);

impl F64 {
    #[inline]
    pub fn new(f: f64) -> F64 {
        F64(f)
    }

    #[inline]
    pub fn into_inner(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    pub fn abs(&self) -> F64 {
        F64(self.0.abs())
    }

    /// The bit pattern used for equality and hashing, with all NaNs
    /// identified and `-0` mapped to `0`.
    #[inline]
    fn canonical_bits(&self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else if self.0 == 0. {
            0u64
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for F64 {
    #[inline]
    fn eq(&self, other: &F64) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for F64 {}

impl Hash for F64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl PartialOrd for F64 {
    #[inline]
    fn partial_cmp(&self, other: &F64) -> Option<Ordering> {
        Some(self.0.total_cmp(&other.0))
    }
}

impl Ord for F64 {
    #[inline]
    fn cmp(&self, other: &F64) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for F64 {
    #[inline]
    fn from(f: f64) -> Self {
        F64(f)
    }
}

impl From<F64> for f64 {
    #[inline]
    fn from(f: F64) -> Self {
        f.0
    }
}

impl Display for F64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

macro_rules! float_op {
    ($trait: ident, $fun: ident) => {
        impl $trait<F64> for F64 {
            type Output = F64;

            #[inline]
            fn $fun(self, rhs: F64) -> F64 {
                F64(self.0.$fun(rhs.0))
            }
        }
    };
}

float_op!(Add, add);
float_op!(Sub, sub);
float_op!(Mul, mul);
float_op!(Div, div);

impl Neg for F64 {
    type Output = F64;

    #[inline]
    fn neg(self) -> F64 {
        F64(-self.0)
    }
}

impl AddAssign<F64> for F64 {
    #[inline]
    fn add_assign(&mut self, rhs: F64) {
        self.0 += rhs.0;
    }
}

impl SubAssign<F64> for F64 {
    #[inline]
    fn sub_assign(&mut self, rhs: F64) {
        self.0 -= rhs.0;
    }
}

impl MulAssign<F64> for F64 {
    #[inline]
    fn mul_assign(&mut self, rhs: F64) {
        self.0 *= rhs.0;
    }
}

impl DivAssign<F64> for F64 {
    #[inline]
    fn div_assign(&mut self, rhs: F64) {
        self.0 /= rhs.0;
    }
}

impl Ring for FloatField {
    type Element = F64;

    fn add(&self, a: &F64, b: &F64) -> F64 {
        *a + *b
    }

    fn sub(&self, a: &F64, b: &F64) -> F64 {
        *a - *b
    }

    fn mul(&self, a: &F64, b: &F64) -> F64 {
        *a * *b
    }

    fn add_assign(&self, a: &mut F64, b: &F64) {
        *a += *b;
    }

    fn sub_assign(&self, a: &mut F64, b: &F64) {
        *a -= *b;
    }

    fn mul_assign(&self, a: &mut F64, b: &F64) {
        *a *= *b;
    }

    fn add_mul_assign(&self, a: &mut F64, b: &F64, c: &F64) {
        *a += *b * *c;
    }

    fn sub_mul_assign(&self, a: &mut F64, b: &F64, c: &F64) {
        *a -= *b * *c;
    }

    fn neg(&self, a: &F64) -> F64 {
        -*a
    }

    fn zero(&self) -> F64 {
        F64(0.)
    }

    fn one(&self) -> F64 {
        F64(1.)
    }

    fn nth(&self, n: i64) -> F64 {
        F64(n as f64)
    }

    fn pow(&self, b: &F64, e: u64) -> F64 {
        F64(b.0.powi(e as i32))
    }

    fn is_zero(a: &F64) -> bool {
        a.0 == 0.
    }

    fn is_one(&self, a: &F64) -> bool {
        a.0 == 1.
    }

    fn try_div(&self, a: &F64, b: &F64) -> Option<F64> {
        if b.0 == 0. {
            None
        } else {
            Some(*a / *b)
        }
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> F64 {
        let r = rng.gen_range(range.0..range.1);
        F64(r as f64)
    }
}

impl EuclideanDomain for FloatField {
    fn rem(&self, _a: &F64, _b: &F64) -> F64 {
        F64(0.)
    }

    fn quot_rem(&self, a: &F64, b: &F64) -> (F64, F64) {
        (*a / *b, F64(0.))
    }

    fn gcd(&self, _a: &F64, _b: &F64) -> F64 {
        F64(1.)
    }
}

impl Field for FloatField {
    fn div(&self, a: &F64, b: &F64) -> F64 {
        *a / *b
    }

    fn div_assign(&self, a: &mut F64, b: &F64) {
        *a /= *b;
    }

    fn inv(&self, a: &F64) -> F64 {
        F64(1. / a.0)
    }
}

/// A part of a complex number. Implemented by [F64] and by exact integers,
/// so that both inexact complex values and Gaussian integers share one
/// representation.
pub trait Component:
    Clone
    + PartialEq
    + Eq
    + Hash
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

impl Component for F64 {
    fn zero() -> F64 {
        F64(0.)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.
    }
}

/// A complex number with a real and imaginary part of type `T`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Complex<T: Component> {
    pub re: T,
    pub im: T,
}

impl<T: Component> Complex<T> {
    #[inline]
    pub fn new(re: T, im: T) -> Complex<T> {
        Complex { re, im }
    }

    #[inline]
    pub fn from_real(re: T) -> Complex<T> {
        Complex {
            re,
            im: T::zero(),
        }
    }

    #[inline]
    pub fn zero() -> Complex<T> {
        Complex {
            re: T::zero(),
            im: T::zero(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    #[inline]
    pub fn is_real(&self) -> bool {
        self.im.is_zero()
    }

    /// The complex conjugate.
    #[inline]
    pub fn conj(&self) -> Complex<T> {
        Complex {
            re: self.re.clone(),
            im: -self.im.clone(),
        }
    }

    /// The square of the absolute value, `re^2 + im^2`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.re.clone() * self.re.clone() + self.im.clone() * self.im.clone()
    }

    /// Multiply by the imaginary unit `i`.
    #[inline]
    pub fn mul_i(&self) -> Complex<T> {
        Complex {
            re: -self.im.clone(),
            im: self.re.clone(),
        }
    }

    /// Multiply by `-i`.
    #[inline]
    pub fn mul_neg_i(&self) -> Complex<T> {
        Complex {
            re: self.im.clone(),
            im: -self.re.clone(),
        }
    }
}

impl<T: Component> Add<Complex<T>> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn add(self, rhs: Complex<T>) -> Complex<T> {
        Complex {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T: Component> Sub<Complex<T>> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn sub(self, rhs: Complex<T>) -> Complex<T> {
        Complex {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T: Component> Mul<Complex<T>> for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn mul(self, rhs: Complex<T>) -> Complex<T> {
        Complex {
            re: self.re.clone() * rhs.re.clone() - self.im.clone() * rhs.im.clone(),
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<T: Component> Neg for Complex<T> {
    type Output = Complex<T>;

    #[inline]
    fn neg(self) -> Complex<T> {
        Complex {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Complex<F64> {
    pub fn norm(&self) -> F64 {
        F64(self.norm_squared().0.sqrt())
    }
}

impl Div<Complex<F64>> for Complex<F64> {
    type Output = Complex<F64>;

    fn div(self, rhs: Complex<F64>) -> Complex<F64> {
        let n = rhs.norm_squared();
        let c = self * rhs.conj();
        Complex {
            re: c.re / n,
            im: c.im / n,
        }
    }
}

impl<T: Component> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let im = self.im.to_string();
        if let Some(stripped) = im.strip_prefix('-') {
            write!(f, "({}-{}i)", self.re, stripped)
        } else {
            write!(f, "({}+{}i)", self.re, im)
        }
    }
}
