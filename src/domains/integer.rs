use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign},
    str::FromStr,
};

use rand::Rng;
use rug::{ops::Pow, Complete, Integer as MultiPrecisionInteger};
use smallvec::SmallVec;

use crate::utils;

use super::{float::Component, EuclideanDomain, Ring};

/// The integer ring.
pub type Z = IntegerRing;
/// The integer ring.
pub const Z: IntegerRing = IntegerRing::new();

/// The integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerRing;

impl Default for IntegerRing {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

/// An arbitrary-precision signed integer that keeps machine-word sized
/// values unboxed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Integer {
    Natural(i64),
    Large(MultiPrecisionInteger),
}

macro_rules! from_with_cast {
    ($base: ty) => {
        impl From<$base> for Integer {
            #[inline]
            fn from(value: $base) -> Self {
                Integer::Natural(value as i64)
            }
        }

        impl PartialEq<$base> for Integer {
            #[inline]
            fn eq(&self, other: &$base) -> bool {
                match self {
                    Integer::Natural(n) => *n == *other as i64,
                    _ => false,
                }
            }
        }

        impl PartialOrd<$base> for Integer {
            #[inline]
            fn partial_cmp(&self, other: &$base) -> Option<Ordering> {
                Some(Ord::cmp(self, &Integer::Natural(*other as i64)))
            }
        }
    };
}

from_with_cast!(i8);
from_with_cast!(i16);
from_with_cast!(i32);
from_with_cast!(i64);
from_with_cast!(u8);
from_with_cast!(u16);
from_with_cast!(u32);

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        if value <= i64::MAX as u64 {
            Integer::Natural(value as i64)
        } else {
            Integer::Large(value.into())
        }
    }
}

impl From<usize> for Integer {
    #[inline]
    fn from(value: usize) -> Self {
        (value as u64).into()
    }
}

impl From<MultiPrecisionInteger> for Integer {
    /// Convert from a multi-precision integer to an Integer, potentially
    /// downcasting the number.
    #[inline]
    fn from(n: MultiPrecisionInteger) -> Self {
        if let Some(n) = n.to_i64() {
            Integer::Natural(n)
        } else {
            Integer::Large(n)
        }
    }
}

impl FromStr for Integer {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() <= 20 {
            if let Ok(n) = s.parse::<i64>() {
                return Ok(Integer::Natural(n));
            }
        }

        if let Ok(n) = s.parse::<MultiPrecisionInteger>() {
            Ok(Integer::Large(n))
        } else {
            Err("Could not parse integer")
        }
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural(n) => Display::fmt(n, f),
            Self::Large(n) => Display::fmt(n, f),
        }
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural(n) => Display::fmt(n, f),
            Self::Large(n) => Display::fmt(n, f),
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::zero()
    }
}

impl Integer {
    pub fn new(num: i64) -> Integer {
        Integer::Natural(num)
    }

    #[inline]
    pub fn zero() -> Integer {
        Integer::Natural(0)
    }

    #[inline]
    pub fn one() -> Integer {
        Integer::Natural(1)
    }

    /// Convert a finite float to the nearest integer.
    #[inline]
    pub fn from_f64(f: f64) -> Integer {
        if let Some(n) = MultiPrecisionInteger::from_f64(f.round()) {
            n.into()
        } else {
            panic!("Cannot convert {} to an integer", f)
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Integer::Natural(n) => *n as f64,
            Integer::Large(r) => r.to_f64(),
        }
    }

    pub fn to_multi_prec(self) -> MultiPrecisionInteger {
        match self {
            Integer::Natural(n) => n.into(),
            Integer::Large(l) => l,
        }
    }

    #[inline]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Integer::Natural(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Integer::Natural(n) => *n == 0,
            _ => false,
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            Integer::Natural(n) => *n == 1,
            _ => false,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Integer::Natural(n) => *n < 0,
            Integer::Large(r) => r.cmp0() == Ordering::Less,
        }
    }

    pub fn abs(&self) -> Integer {
        match self {
            Integer::Natural(n) => {
                if *n == i64::MIN {
                    Integer::Large(MultiPrecisionInteger::from(*n).abs())
                } else {
                    Integer::Natural(n.abs())
                }
            }
            Integer::Large(n) => Integer::Large(n.clone().abs()),
        }
    }

    pub fn pow(&self, e: u32) -> Integer {
        if e == 0 {
            return Integer::one();
        }

        match self {
            Integer::Natural(n) => {
                if let Some(pn) = n.checked_pow(e) {
                    Integer::Natural(pn)
                } else {
                    MultiPrecisionInteger::from(*n).pow(e).into()
                }
            }
            Integer::Large(r) => r.pow(e).complete().into(),
        }
    }

    /// Compute the Euclidean quotient and remainder; the remainder is
    /// always non-negative.
    pub fn quot_rem(&self, b: &Integer) -> (Integer, Integer) {
        if b.is_zero() {
            panic!("Cannot divide by zero");
        }

        match (self, b) {
            (Integer::Natural(aa), Integer::Natural(bb)) => {
                if let Some(q) = aa.checked_div_euclid(*bb) {
                    (Integer::Natural(q), Integer::Natural(aa.rem_euclid(*bb)))
                } else {
                    // i64::MIN / -1
                    (
                        Integer::Large(MultiPrecisionInteger::from(*aa).neg()),
                        Integer::zero(),
                    )
                }
            }
            (Integer::Natural(a), Integer::Large(b)) => {
                let r = MultiPrecisionInteger::from(*a).div_rem_euc(b.clone());
                (r.0.into(), r.1.into())
            }
            (Integer::Large(a), Integer::Natural(b)) => {
                let r = a.clone().div_rem_euc(MultiPrecisionInteger::from(*b));
                (r.0.into(), r.1.into())
            }
            (Integer::Large(a), Integer::Large(b)) => {
                let r = a.clone().div_rem_euc(b.clone());
                (r.0.into(), r.1.into())
            }
        }
    }

    pub fn gcd(&self, b: &Integer) -> Integer {
        match (self, b) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                let gcd = utils::gcd_signed(*n1, *n2);
                if gcd == i64::MAX as u64 + 1 {
                    // n1 == n2 == i64::MIN
                    Integer::Large(MultiPrecisionInteger::from(gcd))
                } else {
                    Integer::Natural(gcd as i64)
                }
            }
            (Integer::Natural(n1), Integer::Large(r2))
            | (Integer::Large(r2), Integer::Natural(n1)) => {
                let r1 = MultiPrecisionInteger::from(*n1);
                Integer::from(r1.gcd(r2))
            }
            (Integer::Large(r1), Integer::Large(r2)) => Integer::from(r1.clone().gcd(r2)),
        }
    }

    /// Compute the least common multiple of two integers.
    pub fn lcm(&self, b: &Integer) -> Integer {
        let g = self.gcd(b);
        if g.is_zero() {
            Integer::zero()
        } else {
            &(self / &g) * b
        }
    }

    /// Divide `self` by `b` if the division is exact.
    pub fn div_exact(&self, b: &Integer) -> Option<Integer> {
        let (q, r) = self.quot_rem(b);
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }

    /// Determine the prime factors of the integer by trial division, with a
    /// leading `-1` for negative values. Zero and units yield an empty list.
    pub fn factors(&self) -> SmallVec<[Integer; 8]> {
        let mut factors = SmallVec::new();
        if self.is_zero() {
            return factors;
        }

        let mut value = self.clone();
        if value.is_negative() {
            factors.push(Integer::Natural(-1));
            value = value.abs();
        }

        let mut i = Integer::Natural(2);
        while &i * &i <= value {
            if (&value % &i).is_zero() {
                factors.push(i.clone());
                value = value.quot_rem(&i).0;
            } else {
                i = &i + &Integer::one();
            }
        }
        if value > Integer::one() {
            factors.push(value);
        }
        factors
    }
}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Integer) -> Ordering {
        match (self, other) {
            (Integer::Natural(n1), Integer::Natural(n2)) => n1.cmp(n2),
            (Integer::Natural(n1), Integer::Large(r2)) => {
                r2.partial_cmp(n1).unwrap_or(Ordering::Equal).reverse()
            }
            (Integer::Large(r1), Integer::Natural(n2)) => {
                r1.partial_cmp(n2).unwrap_or(Ordering::Equal)
            }
            (Integer::Large(r1), Integer::Large(r2)) => r1.cmp(r2),
        }
    }
}

impl Add<&Integer> for &Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(n) = n1.checked_add(*n2) {
                    Integer::Natural(n)
                } else {
                    (MultiPrecisionInteger::from(*n1) + *n2).into()
                }
            }
            (Integer::Natural(n1), Integer::Large(r2))
            | (Integer::Large(r2), Integer::Natural(n1)) => (r2 + *n1).complete().into(),
            (Integer::Large(r1), Integer::Large(r2)) => (r1 + r2).complete().into(),
        }
    }
}

impl Sub<&Integer> for &Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(n) = n1.checked_sub(*n2) {
                    Integer::Natural(n)
                } else {
                    (MultiPrecisionInteger::from(*n1) - *n2).into()
                }
            }
            (Integer::Natural(n1), Integer::Large(r2)) => {
                (MultiPrecisionInteger::from(*n1) - r2).into()
            }
            (Integer::Large(r1), Integer::Natural(n2)) => (r1 - *n2).complete().into(),
            (Integer::Large(r1), Integer::Large(r2)) => (r1 - r2).complete().into(),
        }
    }
}

impl Mul<&Integer> for &Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        match (self, rhs) {
            (Integer::Natural(n1), Integer::Natural(n2)) => {
                if let Some(n) = n1.checked_mul(*n2) {
                    Integer::Natural(n)
                } else {
                    (MultiPrecisionInteger::from(*n1) * *n2).into()
                }
            }
            (Integer::Natural(n1), Integer::Large(r2))
            | (Integer::Large(r2), Integer::Natural(n1)) => (r2 * *n1).complete().into(),
            (Integer::Large(r1), Integer::Large(r2)) => (r1 * r2).complete().into(),
        }
    }
}

impl Div<&Integer> for &Integer {
    type Output = Integer;

    /// The Euclidean quotient.
    fn div(self, rhs: &Integer) -> Integer {
        self.quot_rem(rhs).0
    }
}

impl Rem<&Integer> for &Integer {
    type Output = Integer;

    /// The non-negative Euclidean remainder.
    fn rem(self, rhs: &Integer) -> Integer {
        self.quot_rem(rhs).1
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        match self {
            Integer::Natural(n) => {
                if let Some(neg) = n.checked_neg() {
                    Integer::Natural(neg)
                } else {
                    MultiPrecisionInteger::from(*n).neg().into()
                }
            }
            Integer::Large(r) => (-r).complete().into(),
        }
    }
}

macro_rules! owned_op {
    ($trait: ident, $fun: ident) => {
        impl $trait<Integer> for Integer {
            type Output = Integer;

            #[inline]
            fn $fun(self, rhs: Integer) -> Integer {
                (&self).$fun(&rhs)
            }
        }
    };
}

owned_op!(Add, add);
owned_op!(Sub, sub);
owned_op!(Mul, mul);
owned_op!(Div, div);
owned_op!(Rem, rem);

impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        -&self
    }
}

impl AddAssign<&Integer> for Integer {
    #[inline]
    fn add_assign(&mut self, rhs: &Integer) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Integer> for Integer {
    #[inline]
    fn sub_assign(&mut self, rhs: &Integer) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Integer> for Integer {
    #[inline]
    fn mul_assign(&mut self, rhs: &Integer) {
        *self = &*self * rhs;
    }
}

impl Component for Integer {
    fn zero() -> Integer {
        Integer::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl Ring for IntegerRing {
    type Element = Integer;

    fn add(&self, a: &Integer, b: &Integer) -> Integer {
        a + b
    }

    fn sub(&self, a: &Integer, b: &Integer) -> Integer {
        a - b
    }

    fn mul(&self, a: &Integer, b: &Integer) -> Integer {
        a * b
    }

    fn add_assign(&self, a: &mut Integer, b: &Integer) {
        *a += b;
    }

    fn sub_assign(&self, a: &mut Integer, b: &Integer) {
        *a -= b;
    }

    fn mul_assign(&self, a: &mut Integer, b: &Integer) {
        *a *= b;
    }

    fn add_mul_assign(&self, a: &mut Integer, b: &Integer, c: &Integer) {
        *a += &(b * c);
    }

    fn sub_mul_assign(&self, a: &mut Integer, b: &Integer, c: &Integer) {
        *a -= &(b * c);
    }

    fn neg(&self, a: &Integer) -> Integer {
        -a
    }

    fn zero(&self) -> Integer {
        Integer::zero()
    }

    fn one(&self) -> Integer {
        Integer::one()
    }

    fn nth(&self, n: i64) -> Integer {
        Integer::Natural(n)
    }

    fn pow(&self, b: &Integer, e: u64) -> Integer {
        if e > u32::MAX as u64 {
            panic!("Power of exponentiation is larger than 2^32: {}", e);
        }
        b.pow(e as u32)
    }

    fn is_zero(a: &Integer) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Integer) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Integer, b: &Integer) -> Option<Integer> {
        if b.is_zero() {
            return None;
        }
        a.div_exact(b)
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Integer {
        let r = rng.gen_range(range.0..range.1);
        Integer::Natural(r)
    }
}

impl EuclideanDomain for IntegerRing {
    fn rem(&self, a: &Integer, b: &Integer) -> Integer {
        a % b
    }

    fn quot_rem(&self, a: &Integer, b: &Integer) -> (Integer, Integer) {
        a.quot_rem(b)
    }

    fn gcd(&self, a: &Integer, b: &Integer) -> Integer {
        a.gcd(b)
    }
}

#[cfg(test)]
mod test {
    use super::Integer;

    #[test]
    fn overflow_promotion() {
        let a = Integer::Natural(i64::MAX);
        let b = &a + &Integer::one();
        assert!(matches!(b, Integer::Large(_)));
        assert_eq!(&b - &Integer::one(), a);

        let c = &a * &a;
        assert!(matches!(c, Integer::Large(_)));
        assert_eq!(c.gcd(&a), a);
    }

    #[test]
    fn factors() {
        let f = Integer::new(60).factors();
        assert_eq!(
            f.as_slice(),
            &[
                Integer::new(2),
                Integer::new(2),
                Integer::new(3),
                Integer::new(5)
            ]
        );

        let f = Integer::new(-9).factors();
        assert_eq!(
            f.as_slice(),
            &[Integer::new(-1), Integer::new(3), Integer::new(3)]
        );

        assert!(Integer::zero().factors().is_empty());
        assert!(Integer::one().factors().is_empty());

        let f = Integer::new(97).factors();
        assert_eq!(f.as_slice(), &[Integer::new(97)]);
    }

    #[test]
    fn euclidean() {
        let (q, r) = Integer::new(-7).quot_rem(&Integer::new(2));
        assert_eq!(q, Integer::new(-4));
        assert_eq!(r, Integer::new(1));

        assert_eq!(Integer::new(12).gcd(&Integer::new(-18)), Integer::new(6));
        assert_eq!(Integer::new(4).lcm(&Integer::new(6)), Integer::new(12));
    }
}
