//! The field of fractions, with exact Gaussian (complex integer) numerators
//! and denominators.
//!
//! Every [Fraction] is kept in a canonical form: the denominator is a
//! positive integer, common prime factors between numerator and denominator
//! are cancelled, and a zero numerator forces the denominator to one. As a
//! consequence structural equality coincides with value equality.

use std::{
    cmp::Ordering,
    error::Error,
    fmt::{Display, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
};

use rand::Rng;
use smallvec::SmallVec;

use super::{
    float::{Complex, F64},
    integer::Integer,
    EuclideanDomain, Field, Ring,
};

/// The number of decimal digits kept when converting a float to a fraction.
pub const DEFAULT_FLOAT_ACCURACY: u32 = 8;

/// The field of fractions.
pub type Q = FractionField;
/// The field of fractions.
pub const Q: FractionField = FractionField::new();

/// Errors produced by fraction construction and arithmetic.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FractionError {
    /// The denominator of a fraction is zero, or a zero fraction was
    /// inverted.
    ZeroDenominator,
    /// The operand cannot be converted to an exact fraction, such as a
    /// non-finite float.
    UnsupportedOperand,
    /// The operands cannot be ordered, such as fractions with a complex
    /// part.
    UnsupportedComparison,
}

impl Display for FractionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FractionError::ZeroDenominator => f.write_str("Denominator cannot be zero"),
            FractionError::UnsupportedOperand => {
                f.write_str("Operand cannot be represented as an exact fraction")
            }
            FractionError::UnsupportedComparison => {
                f.write_str("Complex fractions cannot be ordered")
            }
        }
    }
}

impl Error for FractionError {}

/// A numerator or denominator: either an integer or a Gaussian integer
/// with a non-zero imaginary part.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Integral {
    Integer(Integer),
    Gaussian(Complex<Integer>),
}

impl From<Integer> for Integral {
    #[inline]
    fn from(i: Integer) -> Self {
        Integral::Integer(i)
    }
}

impl From<i64> for Integral {
    #[inline]
    fn from(i: i64) -> Self {
        Integral::Integer(i.into())
    }
}

impl From<i32> for Integral {
    #[inline]
    fn from(i: i32) -> Self {
        Integral::Integer(i.into())
    }
}

impl From<Complex<Integer>> for Integral {
    #[inline]
    fn from(z: Complex<Integer>) -> Self {
        Integral::from_gaussian(z)
    }
}

impl Display for Integral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Integral::Integer(i) => Display::fmt(i, f),
            Integral::Gaussian(z) => Display::fmt(z, f),
        }
    }
}

impl Integral {
    #[inline]
    pub fn zero() -> Integral {
        Integral::Integer(Integer::zero())
    }

    #[inline]
    pub fn one() -> Integral {
        Integral::Integer(Integer::one())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Integral::Integer(i) => i.is_zero(),
            Integral::Gaussian(z) => z.is_zero(),
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            Integral::Integer(i) => i.is_one(),
            Integral::Gaussian(_) => false,
        }
    }

    #[inline]
    pub fn is_gaussian(&self) -> bool {
        matches!(self, Integral::Gaussian(_))
    }

    /// Collapse a Gaussian integer without imaginary part into a plain
    /// integer.
    #[inline]
    fn from_gaussian(z: Complex<Integer>) -> Integral {
        if z.im.is_zero() {
            Integral::Integer(z.re)
        } else {
            Integral::Gaussian(z)
        }
    }

    #[inline]
    fn to_gaussian(&self) -> Complex<Integer> {
        match self {
            Integral::Integer(i) => Complex::from_real(i.clone()),
            Integral::Gaussian(z) => z.clone(),
        }
    }

    fn add(&self, other: &Integral) -> Integral {
        match (self, other) {
            (Integral::Integer(a), Integral::Integer(b)) => Integral::Integer(a + b),
            _ => Integral::from_gaussian(self.to_gaussian() + other.to_gaussian()),
        }
    }

    fn mul(&self, other: &Integral) -> Integral {
        match (self, other) {
            (Integral::Integer(a), Integral::Integer(b)) => Integral::Integer(a * b),
            _ => Integral::from_gaussian(self.to_gaussian() * other.to_gaussian()),
        }
    }

    fn neg(&self) -> Integral {
        match self {
            Integral::Integer(a) => Integral::Integer(-a),
            Integral::Gaussian(z) => Integral::Gaussian(-z.clone()),
        }
    }

    fn pow(&self, e: u32) -> Integral {
        match self {
            Integral::Integer(a) => Integral::Integer(a.pow(e)),
            Integral::Gaussian(z) => {
                let mut r = Complex::from_real(Integer::one());
                for _ in 0..e {
                    r = r * z.clone();
                }
                Integral::from_gaussian(r)
            }
        }
    }

    /// Divide by `other` if the division is exact.
    fn div_exact(&self, other: &Integral) -> Option<Integral> {
        match (self, other) {
            (Integral::Integer(a), Integral::Integer(b)) => {
                a.div_exact(b).map(Integral::Integer)
            }
            _ => {
                let w = other.to_gaussian();
                let n = w.norm_squared();
                if n.is_zero() {
                    return None;
                }
                let z = self.to_gaussian() * w.conj();
                let re = z.re.div_exact(&n)?;
                let im = z.im.div_exact(&n)?;
                Some(Integral::from_gaussian(Complex::new(re, im)))
            }
        }
    }

    /// The prime factors, with a leading `-1` for negative integers. A
    /// Gaussian value yields the factors common to both parts followed by
    /// the remaining Gaussian part, or the unit `i` when it is purely
    /// imaginary.
    fn factors(&self) -> SmallVec<[Integral; 8]> {
        match self {
            Integral::Integer(i) => i.factors().into_iter().map(Integral::Integer).collect(),
            Integral::Gaussian(z) => {
                if z.re.is_zero() {
                    let mut f: SmallVec<[Integral; 8]> =
                        z.im.factors().into_iter().map(Integral::Integer).collect();
                    f.push(Integral::Gaussian(Complex::new(
                        Integer::zero(),
                        Integer::one(),
                    )));
                    f
                } else {
                    let g = z.re.gcd(&z.im);
                    let mut f: SmallVec<[Integral; 8]> =
                        g.factors().into_iter().map(Integral::Integer).collect();
                    let re = &z.re / &g;
                    let im = &z.im / &g;
                    let rest = Complex::new(re, im);
                    if !rest.im.is_zero() || !rest.re.is_one() {
                        f.push(Integral::from_gaussian(rest));
                    }
                    f
                }
            }
        }
    }
}

/// A fraction in lowest terms with a positive integer denominator. The
/// numerator may be a Gaussian integer.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction {
    numerator: Integral,
    denominator: Integral,
}

impl Fraction {
    /// Create a new fraction, reduced to its canonical form.
    pub fn new<T: Into<Integral>, U: Into<Integral>>(
        numerator: T,
        denominator: U,
    ) -> Result<Fraction, FractionError> {
        let den = denominator.into();
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Fraction::reduced(numerator.into(), den))
    }

    #[inline]
    pub fn zero() -> Fraction {
        Fraction {
            numerator: Integral::zero(),
            denominator: Integral::one(),
        }
    }

    #[inline]
    pub fn one() -> Fraction {
        Fraction {
            numerator: Integral::one(),
            denominator: Integral::one(),
        }
    }

    #[inline]
    pub fn from_integer(i: Integer) -> Fraction {
        Fraction {
            numerator: Integral::Integer(i),
            denominator: Integral::one(),
        }
    }

    #[inline]
    pub fn numerator(&self) -> &Integral {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &Integral {
        &self.denominator
    }

    /// Reduce a fraction with a non-zero denominator to canonical form:
    /// a Gaussian denominator is cleared by multiplying both parts with its
    /// conjugate, a negative denominator donates its sign to the numerator,
    /// and matching prime factors are cancelled.
    fn reduced(mut num: Integral, mut den: Integral) -> Fraction {
        debug_assert!(!den.is_zero());

        if let Integral::Gaussian(z) = &den {
            let conj = Integral::Gaussian(z.conj());
            num = num.mul(&conj);
            den = Integral::Integer(z.norm_squared());
        }

        if num.is_zero() {
            return Fraction::zero();
        }

        if let Integral::Integer(d) = &den {
            if d.is_negative() {
                num = num.neg();
                den = den.neg();
            }
        }

        let mut num_factors = num.factors();
        let mut den_factors = den.factors();

        let mut i = 0;
        'outer: while i < num_factors.len() {
            for j in 0..den_factors.len() {
                if num_factors[i] == den_factors[j] {
                    // factors divide their value exactly
                    if let (Some(n), Some(d)) = (
                        num.div_exact(&num_factors[i]),
                        den.div_exact(&den_factors[j]),
                    ) {
                        num = n;
                        den = d;
                    }
                    num_factors.remove(i);
                    den_factors.remove(j);
                    continue 'outer;
                }
            }
            i += 1;
        }

        Fraction {
            numerator: num,
            denominator: den,
        }
    }

    /// Convert a finite float to a fraction by keeping `accuracy` decimal
    /// digits.
    pub fn from_real(f: f64, accuracy: u32) -> Result<Fraction, FractionError> {
        if !f.is_finite() {
            return Err(FractionError::UnsupportedOperand);
        }

        let scale = 10f64.powi(accuracy as i32);
        let scaled = f * scale;
        if !scaled.is_finite() {
            return Err(FractionError::UnsupportedOperand);
        }

        Ok(Fraction::reduced(
            Integral::Integer(Integer::from_f64(scaled)),
            Integral::Integer(Integer::new(10).pow(accuracy)),
        ))
    }

    /// Convert a finite complex float to a fraction with a Gaussian
    /// numerator, keeping `accuracy` decimal digits per part.
    pub fn from_complex(c: Complex<F64>, accuracy: u32) -> Result<Fraction, FractionError> {
        if !c.re.is_finite() || !c.im.is_finite() {
            return Err(FractionError::UnsupportedOperand);
        }

        let scale = 10f64.powi(accuracy as i32);
        let re = c.re.into_inner() * scale;
        let im = c.im.into_inner() * scale;
        if !re.is_finite() || !im.is_finite() {
            return Err(FractionError::UnsupportedOperand);
        }

        Ok(Fraction::reduced(
            Integral::from_gaussian(Complex::new(Integer::from_f64(re), Integer::from_f64(im))),
            Integral::Integer(Integer::new(10).pow(accuracy)),
        ))
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }

    /// True if the denominator is one and the numerator is an integer.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one() && !self.numerator.is_gaussian()
    }

    #[inline]
    pub fn is_gaussian(&self) -> bool {
        self.numerator.is_gaussian()
    }

    pub fn is_negative(&self) -> bool {
        match &self.numerator {
            Integral::Integer(i) => i.is_negative(),
            Integral::Gaussian(_) => false,
        }
    }

    pub fn neg(&self) -> Fraction {
        Fraction {
            numerator: self.numerator.neg(),
            denominator: self.denominator.clone(),
        }
    }

    /// The multiplicative inverse. Inverting zero is an error.
    pub fn inverse(&self) -> Result<Fraction, FractionError> {
        if self.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Fraction::reduced(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Raise to an integer power; a zero exponent yields one and a
    /// negative exponent inverts first.
    pub fn powi(&self, e: i64) -> Result<Fraction, FractionError> {
        let base = if e < 0 { self.inverse()? } else { self.clone() };
        let mag = e.unsigned_abs();
        if mag > u32::MAX as u64 {
            return Err(FractionError::UnsupportedOperand);
        }
        Ok(Fraction::reduced(
            base.numerator.pow(mag as u32),
            base.denominator.pow(mag as u32),
        ))
    }

    /// The absolute value. Fractions with a complex part have no sign.
    pub fn abs(&self) -> Result<Fraction, FractionError> {
        match &self.numerator {
            Integral::Integer(i) => Ok(Fraction {
                numerator: Integral::Integer(i.abs()),
                denominator: self.denominator.clone(),
            }),
            Integral::Gaussian(_) => Err(FractionError::UnsupportedComparison),
        }
    }

    /// The remainder `a - b * floor(a / b)`. Undefined for fractions with a
    /// complex part.
    pub fn rem(&self, other: &Fraction) -> Result<Fraction, FractionError> {
        if self.is_gaussian() || other.is_gaussian() {
            return Err(FractionError::UnsupportedOperand);
        }
        if other.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }

        let q = Q.div(self, other);
        let floor = match (&q.numerator, &q.denominator) {
            (Integral::Integer(n), Integral::Integer(d)) => n.quot_rem(d).0,
            _ => return Err(FractionError::UnsupportedOperand),
        };
        Ok(Q.sub(self, &Q.mul(other, &Fraction::from_integer(floor))))
    }

    /// Convert to a float; a Gaussian numerator contributes its magnitude.
    pub fn to_f64(&self) -> f64 {
        let num = match &self.numerator {
            Integral::Integer(i) => i.to_f64(),
            Integral::Gaussian(z) => z.norm_squared().to_f64().sqrt(),
        };
        let den = match &self.denominator {
            Integral::Integer(i) => i.to_f64(),
            Integral::Gaussian(z) => z.norm_squared().to_f64().sqrt(),
        };
        num / den
    }

    /// Convert to a complex float.
    pub fn to_complex_f64(&self) -> Complex<F64> {
        let den = match &self.denominator {
            Integral::Integer(i) => i.to_f64(),
            Integral::Gaussian(z) => z.norm_squared().to_f64().sqrt(),
        };
        match &self.numerator {
            Integral::Integer(i) => Complex::new(F64::new(i.to_f64() / den), F64::new(0.)),
            Integral::Gaussian(z) => Complex::new(
                F64::new(z.re.to_f64() / den),
                F64::new(z.im.to_f64() / den),
            ),
        }
    }

    /// Truncate towards zero. A Gaussian numerator truncates its magnitude.
    pub fn to_integer(&self) -> Integer {
        match (&self.numerator, &self.denominator) {
            (Integral::Integer(n), Integral::Integer(d)) => {
                let q = n.abs().quot_rem(&d.abs()).0;
                if n.is_negative() {
                    -&q
                } else {
                    q
                }
            }
            _ => Integer::from_f64(self.to_f64().trunc()),
        }
    }

    /// Exact ordering through cross-multiplication. Fractions with a
    /// complex part cannot be ordered.
    pub fn try_cmp(&self, other: &Fraction) -> Result<Ordering, FractionError> {
        match (
            &self.numerator,
            &self.denominator,
            &other.numerator,
            &other.denominator,
        ) {
            (
                Integral::Integer(n1),
                Integral::Integer(d1),
                Integral::Integer(n2),
                Integral::Integer(d2),
            ) => {
                // denominators are positive
                Ok((n1 * d2).cmp(&(n2 * d1)))
            }
            _ => Err(FractionError::UnsupportedComparison),
        }
    }

    /// Approximate equality after rounding both values to `accuracy`
    /// decimal digits.
    pub fn eq_value(&self, other: &Fraction, accuracy: u32) -> bool {
        let scale = 10f64.powi(accuracy as i32);
        let a = self.to_complex_f64();
        let b = other.to_complex_f64();
        (a.re.into_inner() * scale).round() == (b.re.into_inner() * scale).round()
            && (a.im.into_inner() * scale).round() == (b.im.into_inner() * scale).round()
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl From<i64> for Fraction {
    fn from(i: i64) -> Self {
        Fraction::from_integer(i.into())
    }
}

impl From<Integer> for Fraction {
    fn from(i: Integer) -> Self {
        Fraction::from_integer(i)
    }
}

impl From<(i64, i64)> for Fraction {
    fn from((num, den): (i64, i64)) -> Self {
        match Fraction::new(num, den) {
            Ok(f) => f,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Q.add(self, rhs)
    }
}

impl Sub<&Fraction> for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        Q.sub(self, rhs)
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Q.mul(self, rhs)
    }
}

impl Div<&Fraction> for &Fraction {
    type Output = Fraction;

    fn div(self, rhs: &Fraction) -> Fraction {
        Q.div(self, rhs)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::neg(self)
    }
}

macro_rules! owned_fraction_op {
    ($trait: ident, $fun: ident) => {
        impl $trait<Fraction> for Fraction {
            type Output = Fraction;

            #[inline]
            fn $fun(self, rhs: Fraction) -> Fraction {
                (&self).$fun(&rhs)
            }
        }
    };
}

owned_fraction_op!(Add, add);
owned_fraction_op!(Sub, sub);
owned_fraction_op!(Mul, mul);
owned_fraction_op!(Div, div);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::neg(&self)
    }
}

/// The field of fractions, parameterized by the decimal accuracy used for
/// float conversion and approximate comparison.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FractionField {
    pub accuracy: u32,
}

impl Default for FractionField {
    fn default() -> Self {
        Self::new()
    }
}

impl FractionField {
    pub const fn new() -> FractionField {
        FractionField {
            accuracy: DEFAULT_FLOAT_ACCURACY,
        }
    }

    pub const fn with_accuracy(accuracy: u32) -> FractionField {
        FractionField { accuracy }
    }

    /// Convert a float to a fraction at this field's accuracy.
    pub fn element_from_real(&self, f: f64) -> Result<Fraction, FractionError> {
        Fraction::from_real(f, self.accuracy)
    }
}

impl Ring for FractionField {
    type Element = Fraction;

    fn add(&self, a: &Fraction, b: &Fraction) -> Fraction {
        let n1d2 = a.numerator.mul(&b.denominator);
        let n2d1 = b.numerator.mul(&a.denominator);
        Fraction::reduced(n1d2.add(&n2d1), a.denominator.mul(&b.denominator))
    }

    fn sub(&self, a: &Fraction, b: &Fraction) -> Fraction {
        self.add(a, &b.neg())
    }

    fn mul(&self, a: &Fraction, b: &Fraction) -> Fraction {
        Fraction::reduced(
            a.numerator.mul(&b.numerator),
            a.denominator.mul(&b.denominator),
        )
    }

    fn add_assign(&self, a: &mut Fraction, b: &Fraction) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Fraction, b: &Fraction) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Fraction, b: &Fraction) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut Fraction, b: &Fraction, c: &Fraction) {
        *a = self.add(a, &self.mul(b, c));
    }

    fn sub_mul_assign(&self, a: &mut Fraction, b: &Fraction, c: &Fraction) {
        *a = self.sub(a, &self.mul(b, c));
    }

    fn neg(&self, a: &Fraction) -> Fraction {
        a.neg()
    }

    fn zero(&self) -> Fraction {
        Fraction::zero()
    }

    fn one(&self) -> Fraction {
        Fraction::one()
    }

    fn nth(&self, n: i64) -> Fraction {
        Fraction::from_integer(n.into())
    }

    fn pow(&self, b: &Fraction, e: u64) -> Fraction {
        if e > u32::MAX as u64 {
            panic!("Power of exponentiation is larger than 2^32: {}", e);
        }
        Fraction::reduced(b.numerator.pow(e as u32), b.denominator.pow(e as u32))
    }

    fn is_zero(a: &Fraction) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Fraction) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Fraction, b: &Fraction) -> Option<Fraction> {
        if b.is_zero() {
            None
        } else {
            Some(self.div(a, b))
        }
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> Fraction {
        let r = rng.gen_range(range.0..range.1);
        Fraction::from_integer(Integer::Natural(r))
    }
}

impl EuclideanDomain for FractionField {
    fn rem(&self, _a: &Fraction, _b: &Fraction) -> Fraction {
        Fraction::zero()
    }

    fn quot_rem(&self, a: &Fraction, b: &Fraction) -> (Fraction, Fraction) {
        (self.div(a, b), Fraction::zero())
    }

    fn gcd(&self, a: &Fraction, b: &Fraction) -> Fraction {
        match (
            &a.numerator,
            &a.denominator,
            &b.numerator,
            &b.denominator,
        ) {
            (
                Integral::Integer(n1),
                Integral::Integer(d1),
                Integral::Integer(n2),
                Integral::Integer(d2),
            ) => Fraction {
                numerator: Integral::Integer(n1.gcd(n2)),
                denominator: Integral::Integer(d1.lcm(d2)),
            },
            _ => Fraction::one(),
        }
    }
}

impl Field for FractionField {
    fn div(&self, a: &Fraction, b: &Fraction) -> Fraction {
        if b.is_zero() {
            panic!("Cannot divide by zero");
        }
        Fraction::reduced(
            a.numerator.mul(&b.denominator),
            a.denominator.mul(&b.numerator),
        )
    }

    fn div_assign(&self, a: &mut Fraction, b: &Fraction) {
        *a = self.div(a, b);
    }

    fn inv(&self, a: &Fraction) -> Fraction {
        if a.is_zero() {
            panic!("Cannot invert zero");
        }
        Fraction::reduced(a.denominator.clone(), a.numerator.clone())
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::domains::{
        float::{Complex, F64},
        integer::Integer,
        Field, Ring,
    };

    use super::{Fraction, FractionError, Integral, Q};

    #[test]
    fn reduction() {
        let f: Fraction = (4, 8).into();
        assert_eq!(f, (1, 2).into());
        assert_eq!(f.to_string(), "1/2");

        let f: Fraction = (6, -4).into();
        assert_eq!(f, (-3, 2).into());
        assert!(f.is_negative());

        let f: Fraction = (0, 7).into();
        assert_eq!(f, Fraction::zero());
        assert_eq!(f.to_string(), "0/1");
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(
            Fraction::new(1, 0),
            Err(FractionError::ZeroDenominator)
        );
        assert_eq!(
            Fraction::zero().inverse(),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn arithmetic() {
        let a: Fraction = (1, 2).into();
        let b: Fraction = (1, 3).into();

        assert_eq!(&a + &b, (5, 6).into());
        assert_eq!(&a - &b, (1, 6).into());
        assert_eq!(&a * &b, (1, 6).into());
        assert_eq!(&a / &b, (3, 2).into());

        let c = Q.mul(&a, &Q.inv(&a));
        assert_eq!(c, Fraction::one());
        assert_eq!(&a - &a, Fraction::zero());
    }

    #[test]
    fn scaled_operands() {
        let a = Fraction::new(3 * 7, 5 * 7).unwrap();
        let b = Fraction::new(3, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn powers() {
        let a: Fraction = (2, 3).into();
        assert_eq!(a.powi(0).unwrap(), Fraction::one());
        assert_eq!(a.powi(3).unwrap(), (8, 27).into());
        assert_eq!(a.powi(-2).unwrap(), (9, 4).into());

        // the extreme exponent is rejected instead of overflowing
        assert_eq!(
            Fraction::one().powi(i64::MIN),
            Err(FractionError::UnsupportedOperand)
        );
    }

    #[test]
    fn remainder() {
        let a: Fraction = (7, 2).into();
        let b: Fraction = (3, 2).into();
        assert_eq!(a.rem(&b).unwrap(), (1, 2).into());

        let c = Fraction::new(
            Complex::new(Integer::new(1), Integer::new(1)),
            Integral::one(),
        )
        .unwrap();
        assert_eq!(c.rem(&b), Err(FractionError::UnsupportedOperand));
    }

    #[test]
    fn ordering() {
        let a: Fraction = (1, 3).into();
        let b: Fraction = (1, 2).into();
        assert_eq!(a.try_cmp(&b), Ok(Ordering::Less));
        assert_eq!(b.try_cmp(&a), Ok(Ordering::Greater));
        assert_eq!(a.try_cmp(&a), Ok(Ordering::Equal));

        let c = Fraction::new(
            Complex::new(Integer::new(1), Integer::new(1)),
            Integral::one(),
        )
        .unwrap();
        assert_eq!(a.try_cmp(&c), Err(FractionError::UnsupportedComparison));
    }

    #[test]
    fn gaussian_canonicalization() {
        // an imaginary denominator is cleared
        let f = Fraction::new(
            Integral::Integer(Integer::new(1)),
            Complex::new(Integer::zero(), Integer::new(1)),
        )
        .unwrap();
        assert_eq!(
            f,
            Fraction::new(
                Complex::new(Integer::zero(), Integer::new(-1)),
                Integral::one(),
            )
            .unwrap()
        );

        // a Gaussian value without imaginary part collapses to an integer
        let g = Fraction::new(
            Complex::new(Integer::new(6), Integer::zero()),
            Integral::Integer(Integer::new(4)),
        )
        .unwrap();
        assert_eq!(g, (3, 2).into());
        assert!(!g.is_gaussian());
    }

    #[test]
    fn gaussian_arithmetic() {
        let i = Fraction::new(
            Complex::new(Integer::zero(), Integer::one()),
            Integral::one(),
        )
        .unwrap();

        // i * i == -1
        assert_eq!(&i * &i, (-1, 1).into());

        // (1+i)/(1-i) == i
        let a = Fraction::new(
            Complex::new(Integer::one(), Integer::one()),
            Complex::new(Integer::one(), Integer::new(-1)),
        )
        .unwrap();
        assert_eq!(a, i);
    }

    #[test]
    fn float_conversion() {
        assert_eq!(Fraction::from_real(0.5, 8).unwrap(), (1, 2).into());
        assert_eq!(Fraction::from_real(-0.25, 8).unwrap(), (-1, 4).into());
        assert_eq!(
            Fraction::from_real(f64::INFINITY, 8),
            Err(FractionError::UnsupportedOperand)
        );

        let c = Fraction::from_complex(Complex::new(F64::new(0.5), F64::new(-1.5)), 8).unwrap();
        assert_eq!(
            c,
            Fraction::new(
                Complex::new(Integer::new(1), Integer::new(-3)),
                Integral::Integer(Integer::new(2)),
            )
            .unwrap()
        );
    }

    #[test]
    fn value_equality() {
        let a: Fraction = (1, 3).into();
        let b = Fraction::from_real(1. / 3., 8).unwrap();
        assert!(a.eq_value(&b, 8));
        assert_ne!(a, b);
    }

    #[test]
    fn truncation() {
        let a: Fraction = (7, 2).into();
        assert_eq!(a.to_integer(), Integer::new(3));

        let b: Fraction = (-7, 2).into();
        assert_eq!(b.to_integer(), Integer::new(-3));
    }
}
