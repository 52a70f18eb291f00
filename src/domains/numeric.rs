//! A numeric tower over integers, fractions, floats and complex floats.
//!
//! Mixed-domain arithmetic promotes both operands to the smaller common
//! domain, following the order `Integer < Rational < Real < Complex`.
//! Results are not demoted automatically; [NumericValue::simplify] performs
//! the collapse explicitly.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, Div, Mul, Neg, Sub},
};

use rand::Rng;

use super::{
    float::{Complex, F64},
    integer::Integer,
    rational::{Fraction, FractionError, DEFAULT_FLOAT_ACCURACY},
    EuclideanDomain, Field, Ring,
};

/// The numeric tower.
pub type N = NumericTower;
/// The numeric tower.
pub const N: NumericTower = NumericTower::new();

/// A value in the numeric tower.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum NumericValue {
    Integer(Integer),
    Rational(Fraction),
    Real(F64),
    Complex(Complex<F64>),
}

impl NumericValue {
    /// The position in the promotion order.
    #[inline]
    fn rank(&self) -> u8 {
        match self {
            NumericValue::Integer(_) => 0,
            NumericValue::Rational(_) => 1,
            NumericValue::Real(_) => 2,
            NumericValue::Complex(_) => 3,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            NumericValue::Integer(i) => i.is_zero(),
            NumericValue::Rational(r) => r.is_zero(),
            NumericValue::Real(f) => f.is_zero(),
            NumericValue::Complex(c) => c.is_zero(),
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            NumericValue::Integer(i) => i.is_one(),
            NumericValue::Rational(r) => r.is_one(),
            NumericValue::Real(f) => *f == F64::new(1.),
            NumericValue::Complex(c) => c.im.is_zero() && c.re == F64::new(1.),
        }
    }

    /// Collapse to the lowest domain that represents the value without
    /// loss: a fraction with denominator one becomes an integer (or a
    /// complex float if its numerator is Gaussian), and a complex value
    /// without imaginary part becomes real.
    pub fn simplify(self) -> NumericValue {
        match self {
            NumericValue::Rational(r) => {
                if r.is_integer() {
                    NumericValue::Integer(r.to_integer())
                } else if r.is_gaussian() && r.denominator().is_one() {
                    NumericValue::Complex(r.to_complex_f64())
                } else {
                    NumericValue::Rational(r)
                }
            }
            NumericValue::Complex(c) => {
                if c.is_real() {
                    NumericValue::Real(c.re)
                } else {
                    NumericValue::Complex(c)
                }
            }
            v => v,
        }
    }

    fn to_fraction(&self) -> Fraction {
        match self {
            NumericValue::Integer(i) => Fraction::from_integer(i.clone()),
            NumericValue::Rational(r) => r.clone(),
            _ => panic!("Value is not exact"),
        }
    }

    /// Convert to a float; a fraction's Gaussian numerator contributes its
    /// magnitude. Complex values cannot be converted.
    pub fn to_f64(&self) -> f64 {
        match self {
            NumericValue::Integer(i) => i.to_f64(),
            NumericValue::Rational(r) => r.to_f64(),
            NumericValue::Real(f) => f.into_inner(),
            NumericValue::Complex(_) => panic!("Value is not real"),
        }
    }

    fn to_complex(&self) -> Complex<F64> {
        match self {
            NumericValue::Integer(i) => Complex::new(F64::new(i.to_f64()), F64::new(0.)),
            NumericValue::Rational(r) => r.to_complex_f64(),
            NumericValue::Real(f) => Complex::new(*f, F64::new(0.)),
            NumericValue::Complex(c) => c.clone(),
        }
    }
}

impl Default for NumericValue {
    fn default() -> Self {
        NumericValue::Integer(Integer::zero())
    }
}

impl From<Integer> for NumericValue {
    fn from(i: Integer) -> Self {
        NumericValue::Integer(i)
    }
}

impl From<i64> for NumericValue {
    fn from(i: i64) -> Self {
        NumericValue::Integer(i.into())
    }
}

impl From<Fraction> for NumericValue {
    fn from(r: Fraction) -> Self {
        NumericValue::Rational(r)
    }
}

impl From<f64> for NumericValue {
    fn from(f: f64) -> Self {
        NumericValue::Real(f.into())
    }
}

impl From<F64> for NumericValue {
    fn from(f: F64) -> Self {
        NumericValue::Real(f)
    }
}

impl From<Complex<F64>> for NumericValue {
    fn from(c: Complex<F64>) -> Self {
        NumericValue::Complex(c)
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericValue::Integer(i) => Display::fmt(i, f),
            NumericValue::Rational(r) => Display::fmt(r, f),
            NumericValue::Real(x) => Display::fmt(x, f),
            NumericValue::Complex(c) => Display::fmt(c, f),
        }
    }
}

/// The numeric tower as a field, parameterized by the decimal accuracy used
/// when exact and inexact values mix.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NumericTower {
    pub accuracy: u32,
}

impl Default for NumericTower {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericTower {
    pub const fn new() -> NumericTower {
        NumericTower {
            accuracy: DEFAULT_FLOAT_ACCURACY,
        }
    }

    pub const fn with_accuracy(accuracy: u32) -> NumericTower {
        NumericTower { accuracy }
    }

    /// Promote both operands to their smallest common domain. A fraction
    /// with a Gaussian numerator cannot be demoted to a real, so mixing it
    /// with a real promotes both to complex.
    fn promote_pair(&self, a: &NumericValue, b: &NumericValue) -> (NumericValue, NumericValue) {
        let mut rank = a.rank().max(b.rank());
        if rank == 2 {
            let gaussian = |v: &NumericValue| match v {
                NumericValue::Rational(r) => r.is_gaussian(),
                _ => false,
            };
            if gaussian(a) || gaussian(b) {
                rank = 3;
            }
        }

        let promote = |v: &NumericValue| match rank {
            0 => v.clone(),
            1 => NumericValue::Rational(v.to_fraction()),
            2 => NumericValue::Real(F64::new(v.to_f64())),
            _ => NumericValue::Complex(v.to_complex()),
        };
        (promote(a), promote(b))
    }

    /// Build an exact fraction from two tower values. Inexact operands are
    /// converted at this tower's accuracy.
    pub fn fraction(
        &self,
        num: &NumericValue,
        den: &NumericValue,
    ) -> Result<NumericValue, FractionError> {
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }

        let to_exact = |v: &NumericValue| -> Result<Fraction, FractionError> {
            match v {
                NumericValue::Integer(i) => Ok(Fraction::from_integer(i.clone())),
                NumericValue::Rational(r) => Ok(r.clone()),
                NumericValue::Real(f) => Fraction::from_real(f.into_inner(), self.accuracy),
                NumericValue::Complex(c) => Fraction::from_complex(c.clone(), self.accuracy),
            }
        };

        let n = to_exact(num)?;
        let d = to_exact(den)?;
        Ok(NumericValue::Rational(&n * &d.inverse()?))
    }

    /// Exact ordering where it exists; mixing in a real compares floats.
    /// Complex values cannot be ordered.
    pub fn try_cmp(
        &self,
        a: &NumericValue,
        b: &NumericValue,
    ) -> Result<Ordering, FractionError> {
        match self.promote_pair(a, b) {
            (NumericValue::Integer(x), NumericValue::Integer(y)) => Ok(x.cmp(&y)),
            (NumericValue::Rational(x), NumericValue::Rational(y)) => x.try_cmp(&y),
            (NumericValue::Real(x), NumericValue::Real(y)) => Ok(x.cmp(&y)),
            _ => Err(FractionError::UnsupportedComparison),
        }
    }

    /// Approximate equality after rounding both values to this tower's
    /// accuracy.
    pub fn eq_values(&self, a: &NumericValue, b: &NumericValue) -> bool {
        let scale = 10f64.powi(self.accuracy as i32);
        let x = a.to_complex();
        let y = b.to_complex();
        (x.re.into_inner() * scale).round() == (y.re.into_inner() * scale).round()
            && (x.im.into_inner() * scale).round() == (y.im.into_inner() * scale).round()
    }

    /// The absolute value. A complex value maps to its real magnitude.
    pub fn abs(&self, a: &NumericValue) -> NumericValue {
        match a {
            NumericValue::Integer(i) => NumericValue::Integer(i.abs()),
            NumericValue::Rational(r) => match r.abs() {
                Ok(f) => NumericValue::Rational(f),
                Err(_) => NumericValue::Real(F64::new(r.to_f64())),
            },
            NumericValue::Real(f) => NumericValue::Real(f.abs()),
            NumericValue::Complex(c) => NumericValue::Real(c.norm()),
        }
    }

    /// Round inexact values to `digits` decimal digits; exact values are
    /// unchanged.
    pub fn round_to(&self, a: &NumericValue, digits: u32) -> NumericValue {
        let scale = 10f64.powi(digits as i32);
        let round = |f: F64| F64::new((f.into_inner() * scale).round() / scale);
        match a {
            NumericValue::Real(f) => NumericValue::Real(round(*f)),
            NumericValue::Complex(c) => {
                NumericValue::Complex(Complex::new(round(c.re), round(c.im)))
            }
            v => v.clone(),
        }
    }

    /// Truncate towards zero to an integer; a complex value truncates its
    /// magnitude.
    pub fn to_integer(&self, a: &NumericValue) -> Integer {
        match a {
            NumericValue::Integer(i) => i.clone(),
            NumericValue::Rational(r) => r.to_integer(),
            NumericValue::Real(f) => Integer::from_f64(f.into_inner().trunc()),
            NumericValue::Complex(c) => Integer::from_f64(c.norm().into_inner().trunc()),
        }
    }
}

impl Ring for NumericTower {
    type Element = NumericValue;

    fn add(&self, a: &NumericValue, b: &NumericValue) -> NumericValue {
        match self.promote_pair(a, b) {
            (NumericValue::Integer(x), NumericValue::Integer(y)) => {
                NumericValue::Integer(&x + &y)
            }
            (NumericValue::Rational(x), NumericValue::Rational(y)) => {
                NumericValue::Rational(&x + &y)
            }
            (NumericValue::Real(x), NumericValue::Real(y)) => NumericValue::Real(x + y),
            (NumericValue::Complex(x), NumericValue::Complex(y)) => NumericValue::Complex(x + y),
            _ => unreachable!("Operands are promoted to the same domain"),
        }
    }

    fn sub(&self, a: &NumericValue, b: &NumericValue) -> NumericValue {
        self.add(a, &self.neg(b))
    }

    fn mul(&self, a: &NumericValue, b: &NumericValue) -> NumericValue {
        match self.promote_pair(a, b) {
            (NumericValue::Integer(x), NumericValue::Integer(y)) => {
                NumericValue::Integer(&x * &y)
            }
            (NumericValue::Rational(x), NumericValue::Rational(y)) => {
                NumericValue::Rational(&x * &y)
            }
            (NumericValue::Real(x), NumericValue::Real(y)) => NumericValue::Real(x * y),
            (NumericValue::Complex(x), NumericValue::Complex(y)) => NumericValue::Complex(x * y),
            _ => unreachable!("Operands are promoted to the same domain"),
        }
    }

    fn add_assign(&self, a: &mut NumericValue, b: &NumericValue) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut NumericValue, b: &NumericValue) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut NumericValue, b: &NumericValue) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut NumericValue, b: &NumericValue, c: &NumericValue) {
        *a = self.add(a, &self.mul(b, c));
    }

    fn sub_mul_assign(&self, a: &mut NumericValue, b: &NumericValue, c: &NumericValue) {
        *a = self.sub(a, &self.mul(b, c));
    }

    fn neg(&self, a: &NumericValue) -> NumericValue {
        match a {
            NumericValue::Integer(i) => NumericValue::Integer(-i),
            NumericValue::Rational(r) => NumericValue::Rational(-r),
            NumericValue::Real(f) => NumericValue::Real(-*f),
            NumericValue::Complex(c) => NumericValue::Complex(-c.clone()),
        }
    }

    fn zero(&self) -> NumericValue {
        NumericValue::Integer(Integer::zero())
    }

    fn one(&self) -> NumericValue {
        NumericValue::Integer(Integer::one())
    }

    fn nth(&self, n: i64) -> NumericValue {
        NumericValue::Integer(Integer::Natural(n))
    }

    fn pow(&self, b: &NumericValue, e: u64) -> NumericValue {
        if e > u32::MAX as u64 {
            panic!("Power of exponentiation is larger than 2^32: {}", e);
        }
        match b {
            NumericValue::Integer(i) => NumericValue::Integer(i.pow(e as u32)),
            NumericValue::Rational(r) => match r.powi(e as i64) {
                Ok(f) => NumericValue::Rational(f),
                Err(err) => panic!("{}", err),
            },
            NumericValue::Real(f) => NumericValue::Real(F64::new(f.into_inner().powi(e as i32))),
            NumericValue::Complex(c) => {
                let mut r = Complex::new(F64::new(1.), F64::new(0.));
                for _ in 0..e {
                    r = r * c.clone();
                }
                NumericValue::Complex(r)
            }
        }
    }

    fn is_zero(a: &NumericValue) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &NumericValue) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &NumericValue, b: &NumericValue) -> Option<NumericValue> {
        if b.is_zero() {
            None
        } else {
            Some(self.div(a, b))
        }
    }

    fn sample(&self, rng: &mut impl rand::RngCore, range: (i64, i64)) -> NumericValue {
        let r = rng.gen_range(range.0..range.1);
        NumericValue::Integer(Integer::Natural(r))
    }

    fn format_element(&self, a: &NumericValue) -> String {
        match a {
            NumericValue::Real(f) => format!("{:.3}", f.into_inner()),
            NumericValue::Complex(c) => format!(
                "({:.3}{:+.3}i)",
                c.re.into_inner(),
                c.im.into_inner()
            ),
            v => v.to_string(),
        }
    }
}

impl EuclideanDomain for NumericTower {
    fn rem(&self, a: &NumericValue, b: &NumericValue) -> NumericValue {
        match self.promote_pair(a, b) {
            (NumericValue::Integer(x), NumericValue::Integer(y)) => {
                NumericValue::Integer(x.quot_rem(&y).1)
            }
            (NumericValue::Rational(x), NumericValue::Rational(y)) => match x.rem(&y) {
                Ok(r) => NumericValue::Rational(r),
                Err(err) => panic!("{}", err),
            },
            (NumericValue::Real(x), NumericValue::Real(y)) => {
                let r = x.into_inner().rem_euclid(y.into_inner());
                NumericValue::Real(F64::new(r))
            }
            _ => panic!("Modulus is not defined for complex values"),
        }
    }

    fn quot_rem(&self, a: &NumericValue, b: &NumericValue) -> (NumericValue, NumericValue) {
        let r = self.rem(a, b);
        let q = self.div(&self.sub(a, &r), b);
        (q, r)
    }

    fn gcd(&self, a: &NumericValue, b: &NumericValue) -> NumericValue {
        match self.promote_pair(a, b) {
            (NumericValue::Integer(x), NumericValue::Integer(y)) => {
                NumericValue::Integer(x.gcd(&y))
            }
            _ => self.one(),
        }
    }
}

impl Field for NumericTower {
    fn div(&self, a: &NumericValue, b: &NumericValue) -> NumericValue {
        if b.is_zero() {
            panic!("Cannot divide by zero");
        }
        match self.promote_pair(a, b) {
            // exact division of integers yields a fraction
            (NumericValue::Integer(x), NumericValue::Integer(y)) => NumericValue::Rational(
                &Fraction::from_integer(x) / &Fraction::from_integer(y),
            ),
            (NumericValue::Rational(x), NumericValue::Rational(y)) => {
                NumericValue::Rational(&x / &y)
            }
            (NumericValue::Real(x), NumericValue::Real(y)) => NumericValue::Real(x / y),
            (NumericValue::Complex(x), NumericValue::Complex(y)) => NumericValue::Complex(x / y),
            _ => unreachable!("Operands are promoted to the same domain"),
        }
    }

    fn div_assign(&self, a: &mut NumericValue, b: &NumericValue) {
        *a = self.div(a, b);
    }

    fn inv(&self, a: &NumericValue) -> NumericValue {
        if a.is_zero() {
            panic!("Cannot invert zero");
        }
        self.div(&self.one(), a)
    }
}

impl Add<&NumericValue> for &NumericValue {
    type Output = NumericValue;

    fn add(self, rhs: &NumericValue) -> NumericValue {
        N.add(self, rhs)
    }
}

impl Sub<&NumericValue> for &NumericValue {
    type Output = NumericValue;

    fn sub(self, rhs: &NumericValue) -> NumericValue {
        N.sub(self, rhs)
    }
}

impl Mul<&NumericValue> for &NumericValue {
    type Output = NumericValue;

    fn mul(self, rhs: &NumericValue) -> NumericValue {
        N.mul(self, rhs)
    }
}

impl Div<&NumericValue> for &NumericValue {
    type Output = NumericValue;

    fn div(self, rhs: &NumericValue) -> NumericValue {
        N.div(self, rhs)
    }
}

impl Neg for &NumericValue {
    type Output = NumericValue;

    fn neg(self) -> NumericValue {
        N.neg(self)
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::domains::{
        float::{Complex, F64},
        rational::{Fraction, FractionError},
        Field, Ring,
    };

    use super::{NumericValue, N};

    #[test]
    fn promotion() {
        // integer + rational stays exact
        let a = N.add(&1.into(), &NumericValue::Rational((1, 2).into()));
        assert_eq!(a, NumericValue::Rational((3, 2).into()));

        // rational + real goes inexact
        let b = N.add(&NumericValue::Rational((1, 2).into()), &0.25.into());
        assert_eq!(b, NumericValue::Real(F64::new(0.75)));

        // real + complex goes complex
        let c = N.add(
            &2.0.into(),
            &NumericValue::Complex(Complex::new(F64::new(1.), F64::new(1.))),
        );
        assert_eq!(
            c,
            NumericValue::Complex(Complex::new(F64::new(3.), F64::new(1.)))
        );
    }

    #[test]
    fn simplify() {
        let a = N.div(&4.into(), &2.into());
        assert_eq!(a, NumericValue::Rational((2, 1).into()));
        assert_eq!(a.simplify(), 2.into());

        let b = NumericValue::Complex(Complex::new(F64::new(1.5), F64::new(0.)));
        assert_eq!(b.simplify(), NumericValue::Real(F64::new(1.5)));
    }

    #[test]
    fn fraction_construction() {
        let f = N.fraction(&3.into(), &4.into()).unwrap();
        assert_eq!(f, NumericValue::Rational((3, 4).into()));

        let f = N.fraction(&0.5.into(), &2.into()).unwrap();
        assert_eq!(f, NumericValue::Rational((1, 4).into()));

        assert_eq!(
            N.fraction(&1.into(), &0.into()),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn comparison() {
        assert_eq!(N.try_cmp(&1.into(), &2.into()), Ok(Ordering::Less));
        assert_eq!(
            N.try_cmp(&NumericValue::Rational((1, 2).into()), &0.5.into()),
            Ok(Ordering::Equal)
        );
        assert_eq!(
            N.try_cmp(
                &1.into(),
                &NumericValue::Complex(Complex::new(F64::new(1.), F64::new(1.)))
            ),
            Err(FractionError::UnsupportedComparison)
        );
    }

    #[test]
    fn division_is_exact() {
        let a = N.div(&1.into(), &3.into());
        let b = N.mul(&a, &3.into());
        assert_eq!(b.simplify(), 1.into());
    }

    #[test]
    fn formatting() {
        assert_eq!(N.format_element(&2.into()), "2");
        assert_eq!(
            N.format_element(&NumericValue::Rational(Fraction::from((1, 2)))),
            "1/2"
        );
        assert_eq!(N.format_element(&1.5.into()), "1.500");
        assert_eq!(
            N.format_element(&NumericValue::Complex(Complex::new(
                F64::new(1.),
                F64::new(-2.)
            ))),
            "(1.000-2.000i)"
        );
    }
}
