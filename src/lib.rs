//! Ratmat provides exact fraction arithmetic and dense linear algebra
//! over a numeric tower of integers, rationals, reals and complex numbers.
//!
//! Fractions are reduced to lowest terms after every construction and every
//! arithmetic operation, so matrix determinants and inverses computed over
//! the rational domain are exact instead of accumulating floating-point
//! error.
//!
//! For example:
//!
//! ```
//! use ratmat::domains::rational::Q;
//! use ratmat::tensors::matrix::Matrix;
//!
//! let m = Matrix::from_nested_vec(
//!     vec![vec![(1, 1).into(), (2, 1).into()], vec![(3, 1).into(), (4, 1).into()]],
//!     Q,
//! )
//! .unwrap();
//!
//! let inv = m.inv().unwrap();
//! assert_eq!(&m * &inv, Matrix::identity(2, Q));
//! ```
//!
//! The numeric tower lives in [domains::numeric]: a closed tagged union over
//! the four scalar kinds with the promotion order
//! `Integer < Rational < Real < Complex`.

pub mod domains;
pub mod printer;
pub mod tensors;
pub mod utils;
