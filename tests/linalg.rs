use ratmat::domains::{
    float::{Complex, F64},
    integer::Integer,
    numeric::{NumericValue, N},
    rational::{Fraction, Q},
    Field,
};
use ratmat::tensors::matrix::{Matrix, MatrixError};

fn fm(rows: Vec<Vec<(i64, i64)>>) -> Matrix<Q> {
    Matrix::from_nested_vec(
        rows.into_iter()
            .map(|r| r.into_iter().map(Fraction::from).collect())
            .collect(),
        Q,
    )
    .unwrap()
}

#[test]
fn exact_inverse() {
    // a Hilbert-like matrix, a classic ill-conditioned case for floats
    let h = fm(vec![
        vec![(1, 1), (1, 2), (1, 3)],
        vec![(1, 2), (1, 3), (1, 4)],
        vec![(1, 3), (1, 4), (1, 5)],
    ]);

    let inv = h.inv().unwrap();
    assert_eq!(&h * &inv, Matrix::identity(3, Q));
    assert_eq!(&inv * &h, Matrix::identity(3, Q));

    // det(h) * det(h^-1) == 1
    let d = h.det().unwrap();
    let di = inv.det().unwrap();
    assert_eq!(&d * &di, Fraction::one());
}

#[test]
fn adjoint_and_cofactors_agree_with_inverse() {
    let m = fm(vec![
        vec![(3, 1), (0, 1), (2, 1)],
        vec![(2, 1), (0, 1), (-2, 1)],
        vec![(0, 1), (1, 1), (1, 1)],
    ]);

    let d = m.det().unwrap();
    assert_eq!(d, (10, 1).into());

    let adj = m.adjoint().unwrap();
    let inv = m.inv().unwrap();
    assert_eq!(adj.div_scalar(&d), inv);
}

#[test]
fn display_formatting() {
    let m = fm(vec![vec![(1, 1), (1, 2)], vec![(3, 2), (2, 1)]]);
    assert_eq!(m.to_string(), "[ 1/1 1/2 ]\n[ 3/2 2/1 ]");

    // floats are fixed to three digits, columns right-aligned
    let t = Matrix::from_nested_vec(
        vec![vec![NumericValue::from(1_i64), NumericValue::from(1.5_f64)]],
        N,
    )
    .unwrap();
    assert_eq!(t.to_string(), "[     1 1.500 ]");

    let c = Matrix::from_nested_vec(
        vec![vec![NumericValue::Complex(Complex::new(
            F64::new(1.),
            F64::new(-2.),
        ))]],
        N,
    )
    .unwrap();
    assert_eq!(c.to_string(), "[ (1.000-2.000i) ]");
}

#[test]
fn mixed_tower_flow() {
    // start from floats, move to exact fractions, invert, and come back
    let raw = Matrix::from_nested_vec(
        vec![
            vec![NumericValue::from(0.5_f64), NumericValue::from(1.0_f64)],
            vec![NumericValue::from(2.0_f64), NumericValue::from(1.0_f64)],
        ],
        N,
    )
    .unwrap();

    let exact = raw.map(
        |e| N.fraction(e, &NumericValue::from(1_i64)).unwrap(),
        N,
    );
    assert_eq!(exact[(0, 0)], NumericValue::Rational((1, 2).into()));

    let inv = exact.inv().unwrap();
    let id = (&exact * &inv).map(|e| e.clone().simplify(), N);
    assert_eq!(id, Matrix::identity(2, N));

    let back = inv.to_real_matrix();
    assert_eq!(back[(0, 1)], NumericValue::from(2.0_f64 / 3.0_f64));
}

#[test]
fn gaussian_fractions_in_matrices() {
    let i = Fraction::new(
        Complex::new(Integer::zero(), Integer::one()),
        Integer::one(),
    )
    .unwrap();

    // [[i, 0], [0, i]]^2 == -id
    let m = Matrix::eye(&[i.clone(), i], Q);
    let sq = m.pow(2).unwrap();
    assert_eq!(sq, Matrix::identity(2, Q).mul_scalar(&(-1).into()));
}

#[test]
fn errors_surface() {
    let rect = fm(vec![vec![(1, 1), (2, 1), (3, 1)]]);
    assert_eq!(rect.det(), Err(MatrixError::NotSquare));
    assert_eq!(rect.inv(), Err(MatrixError::NotSquare));

    let singular = fm(vec![vec![(1, 1), (2, 1)], vec![(2, 1), (4, 1)]]);
    assert_eq!(singular.inv(), Err(MatrixError::Singular));

    let scalar = fm(vec![vec![(3, 1)]]);
    assert_eq!(scalar.minor(0, 0), Err(MatrixError::UndefinedMinor));
}

#[test]
fn accuracy_is_per_domain() {
    let coarse = ratmat::domains::numeric::NumericTower::with_accuracy(2);
    let fine = ratmat::domains::numeric::NumericTower::with_accuracy(8);

    let a = NumericValue::from(0.333_f64);
    let third = N.div(&NumericValue::from(1_i64), &NumericValue::from(3_i64));

    assert!(coarse.eq_values(&a, &third));
    assert!(!fine.eq_values(&a, &third));

    // conversion accuracy follows the domain, not a global setting
    let f = coarse
        .fraction(&NumericValue::from(0.333_f64), &NumericValue::from(1_i64))
        .unwrap();
    assert_eq!(f, NumericValue::Rational((33, 100).into()));
}
