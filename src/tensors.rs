//! Dense linear algebra over generic rings.

pub mod matrix;
