//! # radii
//!
//! Computer-assisted proofs of zeros of nonlinear vector fields with the
//! radii polynomial theorem, no-std compatible (requires `alloc`).
//!
//! Given an approximate zero `x̄` of `f` and an approximate inverse
//! `A ≈ Df(x̄)⁻¹`, bounds `Y0 ≥ ‖A f(x̄)‖`, `Z0 ≥ ‖I − A Df(x̄)‖` and
//! `Z2 ≥ ‖A D²f‖` define
//!
//! ```text
//! p(r) = Z2 r² − (1 − Z0) r + Y0
//! ```
//!
//! If `p(r0) < 0` for some `r0 > 0`, then `f` has exactly one zero in the
//! ball of radius `r0` around `x̄`. The bounds are computed with interval
//! arithmetic, so the conclusion holds despite floating-point rounding.
//!
//! ## Quick start
//!
//! ```
//! use radii::field::Lorenz;
//! use radii::proof::{prove_with, ProofSettings};
//! use radii::DynVector;
//!
//! // Nonzero equilibrium of the Lorenz system.
//! let plain = Lorenz::new(10.0, 28.0, 8.0 / 3.0);
//! let rigorous = Lorenz::classical();
//! let x0 = DynVector::from_slice(&[8.0, 8.0, 27.0]);
//!
//! let proof = prove_with(&plain, &rigorous, &x0, &ProofSettings::default()).unwrap();
//! assert!(proof.result.is_certified());
//! println!("{}", proof.result);
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — [`Interval`], closed intervals over `f64` with outward
//!   rounding. The rigorous numeric kind.
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions,
//!   column-major `Vec<T>` storage, generic over [`Scalar`] so the same
//!   products and [`Norm`]s run on `f64` and [`Interval`]. [`DynVector<T>`]
//!   newtype for single-index vector access. [`DynLu`] on the plain path.
//!
//! - [`linalg`] — LU with partial pivoting as free functions over
//!   `&mut impl MatrixMut<T>`.
//!
//! - [`field`] — The [`field::VectorField`] trait and the two problems:
//!   [`field::Lorenz`] and the truncated Fourier steady states of the Fisher
//!   equation, [`field::Fisher`].
//!
//! - [`proof`] — Newton solver, approximate inverse, Y0/Z0/Z2 bounds and the
//!   radii polynomial certifier, plus [`proof::prove`] chaining them.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — the numeric kind (`f64` or [`Interval`])
//!   - [`FloatScalar`] — plain floats (`Scalar + Float`), used by LU
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Logging
//!
//! Pipeline stages emit [`tracing`] events: `debug` for Newton iterations and
//! computed bounds, `warn` when the Jacobian is ill-conditioned, `info` for
//! the certifier's verdict. No subscriber is installed by the library.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` |
//! | (none)  |         | `no_std` + `alloc`, pure-Rust `libm` fallback |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dynmatrix;
pub mod field;
pub mod interval;
pub mod linalg;
pub mod proof;
pub mod traits;

pub use dynmatrix::{DynLu, DynMatrix, DynVector, Norm};
pub use interval::Interval;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
