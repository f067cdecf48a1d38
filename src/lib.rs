//! DTLZ1-DTLZ6 many-objective benchmark problems.
//!
//! Every problem maps a decision vector in `[0, 1]^n` to `m` objectives whose
//! Pareto-optimal front is known analytically, so optimizer output can be
//! scored against ground truth with [`Problem::convergence_metric`].
//!
//! ```
//! use sss_dtlz::{ArraySolutionEvaluator, Dtlz2};
//!
//! let dtlz2 = Dtlz2::new(12, 3).unwrap();
//! let mut f = vec![0.0; 3];
//! dtlz2.evaluate(&[0.5; 12], &mut f).unwrap();
//!
//! let norm: f64 = f.iter().map(|f_i| f_i * f_i).sum();
//! assert!((norm - 1.0).abs() < 1e-12);
//! ```

mod array_solution;
pub mod config;
mod error;
pub mod metric;
mod problem;
mod problem_spec;
#[cfg(test)]
mod tests;

pub use crate::array_solution::{ArraySolution, ArraySolutionEvaluator};
pub use crate::config::{DtlzConfig, DtlzKind};
pub use crate::error::{DtlzError, DtlzResult};
pub use crate::problem::{DtlzProblem, Problem};
pub use crate::problem::dtlz::{calc_angle_target, calc_linear_target, calc_recursive_target, calc_spherical_target, calc_theta, g1, g2, g3, ThetaSource};
pub use crate::problem::dtlz::dtlz1::Dtlz1;
pub use crate::problem::dtlz::dtlz2::Dtlz2;
pub use crate::problem::dtlz::dtlz3::Dtlz3;
pub use crate::problem::dtlz::dtlz4::Dtlz4;
pub use crate::problem::dtlz::dtlz5::Dtlz5;
pub use crate::problem::dtlz::dtlz6::Dtlz6;
pub use crate::problem_spec::ProblemSpec;
