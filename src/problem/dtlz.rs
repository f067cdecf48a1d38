pub mod dtlz1;
pub mod dtlz2;
pub mod dtlz3;
pub mod dtlz4;
pub mod dtlz5;
pub mod dtlz6;

use std::f64::consts::PI;
use serde::{Deserialize, Serialize};

/// Multimodal distance used by DTLZ1 and DTLZ3.
pub fn g1(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m
    {
        sum += (x_m_i - 0.5).powi(2) - (20.0 * PI * (x_m_i - 0.5)).cos();
    }

    100.0 * (x_m.len() as f64 + sum)
}

/// Quadratic distance used by DTLZ2, DTLZ4 and DTLZ5.
pub fn g2(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m.iter()
    {
        sum += (x_m_i - 0.5).powi(2);
    }

    sum
}

/// Power distance used by DTLZ6.
pub fn g3(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m.iter()
    {
        sum += x_m_i.powf(0.1);
    }

    sum
}

/// Shared recursive product behind every DTLZ front.
///
/// `f[i] = base * head(x[0]) * .. * head(x[m-i-2]) * tail(x[m-i-1])`, where the
/// tail factor is skipped for `i = 0` and the head product is empty for `i = m-1`.
/// `x` must hold exactly `f.len() - 1` values.
pub fn calc_recursive_target<H, T>(x: &[f64], base: f64, head: H, tail: T, f: &mut [f64])
    where H: Fn(f64) -> f64,
          T: Fn(f64) -> f64
{
    for i in 0..f.len()
    {
        let mut f_val = base;

        for x_i in &x[..x.len() - i]
        {
            f_val *= head(*x_i);
        }

        if i > 0
        {
            f_val *= tail(x[x.len() - i]);
        }

        f[i] = f_val;
    }
}

/// Linear simplex `sum(f) = 0.5 * (1 + g)` (DTLZ1).
pub fn calc_linear_target(x: &[f64], g: f64, f: &mut [f64])
{
    calc_recursive_target(x, 0.5 * (1.0 + g), |x_i| x_i, |x_i| 1.0 - x_i, f);
}

/// Hypersphere of radius `1 + g`, angles `x_i^alpha * pi / 2` (DTLZ2-DTLZ4).
pub fn calc_spherical_target(x: &[f64], g: f64, alpha: f64, f: &mut [f64])
{
    calc_recursive_target(
        x,
        1.0 + g,
        |x_i| (x_i.powf(alpha) * PI / 2.0).cos(),
        |x_i| (x_i.powf(alpha) * PI / 2.0).sin(),
        f
    );
}

/// Hypersphere of radius `1 + g` over angles already expressed in radians (DTLZ5, DTLZ6).
pub fn calc_angle_target(theta: &[f64], g: f64, f: &mut [f64])
{
    calc_recursive_target(theta, 1.0 + g, f64::cos, f64::sin, f);
}

/// Which values feed `theta[1..]` in the DTLZ5/DTLZ6 angle mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThetaSource
{
    /// Reads the objective buffer as it is on entry, before it gets overwritten.
    /// Results depend on the buffer contents, so pass a zeroed buffer for reproducible output.
    #[default]
    PreviousObjectives,
    /// Reads the decision variables, giving the degenerate curve front of Deb et al.
    DecisionVariables
}

/// Maps the position prefix onto angles for DTLZ5/DTLZ6.
///
/// `theta[0] = x[0] * pi / 2`, `theta[i] = pi / (4 (1 + g)) * (1 + 2 g v_i)` where `v_i`
/// comes from `f_in[i]` or `x[i]` depending on `source`.
pub fn calc_theta(x: &[f64], g: f64, source: ThetaSource, f_in: &[f64]) -> Vec<f64>
{
    let t = PI / (4.0 * (1.0 + g));

    let mut theta: Vec<f64> = (0..x.len())
        .map(|i| {
            let v_i = match source {
                ThetaSource::PreviousObjectives => f_in[i],
                ThetaSource::DecisionVariables => x[i]
            };

            t * (1.0 + 2.0 * g * v_i)
        })
        .collect();

    if let Some(theta_0) = theta.first_mut()
    {
        *theta_0 = x[0] * PI / 2.0;
    }

    theta
}
