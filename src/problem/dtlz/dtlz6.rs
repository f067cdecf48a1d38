use crate::array_solution::ArraySolutionEvaluator;
use crate::error::DtlzResult;
use crate::problem::dtlz::{calc_angle_target, calc_theta, g3, ThetaSource};
use crate::problem::Problem;
use crate::problem_spec::ProblemSpec;

/// DTLZ5's degenerate front behind the biased `x^0.1` distance term.
#[derive(Debug, Clone)]
pub struct Dtlz6
{
    name: String,
    spec: ProblemSpec,
    theta_source: ThetaSource
}

impl Dtlz6 {
    pub fn new(n_var: usize, n_obj: usize) -> DtlzResult<Self>
    {
        let spec = ProblemSpec::new(n_var, n_obj)?;

        log::debug!("DTLZ6 with {} variables and {} objectives (k = {})", n_var, n_obj, spec.k());

        Ok(Dtlz6 {
            name: format!("DTLZ6 ({} {})", n_var, n_obj),
            spec,
            theta_source: ThetaSource::default()
        })
    }

    pub fn with_theta_source(mut self, theta_source: ThetaSource) -> Self
    {
        self.theta_source = theta_source;
        self
    }

    pub fn theta_source(&self) -> ThetaSource
    {
        self.theta_source
    }
}

impl Problem for Dtlz6
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn problem_class_name(&self) -> &str {
        "DTLZ6"
    }

    fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        let (_, x_m) = self.spec.split(in_x);

        g3(x_m)
    }

    fn best_metric(&self) -> f64 {
        0.0
    }
}

impl ArraySolutionEvaluator for Dtlz6
{
    fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    fn evaluate(&self, in_x: &[f64], f: &mut [f64]) -> DtlzResult<()> {
        self.spec.check_lengths(in_x, f)?;

        let (x, x_m) = self.spec.split(in_x);

        let g = g3(x_m);

        let theta = calc_theta(x, g, self.theta_source, f);

        calc_angle_target(&theta, g, f);

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn zero_tail_is_on_front()
    {
        let dtlz6 = Dtlz6::new(12, 3).unwrap();
        let mut x = [0.0; 12];
        x[0] = 0.5;
        x[1] = 0.9;
        let mut f = [0.0; 3];

        dtlz6.evaluate(&x, &mut f).unwrap();

        assert_eq!(dtlz6.convergence_metric(&x), 0.0);

        // g = 0 puts every theta past the first at pi/4, whatever the source
        let norm: f64 = f.iter().map(|f_i| f_i * f_i).sum();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn power_distance_is_biased()
    {
        let dtlz6 = Dtlz6::new(3, 2).unwrap();

        let g = dtlz6.convergence_metric(&[0.5, 0.1, 0.1]);

        assert!((g - 2.0 * 0.1f64.powf(0.1)).abs() < 1e-12);
        assert!(g > 1.5);
    }
}
