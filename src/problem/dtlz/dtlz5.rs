use crate::array_solution::ArraySolutionEvaluator;
use crate::error::DtlzResult;
use crate::problem::dtlz::{calc_angle_target, calc_theta, g2, ThetaSource};
use crate::problem::Problem;
use crate::problem_spec::ProblemSpec;

/// Degenerate front: the angle mapping squeezes the sphere of DTLZ2 onto a curve.
///
/// With the default [`ThetaSource::PreviousObjectives`] the angles read the
/// objective buffer before it is overwritten, so callers wanting repeatable
/// results must hand in a zeroed buffer.
#[derive(Debug, Clone)]
pub struct Dtlz5
{
    name: String,
    spec: ProblemSpec,
    theta_source: ThetaSource
}

impl Dtlz5 {
    pub fn new(n_var: usize, n_obj: usize) -> DtlzResult<Self>
    {
        let spec = ProblemSpec::new(n_var, n_obj)?;

        log::debug!("DTLZ5 with {} variables and {} objectives (k = {})", n_var, n_obj, spec.k());

        Ok(Dtlz5 {
            name: format!("DTLZ5 ({} {})", n_var, n_obj),
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

impl Problem for Dtlz5
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn problem_class_name(&self) -> &str {
        "DTLZ5"
    }

    fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        let (_, x_m) = self.spec.split(in_x);

        g2(x_m)
    }

    fn best_metric(&self) -> f64 {
        0.0
    }
}

impl ArraySolutionEvaluator for Dtlz5
{
    fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    fn evaluate(&self, in_x: &[f64], f: &mut [f64]) -> DtlzResult<()> {
        self.spec.check_lengths(in_x, f)?;

        let (x, x_m) = self.spec.split(in_x);

        let g = g2(x_m);

        let theta = calc_theta(x, g, self.theta_source, f);

        calc_angle_target(&theta, g, f);

        Ok(())
    }
}
