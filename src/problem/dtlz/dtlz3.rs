use crate::array_solution::ArraySolutionEvaluator;
use crate::error::DtlzResult;
use crate::problem::dtlz::{calc_spherical_target, g1};
use crate::problem::Problem;
use crate::problem_spec::ProblemSpec;

/// DTLZ2's spherical front behind DTLZ1's multimodal distance term.
#[derive(Debug, Clone)]
pub struct Dtlz3
{
    name: String,
    spec: ProblemSpec
}

impl Dtlz3 {
    pub fn new(n_var: usize, n_obj: usize) -> DtlzResult<Self>
    {
        let spec = ProblemSpec::new(n_var, n_obj)?;

        log::debug!("DTLZ3 with {} variables and {} objectives (k = {})", n_var, n_obj, spec.k());

        Ok(Dtlz3 {
            name: format!("DTLZ3 ({} {})", n_var, n_obj),
            spec
        })
    }
}

impl Problem for Dtlz3
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn problem_class_name(&self) -> &str {
        "DTLZ3"
    }

    fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        let (_, x_m) = self.spec.split(in_x);

        g1(x_m)
    }

    fn best_metric(&self) -> f64 {
        0.0
    }
}

impl ArraySolutionEvaluator for Dtlz3
{
    fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    fn evaluate(&self, in_x: &[f64], f: &mut [f64]) -> DtlzResult<()> {
        self.spec.check_lengths(in_x, f)?;

        let (x, x_m) = self.spec.split(in_x);

        let g = g1(x_m);

        calc_spherical_target(x, g, 1.0, f);

        Ok(())
    }
}
