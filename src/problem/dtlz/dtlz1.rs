use crate::array_solution::ArraySolutionEvaluator;
use crate::error::DtlzResult;
use crate::problem::dtlz::{calc_linear_target, g1};
use crate::problem::Problem;
use crate::problem_spec::ProblemSpec;

/// Linear front `sum(f) = 0.5` with a multimodal distance term.
#[derive(Debug, Clone)]
pub struct Dtlz1
{
    name: String,
    spec: ProblemSpec
}

impl Dtlz1 {
    pub fn new(n_var: usize, n_obj: usize) -> DtlzResult<Self>
    {
        let spec = ProblemSpec::new(n_var, n_obj)?;

        log::debug!("DTLZ1 with {} variables and {} objectives (k = {})", n_var, n_obj, spec.k());

        Ok(Dtlz1 {
            name: format!("DTLZ1 ({} {})", n_var, n_obj),
            spec
        })
    }
}

impl Problem for Dtlz1
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn problem_class_name(&self) -> &str {
        "DTLZ1"
    }

    fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        let (_, x_m) = self.spec.split(in_x);

        g1(x_m)
    }

    fn best_metric(&self) -> f64 {
        0.0
    }
}

impl ArraySolutionEvaluator for Dtlz1
{
    fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    fn evaluate(&self, in_x: &[f64], f: &mut [f64]) -> DtlzResult<()> {
        self.spec.check_lengths(in_x, f)?;

        let (x, x_m) = self.spec.split(in_x);

        let g = g1(x_m);

        calc_linear_target(x, g, f);

        Ok(())
    }
}
