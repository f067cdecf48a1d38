use crate::array_solution::ArraySolutionEvaluator;
use crate::error::DtlzResult;
use crate::problem::dtlz::{calc_spherical_target, g2};
use crate::problem::Problem;
use crate::problem_spec::ProblemSpec;

const ALPHA: f64 = 100.0;

/// DTLZ2 with angles `x^100`, which crowds solutions towards the `f_m` axis.
#[derive(Debug, Clone)]
pub struct Dtlz4
{
    name: String,
    spec: ProblemSpec
}

impl Dtlz4 {
    pub fn new(n_var: usize, n_obj: usize) -> DtlzResult<Self>
    {
        let spec = ProblemSpec::new(n_var, n_obj)?;

        log::debug!("DTLZ4 with {} variables and {} objectives (k = {})", n_var, n_obj, spec.k());

        Ok(Dtlz4 {
            name: format!("DTLZ4 ({} {})", n_var, n_obj),
            spec
        })
    }
}

impl Problem for Dtlz4
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn problem_class_name(&self) -> &str {
        "DTLZ4"
    }

    fn convergence_metric(&self, in_x: &[f64]) -> f64 {
        let (_, x_m) = self.spec.split(in_x);

        g2(x_m)
    }

    fn best_metric(&self) -> f64 {
        0.0
    }
}

impl ArraySolutionEvaluator for Dtlz4
{
    fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    fn evaluate(&self, in_x: &[f64], f: &mut [f64]) -> DtlzResult<()> {
        self.spec.check_lengths(in_x, f)?;

        let (x, x_m) = self.spec.split(in_x);

        let g = g2(x_m);

        calc_spherical_target(x, g, ALPHA, f);

        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn mid_range_angles_collapse_onto_first_objective()
    {
        let dtlz4 = Dtlz4::new(12, 3).unwrap();
        let mut f = [0.0; 3];

        dtlz4.evaluate(&[0.5; 12], &mut f).unwrap();

        // 0.5^100 is ~8e-31, so every angle is effectively zero
        assert!((f[0] - 1.0).abs() < 1e-12);
        assert!(f[1].abs() < 1e-12);
        assert!(f[2].abs() < 1e-12);
    }

    #[test]
    fn unit_angles_match_dtlz2()
    {
        let dtlz4 = Dtlz4::new(5, 3).unwrap();
        let mut f = [0.0; 3];

        dtlz4.evaluate(&[1.0, 1.0, 0.5, 0.5, 0.5], &mut f).unwrap();

        assert!(f[0].abs() < 1e-12);
        assert!(f[1].abs() < 1e-12);
        assert!((f[2] - 1.0).abs() < 1e-12);
    }
}
