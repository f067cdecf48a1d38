use std::fmt::{Debug, Formatter};
use dyn_clone::DynClone;
use itertools::izip;
use rand::Rng;
use crate::error::DtlzResult;
use crate::problem_spec::ProblemSpec;

pub trait ArraySolutionEvaluator: DynClone
{
    fn spec(&self) -> &ProblemSpec;

    /// Overwrites every entry of `f` with the objectives of `x`.
    ///
    /// Fails with [`crate::DtlzError::LengthMismatch`] before touching `f` when
    /// `x` or `f` do not match the problem dimensions.
    fn evaluate(&self, x: &[f64], f: &mut [f64]) -> DtlzResult<()>;

    fn x_len(&self) -> usize
    {
        self.spec().n_var()
    }

    fn objectives_len(&self) -> usize
    {
        self.spec().n_obj()
    }

    fn lower_bound(&self) -> &[f64]
    {
        self.spec().lower_bound()
    }

    fn upper_bound(&self) -> &[f64]
    {
        self.spec().upper_bound()
    }
}

dyn_clone::clone_trait_object!(ArraySolutionEvaluator);

/// A decision vector together with its objective buffer.
#[derive(Clone)]
pub struct ArraySolution
{
    pub x: Vec<f64>,
    pub f: Vec<f64>,
    array_evaluator: Box<dyn ArraySolutionEvaluator + Send + Sync>
}

impl ArraySolution
{
    pub fn new(array_evaluator: Box<dyn ArraySolutionEvaluator + Send + Sync>, x: Vec<f64>) -> DtlzResult<Self>
    {
        array_evaluator.spec().check_x(&x)?;

        if !array_evaluator.spec().is_within_bounds(&x)
        {
            log::trace!("decision vector {:?} lies outside the problem bounds", x);
        }

        Ok(ArraySolution {
            x,
            f: vec![0.0; array_evaluator.objectives_len()],
            array_evaluator
        })
    }

    /// Samples every variable uniformly inside its bounds.
    pub fn random<R: Rng>(array_evaluator: Box<dyn ArraySolutionEvaluator + Send + Sync>, rng: &mut R) -> Self
    {
        let mut x = Vec::with_capacity(array_evaluator.x_len());

        for (lower, upper) in izip!(array_evaluator.lower_bound(), array_evaluator.upper_bound())
        {
            x.push(rng.gen_range(*lower..=*upper));
        }

        ArraySolution {
            x,
            f: vec![0.0; array_evaluator.objectives_len()],
            array_evaluator
        }
    }

    pub fn evaluate(&mut self) -> DtlzResult<()>
    {
        self.array_evaluator.evaluate(&self.x, &mut self.f)
    }

    pub fn spec(&self) -> &ProblemSpec
    {
        self.array_evaluator.spec()
    }
}

impl Debug for ArraySolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArraySolution")
            .field("x", &self.x)
            .field("f", &self.f)
            .finish()
    }
}

#[cfg(test)]
mod tests
{
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::problem::dtlz::dtlz2::Dtlz2;
    use crate::DtlzError;
    use super::*;

    #[test]
    fn random_solution_respects_bounds()
    {
        let mut rng = StdRng::seed_from_u64(7);
        let dtlz2 = Dtlz2::new(12, 3).unwrap();

        for _ in 0..100
        {
            let solution = ArraySolution::random(Box::new(dtlz2.clone()), &mut rng);

            assert_eq!(solution.x.len(), 12);
            assert_eq!(solution.f, vec![0.0; 3]);
            assert!(solution.spec().is_within_bounds(&solution.x));
        }
    }

    #[test]
    fn evaluate_fills_objectives()
    {
        let dtlz2 = Dtlz2::new(12, 3).unwrap();
        let mut solution = ArraySolution::new(Box::new(dtlz2), vec![0.5; 12]).unwrap();

        solution.evaluate().unwrap();

        let norm: f64 = solution.f.iter().map(|f_i| f_i * f_i).sum();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn new_rejects_wrong_length()
    {
        let dtlz2 = Dtlz2::new(12, 3).unwrap();

        assert!(matches!(
            ArraySolution::new(Box::new(dtlz2), vec![0.5; 11]),
            Err(DtlzError::LengthMismatch { expected: 12, found: 11, .. })
        ));
    }
}
