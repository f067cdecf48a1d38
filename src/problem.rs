pub mod dtlz;

use dyn_clone::DynClone;
use crate::array_solution::ArraySolutionEvaluator;

pub trait Problem: DynClone {
    /// Instance name including its dimensions, e.g. `DTLZ2 (12 3)`.
    fn name(&self) -> &str;
    /// Fixed identifier of the problem family member, e.g. `DTLZ2`.
    fn problem_class_name(&self) -> &str;
    /// Distance of the decision vector from the Pareto-optimal front.
    fn convergence_metric(&self, x: &[f64]) -> f64;
    /// Value of [`Problem::convergence_metric`] on the Pareto-optimal front.
    fn best_metric(&self) -> f64;
}

dyn_clone::clone_trait_object!(Problem);

/// A benchmark that both describes itself and evaluates decision vectors.
pub trait DtlzProblem: Problem + ArraySolutionEvaluator + Send + Sync {
    fn clone_evaluator(&self) -> Box<dyn ArraySolutionEvaluator + Send + Sync>;
    fn clone_problem(&self) -> Box<dyn Problem + Send + Sync>;
}

impl<T> DtlzProblem for T
    where T: Problem + ArraySolutionEvaluator + Clone + Send + Sync + 'static
{
    fn clone_evaluator(&self) -> Box<dyn ArraySolutionEvaluator + Send + Sync> {
        Box::new(self.clone())
    }

    fn clone_problem(&self) -> Box<dyn Problem + Send + Sync> {
        Box::new(self.clone())
    }
}

dyn_clone::clone_trait_object!(DtlzProblem);
