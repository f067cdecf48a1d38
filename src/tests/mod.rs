
use crate::{ArraySolutionEvaluator, DtlzKind, DtlzProblem, ThetaSource};

fn build(kind: DtlzKind, n_var: usize, n_obj: usize) -> Box<dyn DtlzProblem>
{
    kind.build(n_var, n_obj, ThetaSource::default()).unwrap()
}

fn evaluate_fresh(problem: &dyn DtlzProblem, x: &[f64]) -> Vec<f64>
{
    let mut f = vec![0.0; problem.objectives_len()];

    problem.evaluate(x, &mut f).unwrap();

    f
}
