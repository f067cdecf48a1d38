use rand::Rng;
use crate::array_solution::ArraySolution;
use crate::problem::DtlzProblem;
use crate::problem::Problem;

/// Mean distance of `solutions` from the Pareto-optimal front, `f64::MAX` when empty.
pub fn mean_convergence_metric<P: Problem + ?Sized>(problem: &P, solutions: &[ArraySolution]) -> f64
{
    if solutions.is_empty()
    {
        return f64::MAX
    }

    let sum = solutions
        .iter()
        .map(|solution| problem.convergence_metric(&solution.x))
        .sum::<f64>();

    sum / solutions.len() as f64
}

/// Root mean square deviation of the convergence metric of uniformly random
/// decision vectors from [`Problem::best_metric`].
///
/// Serves as the "random search" baseline when normalizing optimizer results.
pub fn convergence_metric_std_dev<P, R>(problem: &P, count: usize, rng: &mut R) -> f64
    where P: DtlzProblem + ?Sized,
          R: Rng
{
    if count == 0
    {
        return 0.0
    }

    let mut x = vec![0.0; problem.x_len()];
    let mut sum_diff = 0.0;

    for _ in 0..count
    {
        for (x_i, (lower, upper)) in x.iter_mut().zip(problem.lower_bound().iter().zip(problem.upper_bound()))
        {
            *x_i = rng.gen_range(*lower..=*upper);
        }

        sum_diff += (problem.convergence_metric(&x) - problem.best_metric()).powi(2);
    }

    let std_dev = (sum_diff / count as f64).sqrt();

    log::debug!("{}: random baseline std dev {:.4} over {} samples", problem.name(), std_dev, count);

    std_dev
}
