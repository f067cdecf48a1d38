use crate::error::{DtlzError, DtlzResult};

/// Dimensions and box bounds shared by every DTLZ problem.
///
/// The first `n_obj - 1` variables position a point on the front, the
/// remaining `k = n_var - n_obj + 1` variables control its distance to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemSpec
{
    n_var: usize,
    n_obj: usize,
    lower_bound: Vec<f64>,
    upper_bound: Vec<f64>
}

impl ProblemSpec
{
    pub fn new(n_var: usize, n_obj: usize) -> DtlzResult<Self>
    {
        if n_obj == 0 || n_var < n_obj
        {
            return Err(DtlzError::InvalidDimension { n_var, n_obj });
        }

        Ok(ProblemSpec {
            n_var,
            n_obj,
            lower_bound: vec![0.0; n_var],
            upper_bound: vec![1.0; n_var]
        })
    }

    pub fn n_var(&self) -> usize
    {
        self.n_var
    }

    pub fn n_obj(&self) -> usize
    {
        self.n_obj
    }

    /// Size of the distance sub-vector.
    pub fn k(&self) -> usize
    {
        self.n_var - self.n_obj + 1
    }

    pub fn lower_bound(&self) -> &[f64]
    {
        &self.lower_bound
    }

    pub fn upper_bound(&self) -> &[f64]
    {
        &self.upper_bound
    }

    /// Splits a decision vector into its position prefix `x[..m-1]` and distance tail `x[n-k..]`.
    pub fn split<'a>(&self, x: &'a [f64]) -> (&'a [f64], &'a [f64])
    {
        x.split_at(self.n_obj - 1)
    }

    pub fn check_x(&self, x: &[f64]) -> DtlzResult<()>
    {
        if x.len() != self.n_var
        {
            return Err(DtlzError::LengthMismatch {
                what: "decision",
                expected: self.n_var,
                found: x.len()
            });
        }

        Ok(())
    }

    pub fn check_lengths(&self, x: &[f64], f: &[f64]) -> DtlzResult<()>
    {
        self.check_x(x)?;

        if f.len() != self.n_obj
        {
            return Err(DtlzError::LengthMismatch {
                what: "objective",
                expected: self.n_obj,
                found: f.len()
            });
        }

        Ok(())
    }

    pub fn is_within_bounds(&self, x: &[f64]) -> bool
    {
        x.iter()
            .zip(self.lower_bound.iter().zip(&self.upper_bound))
            .all(|(x_i, (lower, upper))| lower <= x_i && x_i <= upper)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn k_counts_distance_variables()
    {
        let spec = ProblemSpec::new(12, 3).unwrap();

        assert_eq!(spec.k(), 10);
        assert_eq!(spec.lower_bound(), vec![0.0; 12].as_slice());
        assert_eq!(spec.upper_bound(), vec![1.0; 12].as_slice());
    }

    #[test]
    fn n_equal_m_leaves_single_distance_variable()
    {
        let spec = ProblemSpec::new(3, 3).unwrap();
        let x = [0.1, 0.2, 0.3];

        let (prefix, tail) = spec.split(&x);

        assert_eq!(spec.k(), 1);
        assert_eq!(prefix, &[0.1, 0.2]);
        assert_eq!(tail, &[0.3]);
    }

    #[test]
    fn rejects_more_objectives_than_variables()
    {
        assert!(matches!(
            ProblemSpec::new(2, 3),
            Err(DtlzError::InvalidDimension { n_var: 2, n_obj: 3 })
        ));
        assert!(matches!(
            ProblemSpec::new(4, 0),
            Err(DtlzError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn reports_length_mismatch()
    {
        let spec = ProblemSpec::new(7, 3).unwrap();

        assert!(spec.check_lengths(&[0.5; 7], &[0.0; 3]).is_ok());
        assert!(matches!(
            spec.check_lengths(&[0.5; 6], &[0.0; 3]),
            Err(DtlzError::LengthMismatch { what: "decision", expected: 7, found: 6 })
        ));
        assert!(matches!(
            spec.check_lengths(&[0.5; 7], &[0.0; 2]),
            Err(DtlzError::LengthMismatch { what: "objective", expected: 3, found: 2 })
        ));
    }

    #[test]
    fn out_of_bounds_detection()
    {
        let spec = ProblemSpec::new(3, 2).unwrap();

        assert!(spec.is_within_bounds(&[0.0, 0.5, 1.0]));
        assert!(!spec.is_within_bounds(&[0.0, 1.5, 1.0]));
        assert!(!spec.is_within_bounds(&[-0.1, 0.5, 1.0]));
    }
}
