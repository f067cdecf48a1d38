use serde::{Deserialize, Serialize};
use crate::error::DtlzResult;
use crate::problem::dtlz::dtlz1::Dtlz1;
use crate::problem::dtlz::dtlz2::Dtlz2;
use crate::problem::dtlz::dtlz3::Dtlz3;
use crate::problem::dtlz::dtlz4::Dtlz4;
use crate::problem::dtlz::dtlz5::Dtlz5;
use crate::problem::dtlz::dtlz6::Dtlz6;
use crate::problem::dtlz::ThetaSource;
use crate::problem::DtlzProblem;

pub const DEFAULT_N_OBJ: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DtlzKind
{
    #[serde(rename = "DTLZ1")]
    Dtlz1,
    #[serde(rename = "DTLZ2")]
    Dtlz2,
    #[serde(rename = "DTLZ3")]
    Dtlz3,
    #[serde(rename = "DTLZ4")]
    Dtlz4,
    #[serde(rename = "DTLZ5")]
    Dtlz5,
    #[serde(rename = "DTLZ6")]
    Dtlz6
}

impl DtlzKind
{
    pub const ALL: [DtlzKind; 6] = [
        DtlzKind::Dtlz1,
        DtlzKind::Dtlz2,
        DtlzKind::Dtlz3,
        DtlzKind::Dtlz4,
        DtlzKind::Dtlz5,
        DtlzKind::Dtlz6
    ];

    pub fn name(&self) -> &'static str
    {
        match self {
            DtlzKind::Dtlz1 => "DTLZ1",
            DtlzKind::Dtlz2 => "DTLZ2",
            DtlzKind::Dtlz3 => "DTLZ3",
            DtlzKind::Dtlz4 => "DTLZ4",
            DtlzKind::Dtlz5 => "DTLZ5",
            DtlzKind::Dtlz6 => "DTLZ6"
        }
    }

    /// `k + m - 1` with `k = 5` for DTLZ1 and `k = 10` for the rest, at three objectives.
    pub fn default_n_var(&self) -> usize
    {
        match self {
            DtlzKind::Dtlz1 => 7,
            _ => 12
        }
    }

    pub fn build(&self, n_var: usize, n_obj: usize, theta_source: ThetaSource) -> DtlzResult<Box<dyn DtlzProblem>>
    {
        let problem: Box<dyn DtlzProblem> = match self {
            DtlzKind::Dtlz1 => Box::new(Dtlz1::new(n_var, n_obj)?),
            DtlzKind::Dtlz2 => Box::new(Dtlz2::new(n_var, n_obj)?),
            DtlzKind::Dtlz3 => Box::new(Dtlz3::new(n_var, n_obj)?),
            DtlzKind::Dtlz4 => Box::new(Dtlz4::new(n_var, n_obj)?),
            DtlzKind::Dtlz5 => Box::new(Dtlz5::new(n_var, n_obj)?.with_theta_source(theta_source)),
            DtlzKind::Dtlz6 => Box::new(Dtlz6::new(n_var, n_obj)?.with_theta_source(theta_source))
        };

        Ok(problem)
    }
}

/// Problem settings as read from a JSON file, e.g.
/// `{"problem": "DTLZ5", "number_of_variables": 14, "theta_source": "decision_variables"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DtlzConfig
{
    pub problem: DtlzKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_variables: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_objectives: Option<usize>,
    #[serde(default)]
    pub theta_source: ThetaSource
}

impl DtlzConfig
{
    pub fn new(problem: DtlzKind) -> Self
    {
        DtlzConfig {
            problem,
            number_of_variables: None,
            number_of_objectives: None,
            theta_source: ThetaSource::default()
        }
    }

    pub fn from_json_str(json: &str) -> DtlzResult<Self>
    {
        Ok(serde_json::from_str(json)?)
    }

    pub fn n_var(&self) -> usize
    {
        self.number_of_variables.unwrap_or_else(|| self.problem.default_n_var())
    }

    pub fn n_obj(&self) -> usize
    {
        self.number_of_objectives.unwrap_or(DEFAULT_N_OBJ)
    }

    pub fn build(&self) -> DtlzResult<Box<dyn DtlzProblem>>
    {
        log::debug!("building {} from config {:?}", self.problem.name(), self);

        self.problem.build(self.n_var(), self.n_obj(), self.theta_source)
    }
}
