//! Solver backends. The crate builds a [LinearModel]; actually finding a
//! feasible assignment is delegated to an external solver reached through
//! the [Solver] trait. A backend is just a function from a model to an
//! [Assignment], so plugging in another solver library means writing one
//! adapter function.

#[cfg(feature = "microlp")]
pub mod microlp;

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::{Assignment, LinearModel};

/// Represents an error that occurred when solving a problem
#[derive(Debug, PartialEq, Clone)]
pub enum ResolutionError {
    /// The problem doesn't have finite optimal variable values:
    /// the objective can be improved without bound
    Unbounded,
    /// There exists no assignment that satisfies all of the constraints.
    /// For a scheduling model this is a property of the policy itself,
    /// not a transient fault, so callers should not retry.
    Infeasible,
    /// Another error occurred
    Other(&'static str),
    /// An error string returned by the solver
    Str(String),
}

impl Display for ResolutionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionError::Unbounded => {
                f.write_str("unbounded: the problem has no finite optimum")
            }
            ResolutionError::Infeasible => {
                f.write_str("infeasible: no assignment satisfies all the constraints")
            }
            ResolutionError::Other(message) => write!(f, "solver error: {}", message),
            ResolutionError::Str(message) => write!(f, "solver error: {}", message),
        }
    }
}

impl Error for ResolutionError {}

/// The external collaborator contract: given a linear system and an
/// objective, return a feasible assignment or report why there is none.
/// Any non-success status is terminal for the run; the builder never
/// second-guesses the solver.
pub trait Solver {
    /// Solve the model, returning one value per variable
    fn solve(&self, model: &LinearModel) -> Result<Assignment, ResolutionError>;
}

/// Any plain function over a model is a solver, so backends can be
/// passed around as values, `shiftplan::solvers::microlp::microlp` included.
impl<F> Solver for F
where
    F: Fn(&LinearModel) -> Result<Assignment, ResolutionError>,
{
    fn solve(&self, model: &LinearModel) -> Result<Assignment, ResolutionError> {
        self(model)
    }
}
