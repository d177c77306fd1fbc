//! A backend using [microlp](https://docs.rs/microlp), a pure rust solver.

use std::panic::catch_unwind;

use microlp::Error;

use crate::model::{Assignment, LinearModel, RelOp};
use crate::solvers::ResolutionError;

fn is_fractional(value: f64) -> bool {
    (value - value.round()).abs() > 1e-6
}

/// Solves a [LinearModel] with [microlp](https://docs.rs/microlp).
///
/// All variables are bounded to `[0, 1]`. microlp itself only solves the
/// continuous relaxation; integrality is enforced afterwards by adding
/// Gomory cuts until no marked variable remains fractional. Integral
/// variables are returned snapped to the nearest integer, so a
/// scheduled day reads as exactly 1 and an idle day as exactly 0.
pub fn microlp(model: &LinearModel) -> Result<Assignment, ResolutionError> {
    let mut problem = microlp::Problem::new(microlp::OptimizationDirection::Minimize);
    let variables: Vec<microlp::Variable> = model
        .objective()
        .iter()
        .map(|&coefficient| problem.add_var(coefficient, (0., 1.)))
        .collect();
    for row in model.constraints() {
        let mut linear_expr = microlp::LinearExpr::empty();
        for (index, &coefficient) in row.coefficients().iter().enumerate() {
            if coefficient != 0. {
                linear_expr.add(variables[index], coefficient);
            }
        }
        let op = match row.op() {
            RelOp::Eq => microlp::ComparisonOp::Eq,
            RelOp::Leq => microlp::ComparisonOp::Le,
        };
        problem.add_constraint(linear_expr, op, row.rhs());
    }

    let mut solution = problem.solve()?;
    // One cut per round, on the first still-fractional integer variable.
    // The cap guards against cut generation stalling on a degenerate basis.
    let max_cuts = 8 * model.num_variables() + 8;
    for _ in 0..max_cuts {
        let fractional = variables
            .iter()
            .zip(model.integrality())
            .find(|&(&var, &integral)| integral && is_fractional(solution[var]))
            .map(|(&var, _)| var);
        let var = match fractional {
            Some(var) => var,
            None => break,
        };
        solution = catch_unwind(|| solution.add_gomory_cut(var))
            .map_err(|_| ResolutionError::Other("microlp could not cut the fractional solution"))??;
    }
    if variables
        .iter()
        .zip(model.integrality())
        .any(|(&var, &integral)| integral && is_fractional(solution[var]))
    {
        return Err(ResolutionError::Other(
            "microlp did not reach an integral solution",
        ));
    }
    // Simplex leaves float noise like 4.4e-16 on variables that are
    // integral for all practical purposes. Every integral-marked value
    // was just verified to be within tolerance of an integer, so snap
    // it; callers then see exact 0/1 instead of noise.
    Ok(Assignment::new(
        variables
            .iter()
            .zip(model.integrality())
            .map(|(&var, &integral)| {
                let value = solution[var];
                if integral {
                    value.round()
                } else {
                    value
                }
            })
            .collect(),
    ))
}

impl From<microlp::Error> for ResolutionError {
    fn from(microlp_error: Error) -> Self {
        match microlp_error {
            microlp::Error::Unbounded => Self::Unbounded,
            microlp::Error::Infeasible => Self::Infeasible,
            microlp::Error::InternalError(s) => Self::Str(s),
        }
    }
}
