//! The normalized linear-system representation handed to solver backends:
//! dense coefficient rows, relational operators, right-hand sides and an
//! integrality mask. Solvers only ever see this form, so any backend that
//! understands it can solve any policy.

use std::fmt::{Debug, Display, Formatter};

/// The relational operator of a [ConstraintRow].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RelOp {
    /// The row sum must not exceed the right-hand side
    Leq,
    /// The row sum must equal the right-hand side
    Eq,
}

impl Display for RelOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RelOp::Leq => "<=",
            RelOp::Eq => "=",
        })
    }
}

/// A single linear constraint: one coefficient per variable of the model,
/// an operator, and a scalar bound.
#[derive(Clone, PartialEq)]
pub struct ConstraintRow {
    pub(crate) coefficients: Vec<f64>,
    pub(crate) op: RelOp,
    pub(crate) rhs: f64,
}

impl ConstraintRow {
    /// A row over `len` variables, all coefficients zero
    pub fn zeros(len: usize, op: RelOp, rhs: f64) -> Self {
        ConstraintRow {
            coefficients: vec![0.; len],
            op,
            rhs,
        }
    }

    /// Set the coefficient of one variable
    pub fn set(&mut self, index: usize, coefficient: f64) {
        self.coefficients[index] = coefficient;
    }

    /// The dense coefficient vector, one entry per variable
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The relational operator
    pub fn op(&self) -> RelOp {
        self.op
    }

    /// The right-hand-side bound
    pub fn rhs(&self) -> f64 {
        self.rhs
    }

    /// Evaluates the left-hand side against a variable assignment
    pub fn eval(&self, values: &Assignment) -> f64 {
        self.coefficients
            .iter()
            .zip(values.as_slice())
            .map(|(c, v)| c * v)
            .sum()
    }
}

/// Formats only the nonzero terms, naming the variables x0, x1, ... xn
impl Debug for ConstraintRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (index, &coefficient) in self.coefficients.iter().enumerate() {
            if coefficient == 0. {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            if (coefficient - 1.).abs() > f64::EPSILON {
                write!(f, "{} ", coefficient)?;
            }
            write!(f, "x{}", index)?;
        }
        if first {
            f.write_str("0")?;
        }
        write!(f, " {} {}", self.op, self.rhs)
    }
}

/// An ordered collection of constraints over a fixed variable space,
/// together with an objective vector and an integrality mask.
///
/// Rows are append-only and must match the variable count exactly; a
/// mismatched row is a programming error, not a recoverable condition,
/// so insertion panics rather than returning a `Result`.
pub struct LinearModel {
    num_variables: usize,
    objective: Vec<f64>,
    constraints: Vec<ConstraintRow>,
    integral: Vec<bool>,
}

impl LinearModel {
    /// An empty feasibility model over `num_variables` variables:
    /// zero objective, no constraints, all variables continuous.
    pub fn new(num_variables: usize) -> Self {
        LinearModel {
            num_variables,
            objective: vec![0.; num_variables],
            constraints: Vec::new(),
            integral: vec![false; num_variables],
        }
    }

    /// Append a constraint row.
    ///
    /// # Panics
    /// If the row length differs from the model's variable count.
    pub fn push(&mut self, row: ConstraintRow) {
        assert_eq!(
            row.coefficients.len(),
            self.num_variables,
            "constraint row length must match the variable count"
        );
        self.constraints.push(row);
    }

    /// Require the given variable to take an integral value
    pub fn set_integral(&mut self, index: usize) {
        self.integral[index] = true;
    }

    /// The size of the variable space all rows are indexed against
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// The objective coefficient vector. All-zero for a pure
    /// feasibility problem.
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// The constraint rows, in emission order
    pub fn constraints(&self) -> &[ConstraintRow] {
        &self.constraints
    }

    /// The integrality mask, one flag per variable
    pub fn integrality(&self) -> &[bool] {
        &self.integral
    }

    /// Whether any variable is required to be integral
    pub fn has_integer_variables(&self) -> bool {
        self.integral.iter().any(|&i| i)
    }
}

impl Debug for LinearModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "variables: {}", self.num_variables)?;
        for row in &self.constraints {
            writeln!(f, "{:?}", row)?;
        }
        Ok(())
    }
}

/// The variable values returned by a solver, indexed by the same
/// flattened variable space as the model's rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    values: Vec<f64>,
}

impl Assignment {
    /// Wrap a solver's raw value vector
    pub fn new(values: Vec<f64>) -> Self {
        Assignment { values }
    }

    /// The resolved value of one variable
    pub fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// The number of variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true for the empty assignment
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values, in variable-index order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
