//! Translates a [SchedulePolicy] into a [LinearModel]: one binary (or
//! relaxed) variable per `(person, day)` pair, and rows for stretch
//! limits, shift quotas, availability, and daily coverage.

use crate::model::{ConstraintRow, LinearModel, RelOp};
use crate::policy::SchedulePolicy;

/// Deterministic bijection between `(person, day)` pairs and the dense
/// variable range `[0, num_people * horizon)`. Every row generator and
/// the reporter go through the same indexer, so rows always line up
/// with the variable space the solver sees.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VariableIndexer {
    num_people: usize,
    horizon: usize,
}

impl VariableIndexer {
    /// An indexer for `num_people` people over `horizon` days
    pub fn new(num_people: usize, horizon: usize) -> Self {
        VariableIndexer {
            num_people,
            horizon,
        }
    }

    /// The flattened variable index of a `(person, day)` pair
    pub fn index(&self, person: usize, day: usize) -> usize {
        debug_assert!(person < self.num_people && day < self.horizon);
        person * self.horizon + day
    }

    /// The `(person, day)` pair a flattened index stands for
    pub fn person_day(&self, index: usize) -> (usize, usize) {
        (index / self.horizon, index % self.horizon)
    }

    /// The total number of variables
    pub fn num_variables(&self) -> usize {
        self.num_people * self.horizon
    }

    /// The number of days covered
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// The number of people on the roster
    pub fn num_people(&self) -> usize {
        self.num_people
    }
}

/// Whether the built model requires integral assignments or accepts the
/// continuous relaxation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModelVariant {
    /// Every variable is binary: a person either works a day or not
    Integer,
    /// Variables range over `[0, 1]`. The equality structure often, but
    /// not always, forces integral solutions; fractional values are a
    /// legitimate outcome of this variant, not an error.
    Continuous,
}

/// Builds the linear system for one scheduling policy.
///
/// ```
/// use shiftplan::{ModelVariant, PersonPolicy, SchedulePolicy, ShiftModelBuilder};
/// let mut policy = SchedulePolicy::new(7);
/// policy.add_person(PersonPolicy::new(3, 4));
/// policy.add_person(PersonPolicy::new(4, 3).available(|day| day > 1));
/// let model = ShiftModelBuilder::new(&policy)
///     .variant(ModelVariant::Integer)
///     .build();
/// assert_eq!(model.num_variables(), 14);
/// ```
pub struct ShiftModelBuilder<'a> {
    policy: &'a SchedulePolicy,
    variant: ModelVariant,
}

impl<'a> ShiftModelBuilder<'a> {
    /// A builder for the given policy, defaulting to the integer variant
    pub fn new(policy: &'a SchedulePolicy) -> Self {
        ShiftModelBuilder {
            policy,
            variant: ModelVariant::Integer,
        }
    }

    /// Choose between the integer model and its continuous relaxation
    pub fn variant(mut self, variant: ModelVariant) -> Self {
        self.variant = variant;
        self
    }

    /// The indexer this builder emits rows against
    pub fn indexer(&self) -> VariableIndexer {
        VariableIndexer::new(self.policy.num_people(), self.policy.horizon())
    }

    /// Emit the full model: stretch-limit rows, then quota rows, then
    /// availability rows, then coverage rows, each group in ascending
    /// person (or day) order. The order carries no meaning for the
    /// solver but keeps row indices stable across runs for diagnostics.
    pub fn build(self) -> LinearModel {
        let vars = self.indexer();
        let mut model = LinearModel::new(vars.num_variables());

        for (person, rules) in self.policy.iter_people() {
            // No window of length stretch_limit fits when the limit
            // reaches the horizon; emitting nothing is the intended
            // behavior, not an error.
            for start in 0..vars.horizon().saturating_sub(rules.stretch_limit()) {
                let mut row = ConstraintRow::zeros(
                    vars.num_variables(),
                    RelOp::Leq,
                    rules.stretch_limit() as f64 - 1.,
                );
                for offset in 0..rules.stretch_limit() {
                    row.set(vars.index(person, start + offset), 1.);
                }
                model.push(row);
            }
        }

        for (person, rules) in self.policy.iter_people() {
            let mut row =
                ConstraintRow::zeros(vars.num_variables(), RelOp::Eq, rules.required_shifts());
            for day in 0..vars.horizon() {
                row.set(vars.index(person, day), 1.);
            }
            model.push(row);
        }

        // Summing the unavailable days' variables to zero forces each of
        // them to zero individually, since all variables are nonnegative.
        for (person, rules) in self.policy.iter_people() {
            let mut row = ConstraintRow::zeros(vars.num_variables(), RelOp::Eq, 0.);
            for day in 0..vars.horizon() {
                if !rules.is_available(day) {
                    row.set(vars.index(person, day), 1.);
                }
            }
            model.push(row);
        }

        for day in 0..vars.horizon() {
            let mut row = ConstraintRow::zeros(vars.num_variables(), RelOp::Eq, 1.);
            for person in 0..vars.num_people() {
                row.set(vars.index(person, day), 1.);
            }
            model.push(row);
        }

        if self.variant == ModelVariant::Integer {
            for index in 0..vars.num_variables() {
                model.set_integral(index);
            }
        }
        model
    }
}
