//! Formulates a shift-scheduling policy as a linear/integer program and
//! hands it to an off-the-shelf LP solver to assign people to days.
//!
//! The policy says who is available when, how many shifts each person
//! must work, and how long their work stretches may get. The
//! [ShiftModelBuilder] turns that into a flat variable space (one
//! variable per person and day), constraint rows, a zero objective and
//! an integrality mask; a [Solver] backend finds a feasible assignment
//! or reports that none exists.
//!
//! ```rust
//! # #[cfg(feature = "microlp")] {
//! use shiftplan::{
//!     microlp, write_schedule, ModelVariant, PersonPolicy, SchedulePolicy, ScheduleThreshold,
//!     ShiftModelBuilder,
//! };
//!
//! let mut policy = SchedulePolicy::new(2);
//! policy.add_person(PersonPolicy::new(2, 1).available_days([0]));
//! policy.add_person(PersonPolicy::new(2, 1).available_days([1]));
//!
//! let builder = ShiftModelBuilder::new(&policy).variant(ModelVariant::Continuous);
//! let vars = builder.indexer();
//! let assignment = microlp(&builder.build()).expect("the policy is satisfiable");
//!
//! let mut out = Vec::new();
//! write_schedule(&mut out, vars, &assignment, ScheduleThreshold::Positive).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Day 0 --> Person 0\nDay 1 --> Person 1\n"
//! );
//! # }
//! ```

pub use builder::{ModelVariant, ShiftModelBuilder, VariableIndexer};
pub use model::{Assignment, ConstraintRow, LinearModel, RelOp};
pub use policy::{Availability, PersonPolicy, SchedulePolicy};
pub use report::{scheduled_pairs, write_schedule, ScheduleThreshold};
#[cfg(feature = "microlp")]
pub use solvers::microlp::microlp;
pub use solvers::{ResolutionError, Solver};

pub mod builder;
pub mod model;
pub mod policy;
pub mod report;
pub mod solvers;
