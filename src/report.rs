//! Turns a solved [Assignment] back into human-readable schedule lines.
//! The reporter only ever sees a successful solve; an infeasible or
//! errored run surfaces as a [ResolutionError](crate::ResolutionError)
//! before any line is written, so output is never partial.

use std::io::{self, Write};

use crate::builder::VariableIndexer;
use crate::model::Assignment;

/// The rule deciding which resolved values count as "scheduled".
///
/// The difference only matters for the continuous variant: a relaxation
/// can return 0.999, which [Positive](ScheduleThreshold::Positive)
/// reports and [ExactlyOne](ScheduleThreshold::ExactlyOne) silently
/// drops. The choice is explicit rather than baked in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScheduleThreshold {
    /// Any strictly positive value is a scheduled day. The natural
    /// reading for the integer variant, where values are 0 or 1.
    #[default]
    Positive,
    /// Only a value of exactly 1.0 is a scheduled day. Fractional
    /// values go unreported.
    ExactlyOne,
}

impl ScheduleThreshold {
    /// Whether a resolved variable value counts as a scheduled day
    pub fn is_scheduled(self, value: f64) -> bool {
        match self {
            ScheduleThreshold::Positive => value > 0.,
            ScheduleThreshold::ExactlyOne => value == 1.,
        }
    }
}

/// The `(day, person)` pairs of an assignment that pass the threshold,
/// in ascending day order, then ascending person order within a day.
pub fn scheduled_pairs(
    vars: VariableIndexer,
    assignment: &Assignment,
    threshold: ScheduleThreshold,
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for day in 0..vars.horizon() {
        for person in 0..vars.num_people() {
            if threshold.is_scheduled(assignment.value(vars.index(person, day))) {
                pairs.push((day, person));
            }
        }
    }
    pairs
}

/// Writes one `Day <d> --> Person <p>` line per scheduled pair.
///
/// ```
/// use shiftplan::{write_schedule, Assignment, ScheduleThreshold, VariableIndexer};
/// let vars = VariableIndexer::new(2, 2);
/// let assignment = Assignment::new(vec![1., 0., 0., 1.]);
/// let mut out = Vec::new();
/// write_schedule(&mut out, vars, &assignment, ScheduleThreshold::Positive).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Day 0 --> Person 0\nDay 1 --> Person 1\n"
/// );
/// ```
pub fn write_schedule<W: Write>(
    writer: &mut W,
    vars: VariableIndexer,
    assignment: &Assignment,
    threshold: ScheduleThreshold,
) -> io::Result<()> {
    for (day, person) in scheduled_pairs(vars, assignment, threshold) {
        writeln!(writer, "Day {} --> Person {}", day, person)?;
    }
    Ok(())
}
