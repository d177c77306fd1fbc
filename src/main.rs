//! Schedules two sample rosters: a 30-day roster solved as an integer
//! program (`strict`, the default) and a 7-day roster solved as its
//! continuous relaxation (`relaxed`). Pass the variant name as the
//! first argument.

use std::env;
use std::error::Error;
use std::io;

use shiftplan::{
    microlp, write_schedule, ModelVariant, PersonPolicy, SchedulePolicy, ScheduleThreshold,
    ShiftModelBuilder,
};

/// Four people covering a 30-day month, each with their own availability
/// window, stretch limit and shift count.
fn strict_policy() -> SchedulePolicy {
    let mut policy = SchedulePolicy::new(30);
    policy.add_person(PersonPolicy::new(3, 7).available(|day| day < 14));
    policy.add_person(PersonPolicy::new(4, 8).available(|day| day > 7 && day < 21));
    policy.add_person(PersonPolicy::new(5, 7).available(|day| day > 14));
    policy.add_person(PersonPolicy::new(2, 8));
    policy
}

/// Three people covering one week, availability given as explicit day sets
fn relaxed_policy() -> SchedulePolicy {
    let mut policy = SchedulePolicy::new(7);
    policy.add_person(PersonPolicy::new(7, 3).available_days([0, 1, 2, 3]));
    policy.add_person(PersonPolicy::new(7, 2).available_days([4, 5, 6]));
    policy.add_person(PersonPolicy::new(7, 2).available_days([0, 2, 4, 6]));
    policy
}

fn main() -> Result<(), Box<dyn Error>> {
    let variant = env::args().nth(1).unwrap_or_else(|| "strict".to_string());
    let (policy, model_variant, threshold) = match variant.as_str() {
        "strict" => (
            strict_policy(),
            ModelVariant::Integer,
            ScheduleThreshold::Positive,
        ),
        "relaxed" => (
            relaxed_policy(),
            ModelVariant::Continuous,
            ScheduleThreshold::ExactlyOne,
        ),
        other => {
            return Err(format!("unknown variant {:?}, expected \"strict\" or \"relaxed\"", other).into())
        }
    };

    let builder = ShiftModelBuilder::new(&policy).variant(model_variant);
    let vars = builder.indexer();
    let assignment = microlp(&builder.build())?;
    let stdout = io::stdout();
    write_schedule(&mut stdout.lock(), vars, &assignment, threshold)?;
    Ok(())
}
