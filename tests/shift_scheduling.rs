//! End-to-end runs: build a scheduling model from a policy, solve it
//! with the microlp backend, and check the resulting roster.
#![cfg(feature = "microlp")]

use float_eq::assert_float_eq;
use shiftplan::{
    microlp, scheduled_pairs, write_schedule, Assignment, ModelVariant, PersonPolicy,
    ResolutionError, SchedulePolicy, ScheduleThreshold, ShiftModelBuilder, VariableIndexer,
};

/// One week, three people with disjoint-ish availability windows
fn week_policy() -> SchedulePolicy {
    let mut policy = SchedulePolicy::new(7);
    policy.add_person(PersonPolicy::new(7, 3).available_days([0, 1, 2, 3]));
    policy.add_person(PersonPolicy::new(7, 2).available_days([4, 5, 6]));
    policy.add_person(PersonPolicy::new(7, 2).available_days([0, 2, 4, 6]));
    policy
}

/// Four people covering a 30-day month, the same roster the demo
/// binary schedules
fn month_policy() -> SchedulePolicy {
    let mut policy = SchedulePolicy::new(30);
    policy.add_person(PersonPolicy::new(3, 7).available(|day| day < 14));
    policy.add_person(PersonPolicy::new(4, 8).available(|day| day > 7 && day < 21));
    policy.add_person(PersonPolicy::new(5, 7).available(|day| day > 14));
    policy.add_person(PersonPolicy::new(2, 8));
    policy
}

fn solve(policy: &SchedulePolicy, variant: ModelVariant) -> (VariableIndexer, Assignment) {
    let builder = ShiftModelBuilder::new(policy).variant(variant);
    let vars = builder.indexer();
    let assignment = microlp(&builder.build()).expect("the policy is satisfiable");
    (vars, assignment)
}

#[test]
fn week_roster_round_trip() {
    let policy = week_policy();
    let (vars, assignment) = solve(&policy, ModelVariant::Integer);

    let pairs = scheduled_pairs(vars, &assignment, ScheduleThreshold::Positive);
    // exactly one person per day, in day order
    assert_eq!(pairs.len(), 7);
    for (day, &(pair_day, person)) in pairs.iter().enumerate() {
        assert_eq!(pair_day, day);
        assert!(
            policy.person(person).unwrap().is_available(day),
            "person {} is not available on day {}",
            person,
            day
        );
    }
    // days 1 and 3 can only be covered by person 0, day 5 only by person 1
    assert_eq!(pairs[1], (1, 0));
    assert_eq!(pairs[3], (3, 0));
    assert_eq!(pairs[5], (5, 1));
}

#[test]
fn month_roster_resolves_to_exact_binaries() {
    let policy = month_policy();
    let (vars, assignment) = solve(&policy, ModelVariant::Integer);

    // integral variables come back as exact 0/1; solver float noise on
    // an idle day must never pass the Positive threshold
    for index in 0..assignment.len() {
        let value = assignment.value(index);
        assert!(
            value == 0. || value == 1.,
            "variable {} resolved to {}",
            index,
            value
        );
    }

    let pairs = scheduled_pairs(vars, &assignment, ScheduleThreshold::Positive);
    assert_eq!(pairs.len(), 30);
    for (day, &(pair_day, person)) in pairs.iter().enumerate() {
        assert_eq!(pair_day, day, "day {} has more or less than one person", day);
        assert!(
            policy.person(person).unwrap().is_available(day),
            "person {} is not available on day {}",
            person,
            day
        );
    }
    for (person, rules) in policy.iter_people() {
        let worked: f64 = (0..30)
            .map(|day| assignment.value(vars.index(person, day)))
            .sum();
        assert_float_eq!(worked, rules.required_shifts(), abs <= 1e-9);
    }
}

#[test]
fn quotas_and_availability_hold_in_the_solution() {
    let policy = week_policy();
    let (vars, assignment) = solve(&policy, ModelVariant::Integer);

    for (person, rules) in policy.iter_people() {
        let worked: f64 = (0..7)
            .map(|day| assignment.value(vars.index(person, day)))
            .sum();
        assert_float_eq!(worked, rules.required_shifts(), abs <= 1e-6);
        for day in 0..7 {
            if !rules.is_available(day) {
                assert_float_eq!(assignment.value(vars.index(person, day)), 0., abs <= 1e-6);
            }
        }
    }
}

#[test]
fn stretch_limit_bounds_consecutive_work() {
    // person 0 must work two of four days but never two in a row
    let mut policy = SchedulePolicy::new(4);
    policy.add_person(PersonPolicy::new(2, 2));
    policy.add_person(PersonPolicy::new(7, 2));
    let (vars, assignment) = solve(&policy, ModelVariant::Integer);

    for start in 0..3 {
        let window: f64 = (start..start + 2)
            .map(|day| assignment.value(vars.index(0, day)))
            .sum();
        assert!(
            window < 2. - 1e-6,
            "person 0 works days {} and {}",
            start,
            start + 1
        );
    }
    let pairs = scheduled_pairs(vars, &assignment, ScheduleThreshold::Positive);
    assert_eq!(pairs.len(), 4);
}

#[test]
fn overcommitted_person_makes_the_model_infeasible() {
    // person 0 owes two shifts but is only ever available on day 0
    let mut policy = SchedulePolicy::new(3);
    policy.add_person(PersonPolicy::new(7, 2).available_days([0]));
    policy.add_person(PersonPolicy::new(7, 1));
    let builder = ShiftModelBuilder::new(&policy);
    let vars = builder.indexer();

    let mut out = Vec::new();
    match microlp(&builder.build()) {
        Ok(assignment) => {
            write_schedule(&mut out, vars, &assignment, ScheduleThreshold::Positive).unwrap();
            panic!("the model should be infeasible");
        }
        Err(error) => assert_eq!(error, ResolutionError::Infeasible),
    }
    // nothing was reported for the failed run
    assert!(out.is_empty());
}

#[test]
fn continuous_relaxation_solves_the_week() {
    let policy = week_policy();
    let (vars, assignment) = solve(&policy, ModelVariant::Continuous);

    // the relaxation still covers every day with unit weight in total
    for day in 0..7 {
        let coverage: f64 = (0..3)
            .map(|person| assignment.value(vars.index(person, day)))
            .sum();
        assert_float_eq!(coverage, 1., abs <= 1e-6);
    }
    // day 5 is forced: person 1 is the only one available
    assert_float_eq!(assignment.value(vars.index(1, 5)), 1., abs <= 1e-6);
}
