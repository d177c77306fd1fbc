//! A [SchedulePolicy] describes the scheduling problem in human terms:
//! how many days to cover, who can work when, and how much each person
//! must work. It is an explicit, immutable value passed into the
//! [model builder](crate::builder::ShiftModelBuilder), never ambient state.

use fnv::FnvHashSet;

/// The days a person can be scheduled on.
///
/// A precomputed day set and a pure rule are interchangeable; pick
/// whichever is more convenient to write down.
///
/// ```
/// use shiftplan::Availability;
/// let first_half = Availability::Rule(|day| day < 14);
/// let weekends = Availability::days([5, 6, 12, 13]);
/// assert!(first_half.contains(6));
/// assert!(!weekends.contains(0));
/// ```
#[derive(Clone, Debug)]
pub enum Availability {
    /// Available on every day of the horizon
    Always,
    /// Available exactly on the listed day indices
    Days(FnvHashSet<usize>),
    /// Available on the days for which the rule returns true
    Rule(fn(usize) -> bool),
}

impl Availability {
    /// Build a [Availability::Days] set from any iterator of day indices
    pub fn days<I: IntoIterator<Item = usize>>(days: I) -> Self {
        Availability::Days(days.into_iter().collect())
    }

    /// Whether the person may work on the given day
    pub fn contains(&self, day: usize) -> bool {
        match self {
            Availability::Always => true,
            Availability::Days(days) => days.contains(&day),
            Availability::Rule(rule) => rule(day),
        }
    }
}

/// Per-person scheduling rules.
#[derive(Clone, Debug)]
pub struct PersonPolicy {
    pub(crate) stretch_limit: usize,
    pub(crate) required_shifts: f64,
    pub(crate) availability: Availability,
}

impl PersonPolicy {
    /// A person who must work exactly `required_shifts` days over the
    /// horizon and may never work `stretch_limit` days in a row.
    /// The person starts out available every day; restrict with
    /// [PersonPolicy::available] or [PersonPolicy::available_days].
    pub fn new<N: Into<f64>>(stretch_limit: usize, required_shifts: N) -> Self {
        PersonPolicy {
            stretch_limit,
            required_shifts: required_shifts.into(),
            availability: Availability::Always,
        }
    }

    /// Restrict availability with a rule over day indices
    pub fn available(mut self, rule: fn(usize) -> bool) -> Self {
        self.availability = Availability::Rule(rule);
        self
    }

    /// Restrict availability to an explicit set of day indices
    pub fn available_days<I: IntoIterator<Item = usize>>(mut self, days: I) -> Self {
        self.availability = Availability::days(days);
        self
    }

    /// The maximum run length: the person never works `stretch_limit`
    /// consecutive days
    pub fn stretch_limit(&self) -> usize {
        self.stretch_limit
    }

    /// Exact number of days this person works over the horizon.
    /// Fractional values only make sense in the continuous variant.
    pub fn required_shifts(&self) -> f64 {
        self.required_shifts
    }

    /// Whether this person may work on the given day
    pub fn is_available(&self, day: usize) -> bool {
        self.availability.contains(day)
    }
}

/// The complete scheduling problem statement: a horizon and the people
/// available to cover it. People are identified by the dense index
/// returned from [SchedulePolicy::add_person].
///
/// ```
/// use shiftplan::{PersonPolicy, SchedulePolicy};
/// let mut policy = SchedulePolicy::new(7);
/// let alice = policy.add_person(PersonPolicy::new(3, 4));
/// let bob = policy.add_person(PersonPolicy::new(4, 3).available(|day| day > 1));
/// assert_eq!((alice, bob), (0, 1));
/// assert_eq!(policy.num_people(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SchedulePolicy {
    horizon: usize,
    people: Vec<PersonPolicy>,
}

impl SchedulePolicy {
    /// An empty policy covering `horizon` days
    pub fn new(horizon: usize) -> Self {
        SchedulePolicy {
            horizon,
            people: Vec::new(),
        }
    }

    /// Add a person to the roster, returning their identifier
    pub fn add_person(&mut self, person: PersonPolicy) -> usize {
        let id = self.people.len();
        self.people.push(person);
        id
    }

    /// The number of days to schedule
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// The number of people on the roster
    pub fn num_people(&self) -> usize {
        self.people.len()
    }

    /// Returns true when no people have been added
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// The rules for a single person, if the identifier is valid
    pub fn person(&self, id: usize) -> Option<&PersonPolicy> {
        self.people.get(id)
    }

    /// Iterates over the people with their identifiers, in ascending order
    pub fn iter_people(&self) -> impl Iterator<Item = (usize, &PersonPolicy)> {
        self.people.iter().enumerate()
    }
}
