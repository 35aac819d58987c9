use std::collections::HashSet;

use chrono::{Duration, Months, NaiveDate};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::employee::{email_for, uniqueness_key, Employee, JOB_TITLES, SITES};
use crate::error::ImportError;
use crate::request::GenerationRequest;

/// Supplies the random parts of an employee. Implementations own their randomness so a run can be
/// made repeatable by seeding the source.
pub trait PersonSource {
    fn first_name(&mut self) -> String;

    fn last_name(&mut self) -> String;

    /// A date in `from..=to`. Returns `from` if the range is empty.
    fn date_between(&mut self, from: NaiveDate, to: NaiveDate) -> NaiveDate;

    /// # Panics
    /// Implementations may panic if `options` is empty.
    fn choose<'a>(&mut self, options: &[&'a str]) -> &'a str;
}

/// [`PersonSource`] backed by the `fake` English name corpora.
#[derive(Debug)]
pub struct FakerSource<R> {
    rng: R,
}

impl<R: Rng> FakerSource<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        FakerSource { rng }
    }
}

impl FakerSource<StdRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        FakerSource::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        FakerSource::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PersonSource for FakerSource<R> {
    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn date_between(&mut self, from: NaiveDate, to: NaiveDate) -> NaiveDate {
        let span = (to - from).num_days();
        if span <= 0 {
            return from;
        }
        from + Duration::days(self.rng.gen_range(0..=span))
    }

    fn choose<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options
            .choose(&mut self.rng)
            .copied()
            .expect("cannot choose from an empty option set")
    }
}

/// First day of the start-date window ending at `today`.
///
/// # Errors
/// Errors when the window reaches past the earliest representable date.
pub fn earliest_start_date(today: NaiveDate, years_back: u32) -> Result<NaiveDate, ImportError> {
    years_back
        .checked_mul(12)
        .and_then(|months| today.checked_sub_months(Months::new(months)))
        .ok_or(ImportError::InvalidYearsBack(years_back))
}

/// Generates exactly `request.count` employees whose first/last name pairs are unique ignoring
/// case, in the order they were drawn.
///
/// # Errors
/// Errors with `NameSpaceExhausted` when `request.max_attempts()` draws were not enough to find
/// `request.count` unique names, or `InvalidYearsBack` if the date window cannot be computed.
pub fn generate_all_employees<S: PersonSource + ?Sized>(
    source: &mut S,
    request: &GenerationRequest,
    today: NaiveDate,
) -> Result<Vec<Employee>, ImportError> {
    let earliest = earliest_start_date(today, request.years_back)?;
    let max_attempts = request.max_attempts();

    let mut seen = HashSet::with_capacity(request.count);
    let mut employees = Vec::with_capacity(request.count);
    let mut attempts = 0;

    while employees.len() < request.count {
        if attempts == max_attempts {
            return Err(ImportError::NameSpaceExhausted {
                generated: employees.len(),
                requested: request.count,
                attempts,
            });
        }
        attempts += 1;

        let first_name = source.first_name();
        let last_name = source.last_name();
        if !seen.insert(uniqueness_key(&first_name, &last_name)) {
            debug!("Redrawing duplicate name: {} {}", first_name, last_name);
            continue;
        }

        let start_date = source
            .date_between(earliest, today)
            .format(request.date_format.pattern())
            .to_string();
        let site = source.choose(&SITES).to_string();
        let job_title = source.choose(&JOB_TITLES).to_string();

        employees.push(Employee {
            email: email_for(&first_name, &last_name, &request.company_id),
            first_name,
            last_name,
            start_date,
            site,
            job_title,
        });
    }

    let duplicates = attempts - employees.len();
    if duplicates > employees.len() {
        warn!(
            "More duplicate names ({}) than unique ones ({}); the name corpus is nearly exhausted",
            duplicates,
            employees.len()
        );
    }
    info!(
        "Generated {} employees for company {} in {} draws",
        employees.len(),
        request.company_id,
        attempts
    );

    Ok(employees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::DateFormat;

    /// Replays a fixed list of names and always picks the first option.
    struct ScriptedSource {
        names: Vec<(&'static str, &'static str)>,
        next: usize,
    }

    impl ScriptedSource {
        fn new(names: Vec<(&'static str, &'static str)>) -> Self {
            ScriptedSource { names, next: 0 }
        }
    }

    impl PersonSource for ScriptedSource {
        fn first_name(&mut self) -> String {
            self.names[self.next % self.names.len()].0.to_string()
        }

        fn last_name(&mut self) -> String {
            let name = self.names[self.next % self.names.len()].1.to_string();
            self.next += 1;
            name
        }

        fn date_between(&mut self, from: NaiveDate, _to: NaiveDate) -> NaiveDate {
            from
        }

        fn choose<'a>(&mut self, options: &[&'a str]) -> &'a str {
            options[0]
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    #[test]
    fn test_duplicates_are_redrawn_ignoring_case() {
        let mut source = ScriptedSource::new(vec![
            ("Ada", "Lovelace"),
            ("ADA", "lovelace"),
            ("Grace", "Hopper"),
        ]);
        let request = GenerationRequest::new("7", 2, DateFormat::DayFirst).unwrap();
        let employees = generate_all_employees(&mut source, &request, today()).unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].email, "ada.lovelace+7@hibob.io");
        assert_eq!(employees[1].email, "grace.hopper+7@hibob.io");
        assert_eq!(employees[1].site, SITES[0]);
        assert_eq!(employees[1].job_title, JOB_TITLES[0]);
        // 2019-02-28: five years before a leap day clamps to the end of February.
        assert_eq!(employees[0].start_date, "28/02/2019");
    }

    #[test]
    fn test_exhausted_name_space() {
        let mut source = ScriptedSource::new(vec![("Ada", "Lovelace"), ("Grace", "Hopper")]);
        let request = GenerationRequest::new("7", 3, DateFormat::DayFirst).unwrap();
        let res = generate_all_employees(&mut source, &request, today());

        match res {
            Err(ImportError::NameSpaceExhausted {
                generated,
                requested,
                attempts,
            }) => {
                assert_eq!(generated, 2);
                assert_eq!(requested, 3);
                assert_eq!(attempts, request.max_attempts());
            }
            other => panic!("expected NameSpaceExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_faker_source_date_between_is_inclusive() {
        let mut source = FakerSource::seeded(3);
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        for _ in 0..200 {
            let date = source.date_between(from, to);
            assert!(date >= from && date <= to);
        }
        assert_eq!(source.date_between(to, from), to);
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let request = GenerationRequest::new("acme", 25, DateFormat::MonthFirst).unwrap();
        let first = generate_all_employees(&mut FakerSource::seeded(42), &request, today()).unwrap();
        let second =
            generate_all_employees(&mut FakerSource::seeded(42), &request, today()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_earliest_start_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            earliest_start_date(today, 5).unwrap(),
            NaiveDate::from_ymd_opt(2021, 10, 16).unwrap()
        );
        assert!(earliest_start_date(NaiveDate::MIN, 1).is_err());
    }
}
