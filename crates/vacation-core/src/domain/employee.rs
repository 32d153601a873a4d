use serde::{Deserialize, Serialize};

/// A single employee and their vacation usage.
///
/// The remaining balance is never stored. It is derived from the yearly
/// entitlement and the length of the history every time it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: String,
    name: String,
    vacation_days_per_year: u32,
    /// Dates in the order they were logged. Not validated, duplicates allowed.
    #[serde(default)]
    vacation_history: Vec<String>,
}

impl Employee {
    /// Create an employee with the given entitlement and existing history.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        vacation_days_per_year: u32,
        vacation_history: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vacation_days_per_year,
            vacation_history,
        }
    }

    /// The employee's unique identifier, e.g. `E001`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The employee's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of vacation days granted per year.
    #[must_use]
    pub const fn vacation_days_per_year(&self) -> u32 {
        self.vacation_days_per_year
    }

    /// Logged vacation dates, oldest entry first.
    #[must_use]
    pub fn vacation_history(&self) -> &[String] {
        &self.vacation_history
    }

    /// Entitlement minus the number of logged dates.
    ///
    /// This is negative when the history already exceeds the entitlement,
    /// which can only happen if the record was created that way.
    #[must_use]
    pub fn remaining_vacation_days(&self) -> i64 {
        let used = i64::try_from(self.vacation_history.len()).unwrap_or(i64::MAX);
        i64::from(self.vacation_days_per_year) - used
    }

    pub(super) fn record(&mut self, date: String) {
        self.vacation_history.push(date);
    }
}

/// The roster every ledger starts with unless configured otherwise.
pub(crate) fn seed_roster() -> Vec<Employee> {
    vec![
        Employee::new(
            "E001",
            "Alice Smith",
            20,
            vec![
                "2023-01-15".to_string(),
                "2023-02-20".to_string(),
                "2023-03-10".to_string(),
            ],
        ),
        Employee::new(
            "E002",
            "Bob Johnson",
            15,
            vec!["2023-01-05".to_string(), "2023-01-25".to_string()],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(20, 3, 17; "partly used")]
    #[test_case(15, 0, 15; "untouched")]
    #[test_case(2, 2, 0; "exhausted")]
    #[test_case(1, 3, -2; "overdrawn")]
    fn remaining_days_is_entitlement_minus_history(days: u32, used: usize, expected: i64) {
        let history = (0..used).map(|day| format!("2024-01-{:02}", day + 1)).collect();
        let employee = Employee::new("E100", "Test", days, history);

        assert_eq!(employee.remaining_vacation_days(), expected);
    }

    #[test]
    fn record_appends_to_the_end() {
        let mut employee = Employee::new("E100", "Test", 5, vec!["2024-01-01".to_string()]);
        employee.record("2024-01-01".to_string());
        employee.record("2023-12-31".to_string());

        assert_eq!(
            employee.vacation_history(),
            &["2024-01-01", "2024-01-01", "2023-12-31"]
        );
        assert_eq!(employee.remaining_vacation_days(), 2);
    }

    #[test]
    fn seed_roster_matches_startup_state() {
        let roster = seed_roster();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id(), "E001");
        assert_eq!(roster[0].name(), "Alice Smith");
        assert_eq!(roster[0].vacation_days_per_year(), 20);
        assert_eq!(roster[0].vacation_history().len(), 3);
        assert_eq!(roster[1].id(), "E002");
        assert_eq!(roster[1].name(), "Bob Johnson");
        assert_eq!(roster[1].vacation_days_per_year(), 15);
        assert_eq!(roster[1].vacation_history().len(), 2);
    }
}
