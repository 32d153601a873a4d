//! The in-memory employee directory.
//!
//! The [`Ledger`] exclusively owns every [`Employee`] record. Records are kept
//! in insertion order, which is also the order used when resolving names.
//! Reads take `&self` and [`Ledger::log_days`] takes `&mut self`, so callers
//! sharing a ledger between tasks must hold an exclusive lock for the whole
//! logging call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::{Config, Employee, employee::seed_roster};

/// Error type for ledger queries and mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    /// No employee with this ID exists in the directory.
    #[error("Employee with ID {0} not found.")]
    InvalidEmployeeId(String),

    /// No employee has this exact name.
    #[error("Employee with name {0} not found.")]
    InvalidEmployeeName(String),

    /// The employee ran out of vacation days while logging.
    #[error(
        "Employee {employee_id} has no remaining vacation days ({recorded} of {requested} dates \
         recorded)."
    )]
    InsufficientVacationDays {
        /// The employee whose balance ran out.
        employee_id: String,
        /// Number of dates in the failed request.
        requested: usize,
        /// Number of dates appended before the failure.
        ///
        /// These stay in the history. Always zero under
        /// [`LogPolicy::AllOrNothing`].
        recorded: usize,
    },
}

/// Error type for building a ledger from a roster.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RosterError {
    /// Two roster entries share an ID.
    #[error("Duplicate employee ID: {0}")]
    DuplicateId(String),

    /// A roster entry has an empty ID.
    #[error("Employee '{name}' has an empty ID")]
    EmptyId {
        /// Name of the offending entry.
        name: String,
    },
}

/// How [`Ledger::log_days`] handles a request for more days than remain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogPolicy {
    /// Append dates one at a time and stop at the first date that finds the
    /// balance exhausted. Dates appended before that point are kept.
    #[default]
    Partial,

    /// Reject the whole request up front if it does not fit in the remaining
    /// balance. Nothing is appended on failure.
    AllOrNothing,
}

/// The employee directory and vacation ledger.
#[derive(Debug, Clone)]
pub struct Ledger {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
    policy: LogPolicy,
}

impl Default for Ledger {
    /// A ledger holding the seed roster with the partial log policy.
    fn default() -> Self {
        let employees = seed_roster();
        let index = employees
            .iter()
            .enumerate()
            .map(|(position, employee)| (employee.id().to_string(), position))
            .collect();

        Self {
            employees,
            index,
            policy: LogPolicy::default(),
        }
    }
}

impl Ledger {
    /// Build a ledger from a roster.
    ///
    /// # Errors
    ///
    /// Returns an error if an employee ID is empty or appears more than once.
    pub fn new(
        employees: impl IntoIterator<Item = Employee>,
        policy: LogPolicy,
    ) -> Result<Self, RosterError> {
        let employees: Vec<Employee> = employees.into_iter().collect();
        let mut index = HashMap::with_capacity(employees.len());

        for (position, employee) in employees.iter().enumerate() {
            if employee.id().is_empty() {
                return Err(RosterError::EmptyId {
                    name: employee.name().to_string(),
                });
            }
            if index.insert(employee.id().to_string(), position).is_some() {
                return Err(RosterError::DuplicateId(employee.id().to_string()));
            }
        }

        Ok(Self {
            employees,
            index,
            policy,
        })
    }

    /// Build a ledger from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured roster is invalid.
    pub fn from_config(config: &Config) -> Result<Self, RosterError> {
        Self::new(config.employees().iter().cloned(), config.log_policy())
    }

    /// The policy applied by [`Ledger::log_days`].
    #[must_use]
    pub const fn policy(&self) -> LogPolicy {
        self.policy
    }

    /// Number of employees in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Whether the directory holds no employees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Look up an employee by ID.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidEmployeeId`] if no such employee exists.
    pub fn lookup_by_id(&self, id: &str) -> Result<&Employee, LedgerError> {
        self.index
            .get(id)
            .map(|&position| &self.employees[position])
            .ok_or_else(|| LedgerError::InvalidEmployeeId(id.to_string()))
    }

    fn lookup_by_id_mut(&mut self, id: &str) -> Result<&mut Employee, LedgerError> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| LedgerError::InvalidEmployeeId(id.to_string()))?;
        Ok(&mut self.employees[position])
    }

    /// Resolve an exact, case-sensitive name to an employee ID.
    ///
    /// If several employees share a name, the first one in insertion order
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidEmployeeName`] if no employee has this
    /// name.
    pub fn lookup_id_by_name(&self, name: &str) -> Result<&str, LedgerError> {
        self.employees
            .iter()
            .find(|employee| employee.name() == name)
            .map(Employee::id)
            .ok_or_else(|| LedgerError::InvalidEmployeeName(name.to_string()))
    }

    /// Remaining vacation days for an employee. May be negative.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidEmployeeId`] if no such employee exists.
    pub fn remaining_days(&self, id: &str) -> Result<i64, LedgerError> {
        self.lookup_by_id(id).map(Employee::remaining_vacation_days)
    }

    /// Append vacation dates to an employee's history.
    ///
    /// Returns a confirmation naming the number of dates supplied.
    ///
    /// Under [`LogPolicy::Partial`] the call is not atomic: each date is
    /// checked against the balance and appended in turn, and a failure part
    /// way through leaves the earlier dates recorded. Under
    /// [`LogPolicy::AllOrNothing`] the request is checked as a whole first.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidEmployeeId`] if no such employee exists,
    /// or [`LedgerError::InsufficientVacationDays`] if the balance runs out.
    #[instrument(level = "debug", skip(self, dates), fields(requested = dates.len()))]
    pub fn log_days<S: AsRef<str>>(
        &mut self,
        id: &str,
        dates: &[S],
    ) -> Result<String, LedgerError> {
        let policy = self.policy;
        let employee = self.lookup_by_id_mut(id)?;
        let requested = dates.len();

        if policy == LogPolicy::AllOrNothing && requested > 0 {
            let remaining = employee.remaining_vacation_days();
            if i64::try_from(requested).unwrap_or(i64::MAX) > remaining {
                tracing::warn!(remaining, "rejected vacation request exceeding balance");
                return Err(LedgerError::InsufficientVacationDays {
                    employee_id: id.to_string(),
                    requested,
                    recorded: 0,
                });
            }
        }

        for (recorded, date) in dates.iter().enumerate() {
            if employee.remaining_vacation_days() <= 0 {
                tracing::warn!(recorded, "vacation balance exhausted part way through request");
                return Err(LedgerError::InsufficientVacationDays {
                    employee_id: id.to_string(),
                    requested,
                    recorded,
                });
            }
            employee.record(date.as_ref().to_string());
        }

        tracing::debug!(
            remaining = employee.remaining_vacation_days(),
            "logged vacation days"
        );
        Ok(format!("Logged {requested} vacation days for employee {id}."))
    }

    /// A copy of an employee's vacation history, oldest entry first.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidEmployeeId`] if no such employee exists.
    pub fn history(&self, id: &str) -> Result<Vec<String>, LedgerError> {
        self.lookup_by_id(id)
            .map(|employee| employee.vacation_history().to_vec())
    }

    /// A greeting for an existing employee.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidEmployeeId`] if no such employee exists.
    pub fn greet(&self, id: &str) -> Result<String, LedgerError> {
        let employee = self.lookup_by_id(id)?;
        Ok(format!("Hello, Employee {}!", employee.id()))
    }

    /// Liveness probe. Always `"OK"`.
    #[must_use]
    pub const fn health_check() -> &'static str {
        "OK"
    }
}
