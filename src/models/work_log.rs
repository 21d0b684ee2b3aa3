//! Work log model and related types.
//!
//! This module defines the [`WorkLog`] struct and its [`WorkLogKind`] variants
//! for representing billable work entries in the timesheet system.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Minutes in a full day, used to normalize time ranges that wrap midnight.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// The shape of a work log entry.
///
/// A `Particular` log is a single-day, timed entry billed by the hour.
/// A `Tutorial` log is a multi-day engagement billed per calendar day.
/// The variant determines which date/time fields exist, so a log can never
/// be "missing" a field required by its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkLogKind {
    /// A single-day timed entry (start/end clock time).
    Particular {
        /// The calendar day the work was performed.
        date: NaiveDate,
        /// The local start time of the work.
        start_time: NaiveTime,
        /// The local end time of the work. May be earlier than `start_time`,
        /// in which case the range is treated as crossing midnight.
        end_time: NaiveTime,
    },
    /// A multi-day engagement billed per day.
    Tutorial {
        /// The first day of the engagement.
        start_date: NaiveDate,
        /// The last day of the engagement (inclusive, `>= start_date`).
        end_date: NaiveDate,
    },
}

/// Represents a billable work entry for a user in a company.
///
/// A work log is created once with a snapshotted `rate_applied` and a
/// computed `amount`; edits re-run the same computation against possibly
/// updated rate/settings inputs. The engine itself never mutates a log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLog {
    /// Unique identifier for the work log.
    pub id: Uuid,
    /// The user who performed the work.
    pub user_id: Uuid,
    /// The company the work was performed for.
    pub company_id: Uuid,
    /// The kind of entry and its date/time fields.
    #[serde(flatten)]
    pub kind: WorkLogKind,
    /// Whether the coordination supplement applies.
    #[serde(default)]
    pub has_coordination: bool,
    /// Whether the night supplement applies (tutorials only).
    #[serde(default)]
    pub has_night: bool,
    /// Whether the worker arrives the evening before the first tutorial day,
    /// adding one night unit. Only meaningful with `has_night`.
    #[serde(default)]
    pub arrives_prior: bool,
    /// Free-text client reference.
    #[serde(default)]
    pub client: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text pickup point, when the company uses that feature.
    #[serde(default)]
    pub pickup_point: Option<String>,
    /// The rate snapshotted when the log was created, decoupling historical
    /// logs from later rate edits.
    #[serde(default)]
    pub rate_applied: Option<Decimal>,
    /// The stored monetary result (net, i.e. after deductions when the
    /// contract is gross).
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// The stored gross total, persisted at write time so employer cost can
    /// be reconstructed exactly.
    #[serde(default)]
    pub gross_amount: Option<Decimal>,
    /// Whether deductions were applied to produce `amount`.
    #[serde(default)]
    pub is_gross_calculation: Option<bool>,
}

impl WorkLog {
    /// Returns true if this log is a tutorial.
    pub fn is_tutorial(&self) -> bool {
        matches!(self.kind, WorkLogKind::Tutorial { .. })
    }

    /// Returns the date that anchors this log for grouping purposes.
    ///
    /// Particular logs anchor on their `date`; tutorials on their
    /// `start_date`.
    pub fn anchor_date(&self) -> NaiveDate {
        match self.kind {
            WorkLogKind::Particular { date, .. } => date,
            WorkLogKind::Tutorial { start_date, .. } => start_date,
        }
    }

    /// Returns the worked duration in hours for a particular log.
    ///
    /// A time range whose end is earlier than its start is treated as
    /// crossing midnight: 24 hours are added to the difference. Returns
    /// `None` for tutorials, which are billed per day rather than per hour.
    ///
    /// # Examples
    ///
    /// ```
    /// use worklog_engine::models::{WorkLog, WorkLogKind};
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let log = WorkLog {
    ///     id: Uuid::nil(),
    ///     user_id: Uuid::nil(),
    ///     company_id: Uuid::nil(),
    ///     kind: WorkLogKind::Particular {
    ///         date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
    ///         start_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
    ///         end_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
    ///     },
    ///     has_coordination: false,
    ///     has_night: false,
    ///     arrives_prior: false,
    ///     client: None,
    ///     description: None,
    ///     pickup_point: None,
    ///     rate_applied: None,
    ///     amount: None,
    ///     gross_amount: None,
    ///     is_gross_calculation: None,
    /// };
    /// assert_eq!(log.duration_hours(), Some(Decimal::new(40, 1))); // 4.0
    /// ```
    pub fn duration_hours(&self) -> Option<Decimal> {
        match self.kind {
            WorkLogKind::Particular {
                start_time,
                end_time,
                ..
            } => {
                let mut minutes = (end_time - start_time).num_minutes();
                if minutes < 0 {
                    minutes += MINUTES_PER_DAY;
                }
                Some(Decimal::new(minutes, 0) / Decimal::new(60, 0))
            }
            WorkLogKind::Tutorial { .. } => None,
        }
    }

    /// Validates the log's date/time fields for its kind.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidWorkLog`] when:
    /// - a tutorial's `end_date` is before its `start_date`
    /// - a particular log's normalized duration is not positive
    pub fn validate(&self) -> EngineResult<()> {
        match self.kind {
            WorkLogKind::Tutorial {
                start_date,
                end_date,
            } => {
                if end_date < start_date {
                    return Err(EngineError::InvalidWorkLog {
                        log_id: self.id,
                        message: format!(
                            "end date {} is before start date {}",
                            end_date, start_date
                        ),
                    });
                }
            }
            WorkLogKind::Particular { .. } => {
                let duration = self.duration_hours().unwrap_or(Decimal::ZERO);
                if duration <= Decimal::ZERO {
                    return Err(EngineError::InvalidWorkLog {
                        log_id: self.id,
                        message: "start and end time must span a positive duration".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
