use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::report::{
    ReportedCase, STATUS_PENDING_INVESTIGATION, STATUS_REPORTED, STATUS_RESOLVED,
    STATUS_UNDER_INVESTIGATION,
};

/// Compute the status to display for a reported case, relative to `today`.
///
/// `Resolved` and `Under Investigation` are terminal and returned as-is,
/// whatever the marriage date says. A `Reported` case shows as
/// `Pending Investigation` while its marriage date is strictly after
/// `today` (date-only comparison, local time zone) and as
/// `Under Investigation` from the marriage day onward — or immediately,
/// when no marriage date is recorded. Any other recorded value passes
/// through unchanged.
///
/// Pure and deterministic for a fixed `today`; never fails and never
/// mutates its input.
pub fn effective_status(case: &ReportedCase, today: NaiveDate) -> String {
    match case.status.as_str() {
        STATUS_RESOLVED => STATUS_RESOLVED.to_string(),
        STATUS_UNDER_INVESTIGATION => STATUS_UNDER_INVESTIGATION.to_string(),
        STATUS_REPORTED => match case.marriage_date.map(local_calendar_date) {
            Some(marriage_day) if marriage_day > today => {
                STATUS_PENDING_INVESTIGATION.to_string()
            }
            _ => STATUS_UNDER_INVESTIGATION.to_string(),
        },
        other => other.to_string(),
    }
}

/// [`effective_status`] against the local calendar date right now.
pub fn effective_status_today(case: &ReportedCase) -> String {
    effective_status(case, Local::now().date_naive())
}

/// Truncate a timestamp to its calendar date in the local time zone.
fn local_calendar_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}
