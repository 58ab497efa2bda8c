//! 有效日期解析
//!
//! 覆盖中每个字段独立生效：有值用覆盖值，否则沿用作业默认值。

use crate::errors::ValidationErrors;
use crate::models::assignments::entities::{Schedule, Timestamp};
use crate::models::overrides::entities::Override;

pub const FIELD_ALLOW_SUBMISSIONS_FROM: &str = "allow_submissions_from";
pub const FIELD_DUE_DATE: &str = "due_date";
pub const FIELD_CUTOFF_DATE: &str = "cutoff_date";

pub const MSG_DUE_AFTER_FROM: &str = "Due date must be after the allow submissions from date.";
pub const MSG_CUTOFF_AFTER_DUE: &str = "Cut-off date cannot be earlier than the due date.";
pub const MSG_CUTOFF_AFTER_FROM: &str =
    "Cut-off date cannot be earlier than the allow submissions from date.";
pub const MSG_NO_OVERRIDE_DATA: &str = "You must override at least one of the dates.";

fn pick(overridden: Option<Timestamp>, default: Option<Timestamp>) -> Option<Timestamp> {
    overridden.filter(|ts| *ts != 0).or(default)
}

/// 计算学生的有效日期
pub fn effective_dates(defaults: &Schedule, override_entry: Option<&Override>) -> Schedule {
    let Some(entry) = override_entry else {
        return *defaults;
    };
    Schedule {
        allow_submissions_from: pick(entry.allow_submissions_from, defaults.allow_submissions_from),
        due_date: pick(entry.due_date, defaults.due_date),
        cutoff_date: pick(entry.cutoff_date, defaults.cutoff_date),
    }
}

fn check_due_after_from(schedule: &Schedule, errors: &mut ValidationErrors) {
    if matches!(
        (schedule.allow_submissions_from, schedule.due_date),
        (Some(from), Some(due)) if due <= from
    ) {
        errors.add(FIELD_DUE_DATE, MSG_DUE_AFTER_FROM);
    }
}

fn check_cutoff_after_due(schedule: &Schedule, errors: &mut ValidationErrors) {
    if matches!(
        (schedule.due_date, schedule.cutoff_date),
        (Some(due), Some(cutoff)) if cutoff < due
    ) {
        errors.add(FIELD_CUTOFF_DATE, MSG_CUTOFF_AFTER_DUE);
    }
}

fn check_cutoff_after_from(schedule: &Schedule, errors: &mut ValidationErrors) {
    if matches!(
        (schedule.allow_submissions_from, schedule.cutoff_date),
        (Some(from), Some(cutoff)) if cutoff < from
    ) {
        errors.add(FIELD_CUTOFF_DATE, MSG_CUTOFF_AFTER_FROM);
    }
}

/// 作业设置的日期校验
pub fn validate_schedule(schedule: &Schedule) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_due_after_from(schedule, &mut errors);
    check_cutoff_after_due(schedule, &mut errors);
    check_cutoff_after_from(schedule, &mut errors);
    errors.into_result()
}

/// 延期校验：按生效后的日期检查顺序约束，并拒绝没有改动任何日期的覆盖。
///
/// 成功时返回生效后的日期。
pub fn validate_override(
    defaults: &Schedule,
    requested: &Schedule,
) -> Result<Schedule, ValidationErrors> {
    let requested = Schedule::new(
        requested.allow_submissions_from,
        requested.due_date,
        requested.cutoff_date,
    );
    let effective = Schedule {
        allow_submissions_from: requested
            .allow_submissions_from
            .or(defaults.allow_submissions_from),
        due_date: requested.due_date.or(defaults.due_date),
        cutoff_date: requested.cutoff_date.or(defaults.cutoff_date),
    };

    let mut errors = ValidationErrors::new();
    check_cutoff_after_from(&effective, &mut errors);
    check_due_after_from(&effective, &mut errors);
    check_cutoff_after_due(&effective, &mut errors);

    let changed = [
        (requested.allow_submissions_from, defaults.allow_submissions_from),
        (requested.due_date, defaults.due_date),
        (requested.cutoff_date, defaults.cutoff_date),
    ]
    .iter()
    .any(|(req, default)| req.is_some() && req != default);

    if !changed {
        errors.add(FIELD_ALLOW_SUBMISSIONS_FROM, MSG_NO_OVERRIDE_DATA);
    }

    errors.into_result().map(|_| effective)
}
