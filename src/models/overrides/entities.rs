use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::{Schedule, Timestamp, unset_if_zero};

/// 单个学生的日期覆盖（延期）
///
/// 字段为空表示沿用作业默认值，而不是"设置为 0"。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Override {
    pub id: Option<i64>,
    pub assignment_id: i64,
    pub user_id: i64,
    pub allow_submissions_from: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub cutoff_date: Option<Timestamp>,
}

impl Override {
    pub fn new(assignment_id: i64, user_id: i64, dates: Schedule) -> Self {
        Self {
            id: None,
            assignment_id,
            user_id,
            allow_submissions_from: unset_if_zero(dates.allow_submissions_from),
            due_date: unset_if_zero(dates.due_date),
            cutoff_date: unset_if_zero(dates.cutoff_date),
        }
    }

    /// 覆盖中携带的日期（未覆盖的字段为空）
    pub fn dates(&self) -> Schedule {
        Schedule::new(self.allow_submissions_from, self.due_date, self.cutoff_date)
    }
}
