use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::{Schedule, Timestamp};

/// 为一个或多个学生授予延期
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrantExtensionRequest {
    pub user_ids: Vec<i64>,
    pub allow_submissions_from: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub cutoff_date: Option<Timestamp>,
}

impl GrantExtensionRequest {
    pub fn requested_dates(&self) -> Schedule {
        Schedule::new(self.allow_submissions_from, self.due_date, self.cutoff_date)
    }
}
