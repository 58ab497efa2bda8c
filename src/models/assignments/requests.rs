use serde::Deserialize;

use super::entities::{Schedule, Timestamp};

/// 作业设置（创建与更新共用）
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentSettings {
    pub name: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub always_show_description: bool,
    pub external_name: String,
    #[serde(default)]
    pub external_link: String,
    #[serde(default)]
    pub always_show_link: bool,
    pub allow_submissions_from: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub cutoff_date: Option<Timestamp>,
    pub external_grade_max: f64,
    #[serde(default)]
    pub manual_grade_max: f64,
    #[serde(default)]
    pub passing_percentage: f64,
    #[serde(default)]
    pub needs_passing_grade: bool,
}

impl AssignmentSettings {
    pub fn schedule(&self) -> Schedule {
        Schedule::new(self.allow_submissions_from, self.due_date, self.cutoff_date)
    }
}

/// 创建作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub course_id: i64,
    #[serde(flatten)]
    pub settings: AssignmentSettings,
}

/// 更新作业请求
pub type UpdateAssignmentRequest = AssignmentSettings;
