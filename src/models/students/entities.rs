use serde::Serialize;

use crate::models::grades::entities::GradeRecord;
use crate::models::overrides::entities::Override;
use crate::models::users::entities::User;

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    NotSubmitted,
    Pending,
    Overdue,
    Passed,
}

impl SubmissionStatus {
    pub const NOT_SUBMITTED: &'static str = "not submitted";
    pub const PENDING: &'static str = "pending";
    pub const OVERDUE: &'static str = "overdue";
    pub const PASSED: &'static str = "passed";

    /// 用于显示与排序的文本
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::NotSubmitted => Self::NOT_SUBMITTED,
            SubmissionStatus::Pending => Self::PENDING,
            SubmissionStatus::Overdue => Self::OVERDUE,
            SubmissionStatus::Passed => Self::PASSED,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 学生聚合视图：用户 + 至多一条成绩 + 至多一条日期覆盖，按请求组装，不单独持久化
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub user: User,
    pub grade: Option<GradeRecord>,
    pub override_entry: Option<Override>,
}

impl Student {
    pub fn new(user: User) -> Self {
        Self {
            user,
            grade: None,
            override_entry: None,
        }
    }

    pub fn with_grade(mut self, grade: Option<GradeRecord>) -> Self {
        self.grade = grade;
        self
    }

    pub fn with_override(mut self, override_entry: Option<Override>) -> Self {
        self.override_entry = override_entry;
        self
    }
}
