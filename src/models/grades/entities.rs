use serde::{Deserialize, Serialize};

use crate::models::assignments::entities::Timestamp;

/// 学生在某作业下的成绩记录（外部 + 人工）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    // 首次写入前为空
    pub id: Option<i64>,
    pub assignment_id: i64,
    pub user_id: i64,
    // 最后一次写人工部分的评分人
    pub grader_id: Option<i64>,
    // 学生在外部系统中的提交链接
    pub external_link: String,
    pub external_grade: f64,
    // HTML
    pub external_feedback: String,
    pub manual_grade: f64,
    // HTML
    pub manual_feedback: String,
    pub updated_at: Timestamp,
}

impl GradeRecord {
    /// 新建一条空成绩记录
    pub fn empty(assignment_id: i64, user_id: i64) -> Self {
        Self {
            assignment_id,
            user_id,
            ..Default::default()
        }
    }

    /// 最终成绩 = 外部成绩 + 人工成绩
    pub fn final_grade(&self) -> f64 {
        self.external_grade + self.manual_grade
    }
}

/// 自动完成状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    Incomplete,
    Complete,
}

impl CompletionState {
    pub const INCOMPLETE: &'static str = "incomplete";
    pub const COMPLETE: &'static str = "complete";

    pub fn from_met(met: bool) -> Self {
        if met { Self::Complete } else { Self::Incomplete }
    }
}

impl std::fmt::Display for CompletionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionState::Incomplete => write!(f, "{}", CompletionState::INCOMPLETE),
            CompletionState::Complete => write!(f, "{}", CompletionState::COMPLETE),
        }
    }
}

impl std::str::FromStr for CompletionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CompletionState::INCOMPLETE => Ok(CompletionState::Incomplete),
            CompletionState::COMPLETE => Ok(CompletionState::Complete),
            _ => Err(format!("Invalid completion state: {s}")),
        }
    }
}
