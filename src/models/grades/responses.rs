use serde::Serialize;

use crate::models::assignments::entities::{Schedule, Timestamp};
use crate::models::grades::entities::CompletionState;
use crate::models::students::entities::SubmissionStatus;

/// 成绩列表中的一行（分数已格式化为两位小数）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRow {
    pub user_id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub status: SubmissionStatus,
    pub external_grade: String,
    pub manual_grade: String,
    pub final_grade: String,
    pub external_link: Option<String>,
    pub effective_dates: Schedule,
    pub has_override: bool,
}

/// 成绩列表响应
#[derive(Debug, Clone, Serialize)]
pub struct GradeListResponse {
    pub assignment_id: i64,
    pub items: Vec<GradeRow>,
}

/// 单个学生的成绩详情（学生视角与评分视角共用）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeDetailResponse {
    pub assignment_id: i64,
    pub user_id: i64,
    pub firstname: String,
    pub lastname: String,
    pub status: SubmissionStatus,
    pub external_link: String,
    pub external_grade: f64,
    pub external_grade_max: f64,
    pub external_feedback: String,
    pub manual_grade: f64,
    pub manual_grade_max: f64,
    pub manual_feedback: String,
    pub has_manual_grade: bool,
    pub total_grade: f64,
    pub total_grade_max: f64,
    pub passing_grade: f64,
    pub effective_dates: Schedule,
    // 距有效截止时间的剩余秒数
    pub time_remaining: Option<Timestamp>,
    pub grader_id: Option<i64>,
}

/// 完成条件状态
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionResponse {
    pub assignment_id: i64,
    pub user_id: i64,
    pub rule_enabled: bool,
    pub state: CompletionState,
}
