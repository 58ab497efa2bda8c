use serde::Serialize;

use super::entities::Timestamp;

/// 作业概览（教师视角）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentSummaryResponse {
    pub assignment_id: i64,
    pub external_grade_max: f64,
    pub manual_grade_max: f64,
    // 已选课学生数
    pub student_count: i64,
    // 已有成绩记录数
    pub graded_count: i64,
    // 距截止剩余秒数，已截止或无截止时间时为空
    pub time_remaining: Option<Timestamp>,
    pub is_due: bool,
}
