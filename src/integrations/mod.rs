//! 宿主系统协作方接口
//!
//! 成绩册、完成状态与日历都只通过这些 trait 访问；
//! `SeaOrmStorage` 提供了基于同一数据库的默认实现。

use crate::errors::Result;
use crate::models::assignments::entities::Timestamp;
use crate::models::grades::entities::CompletionState;

/// 成绩册条目（每个作业一条）
#[derive(Debug, Clone, PartialEq)]
pub struct GradeItem {
    pub assignment_id: i64,
    pub course_id: i64,
    pub item_name: String,
    pub grade_max: f64,
    pub grade_pass: f64,
}

/// 推送到成绩册的成绩
#[derive(Debug, Clone, PartialEq)]
pub struct GradebookGrade {
    pub assignment_id: i64,
    pub user_id: i64,
    pub raw_grade: f64,
    // HTML
    pub feedback: String,
}

/// 日历中的截止事件
#[derive(Debug, Clone, PartialEq)]
pub struct DueEvent {
    pub assignment_id: i64,
    pub course_id: i64,
    pub name: String,
    pub time_start: Timestamp,
}

#[async_trait::async_trait]
pub trait Gradebook: Send + Sync {
    // 创建或更新成绩册条目
    async fn upsert_grade_item(&self, item: GradeItem) -> Result<()>;
    // 写入学生成绩（覆盖已有值）
    async fn push_grade(&self, grade: GradebookGrade) -> Result<()>;
    async fn get_pushed_grade(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<GradebookGrade>>;
}

#[async_trait::async_trait]
pub trait CompletionTracker: Send + Sync {
    async fn update_state(
        &self,
        assignment_id: i64,
        user_id: i64,
        state: CompletionState,
    ) -> Result<()>;
    async fn get_state(&self, assignment_id: i64, user_id: i64)
    -> Result<Option<CompletionState>>;
}

#[async_trait::async_trait]
pub trait Calendar: Send + Sync {
    async fn upsert_due_event(&self, event: DueEvent) -> Result<()>;
    async fn delete_due_event(&self, assignment_id: i64) -> Result<bool>;
    async fn get_due_event(&self, assignment_id: i64) -> Result<Option<DueEvent>>;
}
