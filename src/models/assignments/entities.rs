use serde::{Deserialize, Serialize};

/// Unix 时间戳（秒）
pub type Timestamp = i64;

/// 存储层与外部参数中的日期约定：0 与 NULL 都表示"未设置"。
/// 所有日期字段进入业务模型时只在这里归一化一次。
pub fn unset_if_zero(value: Option<Timestamp>) -> Option<Timestamp> {
    value.filter(|ts| *ts != 0)
}

/// 作业的提交时间窗口
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    // 开始允许提交的时间
    pub allow_submissions_from: Option<Timestamp>,
    // 截止时间
    pub due_date: Option<Timestamp>,
    // 最终关闭时间
    pub cutoff_date: Option<Timestamp>,
}

impl Schedule {
    pub fn new(
        allow_submissions_from: Option<Timestamp>,
        due_date: Option<Timestamp>,
        cutoff_date: Option<Timestamp>,
    ) -> Self {
        Self {
            allow_submissions_from: unset_if_zero(allow_submissions_from),
            due_date: unset_if_zero(due_date),
            cutoff_date: unset_if_zero(cutoff_date),
        }
    }

    /// 是否已超过最终关闭时间
    pub fn is_closed_at(&self, now: Timestamp) -> bool {
        matches!(self.cutoff_date, Some(cutoff) if cutoff < now)
    }

    /// 是否已超过截止时间
    pub fn is_overdue_at(&self, now: Timestamp) -> bool {
        matches!(self.due_date, Some(due) if due > 0 && now > due)
    }
}

/// 外部作业配置（单次请求内只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    // 唯一 ID
    pub id: i64,
    // 所属课程 ID
    pub course_id: i64,
    // 作业名称
    pub name: String,
    // 作业描述
    pub intro: String,
    // 开放提交前是否显示描述
    pub always_show_description: bool,
    // 外部系统中的作业名称（webservice 按此名称查找）
    pub external_name: String,
    // 外部系统中的作业链接
    pub external_link: String,
    // 开放提交前是否显示链接
    pub always_show_link: bool,
    // 提交时间窗口
    pub schedule: Schedule,
    // 外部评分满分
    pub external_grade_max: f64,
    // 人工评分满分
    pub manual_grade_max: f64,
    // 及格百分比 [0, 100]
    pub passing_percentage: f64,
    // 完成条件是否要求及格
    pub needs_passing_grade: bool,
    // 最后修改时间
    pub time_modified: Timestamp,
}

impl AssignmentConfig {
    /// 总满分（外部 + 人工）
    pub fn max_grade(&self) -> f64 {
        self.external_grade_max + self.manual_grade_max
    }
}
