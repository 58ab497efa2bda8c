//! 评分核心逻辑
//!
//! 纯函数，不做 I/O：
//! - `dates`: 有效日期解析与日期校验
//! - `status`: 提交状态与及格判定
//! - `listing`: 教师成绩列表的行构建与排序
//! - `reconcile`: webservice 成绩回写流程

pub mod dates;
pub mod listing;
pub mod reconcile;
pub mod status;

pub use dates::{effective_dates, validate_override, validate_schedule};
pub use listing::list_grades;
pub use reconcile::GradeReconciler;
pub use status::{compute_status, passing_grade_met, passing_threshold};
