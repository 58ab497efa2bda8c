use serde::Deserialize;

/// 人工评分请求（评分表单）
#[derive(Debug, Clone, Deserialize)]
pub struct ManualGradeRequest {
    #[serde(default)]
    pub manual_grade: f64,
    #[serde(default)]
    pub manual_feedback: String,
    // 教师可以修正外部成绩
    pub external_grade: Option<f64>,
    pub external_feedback: Option<String>,
}

/// 成绩列表排序字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Lastname,
    Firstname,
    Status,
    Grade,
}

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// 成绩列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeListParams {
    pub sort: Option<SortField>,
    pub tdir: Option<SortDirection>,
}
