use serde::Deserialize;

fn default_feedback() -> String {
    "[]".to_string()
}

/// `update_grade` 参数，字段名与外部评分系统的调用保持一致
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGradeParams {
    pub assignment_name: String,
    // 逗号分隔的外部用户名（小组提交）
    pub user_name: String,
    pub points: f64,
    pub max: f64,
    #[serde(default)]
    pub externallink: String,
    // URL 编码的 Markdown
    #[serde(default = "default_feedback")]
    pub feedback: String,
    #[serde(default)]
    pub wstoken: Option<String>,
}
