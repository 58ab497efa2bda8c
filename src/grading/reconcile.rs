//! webservice 成绩回写
//!
//! 每个外部用户名依次处理，遇到第一个非成功结果即停止整批；
//! 之前已写入的成绩保持不变。

use tracing::{debug, info, warn};

use super::dates::effective_dates;
use super::status::completion_state;
use crate::errors::Result;
use crate::integrations::{CompletionTracker, Gradebook, GradebookGrade};
use crate::models::assignments::entities::Timestamp;
use crate::models::grades::entities::GradeRecord;
use crate::models::webservice::requests::UpdateGradeParams;
use crate::models::webservice::responses::{MessageType, ResultMessage};
use crate::storage::Storage;
use crate::utils::feedback::{feedback_link, render_feedback};

/// 拆分逗号分隔的用户名（去除空白，忽略空项）
pub fn split_usernames(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// 外部分数按作业外部满分折算
pub fn normalize_points(points: f64, external_grade_max: f64, max: f64) -> f64 {
    points * external_grade_max / max
}

/// 合并多条结果：级别取最严重的一条，name 与 message 按行拼接
pub fn aggregate(results: &[ResultMessage]) -> ResultMessage {
    let message_type = results
        .iter()
        .map(|r| r.message_type)
        .max()
        .unwrap_or(MessageType::Info);
    let name = results
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let message = results
        .iter()
        .map(|r| r.message.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    ResultMessage {
        message_type,
        name,
        message,
    }
}

fn no_user(username: &str) -> ResultMessage {
    ResultMessage::error(
        ResultMessage::NO_USER,
        format!("No Moodle user found with username \"{username}\" Update your Moodle profile."),
    )
}

fn no_assignment(assignment_name: &str) -> ResultMessage {
    ResultMessage::error(
        ResultMessage::NO_ASSIGNMENT,
        format!("No assignment with name \"{assignment_name}\" found. Contact your teacher."),
    )
}

fn overdue(assignment_name: &str) -> ResultMessage {
    ResultMessage::warning(
        ResultMessage::OVERDUE,
        format!(
            "The assignment \"{assignment_name}\" is closed, the grade was not updated. Contact your teacher."
        ),
    )
}

fn points_out_of_range() -> ResultMessage {
    ResultMessage::error(
        ResultMessage::INVALID_POINTS,
        "Parameter points cannot be scaled to the assignment maximum",
    )
}

fn success() -> ResultMessage {
    ResultMessage::info(ResultMessage::SUCCESS, "Update successful")
}

/// 检查调用方数据，在任何计算之前执行
pub fn check_params(params: &UpdateGradeParams) -> Option<ResultMessage> {
    if params.max == 0.0 || !params.max.is_finite() {
        return Some(ResultMessage::error(
            ResultMessage::INVALID_MAX,
            format!("Parameter max must be a non-zero number, got {}", params.max),
        ));
    }
    if !params.points.is_finite() {
        return Some(ResultMessage::error(
            ResultMessage::INVALID_POINTS,
            "Parameter points must be a finite number",
        ));
    }
    None
}

/// 成绩回写流程，协作方全部由调用方注入
pub struct GradeReconciler<'a> {
    storage: &'a dyn Storage,
    gradebook: &'a dyn Gradebook,
    completion: &'a dyn CompletionTracker,
    // 存放外部用户名的资料字段
    username_field: &'a str,
    feedback_link_base: &'a str,
}

impl<'a> GradeReconciler<'a> {
    pub fn new(
        storage: &'a dyn Storage,
        gradebook: &'a dyn Gradebook,
        completion: &'a dyn CompletionTracker,
        username_field: &'a str,
        feedback_link_base: &'a str,
    ) -> Self {
        Self {
            storage,
            gradebook,
            completion,
            username_field,
            feedback_link_base,
        }
    }

    /// 处理一次 `update_grade` 调用。
    ///
    /// 存储错误会中断整批并返回 `Err`，已处理的用户名保持已写入状态。
    pub async fn apply(&self, params: &UpdateGradeParams, now: Timestamp) -> Result<ResultMessage> {
        if let Some(rejection) = check_params(params) {
            warn!(
                "update_grade rejected for assignment '{}': {}",
                params.assignment_name, rejection.message
            );
            return Ok(rejection);
        }

        let feedback_html = render_feedback(&params.feedback);
        let usernames = split_usernames(&params.user_name);
        if usernames.is_empty() {
            // 空用户名按查无此人处理，不做查找
            warn!(
                "update_grade rejected for assignment '{}': empty user_name",
                params.assignment_name
            );
            return Ok(no_user(""));
        }

        let mut results = Vec::with_capacity(usernames.len());
        for username in usernames {
            let result = self
                .apply_one(params, username, &feedback_html, now)
                .await?;
            let stop = !result.is_info();
            results.push(result);
            if stop {
                break;
            }
        }

        Ok(aggregate(&results))
    }

    async fn apply_one(
        &self,
        params: &UpdateGradeParams,
        username: &str,
        feedback_html: &str,
        now: Timestamp,
    ) -> Result<ResultMessage> {
        let Some(user_id) = self
            .storage
            .find_user_id_by_profile_field(self.username_field, username)
            .await?
        else {
            warn!("update_grade: no user with {} = '{}'", self.username_field, username);
            return Ok(no_user(username));
        };

        let Some(assignment) = self
            .storage
            .find_assignment_for_submitter(&params.assignment_name, user_id)
            .await?
        else {
            warn!(
                "update_grade: no assignment '{}' for user {}",
                params.assignment_name, user_id
            );
            return Ok(no_assignment(&params.assignment_name));
        };
        debug!(
            "update_grade: resolved '{}' to assignment {} for user {}",
            username, assignment.id, user_id
        );

        let override_entry = self.storage.get_override(assignment.id, user_id).await?;
        let effective = effective_dates(&assignment.schedule, override_entry.as_ref());
        if effective.is_closed_at(now) {
            warn!(
                "update_grade: assignment {} closed for user {} (cutoff {:?})",
                assignment.id, user_id, effective.cutoff_date
            );
            return Ok(overdue(&params.assignment_name));
        }

        let external_grade =
            normalize_points(params.points, assignment.external_grade_max, params.max);
        if !external_grade.is_finite() {
            warn!(
                "update_grade: scaled points for assignment {} overflow ({} * {} / {})",
                assignment.id, params.points, assignment.external_grade_max, params.max
            );
            return Ok(points_out_of_range());
        }

        let mut grade = self
            .storage
            .get_grade(assignment.id, user_id)
            .await?
            .unwrap_or_else(|| GradeRecord::empty(assignment.id, user_id));
        grade.external_grade = external_grade;
        grade.external_feedback = feedback_html.to_string();
        grade.external_link = params.externallink.clone();

        let saved = self.storage.save_grade(grade).await?;
        info!(
            "update_grade: user {} on assignment {} external grade {:.2}",
            user_id, assignment.id, saved.external_grade
        );

        self.gradebook
            .push_grade(GradebookGrade {
                assignment_id: assignment.id,
                user_id,
                raw_grade: saved.final_grade(),
                feedback: feedback_link(self.feedback_link_base, assignment.id, user_id),
            })
            .await?;
        self.completion
            .update_state(
                assignment.id,
                user_id,
                completion_state(&assignment, Some(&saved)),
            )
            .await?;

        Ok(success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(max: f64) -> UpdateGradeParams {
        UpdateGradeParams {
            assignment_name: "HW1".to_string(),
            user_name: "alice".to_string(),
            points: 45.0,
            max,
            externallink: String::new(),
            feedback: "[]".to_string(),
            wstoken: None,
        }
    }

    #[test]
    fn test_split_usernames() {
        assert_eq!(split_usernames("alice"), vec!["alice"]);
        assert_eq!(split_usernames(" alice, bob ,,carol "), vec!["alice", "bob", "carol"]);
        assert!(split_usernames(" , ").is_empty());
    }

    #[test]
    fn test_normalize_points() {
        assert_eq!(normalize_points(45.0, 100.0, 50.0), 90.0);
        assert_eq!(normalize_points(0.0, 100.0, 50.0), 0.0);
    }

    #[test]
    fn test_zero_max_rejected_before_arithmetic() {
        let rejection = check_params(&params(0.0)).unwrap();
        assert_eq!(rejection.message_type, MessageType::Error);
        assert_eq!(rejection.name, ResultMessage::INVALID_MAX);
        assert!(check_params(&params(f64::INFINITY)).is_some());
        assert!(check_params(&params(50.0)).is_none());
    }

    #[test]
    fn test_aggregate_escalates() {
        let all_ok = aggregate(&[success(), success()]);
        assert_eq!(all_ok.message_type, MessageType::Info);
        assert_eq!(all_ok.name, "success\nsuccess");
        assert_eq!(all_ok.message, "Update successful\nUpdate successful");

        let warned = aggregate(&[success(), overdue("HW1")]);
        assert_eq!(warned.message_type, MessageType::Warning);
        assert_eq!(warned.name, "success\noverdue");

        let failed = aggregate(&[overdue("HW1"), no_user("bob")]);
        assert_eq!(failed.message_type, MessageType::Error);
        assert_eq!(failed.name, "overdue\nno_user");
    }

    #[test]
    fn test_overflowing_scale_is_not_finite() {
        assert!(check_params(&UpdateGradeParams {
            points: 1e300,
            ..params(1e-300)
        })
        .is_none());
        assert!(!normalize_points(1e300, 100.0, 1e-300).is_finite());
        assert_eq!(points_out_of_range().name, ResultMessage::INVALID_POINTS);
    }

    #[test]
    fn test_messages_match_wire_text() {
        assert_eq!(
            no_user("alice").message,
            "No Moodle user found with username \"alice\" Update your Moodle profile."
        );
        assert_eq!(
            no_assignment("HW1").message,
            "No assignment with name \"HW1\" found. Contact your teacher."
        );
    }
}
