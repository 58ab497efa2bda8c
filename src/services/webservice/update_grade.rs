use tracing::{error, info, warn};

use crate::grading::GradeReconciler;
use crate::models::assignments::entities::Timestamp;
use crate::models::webservice::{requests::UpdateGradeParams, responses::ResultMessage};
use crate::services::context::ServiceContext;

fn token_accepted(expected: Option<&str>, provided: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => provided == Some(expected),
    }
}

/// 校验令牌后交给 `GradeReconciler`；存储错误转换为 `internal_error` 结果
pub async fn update_grade(
    ctx: &ServiceContext,
    expected_token: Option<&str>,
    params: &UpdateGradeParams,
    now: Timestamp,
) -> ResultMessage {
    if !token_accepted(expected_token, params.wstoken.as_deref()) {
        warn!(
            "update_grade for '{}' rejected: invalid token",
            params.assignment_name
        );
        return ResultMessage::error(ResultMessage::INVALID_TOKEN, "Invalid webservice token");
    }

    let reconciler = GradeReconciler::new(
        &*ctx.storage,
        &*ctx.gradebook,
        &*ctx.completion,
        &ctx.grading.external_username_field,
        &ctx.grading.feedback_link_base,
    );

    match reconciler.apply(params, now).await {
        Ok(result) => {
            info!(
                "update_grade '{}' for '{}': {}",
                params.assignment_name, params.user_name, result.name
            );
            result
        }
        Err(e) => {
            error!("update_grade '{}' failed: {}", params.assignment_name, e);
            ResultMessage::error(
                ResultMessage::INTERNAL_ERROR,
                "The grade could not be stored, try again later.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_not_required_when_unset() {
        assert!(token_accepted(None, None));
        assert!(token_accepted(None, Some("anything")));
    }

    #[test]
    fn test_token_must_match_when_set() {
        assert!(token_accepted(Some("secret"), Some("secret")));
        assert!(!token_accepted(Some("secret"), Some("other")));
        assert!(!token_accepted(Some("secret"), None));
    }
}
