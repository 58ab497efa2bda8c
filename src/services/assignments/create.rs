use tracing::info;

use super::sync::sync_integrations;
use crate::errors::ValidationErrors;
use crate::grading::validate_schedule;
use crate::models::assignments::{
    entities::AssignmentConfig,
    requests::{AssignmentSettings, CreateAssignmentRequest},
};
use crate::services::context::{ServiceContext, ServiceResult, require_teacher};
use crate::utils::validate::{
    validate_external_name, validate_grade_max, validate_percentage, validate_url,
};

/// 作业设置校验（创建与更新共用）
pub(crate) fn validate_settings(settings: &AssignmentSettings) -> Result<(), ValidationErrors> {
    let mut errors = match validate_schedule(&settings.schedule()) {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    if settings.name.trim().is_empty() {
        errors.add("name", "Name is required");
    }
    if let Err(msg) = validate_external_name(&settings.external_name) {
        errors.add("external_name", msg);
    }
    if let Err(msg) = validate_url(&settings.external_link) {
        errors.add("external_link", msg);
    }
    if let Err(msg) = validate_grade_max(settings.external_grade_max) {
        errors.add("external_grade_max", msg);
    }
    if let Err(msg) = validate_grade_max(settings.manual_grade_max) {
        errors.add("manual_grade_max", msg);
    }
    if let Err(msg) = validate_percentage(settings.passing_percentage) {
        errors.add("passing_percentage", msg);
    }

    errors.into_result()
}

pub async fn create_assignment(
    ctx: &ServiceContext,
    acting_user_id: i64,
    req: CreateAssignmentRequest,
) -> ServiceResult<AssignmentConfig> {
    require_teacher(ctx, req.course_id, acting_user_id).await?;
    validate_settings(&req.settings)?;

    let assignment = ctx
        .storage
        .create_assignment(req.course_id, &req.settings)
        .await?;
    sync_integrations(ctx, &assignment).await?;

    info!(
        "Assignment {} '{}' created in course {} by user {}",
        assignment.id, assignment.name, assignment.course_id, acting_user_id
    );
    Ok(assignment)
}
