use tracing::info;

use super::create::validate_settings;
use super::sync::sync_integrations;
use crate::models::ErrorCode;
use crate::models::assignments::{
    entities::AssignmentConfig, requests::UpdateAssignmentRequest,
};
use crate::services::context::{
    ServiceContext, ServiceError, ServiceResult, load_assignment, require_teacher,
};

pub async fn update_assignment(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
) -> ServiceResult<AssignmentConfig> {
    let existing = load_assignment(ctx, assignment_id).await?;
    require_teacher(ctx, existing.course_id, acting_user_id).await?;
    validate_settings(&req)?;

    let assignment = ctx
        .storage
        .update_assignment(assignment_id, &req)
        .await?
        .ok_or_else(|| {
            ServiceError::NotFound(
                ErrorCode::AssignmentNotFound,
                format!("Assignment {assignment_id} not found"),
            )
        })?;
    sync_integrations(ctx, &assignment).await?;

    info!("Assignment {} updated by user {}", assignment.id, acting_user_id);
    Ok(assignment)
}
