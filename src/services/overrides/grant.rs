use tracing::info;

use crate::errors::ValidationErrors;
use crate::grading::validate_override;
use crate::models::overrides::{entities::Override, requests::GrantExtensionRequest};
use crate::services::context::{
    ServiceContext, ServiceResult, load_assignment, require_student, require_teacher,
};

/// 为一批学生授予同样的延期；任一学生校验失败则整批不写入
pub async fn grant_extension(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
    req: GrantExtensionRequest,
) -> ServiceResult<Vec<Override>> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    require_teacher(ctx, assignment.course_id, acting_user_id).await?;

    if req.user_ids.is_empty() {
        let mut errors = ValidationErrors::new();
        errors.add("user_ids", "Select at least one student.");
        return Err(errors.into());
    }

    let requested = req.requested_dates();
    validate_override(&assignment.schedule, &requested)?;

    for user_id in &req.user_ids {
        require_student(ctx, assignment.course_id, *user_id).await?;
    }

    let mut saved = Vec::with_capacity(req.user_ids.len());
    for user_id in req.user_ids {
        let entry = ctx
            .storage
            .save_override(Override::new(assignment_id, user_id, requested))
            .await?;
        info!(
            "Extension for user {} on assignment {} granted by user {}",
            user_id, assignment_id, acting_user_id
        );
        saved.push(entry);
    }

    Ok(saved)
}
