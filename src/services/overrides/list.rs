use crate::models::overrides::entities::Override;
use crate::services::context::{ServiceContext, ServiceResult, load_assignment, require_teacher};

pub async fn list_overrides(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
) -> ServiceResult<Vec<Override>> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    require_teacher(ctx, assignment.course_id, acting_user_id).await?;

    Ok(ctx.storage.list_overrides(assignment_id).await?)
}
