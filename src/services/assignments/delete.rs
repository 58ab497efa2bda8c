use tracing::info;

use crate::services::context::{ServiceContext, ServiceResult, load_assignment, require_teacher};

/// 删除作业，连同日历事件、日期覆盖与成绩
pub async fn delete_assignment(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
) -> ServiceResult<bool> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    require_teacher(ctx, assignment.course_id, acting_user_id).await?;

    ctx.calendar.delete_due_event(assignment_id).await?;
    let deleted = ctx.storage.delete_assignment(assignment_id).await?;

    info!("Assignment {} deleted by user {}", assignment_id, acting_user_id);
    Ok(deleted)
}
