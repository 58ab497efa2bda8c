use tracing::info;

use crate::models::ErrorCode;
use crate::services::context::{
    ServiceContext, ServiceError, ServiceResult, load_assignment, require_teacher,
};

/// 删除覆盖后学生恢复使用作业默认日期
pub async fn delete_override(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
    user_id: i64,
) -> ServiceResult<()> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    require_teacher(ctx, assignment.course_id, acting_user_id).await?;

    if !ctx.storage.delete_override(assignment_id, user_id).await? {
        return Err(ServiceError::NotFound(
            ErrorCode::OverrideNotFound,
            format!("No override for user {user_id} on assignment {assignment_id}"),
        ));
    }

    info!(
        "Override for user {} on assignment {} removed by user {}",
        user_id, assignment_id, acting_user_id
    );
    Ok(())
}
