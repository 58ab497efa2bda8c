use crate::models::assignments::entities::AssignmentConfig;
use crate::services::context::{ServiceContext, ServiceError, ServiceResult, load_assignment};

/// 课程中任何选课用户都可以查看作业设置
pub async fn get_assignment(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
) -> ServiceResult<AssignmentConfig> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    if ctx
        .storage
        .get_enrolment_role(assignment.course_id, acting_user_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::Forbidden(format!(
            "User {acting_user_id} is not enrolled in course {}",
            assignment.course_id
        )));
    }
    Ok(assignment)
}
