use super::detail::authorize_view;
use crate::grading::status::completion_state;
use crate::models::grades::responses::CompletionResponse;
use crate::services::context::{ServiceContext, ServiceResult, load_assignment, require_student};

/// 学生的完成状态；尚未记录过时按当前成绩计算
pub async fn get_completion(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
    user_id: i64,
) -> ServiceResult<CompletionResponse> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    authorize_view(ctx, &assignment, acting_user_id, user_id).await?;
    require_student(ctx, assignment.course_id, user_id).await?;

    let state = match ctx.completion.get_state(assignment_id, user_id).await? {
        Some(state) => state,
        None => {
            let grade = ctx.storage.get_grade(assignment_id, user_id).await?;
            completion_state(&assignment, grade.as_ref())
        }
    };

    Ok(CompletionResponse {
        assignment_id,
        user_id,
        rule_enabled: assignment.needs_passing_grade,
        state,
    })
}
