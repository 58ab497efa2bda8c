use crate::grading::status::time_remaining;
use crate::models::assignments::{entities::Timestamp, responses::AssignmentSummaryResponse};
use crate::services::context::{ServiceContext, ServiceResult, load_assignment, require_teacher};

/// 教师视角的作业概览
pub async fn get_summary(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
    now: Timestamp,
) -> ServiceResult<AssignmentSummaryResponse> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    require_teacher(ctx, assignment.course_id, acting_user_id).await?;

    let students = ctx.storage.list_course_students(assignment.course_id).await?;
    let graded_count = ctx.storage.count_grades(assignment_id).await?;
    let remaining = time_remaining(assignment.schedule.due_date, now);

    Ok(AssignmentSummaryResponse {
        assignment_id,
        external_grade_max: assignment.external_grade_max,
        manual_grade_max: assignment.manual_grade_max,
        student_count: students.len() as i64,
        graded_count,
        time_remaining: remaining,
        is_due: assignment.schedule.due_date.is_some() && remaining.is_none(),
    })
}
