use tracing::info;

use super::detail::{build_detail, load_student};
use crate::errors::ValidationErrors;
use crate::grading::status::completion_state;
use crate::integrations::GradebookGrade;
use crate::models::assignments::entities::{AssignmentConfig, Timestamp};
use crate::models::grades::{
    entities::GradeRecord, requests::ManualGradeRequest, responses::GradeDetailResponse,
};
use crate::services::context::{ServiceContext, ServiceResult, load_assignment, require_teacher};
use crate::utils::feedback::feedback_link;
use crate::utils::validate::validate_grade_in_range;

fn validate_manual_grade(
    assignment: &AssignmentConfig,
    req: &ManualGradeRequest,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if let Err(msg) = validate_grade_in_range(req.manual_grade, assignment.manual_grade_max) {
        errors.add("manual_grade", msg);
    }
    if let Some(external_grade) = req.external_grade
        && let Err(msg) = validate_grade_in_range(external_grade, assignment.external_grade_max)
    {
        errors.add("external_grade", msg);
    }
    errors.into_result()
}

/// 推送最终成绩并重新计算完成状态
pub(crate) async fn publish_grade(
    ctx: &ServiceContext,
    assignment: &AssignmentConfig,
    grade: &GradeRecord,
) -> ServiceResult<()> {
    ctx.gradebook
        .push_grade(GradebookGrade {
            assignment_id: assignment.id,
            user_id: grade.user_id,
            raw_grade: grade.final_grade(),
            feedback: feedback_link(
                &ctx.grading.feedback_link_base,
                assignment.id,
                grade.user_id,
            ),
        })
        .await?;
    ctx.completion
        .update_state(
            assignment.id,
            grade.user_id,
            completion_state(assignment, Some(grade)),
        )
        .await?;
    Ok(())
}

/// 教师人工评分，可同时修正外部成绩
pub async fn update_grade(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
    user_id: i64,
    req: ManualGradeRequest,
    now: Timestamp,
) -> ServiceResult<GradeDetailResponse> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    require_teacher(ctx, assignment.course_id, acting_user_id).await?;
    let student = load_student(ctx, &assignment, user_id).await?;
    validate_manual_grade(&assignment, &req)?;

    let mut grade = student
        .grade
        .clone()
        .unwrap_or_else(|| GradeRecord::empty(assignment_id, user_id));
    grade.manual_grade = req.manual_grade;
    grade.manual_feedback = req.manual_feedback;
    if let Some(external_grade) = req.external_grade {
        grade.external_grade = external_grade;
    }
    if let Some(external_feedback) = req.external_feedback {
        grade.external_feedback = external_feedback;
    }
    grade.grader_id = Some(acting_user_id);

    let saved = ctx.storage.save_grade(grade).await?;
    publish_grade(ctx, &assignment, &saved).await?;
    info!(
        "Manual grade for user {} on assignment {} set to {:.2} by user {}",
        user_id, assignment_id, saved.manual_grade, acting_user_id
    );

    let student = student.with_grade(Some(saved));
    Ok(build_detail(&assignment, &student, now))
}
