use crate::grading::status::time_remaining;
use crate::grading::{compute_status, effective_dates, passing_threshold};
use crate::models::ErrorCode;
use crate::models::assignments::entities::{AssignmentConfig, Timestamp};
use crate::models::grades::responses::GradeDetailResponse;
use crate::models::students::entities::Student;
use crate::services::context::{
    ServiceContext, ServiceError, ServiceResult, load_assignment, require_student,
};

/// 教师可以查看任何学生，学生只能查看自己
pub(crate) async fn authorize_view(
    ctx: &ServiceContext,
    assignment: &AssignmentConfig,
    acting_user_id: i64,
    user_id: i64,
) -> ServiceResult<()> {
    let role = ctx
        .storage
        .get_enrolment_role(assignment.course_id, acting_user_id)
        .await?;
    match role {
        Some(role) if role.can_grade() => Ok(()),
        Some(_) if acting_user_id == user_id => Ok(()),
        _ => Err(ServiceError::Forbidden(format!(
            "User {acting_user_id} may not view grades of user {user_id}"
        ))),
    }
}

pub(crate) async fn load_student(
    ctx: &ServiceContext,
    assignment: &AssignmentConfig,
    user_id: i64,
) -> ServiceResult<Student> {
    require_student(ctx, assignment.course_id, user_id).await?;
    let user = ctx.storage.get_user_by_id(user_id).await?.ok_or_else(|| {
        ServiceError::NotFound(ErrorCode::UserNotFound, format!("User {user_id} not found"))
    })?;
    let grade = ctx.storage.get_grade(assignment.id, user_id).await?;
    let override_entry = ctx.storage.get_override(assignment.id, user_id).await?;

    Ok(Student::new(user)
        .with_grade(grade)
        .with_override(override_entry))
}

pub(crate) fn build_detail(
    assignment: &AssignmentConfig,
    student: &Student,
    now: Timestamp,
) -> GradeDetailResponse {
    let effective = effective_dates(&assignment.schedule, student.override_entry.as_ref());
    let status = compute_status(assignment, &effective, student.grade.as_ref(), now);
    let grade = student.grade.clone().unwrap_or_default();

    GradeDetailResponse {
        assignment_id: assignment.id,
        user_id: student.user.id,
        firstname: student.user.firstname.clone(),
        lastname: student.user.lastname.clone(),
        status,
        external_link: grade.external_link.clone(),
        external_grade: grade.external_grade,
        external_grade_max: assignment.external_grade_max,
        external_feedback: grade.external_feedback.clone(),
        manual_grade: grade.manual_grade,
        manual_grade_max: assignment.manual_grade_max,
        manual_feedback: grade.manual_feedback.clone(),
        has_manual_grade: assignment.manual_grade_max > 0.0,
        total_grade: grade.final_grade(),
        total_grade_max: assignment.max_grade(),
        passing_grade: passing_threshold(assignment),
        effective_dates: effective,
        time_remaining: time_remaining(effective.due_date, now),
        grader_id: grade.grader_id,
    }
}

pub async fn get_grade(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
    user_id: i64,
    now: Timestamp,
) -> ServiceResult<GradeDetailResponse> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    authorize_view(ctx, &assignment, acting_user_id, user_id).await?;
    let student = load_student(ctx, &assignment, user_id).await?;

    Ok(build_detail(&assignment, &student, now))
}
