use std::collections::HashMap;

use tracing::debug;

use crate::grading::list_grades as build_grade_rows;
use crate::models::assignments::entities::{AssignmentConfig, Timestamp};
use crate::models::grades::{requests::GradeListParams, responses::GradeListResponse};
use crate::models::students::entities::Student;
use crate::services::context::{ServiceContext, ServiceResult, load_assignment, require_teacher};

/// 组装课程中所有学生的聚合视图（按选课顺序）
pub(crate) async fn load_students(
    ctx: &ServiceContext,
    assignment: &AssignmentConfig,
) -> ServiceResult<Vec<Student>> {
    let users = ctx.storage.list_course_students(assignment.course_id).await?;
    let mut grades: HashMap<i64, _> = ctx
        .storage
        .list_grades(assignment.id)
        .await?
        .into_iter()
        .map(|g| (g.user_id, g))
        .collect();
    let mut overrides: HashMap<i64, _> = ctx
        .storage
        .list_overrides(assignment.id)
        .await?
        .into_iter()
        .map(|o| (o.user_id, o))
        .collect();

    Ok(users
        .into_iter()
        .map(|user| {
            let grade = grades.remove(&user.id);
            let override_entry = overrides.remove(&user.id);
            Student::new(user)
                .with_grade(grade)
                .with_override(override_entry)
        })
        .collect())
}

pub async fn list_grades(
    ctx: &ServiceContext,
    acting_user_id: i64,
    assignment_id: i64,
    query: GradeListParams,
    now: Timestamp,
) -> ServiceResult<GradeListResponse> {
    let assignment = load_assignment(ctx, assignment_id).await?;
    require_teacher(ctx, assignment.course_id, acting_user_id).await?;

    let students = load_students(ctx, &assignment).await?;
    debug!(
        "Listing {} students for assignment {}",
        students.len(),
        assignment_id
    );

    let items = build_grade_rows(
        &assignment,
        &students,
        query.sort.unwrap_or_default(),
        query.tdir.unwrap_or_default(),
        now,
    );

    Ok(GradeListResponse {
        assignment_id,
        items,
    })
}
