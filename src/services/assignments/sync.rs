use crate::errors::Result;
use crate::grading::passing_threshold;
use crate::integrations::{DueEvent, GradeItem};
use crate::models::assignments::entities::AssignmentConfig;
use crate::services::context::ServiceContext;

/// 作业设置变化后同步成绩册条目与日历截止事件
pub async fn sync_integrations(ctx: &ServiceContext, assignment: &AssignmentConfig) -> Result<()> {
    ctx.gradebook
        .upsert_grade_item(GradeItem {
            assignment_id: assignment.id,
            course_id: assignment.course_id,
            item_name: assignment.name.clone(),
            grade_max: assignment.max_grade(),
            grade_pass: passing_threshold(assignment),
        })
        .await?;

    match assignment.schedule.due_date {
        Some(due_date) => {
            ctx.calendar
                .upsert_due_event(DueEvent {
                    assignment_id: assignment.id,
                    course_id: assignment.course_id,
                    name: format!("{} is due", assignment.name),
                    time_start: due_date,
                })
                .await?;
        }
        None => {
            ctx.calendar.delete_due_event(assignment.id).await?;
        }
    }

    Ok(())
}
