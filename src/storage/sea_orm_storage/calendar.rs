use super::SeaOrmStorage;
use crate::entity::calendar_events::{ActiveModel, Column, Entity as CalendarEvents};
use crate::errors::{ExtAssignError, Result};
use crate::integrations::DueEvent;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

const EVENT_TYPE_DUE: &str = "due";

impl SeaOrmStorage {
    /// 创建或更新截止事件
    pub async fn upsert_due_event_impl(&self, event: DueEvent) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let existing = CalendarEvents::find()
            .filter(Column::AssignmentId.eq(event.assignment_id))
            .filter(Column::EventType.eq(EVENT_TYPE_DUE))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询日历事件失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.course_id = Set(event.course_id);
                active.name = Set(event.name);
                active.time_start = Set(event.time_start);
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                let active = ActiveModel {
                    assignment_id: Set(event.assignment_id),
                    course_id: Set(event.course_id),
                    event_type: Set(EVENT_TYPE_DUE.to_string()),
                    name: Set(event.name),
                    time_start: Set(event.time_start),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active.insert(&self.db).await
            }
        }
        .map_err(|e| ExtAssignError::database_operation(format!("保存日历事件失败: {e}")))?;

        Ok(())
    }

    /// 删除截止事件
    pub async fn delete_due_event_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = CalendarEvents::delete_many()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::EventType.eq(EVENT_TYPE_DUE))
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除日历事件失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_due_event_impl(&self, assignment_id: i64) -> Result<Option<DueEvent>> {
        let result = CalendarEvents::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::EventType.eq(EVENT_TYPE_DUE))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询日历事件失败: {e}")))?;

        Ok(result.map(|m| m.into_due_event()))
    }
}
