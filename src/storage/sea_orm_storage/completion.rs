use super::SeaOrmStorage;
use crate::entity::completion_states::{ActiveModel, Column, Entity as CompletionStates};
use crate::errors::{ExtAssignError, Result};
use crate::models::grades::entities::CompletionState;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 更新活动完成状态
    pub async fn update_completion_state_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
        state: CompletionState,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let existing = CompletionStates::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询完成状态失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.state = Set(state.to_string());
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                let active = ActiveModel {
                    assignment_id: Set(assignment_id),
                    user_id: Set(user_id),
                    state: Set(state.to_string()),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active.insert(&self.db).await
            }
        }
        .map_err(|e| ExtAssignError::database_operation(format!("更新完成状态失败: {e}")))?;

        Ok(())
    }

    pub async fn get_completion_state_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<CompletionState>> {
        let result = CompletionStates::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询完成状态失败: {e}")))?;

        Ok(result.map(|m| m.into_state()))
    }
}
