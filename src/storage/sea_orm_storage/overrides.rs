use super::SeaOrmStorage;
use crate::entity::overrides::{ActiveModel, Column, Entity as Overrides, Model};
use crate::errors::{ExtAssignError, Result};
use crate::models::overrides::entities::Override;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    async fn find_override_model(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Model>> {
        Overrides::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询日期覆盖失败: {e}")))
    }

    /// 获取学生的日期覆盖
    pub async fn get_override_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Override>> {
        let result = self.find_override_model(assignment_id, user_id).await?;
        Ok(result.map(|m| m.into_override()))
    }

    /// 列出作业的全部日期覆盖
    pub async fn list_overrides_impl(&self, assignment_id: i64) -> Result<Vec<Override>> {
        let results = Overrides::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询日期覆盖失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_override()).collect())
    }

    /// 写入日期覆盖，每个 (作业, 学生) 至多一条
    pub async fn save_override_impl(&self, entry: Override) -> Result<Override> {
        let existing = self
            .find_override_model(entry.assignment_id, entry.user_id)
            .await?;

        let result = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.allow_submissions_from = Set(entry.allow_submissions_from);
                active.due_date = Set(entry.due_date);
                active.cutoff_date = Set(entry.cutoff_date);
                active.update(&self.db).await
            }
            None => {
                let active = ActiveModel {
                    assignment_id: Set(entry.assignment_id),
                    user_id: Set(entry.user_id),
                    allow_submissions_from: Set(entry.allow_submissions_from),
                    due_date: Set(entry.due_date),
                    cutoff_date: Set(entry.cutoff_date),
                    ..Default::default()
                };
                active.insert(&self.db).await
            }
        }
        .map_err(|e| ExtAssignError::database_operation(format!("保存日期覆盖失败: {e}")))?;

        Ok(result.into_override())
    }

    /// 删除学生的日期覆盖
    pub async fn delete_override_impl(&self, assignment_id: i64, user_id: i64) -> Result<bool> {
        let result = Overrides::delete_many()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除日期覆盖失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
