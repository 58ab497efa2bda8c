use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades, Model};
use crate::errors::{ExtAssignError, Result};
use crate::models::grades::entities::GradeRecord;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    async fn find_grade_model(&self, assignment_id: i64, user_id: i64) -> Result<Option<Model>> {
        Grades::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询成绩失败: {e}")))
    }

    /// 获取学生成绩
    pub async fn get_grade_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<GradeRecord>> {
        let result = self.find_grade_model(assignment_id, user_id).await?;
        Ok(result.map(|m| m.into_grade()))
    }

    /// 列出作业的全部成绩
    pub async fn list_grades_impl(&self, assignment_id: i64) -> Result<Vec<GradeRecord>> {
        let results = Grades::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 写入成绩。读取与写回之间不加锁，并发写入时后写者生效。
    pub async fn save_grade_impl(&self, grade: GradeRecord) -> Result<GradeRecord> {
        let now = chrono::Utc::now().timestamp();
        let existing = self
            .find_grade_model(grade.assignment_id, grade.user_id)
            .await?;

        let mut active: ActiveModel = match existing {
            Some(model) => model.into(),
            None => ActiveModel {
                assignment_id: Set(grade.assignment_id),
                user_id: Set(grade.user_id),
                ..Default::default()
            },
        };
        let is_new = active.id.is_not_set();

        active.grader_id = Set(grade.grader_id);
        active.external_link = Set(grade.external_link);
        active.external_grade = Set(grade.external_grade);
        active.external_feedback = Set(grade.external_feedback);
        active.manual_grade = Set(grade.manual_grade);
        active.manual_feedback = Set(grade.manual_feedback);
        active.updated_at = Set(now);

        let result = if is_new {
            active.insert(&self.db).await
        } else {
            active.update(&self.db).await
        }
        .map_err(|e| ExtAssignError::database_operation(format!("保存成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 统计已有成绩记录数
    pub async fn count_grades_impl(&self, assignment_id: i64) -> Result<i64> {
        let count = Grades::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .count(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("统计成绩失败: {e}")))?;

        Ok(count as i64)
    }
}
