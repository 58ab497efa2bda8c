use super::SeaOrmStorage;
use crate::entity::gradebook_grades::{
    ActiveModel as GradeActiveModel, Column as GradeColumn, Entity as GradebookGrades,
};
use crate::entity::gradebook_items::{
    ActiveModel as ItemActiveModel, Column as ItemColumn, Entity as GradebookItems,
};
use crate::errors::{ExtAssignError, Result};
use crate::integrations::{GradeItem, GradebookGrade};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建或更新成绩册条目
    pub async fn upsert_grade_item_impl(&self, item: GradeItem) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let existing = GradebookItems::find()
            .filter(ItemColumn::AssignmentId.eq(item.assignment_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询成绩册条目失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut active: ItemActiveModel = model.into();
                active.course_id = Set(item.course_id);
                active.item_name = Set(item.item_name);
                active.grade_max = Set(item.grade_max);
                active.grade_pass = Set(item.grade_pass);
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                let active = ItemActiveModel {
                    assignment_id: Set(item.assignment_id),
                    course_id: Set(item.course_id),
                    item_name: Set(item.item_name),
                    grade_max: Set(item.grade_max),
                    grade_pass: Set(item.grade_pass),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active.insert(&self.db).await
            }
        }
        .map_err(|e| ExtAssignError::database_operation(format!("保存成绩册条目失败: {e}")))?;

        Ok(())
    }

    /// 推送学生成绩到成绩册
    pub async fn push_grade_impl(&self, grade: GradebookGrade) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let existing = GradebookGrades::find()
            .filter(GradeColumn::AssignmentId.eq(grade.assignment_id))
            .filter(GradeColumn::UserId.eq(grade.user_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询成绩册成绩失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut active: GradeActiveModel = model.into();
                active.raw_grade = Set(grade.raw_grade);
                active.feedback = Set(grade.feedback);
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                let active = GradeActiveModel {
                    assignment_id: Set(grade.assignment_id),
                    user_id: Set(grade.user_id),
                    raw_grade: Set(grade.raw_grade),
                    feedback: Set(grade.feedback),
                    updated_at: Set(now),
                    ..Default::default()
                };
                active.insert(&self.db).await
            }
        }
        .map_err(|e| ExtAssignError::database_operation(format!("写入成绩册成绩失败: {e}")))?;

        Ok(())
    }

    pub async fn get_pushed_grade_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<GradebookGrade>> {
        let result = GradebookGrades::find()
            .filter(GradeColumn::AssignmentId.eq(assignment_id))
            .filter(GradeColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询成绩册成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_gradebook_grade()))
    }
}
