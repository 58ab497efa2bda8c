use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::prelude::{
    CalendarEvents, CompletionStates, Enrolments, GradebookGrades, GradebookItems, Grades,
    Overrides,
};
use crate::errors::{ExtAssignError, Result};
use crate::models::{
    assignments::{entities::AssignmentConfig, requests::AssignmentSettings},
    users::entities::EnrolmentRole,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

fn apply_settings(model: &mut ActiveModel, settings: &AssignmentSettings) {
    let schedule = settings.schedule();
    model.name = Set(settings.name.clone());
    model.intro = Set(settings.intro.clone());
    model.always_show_description = Set(settings.always_show_description);
    model.external_name = Set(settings.external_name.clone());
    model.external_link = Set(settings.external_link.clone());
    model.always_show_link = Set(settings.always_show_link);
    model.allow_submissions_from = Set(schedule.allow_submissions_from);
    model.due_date = Set(schedule.due_date);
    model.cutoff_date = Set(schedule.cutoff_date);
    model.external_grade_max = Set(settings.external_grade_max);
    model.manual_grade_max = Set(settings.manual_grade_max);
    model.passing_percentage = Set(settings.passing_percentage);
    model.needs_passing_grade = Set(settings.needs_passing_grade);
}

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        course_id: i64,
        settings: &AssignmentSettings,
    ) -> Result<AssignmentConfig> {
        let mut model = ActiveModel {
            course_id: Set(course_id),
            time_modified: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        apply_settings(&mut model, settings);

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<AssignmentConfig>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 更新作业设置
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        settings: &AssignmentSettings,
    ) -> Result<Option<AssignmentConfig>> {
        let existing = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询作业失败: {e}")))?;

        let Some(model) = existing else {
            return Ok(None);
        };

        let mut active: ActiveModel = model.into();
        apply_settings(&mut active, settings);
        active.time_modified = Set(chrono::Utc::now().timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(Some(result.into_assignment()))
    }

    /// 删除作业（先删除依附于作业的记录）
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        Overrides::delete_many()
            .filter(crate::entity::overrides::Column::AssignmentId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除日期覆盖失败: {e}")))?;

        Grades::delete_many()
            .filter(crate::entity::grades::Column::AssignmentId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除成绩失败: {e}")))?;

        GradebookGrades::delete_many()
            .filter(crate::entity::gradebook_grades::Column::AssignmentId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除成绩册成绩失败: {e}")))?;

        GradebookItems::delete_many()
            .filter(crate::entity::gradebook_items::Column::AssignmentId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除成绩册条目失败: {e}")))?;

        CompletionStates::delete_many()
            .filter(crate::entity::completion_states::Column::AssignmentId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除完成状态失败: {e}")))?;

        CalendarEvents::delete_many()
            .filter(crate::entity::calendar_events::Column::AssignmentId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除日历事件失败: {e}")))?;

        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按外部名称查找作业，且用户需以学生身份在作业所属课程中选课。
    /// 同名作业出现在多个课程时取 ID 最小的一个。
    pub async fn find_assignment_for_submitter_impl(
        &self,
        external_name: &str,
        user_id: i64,
    ) -> Result<Option<AssignmentConfig>> {
        use crate::entity::enrolments::Column as EnrolmentColumn;

        let enrolled_courses: Vec<i64> = Enrolments::find()
            .filter(EnrolmentColumn::UserId.eq(user_id))
            .filter(EnrolmentColumn::Role.eq(EnrolmentRole::Student.to_string()))
            .all(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询选课失败: {e}")))?
            .into_iter()
            .map(|m| m.course_id)
            .collect();

        if enrolled_courses.is_empty() {
            return Ok(None);
        }

        let result = Assignments::find()
            .filter(Column::ExternalName.eq(external_name))
            .filter(Column::CourseId.is_in(enrolled_courses))
            .order_by_asc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }
}
