use super::SeaOrmStorage;
use crate::entity::enrolments::{
    ActiveModel as EnrolmentActiveModel, Column as EnrolmentColumn, Entity as Enrolments,
};
use crate::entity::user_profile_fields::{
    ActiveModel as ProfileFieldActiveModel, Column as ProfileFieldColumn,
    Entity as UserProfileFields,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{ExtAssignError, Result};
use crate::models::users::{
    entities::{EnrolmentRole, User},
    requests::CreateUserRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let model = ActiveModel {
            username: Set(req.username),
            firstname: Set(req.firstname),
            lastname: Set(req.lastname),
            email: Set(req.email),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过自定义资料字段查找用户
    pub async fn find_user_id_by_profile_field_impl(
        &self,
        shortname: &str,
        data: &str,
    ) -> Result<Option<i64>> {
        let result = UserProfileFields::find()
            .filter(ProfileFieldColumn::Shortname.eq(shortname))
            .filter(ProfileFieldColumn::Data.eq(data))
            .order_by_asc(ProfileFieldColumn::UserId)
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询用户资料失败: {e}")))?;

        Ok(result.map(|m| m.user_id))
    }

    /// 设置自定义资料字段
    pub async fn set_user_profile_field_impl(
        &self,
        user_id: i64,
        shortname: &str,
        data: &str,
    ) -> Result<()> {
        let existing = UserProfileFields::find()
            .filter(ProfileFieldColumn::UserId.eq(user_id))
            .filter(ProfileFieldColumn::Shortname.eq(shortname))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询用户资料失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut active: ProfileFieldActiveModel = model.into();
                active.data = Set(data.to_string());
                active.update(&self.db).await.map_err(|e| {
                    ExtAssignError::database_operation(format!("更新用户资料失败: {e}"))
                })?;
            }
            None => {
                let active = ProfileFieldActiveModel {
                    user_id: Set(user_id),
                    shortname: Set(shortname.to_string()),
                    data: Set(data.to_string()),
                    ..Default::default()
                };
                active.insert(&self.db).await.map_err(|e| {
                    ExtAssignError::database_operation(format!("写入用户资料失败: {e}"))
                })?;
            }
        }

        Ok(())
    }

    /// 选课，已选课时更新角色
    pub async fn enrol_user_impl(
        &self,
        course_id: i64,
        user_id: i64,
        role: EnrolmentRole,
    ) -> Result<()> {
        let existing = Enrolments::find()
            .filter(EnrolmentColumn::CourseId.eq(course_id))
            .filter(EnrolmentColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询选课失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut active: EnrolmentActiveModel = model.into();
                active.role = Set(role.to_string());
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| ExtAssignError::database_operation(format!("更新选课失败: {e}")))?;
            }
            None => {
                let active = EnrolmentActiveModel {
                    course_id: Set(course_id),
                    user_id: Set(user_id),
                    role: Set(role.to_string()),
                    created_at: Set(chrono::Utc::now().timestamp()),
                    ..Default::default()
                };
                active
                    .insert(&self.db)
                    .await
                    .map_err(|e| ExtAssignError::database_operation(format!("选课失败: {e}")))?;
            }
        }

        Ok(())
    }

    /// 获取用户在课程中的角色
    pub async fn get_enrolment_role_impl(
        &self,
        course_id: i64,
        user_id: i64,
    ) -> Result<Option<EnrolmentRole>> {
        let result = Enrolments::find()
            .filter(EnrolmentColumn::CourseId.eq(course_id))
            .filter(EnrolmentColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询选课失败: {e}")))?;

        Ok(result.and_then(|m| m.role()))
    }

    /// 列出课程中的学生
    pub async fn list_course_students_impl(&self, course_id: i64) -> Result<Vec<User>> {
        let user_ids: Vec<i64> = Enrolments::find()
            .filter(EnrolmentColumn::CourseId.eq(course_id))
            .filter(EnrolmentColumn::Role.eq(EnrolmentRole::Student.to_string()))
            .order_by_asc(EnrolmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询选课失败: {e}")))?
            .into_iter()
            .map(|m| m.user_id)
            .collect();

        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = Users::find()
            .filter(Column::Id.is_in(user_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("查询用户失败: {e}")))?;

        // 保持选课顺序
        let mut by_id: std::collections::HashMap<i64, User> = users
            .into_iter()
            .map(|m| (m.id, m.into_user()))
            .collect();

        Ok(user_ids
            .into_iter()
            .filter_map(|id| by_id.remove(&id))
            .collect())
    }
}
