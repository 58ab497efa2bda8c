use std::sync::Arc;

use crate::models::{
    assignments::{entities::AssignmentConfig, requests::AssignmentSettings},
    grades::entities::GradeRecord,
    overrides::entities::Override,
    users::{
        entities::{EnrolmentRole, User},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        course_id: i64,
        settings: &AssignmentSettings,
    ) -> Result<AssignmentConfig>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<AssignmentConfig>>;
    // 更新作业设置
    async fn update_assignment(
        &self,
        id: i64,
        settings: &AssignmentSettings,
    ) -> Result<Option<AssignmentConfig>>;
    // 删除作业及其成绩、覆盖
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    // 按外部名称查找用户以学生身份选课的作业
    async fn find_assignment_for_submitter(
        &self,
        external_name: &str,
        user_id: i64,
    ) -> Result<Option<AssignmentConfig>>;

    /// 用户与选课方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过自定义资料字段查找用户 ID
    async fn find_user_id_by_profile_field(
        &self,
        shortname: &str,
        data: &str,
    ) -> Result<Option<i64>>;
    // 设置自定义资料字段
    async fn set_user_profile_field(&self, user_id: i64, shortname: &str, data: &str)
    -> Result<()>;
    // 选课（已选课时更新角色）
    async fn enrol_user(&self, course_id: i64, user_id: i64, role: EnrolmentRole) -> Result<()>;
    // 获取用户在课程中的角色
    async fn get_enrolment_role(&self, course_id: i64, user_id: i64)
    -> Result<Option<EnrolmentRole>>;
    // 列出课程中的学生（按选课顺序）
    async fn list_course_students(&self, course_id: i64) -> Result<Vec<User>>;

    /// 成绩方法
    async fn get_grade(&self, assignment_id: i64, user_id: i64) -> Result<Option<GradeRecord>>;
    async fn list_grades(&self, assignment_id: i64) -> Result<Vec<GradeRecord>>;
    // 按 (作业, 学生) 写入，已存在则覆盖
    async fn save_grade(&self, grade: GradeRecord) -> Result<GradeRecord>;
    async fn count_grades(&self, assignment_id: i64) -> Result<i64>;

    /// 日期覆盖方法
    async fn get_override(&self, assignment_id: i64, user_id: i64) -> Result<Option<Override>>;
    async fn list_overrides(&self, assignment_id: i64) -> Result<Vec<Override>>;
    // 按 (作业, 学生) 写入，已存在则覆盖
    async fn save_override(&self, entry: Override) -> Result<Override>;
    async fn delete_override(&self, assignment_id: i64, user_id: i64) -> Result<bool>;
}

/// 返回具体类型：同一个实例同时充当 `Storage` 与各协作方实现
pub async fn create_storage() -> Result<Arc<SeaOrmStorage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
