//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod calendar;
mod completion;
mod gradebook;
mod grades;
mod overrides;
mod users;

use crate::config::AppConfig;
use crate::errors::{ExtAssignError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 直接按 URL 连接并迁移（不读取全局配置，测试使用 `sqlite::memory:`）
    pub async fn connect(url: &str) -> Result<Self> {
        let db = Database::connect(url)
            .await
            .map_err(|e| ExtAssignError::database_connection(format!("无法连接到数据库: {e}")))?;

        Migrator::up(&db, None)
            .await
            .map_err(|e| ExtAssignError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ExtAssignError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ExtAssignError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ExtAssignError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ExtAssignError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::integrations::{
    Calendar, CompletionTracker, DueEvent, GradeItem, Gradebook, GradebookGrade,
};
use crate::models::{
    assignments::{entities::AssignmentConfig, requests::AssignmentSettings},
    grades::entities::{CompletionState, GradeRecord},
    overrides::entities::Override,
    users::{
        entities::{EnrolmentRole, User},
        requests::CreateUserRequest,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 作业模块
    async fn create_assignment(
        &self,
        course_id: i64,
        settings: &AssignmentSettings,
    ) -> Result<AssignmentConfig> {
        self.create_assignment_impl(course_id, settings).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<AssignmentConfig>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        settings: &AssignmentSettings,
    ) -> Result<Option<AssignmentConfig>> {
        self.update_assignment_impl(id, settings).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn find_assignment_for_submitter(
        &self,
        external_name: &str,
        user_id: i64,
    ) -> Result<Option<AssignmentConfig>> {
        self.find_assignment_for_submitter_impl(external_name, user_id)
            .await
    }

    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn find_user_id_by_profile_field(
        &self,
        shortname: &str,
        data: &str,
    ) -> Result<Option<i64>> {
        self.find_user_id_by_profile_field_impl(shortname, data)
            .await
    }

    async fn set_user_profile_field(
        &self,
        user_id: i64,
        shortname: &str,
        data: &str,
    ) -> Result<()> {
        self.set_user_profile_field_impl(user_id, shortname, data)
            .await
    }

    async fn enrol_user(&self, course_id: i64, user_id: i64, role: EnrolmentRole) -> Result<()> {
        self.enrol_user_impl(course_id, user_id, role).await
    }

    async fn get_enrolment_role(
        &self,
        course_id: i64,
        user_id: i64,
    ) -> Result<Option<EnrolmentRole>> {
        self.get_enrolment_role_impl(course_id, user_id).await
    }

    async fn list_course_students(&self, course_id: i64) -> Result<Vec<User>> {
        self.list_course_students_impl(course_id).await
    }

    // 成绩模块
    async fn get_grade(&self, assignment_id: i64, user_id: i64) -> Result<Option<GradeRecord>> {
        self.get_grade_impl(assignment_id, user_id).await
    }

    async fn list_grades(&self, assignment_id: i64) -> Result<Vec<GradeRecord>> {
        self.list_grades_impl(assignment_id).await
    }

    async fn save_grade(&self, grade: GradeRecord) -> Result<GradeRecord> {
        self.save_grade_impl(grade).await
    }

    async fn count_grades(&self, assignment_id: i64) -> Result<i64> {
        self.count_grades_impl(assignment_id).await
    }

    // 日期覆盖模块
    async fn get_override(&self, assignment_id: i64, user_id: i64) -> Result<Option<Override>> {
        self.get_override_impl(assignment_id, user_id).await
    }

    async fn list_overrides(&self, assignment_id: i64) -> Result<Vec<Override>> {
        self.list_overrides_impl(assignment_id).await
    }

    async fn save_override(&self, entry: Override) -> Result<Override> {
        self.save_override_impl(entry).await
    }

    async fn delete_override(&self, assignment_id: i64, user_id: i64) -> Result<bool> {
        self.delete_override_impl(assignment_id, user_id).await
    }
}

#[async_trait]
impl Gradebook for SeaOrmStorage {
    async fn upsert_grade_item(&self, item: GradeItem) -> Result<()> {
        self.upsert_grade_item_impl(item).await
    }

    async fn push_grade(&self, grade: GradebookGrade) -> Result<()> {
        self.push_grade_impl(grade).await
    }

    async fn get_pushed_grade(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<GradebookGrade>> {
        self.get_pushed_grade_impl(assignment_id, user_id).await
    }
}

#[async_trait]
impl CompletionTracker for SeaOrmStorage {
    async fn update_state(
        &self,
        assignment_id: i64,
        user_id: i64,
        state: CompletionState,
    ) -> Result<()> {
        self.update_completion_state_impl(assignment_id, user_id, state)
            .await
    }

    async fn get_state(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<CompletionState>> {
        self.get_completion_state_impl(assignment_id, user_id).await
    }
}

#[async_trait]
impl Calendar for SeaOrmStorage {
    async fn upsert_due_event(&self, event: DueEvent) -> Result<()> {
        self.upsert_due_event_impl(event).await
    }

    async fn delete_due_event(&self, assignment_id: i64) -> Result<bool> {
        self.delete_due_event_impl(assignment_id).await
    }

    async fn get_due_event(&self, assignment_id: i64) -> Result<Option<DueEvent>> {
        self.get_due_event_impl(assignment_id).await
    }
}
