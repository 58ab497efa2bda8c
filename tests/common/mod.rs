#![allow(dead_code)]

use std::sync::Arc;

use external_assignment::config::GradingConfig;
use external_assignment::models::assignments::{
    entities::{AssignmentConfig, Timestamp},
    requests::{AssignmentSettings, CreateAssignmentRequest},
};
use external_assignment::models::users::{
    entities::{EnrolmentRole, User},
    requests::CreateUserRequest,
};
use external_assignment::models::webservice::requests::UpdateGradeParams;
use external_assignment::services::ServiceContext;
use external_assignment::services::assignments::create::create_assignment;
use external_assignment::storage::{SeaOrmStorage, Storage};

pub const T: Timestamp = 1_700_000_000;
pub const COURSE: i64 = 7;
pub const USERNAME_FIELD: &str = "github_user";

pub struct TestEnv {
    pub storage: Arc<SeaOrmStorage>,
    pub ctx: ServiceContext,
    pub teacher: User,
}

pub async fn setup() -> TestEnv {
    let storage = Arc::new(
        SeaOrmStorage::connect("sqlite::memory:")
            .await
            .expect("in-memory database"),
    );
    let grading = GradingConfig {
        external_username_field: USERNAME_FIELD.to_string(),
        feedback_link_base: "/api/v1/assignments".to_string(),
    };
    let ctx = ServiceContext::from_storage(storage.clone(), grading);

    let teacher = storage
        .create_user(new_user("teacher"))
        .await
        .expect("create teacher");
    storage
        .enrol_user(COURSE, teacher.id, EnrolmentRole::Teacher)
        .await
        .expect("enrol teacher");

    TestEnv {
        storage,
        ctx,
        teacher,
    }
}

pub fn new_user(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        firstname: username.to_string(),
        lastname: format!("{username}son"),
        email: format!("{username}@example.com"),
    }
}

/// 创建学生并设置外部用户名
pub async fn add_student(env: &TestEnv, username: &str, external: &str) -> User {
    let user = env
        .storage
        .create_user(new_user(username))
        .await
        .expect("create student");
    env.storage
        .set_user_profile_field(user.id, USERNAME_FIELD, external)
        .await
        .expect("set profile field");
    env.storage
        .enrol_user(COURSE, user.id, EnrolmentRole::Student)
        .await
        .expect("enrol student");
    user
}

pub fn settings(external_name: &str) -> AssignmentSettings {
    AssignmentSettings {
        name: format!("{external_name} assignment"),
        intro: String::new(),
        always_show_description: true,
        external_name: external_name.to_string(),
        external_link: "https://example.com/hw".to_string(),
        always_show_link: false,
        allow_submissions_from: Some(T - 10_000),
        due_date: Some(T + 10_000),
        cutoff_date: Some(T + 20_000),
        external_grade_max: 100.0,
        manual_grade_max: 0.0,
        passing_percentage: 50.0,
        needs_passing_grade: true,
    }
}

pub async fn add_assignment(env: &TestEnv, settings: AssignmentSettings) -> AssignmentConfig {
    create_assignment(
        &env.ctx,
        env.teacher.id,
        CreateAssignmentRequest {
            course_id: COURSE,
            settings,
        },
    )
    .await
    .expect("create assignment")
}

pub fn update_params(assignment_name: &str, user_name: &str, points: f64, max: f64) -> UpdateGradeParams {
    UpdateGradeParams {
        assignment_name: assignment_name.to_string(),
        user_name: user_name.to_string(),
        points,
        max,
        externallink: "https://example.com/submission/1".to_string(),
        feedback: "[]".to_string(),
        wstoken: None,
    }
}
