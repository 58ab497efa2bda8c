mod common;

use common::*;
use external_assignment::integrations::{CompletionTracker, Gradebook};
use external_assignment::models::grades::entities::CompletionState;
use external_assignment::models::overrides::entities::Override;
use external_assignment::models::users::entities::EnrolmentRole;
use external_assignment::models::webservice::responses::{MessageType, ResultMessage};
use external_assignment::services::webservice::update_grade::update_grade;
use external_assignment::storage::Storage;

#[tokio::test]
async fn test_points_are_scaled_to_external_maximum() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let result = update_grade(&env.ctx, None, &update_params("HW1", "alice-gh", 45.0, 50.0), T).await;
    assert_eq!(result.message_type, MessageType::Info);
    assert_eq!(result.name, ResultMessage::SUCCESS);
    assert_eq!(result.message, "Update successful");

    let grade = env
        .storage
        .get_grade(assignment.id, alice.id)
        .await
        .unwrap()
        .expect("grade stored");
    assert_eq!(grade.external_grade, 90.0);
    assert_eq!(grade.external_link, "https://example.com/submission/1");
    assert_eq!(grade.manual_grade, 0.0);
}

#[tokio::test]
async fn test_grade_is_pushed_to_gradebook_and_completion() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    update_grade(&env.ctx, None, &update_params("HW1", "alice-gh", 30.0, 50.0), T).await;

    let pushed = env
        .storage
        .get_pushed_grade(assignment.id, alice.id)
        .await
        .unwrap()
        .expect("gradebook grade");
    assert_eq!(pushed.raw_grade, 60.0);
    assert_eq!(
        pushed.feedback,
        format!(
            "<a href=\"/api/v1/assignments/{}/grades/{}\">See feedback</a>",
            assignment.id, alice.id
        )
    );

    let state = env.storage.get_state(assignment.id, alice.id).await.unwrap();
    assert_eq!(state, Some(CompletionState::Complete));
}

#[tokio::test]
async fn test_zero_max_writes_nothing() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let result = update_grade(&env.ctx, None, &update_params("HW1", "alice-gh", 45.0, 0.0), T).await;
    assert_eq!(result.message_type, MessageType::Error);
    assert_eq!(result.name, ResultMessage::INVALID_MAX);

    assert!(env.storage.get_grade(assignment.id, alice.id).await.unwrap().is_none());
    assert!(
        env.storage
            .get_pushed_grade(assignment.id, alice.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_closed_assignment_is_not_updated() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let after_cutoff = T + 30_000;
    let result = update_grade(
        &env.ctx,
        None,
        &update_params("HW1", "alice-gh", 45.0, 50.0),
        after_cutoff,
    )
    .await;
    assert_eq!(result.message_type, MessageType::Warning);
    assert_eq!(result.name, ResultMessage::OVERDUE);
    assert_eq!(
        result.message,
        "The assignment \"HW1\" is closed, the grade was not updated. Contact your teacher."
    );
    assert!(env.storage.get_grade(assignment.id, alice.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_extension_reopens_assignment_for_one_student() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    add_student(&env, "bob", "bob-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    env.storage
        .save_override(Override {
            assignment_id: assignment.id,
            user_id: alice.id,
            cutoff_date: Some(T + 50_000),
            ..Default::default()
        })
        .await
        .unwrap();

    let now = T + 30_000;
    let alice_result =
        update_grade(&env.ctx, None, &update_params("HW1", "alice-gh", 45.0, 50.0), now).await;
    assert_eq!(alice_result.name, ResultMessage::SUCCESS);

    let bob_result =
        update_grade(&env.ctx, None, &update_params("HW1", "bob-gh", 45.0, 50.0), now).await;
    assert_eq!(bob_result.name, ResultMessage::OVERDUE);
}

#[tokio::test]
async fn test_unknown_user_and_assignment() {
    let env = setup().await;
    add_student(&env, "alice", "alice-gh").await;
    add_assignment(&env, settings("HW1")).await;

    let result = update_grade(&env.ctx, None, &update_params("HW1", "ghost", 45.0, 50.0), T).await;
    assert_eq!(result.message_type, MessageType::Error);
    assert_eq!(result.name, ResultMessage::NO_USER);
    assert_eq!(
        result.message,
        "No Moodle user found with username \"ghost\" Update your Moodle profile."
    );

    let result =
        update_grade(&env.ctx, None, &update_params("HW9", "alice-gh", 45.0, 50.0), T).await;
    assert_eq!(result.name, ResultMessage::NO_ASSIGNMENT);
    assert_eq!(
        result.message,
        "No assignment with name \"HW9\" found. Contact your teacher."
    );
}

#[tokio::test]
async fn test_group_submission_stops_at_first_failure() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let bob = add_student(&env, "bob", "bob-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let result = update_grade(
        &env.ctx,
        None,
        &update_params("HW1", "alice-gh, ghost, bob-gh", 45.0, 50.0),
        T,
    )
    .await;
    assert_eq!(result.message_type, MessageType::Error);
    assert_eq!(result.name, "success\nno_user");

    assert!(env.storage.get_grade(assignment.id, alice.id).await.unwrap().is_some());
    assert!(env.storage.get_grade(assignment.id, bob.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_teacher_enrolment_is_not_a_submitter() {
    let env = setup().await;
    add_assignment(&env, settings("HW1")).await;
    env.storage
        .set_user_profile_field(env.teacher.id, USERNAME_FIELD, "teacher-gh")
        .await
        .unwrap();

    let result =
        update_grade(&env.ctx, None, &update_params("HW1", "teacher-gh", 45.0, 50.0), T).await;
    assert_eq!(result.name, ResultMessage::NO_ASSIGNMENT);

    // 改为学生身份后可以提交
    env.storage
        .enrol_user(COURSE, env.teacher.id, EnrolmentRole::Student)
        .await
        .unwrap();
    let result =
        update_grade(&env.ctx, None, &update_params("HW1", "teacher-gh", 45.0, 50.0), T).await;
    assert_eq!(result.name, ResultMessage::SUCCESS);
}

#[tokio::test]
async fn test_feedback_is_rendered_to_html() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let mut params = update_params("HW1", "alice-gh", 45.0, 50.0);
    params.feedback = "%23+Well+done".to_string();
    update_grade(&env.ctx, None, &params, T).await;

    let grade = env
        .storage
        .get_grade(assignment.id, alice.id)
        .await
        .unwrap()
        .unwrap();
    assert!(grade.external_feedback.contains("<h1>Well done</h1>"));
}

#[tokio::test]
async fn test_token_is_checked_when_configured() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let mut params = update_params("HW1", "alice-gh", 45.0, 50.0);
    let result = update_grade(&env.ctx, Some("secret"), &params, T).await;
    assert_eq!(result.name, ResultMessage::INVALID_TOKEN);
    assert!(env.storage.get_grade(assignment.id, alice.id).await.unwrap().is_none());

    params.wstoken = Some("secret".to_string());
    let result = update_grade(&env.ctx, Some("secret"), &params, T).await;
    assert_eq!(result.name, ResultMessage::SUCCESS);
}

#[tokio::test]
async fn test_group_submission_stops_at_closed_student() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let bob = add_student(&env, "bob", "bob-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    // alice 的截止时间被提前到当前时间之前
    env.storage
        .save_override(Override {
            assignment_id: assignment.id,
            user_id: alice.id,
            cutoff_date: Some(T - 5_000),
            ..Default::default()
        })
        .await
        .unwrap();

    let result = update_grade(
        &env.ctx,
        None,
        &update_params("HW1", "alice-gh,bob-gh", 45.0, 50.0),
        T,
    )
    .await;
    assert_eq!(result.message_type, MessageType::Warning);
    assert_eq!(result.name, ResultMessage::OVERDUE);

    assert!(env.storage.get_grade(assignment.id, alice.id).await.unwrap().is_none());
    assert!(env.storage.get_grade(assignment.id, bob.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_blank_user_name_matches_nobody() {
    let env = setup().await;
    let bob = add_student(&env, "bob", "").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let result = update_grade(&env.ctx, None, &update_params("HW1", " , ", 45.0, 50.0), T).await;
    assert_eq!(result.message_type, MessageType::Error);
    assert_eq!(result.name, ResultMessage::NO_USER);
    assert_eq!(
        result.message,
        "No Moodle user found with username \"\" Update your Moodle profile."
    );
    assert!(env.storage.get_grade(assignment.id, bob.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_overflowing_points_are_rejected() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let result = update_grade(
        &env.ctx,
        None,
        &update_params("HW1", "alice-gh", 1e300, 1e-300),
        T,
    )
    .await;
    assert_eq!(result.message_type, MessageType::Error);
    assert_eq!(result.name, ResultMessage::INVALID_POINTS);

    assert!(env.storage.get_grade(assignment.id, alice.id).await.unwrap().is_none());
    assert!(
        env.storage
            .get_pushed_grade(assignment.id, alice.id)
            .await
            .unwrap()
            .is_none()
    );
}
