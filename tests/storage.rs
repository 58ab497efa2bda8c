mod common;

use common::*;
use external_assignment::models::grades::entities::GradeRecord;
use external_assignment::models::overrides::entities::Override;
use external_assignment::models::users::entities::EnrolmentRole;
use external_assignment::storage::Storage;

#[tokio::test]
async fn test_grade_record_round_trip() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let written = env
        .storage
        .save_grade(GradeRecord {
            external_link: "https://example.com/submission/9".to_string(),
            external_grade: 42.5,
            external_feedback: "<p>ok</p>".to_string(),
            manual_grade: 3.25,
            manual_feedback: "<p>tidy</p>".to_string(),
            grader_id: Some(env.teacher.id),
            ..GradeRecord::empty(assignment.id, alice.id)
        })
        .await
        .unwrap();
    assert!(written.id.is_some());

    let read = env
        .storage
        .get_grade(assignment.id, alice.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(read.external_grade, 42.5);
    assert_eq!(read.manual_grade, 3.25);
    assert_eq!(read.external_feedback, "<p>ok</p>");
    assert_eq!(read.manual_feedback, "<p>tidy</p>");
    assert_eq!(read.external_link, "https://example.com/submission/9");
    assert_eq!(read.grader_id, Some(env.teacher.id));
}

#[tokio::test]
async fn test_one_override_per_student() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    for due in [T + 11_000, T + 12_000] {
        env.storage
            .save_override(Override {
                assignment_id: assignment.id,
                user_id: alice.id,
                due_date: Some(due),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    let overrides = env.storage.list_overrides(assignment.id).await.unwrap();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].due_date, Some(T + 12_000));
}

#[tokio::test]
async fn test_identity_and_enrolment_lookup() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;

    let found = env
        .storage
        .find_user_id_by_profile_field(USERNAME_FIELD, "alice-gh")
        .await
        .unwrap();
    assert_eq!(found, Some(alice.id));
    assert!(
        env.storage
            .find_user_id_by_profile_field("other_field", "alice-gh")
            .await
            .unwrap()
            .is_none()
    );

    assert_eq!(
        env.storage.get_enrolment_role(COURSE, alice.id).await.unwrap(),
        Some(EnrolmentRole::Student)
    );
    assert_eq!(
        env.storage.get_enrolment_role(COURSE + 1, alice.id).await.unwrap(),
        None
    );

    let students = env.storage.list_course_students(COURSE).await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].username, "alice");
}
