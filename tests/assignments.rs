mod common;

use common::*;
use external_assignment::integrations::{Calendar, Gradebook};
use external_assignment::models::ErrorCode;
use external_assignment::models::assignments::requests::CreateAssignmentRequest;
use external_assignment::models::grades::entities::CompletionState;
use external_assignment::models::grades::requests::{
    GradeListParams, ManualGradeRequest, SortDirection, SortField,
};
use external_assignment::models::overrides::requests::GrantExtensionRequest;
use external_assignment::models::students::entities::SubmissionStatus;
use external_assignment::services::ServiceError;
use external_assignment::services::assignments::{
    create::create_assignment, delete::delete_assignment, summary::get_summary,
    update::update_assignment,
};
use external_assignment::services::grades::{
    completion::get_completion, detail::get_grade, list::list_grades, update::update_grade,
};
use external_assignment::services::overrides::{
    delete::delete_override, grant::grant_extension,
};
use external_assignment::services::webservice::update_grade as webservice;
use external_assignment::storage::Storage;

fn manual(grade: f64) -> ManualGradeRequest {
    ManualGradeRequest {
        manual_grade: grade,
        manual_feedback: "<p>Nice report</p>".to_string(),
        external_grade: None,
        external_feedback: None,
    }
}

#[tokio::test]
async fn test_only_teachers_create_assignments() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;

    let result = create_assignment(
        &env.ctx,
        alice.id,
        CreateAssignmentRequest {
            course_id: COURSE,
            settings: settings("HW1"),
        },
    )
    .await;
    assert!(matches!(result, Err(ServiceError::Forbidden(_))));
}

#[tokio::test]
async fn test_invalid_schedule_is_rejected_per_field() {
    let env = setup().await;
    let mut bad = settings("HW1");
    bad.due_date = Some(T - 20_000);

    let result = create_assignment(
        &env.ctx,
        env.teacher.id,
        CreateAssignmentRequest {
            course_id: COURSE,
            settings: bad,
        },
    )
    .await;
    match result {
        Err(ServiceError::Invalid(errors)) => {
            assert_eq!(
                errors.get("due_date"),
                Some("Due date must be after the allow submissions from date.")
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_settings_sync_gradebook_item_and_calendar() {
    let env = setup().await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let event = env
        .storage
        .get_due_event(assignment.id)
        .await
        .unwrap()
        .expect("due event");
    assert_eq!(event.time_start, T + 10_000);

    let mut changed = settings("HW1");
    changed.due_date = None;
    changed.manual_grade_max = 20.0;
    let updated = update_assignment(&env.ctx, env.teacher.id, assignment.id, changed)
        .await
        .unwrap();
    assert_eq!(updated.max_grade(), 120.0);
    assert!(env.storage.get_due_event(assignment.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_manual_grade_bounds_and_total() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let mut with_manual = settings("HW1");
    with_manual.manual_grade_max = 10.0;
    let assignment = add_assignment(&env, with_manual).await;

    let result = update_grade(&env.ctx, env.teacher.id, assignment.id, alice.id, manual(11.0), T).await;
    match result {
        Err(ServiceError::Invalid(errors)) => assert!(errors.get("manual_grade").is_some()),
        other => panic!("unexpected result: {other:?}"),
    }

    webservice::update_grade(&env.ctx, None, &update_params("HW1", "alice-gh", 40.0, 50.0), T).await;
    let detail = update_grade(&env.ctx, env.teacher.id, assignment.id, alice.id, manual(8.0), T)
        .await
        .unwrap();
    assert_eq!(detail.external_grade, 80.0);
    assert_eq!(detail.manual_grade, 8.0);
    assert_eq!(detail.total_grade, 88.0);
    assert_eq!(detail.total_grade_max, 110.0);
    assert_eq!(detail.passing_grade, 55.0);
    assert!(detail.has_manual_grade);
    assert_eq!(detail.grader_id, Some(env.teacher.id));
    assert_eq!(detail.status, SubmissionStatus::Passed);

    let pushed = env
        .storage
        .get_pushed_grade(assignment.id, alice.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(pushed.raw_grade, 88.0);
}

#[tokio::test]
async fn test_students_only_see_their_own_grade() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let bob = add_student(&env, "bob", "bob-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let own = get_grade(&env.ctx, alice.id, assignment.id, alice.id, T)
        .await
        .unwrap();
    assert_eq!(own.status, SubmissionStatus::NotSubmitted);
    assert_eq!(own.time_remaining, Some(10_000));

    let other = get_grade(&env.ctx, alice.id, assignment.id, bob.id, T).await;
    assert!(matches!(other, Err(ServiceError::Forbidden(_))));
}

#[tokio::test]
async fn test_extension_must_change_a_date() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let unchanged = GrantExtensionRequest {
        user_ids: vec![alice.id],
        allow_submissions_from: Some(T - 10_000),
        due_date: Some(T + 10_000),
        cutoff_date: None,
    };
    match grant_extension(&env.ctx, env.teacher.id, assignment.id, unchanged).await {
        Err(ServiceError::Invalid(errors)) => assert_eq!(
            errors.get("allow_submissions_from"),
            Some("You must override at least one of the dates.")
        ),
        other => panic!("unexpected result: {other:?}"),
    }

    let inverted = GrantExtensionRequest {
        user_ids: vec![alice.id],
        allow_submissions_from: None,
        due_date: None,
        cutoff_date: Some(T - 20_000),
    };
    match grant_extension(&env.ctx, env.teacher.id, assignment.id, inverted).await {
        Err(ServiceError::Invalid(errors)) => assert_eq!(
            errors.get("cutoff_date"),
            Some("Cut-off date cannot be earlier than the due date.")
        ),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(env.storage.get_override(assignment.id, alice.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_extension_moves_effective_due_date() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let saved = grant_extension(
        &env.ctx,
        env.teacher.id,
        assignment.id,
        GrantExtensionRequest {
            user_ids: vec![alice.id],
            allow_submissions_from: None,
            due_date: Some(T + 15_000),
            cutoff_date: Some(T + 25_000),
        },
    )
    .await
    .unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].allow_submissions_from, None);

    let detail = get_grade(&env.ctx, env.teacher.id, assignment.id, alice.id, T)
        .await
        .unwrap();
    assert_eq!(detail.effective_dates.allow_submissions_from, Some(T - 10_000));
    assert_eq!(detail.effective_dates.due_date, Some(T + 15_000));
    assert_eq!(detail.time_remaining, Some(15_000));

    delete_override(&env.ctx, env.teacher.id, assignment.id, alice.id)
        .await
        .unwrap();
    let missing = delete_override(&env.ctx, env.teacher.id, assignment.id, alice.id).await;
    assert!(matches!(
        missing,
        Err(ServiceError::NotFound(ErrorCode::OverrideNotFound, _))
    ));
}

#[tokio::test]
async fn test_extension_requires_student_enrolment() {
    let env = setup().await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let result = grant_extension(
        &env.ctx,
        env.teacher.id,
        assignment.id,
        GrantExtensionRequest {
            user_ids: vec![env.teacher.id],
            allow_submissions_from: None,
            due_date: Some(T + 15_000),
            cutoff_date: None,
        },
    )
    .await;
    assert!(matches!(
        result,
        Err(ServiceError::NotFound(ErrorCode::NotEnrolled, _))
    ));
}

#[tokio::test]
async fn test_grade_listing_sorts_through_service() {
    let env = setup().await;
    add_student(&env, "alice", "alice-gh").await;
    add_student(&env, "bob", "bob-gh").await;
    add_student(&env, "carol", "carol-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    webservice::update_grade(&env.ctx, None, &update_params("HW1", "alice-gh", 10.0, 50.0), T).await;
    webservice::update_grade(&env.ctx, None, &update_params("HW1", "bob-gh", 40.0, 50.0), T).await;

    let listing = list_grades(
        &env.ctx,
        env.teacher.id,
        assignment.id,
        GradeListParams {
            sort: Some(SortField::Grade),
            tdir: Some(SortDirection::Desc),
        },
        T,
    )
    .await
    .unwrap();
    let names: Vec<&str> = listing.items.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, vec!["bob", "alice", "carol"]);
    assert_eq!(listing.items[0].final_grade, "80.00");
    assert_eq!(listing.items[1].status, SubmissionStatus::Pending);
    assert_eq!(listing.items[2].status, SubmissionStatus::NotSubmitted);

    let alice = listing.items[1].user_id;
    let forbidden = list_grades(&env.ctx, alice, assignment.id, GradeListParams::default(), T).await;
    assert!(matches!(forbidden, Err(ServiceError::Forbidden(_))));
}

#[tokio::test]
async fn test_summary_and_completion() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    add_student(&env, "bob", "bob-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;

    let before = get_completion(&env.ctx, alice.id, assignment.id, alice.id)
        .await
        .unwrap();
    assert!(before.rule_enabled);
    assert_eq!(before.state, CompletionState::Incomplete);

    webservice::update_grade(&env.ctx, None, &update_params("HW1", "alice-gh", 45.0, 50.0), T).await;

    let after = get_completion(&env.ctx, alice.id, assignment.id, alice.id)
        .await
        .unwrap();
    assert_eq!(after.state, CompletionState::Complete);

    let summary = get_summary(&env.ctx, env.teacher.id, assignment.id, T + 15_000)
        .await
        .unwrap();
    assert_eq!(summary.student_count, 2);
    assert_eq!(summary.graded_count, 1);
    assert_eq!(summary.time_remaining, None);
    assert!(summary.is_due);
}

#[tokio::test]
async fn test_delete_removes_grades_and_integrations() {
    let env = setup().await;
    let alice = add_student(&env, "alice", "alice-gh").await;
    let assignment = add_assignment(&env, settings("HW1")).await;
    webservice::update_grade(&env.ctx, None, &update_params("HW1", "alice-gh", 45.0, 50.0), T).await;

    let deleted = delete_assignment(&env.ctx, env.teacher.id, assignment.id)
        .await
        .unwrap();
    assert!(deleted);

    assert!(env.storage.get_assignment_by_id(assignment.id).await.unwrap().is_none());
    assert!(env.storage.get_grade(assignment.id, alice.id).await.unwrap().is_none());
    assert!(env.storage.get_due_event(assignment.id).await.unwrap().is_none());
    assert!(
        env.storage
            .get_pushed_grade(assignment.id, alice.id)
            .await
            .unwrap()
            .is_none()
    );
}
