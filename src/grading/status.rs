//! 提交状态判定
//!
//! 检查顺序即业务规则：未提交 -> 及格 -> 逾期 -> 待定，先匹配者生效。

use crate::models::assignments::entities::{AssignmentConfig, Schedule, Timestamp};
use crate::models::grades::entities::{CompletionState, GradeRecord};
use crate::models::students::entities::SubmissionStatus;

/// 及格线。未启用及格要求时为 0。
pub fn passing_threshold(config: &AssignmentConfig) -> f64 {
    if !config.needs_passing_grade {
        return 0.0;
    }
    let maximum_grade = config.external_grade_max + config.manual_grade_max;
    maximum_grade * config.passing_percentage / 100.0
}

pub fn compute_status(
    config: &AssignmentConfig,
    effective: &Schedule,
    grade: Option<&GradeRecord>,
    now: Timestamp,
) -> SubmissionStatus {
    let Some(grade) = grade else {
        return SubmissionStatus::NotSubmitted;
    };

    if grade.final_grade() >= passing_threshold(config) {
        return SubmissionStatus::Passed;
    }

    if effective.is_overdue_at(now) {
        return SubmissionStatus::Overdue;
    }

    SubmissionStatus::Pending
}

/// 完成条件"需要及格"是否满足；未启用该条件时不满足。没有成绩记录按 0 分计
pub fn passing_grade_met(config: &AssignmentConfig, grade: Option<&GradeRecord>) -> bool {
    if !config.needs_passing_grade {
        return false;
    }
    grade.map_or(0.0, GradeRecord::final_grade) >= passing_threshold(config)
}

pub fn completion_state(config: &AssignmentConfig, grade: Option<&GradeRecord>) -> CompletionState {
    CompletionState::from_met(passing_grade_met(config, grade))
}

/// 距截止时间的剩余秒数，已截止或未设置截止时间时为 None
pub fn time_remaining(due_date: Option<Timestamp>, now: Timestamp) -> Option<Timestamp> {
    due_date.map(|due| due - now).filter(|remaining| *remaining > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: i64 = 1_700_000_000;

    fn config(needs_passing_grade: bool) -> AssignmentConfig {
        AssignmentConfig {
            id: 1,
            course_id: 10,
            name: "Homework 1".to_string(),
            intro: String::new(),
            always_show_description: false,
            external_name: "HW1".to_string(),
            external_link: String::new(),
            always_show_link: false,
            schedule: Schedule::new(None, Some(T), None),
            external_grade_max: 100.0,
            manual_grade_max: 0.0,
            passing_percentage: 60.0,
            needs_passing_grade,
            time_modified: 0,
        }
    }

    fn grade(external: f64, manual: f64) -> GradeRecord {
        GradeRecord {
            external_grade: external,
            manual_grade: manual,
            ..GradeRecord::empty(1, 2)
        }
    }

    #[test]
    fn test_passing_before_due() {
        let config = config(true);
        let g = grade(70.0, 0.0);
        let status = compute_status(&config, &config.schedule, Some(&g), T - 1000);
        assert_eq!(status, SubmissionStatus::Passed);
        assert_eq!(g.final_grade(), 70.0);
    }

    #[test]
    fn test_failing_after_due_is_overdue() {
        let config = config(true);
        let g = grade(30.0, 0.0);
        let status = compute_status(&config, &config.schedule, Some(&g), T + 1000);
        assert_eq!(status, SubmissionStatus::Overdue);
    }

    #[test]
    fn test_failing_before_due_is_pending() {
        let config = config(true);
        let g = grade(30.0, 0.0);
        let status = compute_status(&config, &config.schedule, Some(&g), T - 1000);
        assert_eq!(status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_no_grade_is_not_submitted() {
        for needs_passing_grade in [true, false] {
            let config = config(needs_passing_grade);
            for now in [0, T - 1000, T, T + 1000, i64::MAX] {
                let status = compute_status(&config, &config.schedule, None, now);
                assert_eq!(status, SubmissionStatus::NotSubmitted);
            }
        }
    }

    #[test]
    fn test_passing_beats_overdue() {
        let config = config(true);
        let g = grade(60.0, 0.0);
        let status = compute_status(&config, &config.schedule, Some(&g), T + 1000);
        assert_eq!(status, SubmissionStatus::Passed);
    }

    #[test]
    fn test_gate_off_any_grade_passes() {
        let config = config(false);
        for (external, now) in [(0.0, T + 1000), (30.0, T - 1000), (5.5, i64::MAX)] {
            let g = grade(external, 0.0);
            let status = compute_status(&config, &config.schedule, Some(&g), now);
            assert_eq!(status, SubmissionStatus::Passed);
        }
    }

    #[test]
    fn test_no_due_date_never_overdue() {
        let mut config = config(true);
        config.schedule = Schedule::default();
        let g = grade(10.0, 0.0);
        let status = compute_status(&config, &config.schedule, Some(&g), i64::MAX);
        assert_eq!(status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_effective_due_date_is_used() {
        let config = config(true);
        let extended = Schedule::new(None, Some(T + 5000), None);
        let g = grade(30.0, 0.0);
        let status = compute_status(&config, &extended, Some(&g), T + 1000);
        assert_eq!(status, SubmissionStatus::Pending);
    }

    #[test]
    fn test_threshold_includes_manual_max() {
        let mut config = config(true);
        config.manual_grade_max = 20.0;
        assert_eq!(passing_threshold(&config), 72.0);
        let g = grade(60.0, 12.0);
        assert_eq!(
            compute_status(&config, &config.schedule, Some(&g), T - 1),
            SubmissionStatus::Passed
        );
        assert!(passing_grade_met(&config, Some(&g)));
    }

    #[test]
    fn test_completion_rule() {
        assert!(!passing_grade_met(&config(true), None));
        assert!(!passing_grade_met(&config(true), Some(&grade(59.9, 0.0))));
        assert!(passing_grade_met(&config(true), Some(&grade(60.0, 0.0))));
        assert!(!passing_grade_met(&config(false), Some(&grade(100.0, 0.0))));
        assert_eq!(
            completion_state(&config(true), Some(&grade(99.0, 0.0))),
            CompletionState::Complete
        );
    }

    #[test]
    fn test_missing_grade_counts_as_zero_for_completion() {
        let mut zero_threshold = config(true);
        zero_threshold.passing_percentage = 0.0;
        assert!(passing_grade_met(&zero_threshold, None));
        assert_eq!(
            completion_state(&zero_threshold, None),
            CompletionState::Complete
        );
        assert!(!passing_grade_met(&config(false), None));
    }

    #[test]
    fn test_time_remaining() {
        assert_eq!(time_remaining(Some(T), T - 60), Some(60));
        assert_eq!(time_remaining(Some(T), T), None);
        assert_eq!(time_remaining(Some(T), T + 60), None);
        assert_eq!(time_remaining(None, T), None);
    }
}
