//! 教师成绩列表

use std::cmp::Ordering;

use super::dates::effective_dates;
use super::status::compute_status;
use crate::models::assignments::entities::{AssignmentConfig, Timestamp};
use crate::models::grades::requests::{SortDirection, SortField};
use crate::models::grades::responses::GradeRow;
use crate::models::students::entities::{Student, SubmissionStatus};

/// 分数显示为两位小数
pub fn format_grade(value: f64) -> String {
    format!("{value:.2}")
}

struct ListEntry {
    row: GradeRow,
    final_grade: f64,
}

fn build_entry(config: &AssignmentConfig, student: &Student, now: Timestamp) -> ListEntry {
    let effective = effective_dates(&config.schedule, student.override_entry.as_ref());
    let status = compute_status(config, &effective, student.grade.as_ref(), now);
    let grade = student.grade.as_ref();
    let external_grade = grade.map_or(0.0, |g| g.external_grade);
    let manual_grade = grade.map_or(0.0, |g| g.manual_grade);
    let final_grade = external_grade + manual_grade;

    ListEntry {
        row: GradeRow {
            user_id: student.user.id,
            username: student.user.username.clone(),
            firstname: student.user.firstname.clone(),
            lastname: student.user.lastname.clone(),
            email: student.user.email.clone(),
            status,
            external_grade: format_grade(external_grade),
            manual_grade: format_grade(manual_grade),
            final_grade: format_grade(final_grade),
            external_link: grade
                .map(|g| g.external_link.clone())
                .filter(|link| !link.is_empty()),
            effective_dates: effective,
            has_override: student.override_entry.is_some(),
        },
        final_grade,
    }
}

fn compare(field: SortField, a: &ListEntry, b: &ListEntry) -> Ordering {
    match field {
        SortField::Lastname => a.row.lastname.to_lowercase().cmp(&b.row.lastname.to_lowercase()),
        SortField::Firstname => a
            .row
            .firstname
            .to_lowercase()
            .cmp(&b.row.firstname.to_lowercase()),
        SortField::Status => status_key(a.row.status).cmp(status_key(b.row.status)),
        SortField::Grade => a.final_grade.total_cmp(&b.final_grade),
    }
}

// 状态按显示文本排序
fn status_key(status: SubmissionStatus) -> &'static str {
    status.label()
}

/// 构建并排序成绩列表。排序稳定，相等时保持输入顺序（升序降序都一样）。
pub fn list_grades(
    config: &AssignmentConfig,
    students: &[Student],
    sort: SortField,
    direction: SortDirection,
    now: Timestamp,
) -> Vec<GradeRow> {
    let mut entries: Vec<ListEntry> = students
        .iter()
        .map(|student| build_entry(config, student, now))
        .collect();

    entries.sort_by(|a, b| {
        let ordering = compare(sort, a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    entries.into_iter().map(|entry| entry.row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::Schedule;
    use crate::models::grades::entities::GradeRecord;
    use crate::models::overrides::entities::Override;
    use crate::models::users::entities::User;

    const T: i64 = 1_700_000_000;

    fn config() -> AssignmentConfig {
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
            manual_grade_max: 10.0,
            passing_percentage: 50.0,
            needs_passing_grade: true,
            time_modified: 0,
        }
    }

    fn student(id: i64, firstname: &str, lastname: &str, grade: Option<(f64, f64)>) -> Student {
        let user = User {
            id,
            username: format!("user{id}"),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            email: format!("user{id}@example.com"),
        };
        Student::new(user).with_grade(grade.map(|(external, manual)| GradeRecord {
            external_grade: external,
            manual_grade: manual,
            ..GradeRecord::empty(1, id)
        }))
    }

    fn ids(rows: &[GradeRow]) -> Vec<i64> {
        rows.iter().map(|row| row.user_id).collect()
    }

    #[test]
    fn test_rows_are_formatted() {
        let students = vec![student(1, "Ada", "Lovelace", Some((45.5, 3.25)))];
        let rows = list_grades(&config(), &students, SortField::Lastname, SortDirection::Asc, T);
        assert_eq!(rows[0].external_grade, "45.50");
        assert_eq!(rows[0].manual_grade, "3.25");
        assert_eq!(rows[0].final_grade, "48.75");
        assert_eq!(rows[0].status, SubmissionStatus::Pending);
        assert!(!rows[0].has_override);
    }

    #[test]
    fn test_ungraded_row() {
        let students = vec![student(1, "Ada", "Lovelace", None)];
        let rows = list_grades(&config(), &students, SortField::Lastname, SortDirection::Asc, T);
        assert_eq!(rows[0].final_grade, "0.00");
        assert_eq!(rows[0].status, SubmissionStatus::NotSubmitted);
        assert_eq!(rows[0].external_link, None);
    }

    #[test]
    fn test_override_drives_row_status() {
        let extended = Override::new(1, 2, Schedule::new(None, Some(T + 5000), None));
        let students = vec![
            student(1, "Ada", "Lovelace", Some((10.0, 0.0))),
            student(2, "Alan", "Turing", Some((10.0, 0.0))).with_override(Some(extended)),
        ];
        let rows = list_grades(&config(), &students, SortField::Lastname, SortDirection::Asc, T + 1000);
        assert_eq!(rows[0].status, SubmissionStatus::Overdue);
        assert_eq!(rows[1].status, SubmissionStatus::Pending);
        assert!(rows[1].has_override);
        assert_eq!(rows[1].effective_dates.due_date, Some(T + 5000));
    }

    #[test]
    fn test_sort_by_name() {
        let students = vec![
            student(1, "Carol", "smith", None),
            student(2, "alice", "Brown", None),
            student(3, "Bob", "Adams", None),
        ];
        let by_last = list_grades(&config(), &students, SortField::Lastname, SortDirection::Asc, T);
        assert_eq!(ids(&by_last), vec![3, 2, 1]);
        let by_first = list_grades(&config(), &students, SortField::Firstname, SortDirection::Desc, T);
        assert_eq!(ids(&by_first), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_by_grade() {
        let students = vec![
            student(1, "A", "A", Some((20.0, 0.0))),
            student(2, "B", "B", None),
            student(3, "C", "C", Some((5.0, 30.0))),
        ];
        let rows = list_grades(&config(), &students, SortField::Grade, SortDirection::Desc, T);
        assert_eq!(ids(&rows), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_status() {
        let students = vec![
            student(1, "A", "A", Some((80.0, 0.0))),
            student(2, "B", "B", None),
            student(3, "C", "C", Some((1.0, 0.0))),
        ];
        let rows = list_grades(&config(), &students, SortField::Status, SortDirection::Asc, T + 1);
        // "not submitted" < "overdue" < "passed"
        assert_eq!(ids(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let students = vec![
            student(4, "Same", "Name", Some((50.0, 0.0))),
            student(2, "Same", "Name", Some((50.0, 0.0))),
            student(9, "Same", "Name", Some((50.0, 0.0))),
        ];
        for field in [SortField::Lastname, SortField::Firstname, SortField::Status, SortField::Grade] {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let rows = list_grades(&config(), &students, field, direction, T);
                assert_eq!(ids(&rows), vec![4, 2, 9]);
            }
        }
    }
}
