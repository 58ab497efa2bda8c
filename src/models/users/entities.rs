use serde::{Deserialize, Serialize};

/// 课程中的用户（只读视图）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

// 选课角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnrolmentRole {
    Student, // 可提交
    Teacher, // 可评分
}

impl EnrolmentRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";

    pub fn can_submit(&self) -> bool {
        *self == EnrolmentRole::Student
    }

    pub fn can_grade(&self) -> bool {
        *self == EnrolmentRole::Teacher
    }
}

impl<'de> Deserialize<'de> for EnrolmentRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for EnrolmentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrolmentRole::Student => write!(f, "{}", EnrolmentRole::STUDENT),
            EnrolmentRole::Teacher => write!(f, "{}", EnrolmentRole::TEACHER),
        }
    }
}

impl std::str::FromStr for EnrolmentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EnrolmentRole::STUDENT => Ok(EnrolmentRole::Student),
            EnrolmentRole::TEACHER => Ok(EnrolmentRole::Teacher),
            _ => Err(format!(
                "无效的选课角色: '{s}'. 支持的角色: student, teacher"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        assert_eq!("student".parse::<EnrolmentRole>(), Ok(EnrolmentRole::Student));
        assert_eq!(EnrolmentRole::Teacher.to_string(), "teacher");
        assert!("grader".parse::<EnrolmentRole>().is_err());
    }

    #[test]
    fn test_capabilities_are_exclusive() {
        assert!(EnrolmentRole::Student.can_submit());
        assert!(!EnrolmentRole::Student.can_grade());
        assert!(EnrolmentRole::Teacher.can_grade());
        assert!(!EnrolmentRole::Teacher.can_submit());
    }
}
