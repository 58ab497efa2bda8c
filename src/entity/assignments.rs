//! 外部作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub intro: String,
    pub always_show_description: bool,
    pub external_name: String,
    pub external_link: String,
    pub always_show_link: bool,
    pub allow_submissions_from: Option<i64>,
    pub due_date: Option<i64>,
    pub cutoff_date: Option<i64>,
    #[sea_orm(column_type = "Double")]
    pub external_grade_max: f64,
    #[sea_orm(column_type = "Double")]
    pub manual_grade_max: f64,
    #[sea_orm(column_type = "Double")]
    pub passing_percentage: f64,
    pub needs_passing_grade: bool,
    pub time_modified: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
    #[sea_orm(has_many = "super::overrides::Entity")]
    Overrides,
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl Related<super::overrides::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Overrides.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::AssignmentConfig {
        use crate::models::assignments::entities::{AssignmentConfig, Schedule};

        AssignmentConfig {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
            intro: self.intro,
            always_show_description: self.always_show_description,
            external_name: self.external_name,
            external_link: self.external_link,
            always_show_link: self.always_show_link,
            schedule: Schedule::new(self.allow_submissions_from, self.due_date, self.cutoff_date),
            external_grade_max: self.external_grade_max,
            manual_grade_max: self.manual_grade_max,
            passing_percentage: self.passing_percentage,
            needs_passing_grade: self.needs_passing_grade,
            time_modified: self.time_modified,
        }
    }
}
