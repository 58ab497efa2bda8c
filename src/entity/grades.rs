//! 成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub grader_id: Option<i64>,
    pub external_link: String,
    #[sea_orm(column_type = "Double")]
    pub external_grade: f64,
    #[sea_orm(column_type = "Text")]
    pub external_feedback: String,
    #[sea_orm(column_type = "Double")]
    pub manual_grade: f64,
    #[sea_orm(column_type = "Text")]
    pub manual_feedback: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::GradeRecord {
        use crate::models::grades::entities::GradeRecord;

        GradeRecord {
            id: Some(self.id),
            assignment_id: self.assignment_id,
            user_id: self.user_id,
            grader_id: self.grader_id,
            external_link: self.external_link,
            external_grade: self.external_grade,
            external_feedback: self.external_feedback,
            manual_grade: self.manual_grade,
            manual_feedback: self.manual_feedback,
            updated_at: self.updated_at,
        }
    }
}
