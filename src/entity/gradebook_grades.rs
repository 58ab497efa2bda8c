//! 成绩册成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gradebook_grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    #[sea_orm(column_type = "Double")]
    pub raw_grade: f64,
    #[sea_orm(column_type = "Text")]
    pub feedback: String,
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
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_gradebook_grade(self) -> crate::integrations::GradebookGrade {
        crate::integrations::GradebookGrade {
            assignment_id: self.assignment_id,
            user_id: self.user_id,
            raw_grade: self.raw_grade,
            feedback: self.feedback,
        }
    }
}
