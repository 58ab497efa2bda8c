//! 成绩册条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gradebook_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub assignment_id: i64,
    pub course_id: i64,
    pub item_name: String,
    #[sea_orm(column_type = "Double")]
    pub grade_max: f64,
    #[sea_orm(column_type = "Double")]
    pub grade_pass: f64,
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
    pub fn into_grade_item(self) -> crate::integrations::GradeItem {
        crate::integrations::GradeItem {
            assignment_id: self.assignment_id,
            course_id: self.course_id,
            item_name: self.item_name,
            grade_max: self.grade_max,
            grade_pass: self.grade_pass,
        }
    }
}
