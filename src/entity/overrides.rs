//! 日期覆盖实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "overrides")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub allow_submissions_from: Option<i64>,
    pub due_date: Option<i64>,
    pub cutoff_date: Option<i64>,
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

impl Model {
    pub fn into_override(self) -> crate::models::overrides::entities::Override {
        use crate::models::assignments::entities::unset_if_zero;
        use crate::models::overrides::entities::Override;

        Override {
            id: Some(self.id),
            assignment_id: self.assignment_id,
            user_id: self.user_id,
            allow_submissions_from: unset_if_zero(self.allow_submissions_from),
            due_date: unset_if_zero(self.due_date),
            cutoff_date: unset_if_zero(self.cutoff_date),
        }
    }
}
