//! 预导入模块，方便使用

pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::calendar_events::{
    ActiveModel as CalendarEventActiveModel, Entity as CalendarEvents,
    Model as CalendarEventModel,
};
pub use super::completion_states::{
    ActiveModel as CompletionStateActiveModel, Entity as CompletionStates,
    Model as CompletionStateModel,
};
pub use super::enrolments::{
    ActiveModel as EnrolmentActiveModel, Entity as Enrolments, Model as EnrolmentModel,
};
pub use super::gradebook_grades::{
    ActiveModel as GradebookGradeActiveModel, Entity as GradebookGrades,
    Model as GradebookGradeModel,
};
pub use super::gradebook_items::{
    ActiveModel as GradebookItemActiveModel, Entity as GradebookItems,
    Model as GradebookItemModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::overrides::{
    ActiveModel as OverrideActiveModel, Entity as Overrides, Model as OverrideModel,
};
pub use super::user_profile_fields::{
    ActiveModel as UserProfileFieldActiveModel, Entity as UserProfileFields,
    Model as UserProfileFieldModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
