use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Firstname).string().not_null())
                    .col(ColumnDef::new(Users::Lastname).string().not_null())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建用户资料字段表（外部用户名等自定义字段）
        manager
            .create_table(
                Table::create()
                    .table(UserProfileFields::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfileFields::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProfileFields::UserId).big_integer().not_null())
                    .col(ColumnDef::new(UserProfileFields::Shortname).string().not_null())
                    .col(ColumnDef::new(UserProfileFields::Data).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserProfileFields::Table, UserProfileFields::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课表
        manager
            .create_table(
                Table::create()
                    .table(Enrolments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrolments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrolments::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Enrolments::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Enrolments::Role).string().not_null())
                    .col(ColumnDef::new(Enrolments::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrolments::Table, Enrolments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建外部作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::Name).string().not_null())
                    .col(ColumnDef::new(Assignments::Intro).text().not_null())
                    .col(
                        ColumnDef::new(Assignments::AlwaysShowDescription)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Assignments::ExternalName).string().not_null())
                    .col(ColumnDef::new(Assignments::ExternalLink).string().not_null())
                    .col(
                        ColumnDef::new(Assignments::AlwaysShowLink)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Assignments::AllowSubmissionsFrom).big_integer().null())
                    .col(ColumnDef::new(Assignments::DueDate).big_integer().null())
                    .col(ColumnDef::new(Assignments::CutoffDate).big_integer().null())
                    .col(ColumnDef::new(Assignments::ExternalGradeMax).double().not_null())
                    .col(
                        ColumnDef::new(Assignments::ManualGradeMax)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Assignments::PassingPercentage)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Assignments::NeedsPassingGrade)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Assignments::TimeModified).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::AssignmentId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Grades::GraderId).big_integer().null())
                    .col(ColumnDef::new(Grades::ExternalLink).string().not_null())
                    .col(ColumnDef::new(Grades::ExternalGrade).double().not_null())
                    .col(ColumnDef::new(Grades::ExternalFeedback).text().not_null())
                    .col(ColumnDef::new(Grades::ManualGrade).double().not_null())
                    .col(ColumnDef::new(Grades::ManualFeedback).text().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grades::Table, Grades::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建日期覆盖表
        manager
            .create_table(
                Table::create()
                    .table(Overrides::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Overrides::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Overrides::AssignmentId).big_integer().not_null())
                    .col(ColumnDef::new(Overrides::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Overrides::AllowSubmissionsFrom).big_integer().null())
                    .col(ColumnDef::new(Overrides::DueDate).big_integer().null())
                    .col(ColumnDef::new(Overrides::CutoffDate).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Overrides::Table, Overrides::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Overrides::Table, Overrides::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩册条目表
        manager
            .create_table(
                Table::create()
                    .table(GradebookItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradebookItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GradebookItems::AssignmentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(GradebookItems::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(GradebookItems::ItemName).string().not_null())
                    .col(ColumnDef::new(GradebookItems::GradeMax).double().not_null())
                    .col(ColumnDef::new(GradebookItems::GradePass).double().not_null())
                    .col(ColumnDef::new(GradebookItems::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(GradebookItems::Table, GradebookItems::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩册成绩表
        manager
            .create_table(
                Table::create()
                    .table(GradebookGrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradebookGrades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GradebookGrades::AssignmentId).big_integer().not_null())
                    .col(ColumnDef::new(GradebookGrades::UserId).big_integer().not_null())
                    .col(ColumnDef::new(GradebookGrades::RawGrade).double().not_null())
                    .col(ColumnDef::new(GradebookGrades::Feedback).text().not_null())
                    .col(ColumnDef::new(GradebookGrades::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(GradebookGrades::Table, GradebookGrades::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GradebookGrades::Table, GradebookGrades::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建完成状态表
        manager
            .create_table(
                Table::create()
                    .table(CompletionStates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompletionStates::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompletionStates::AssignmentId).big_integer().not_null())
                    .col(ColumnDef::new(CompletionStates::UserId).big_integer().not_null())
                    .col(ColumnDef::new(CompletionStates::State).string().not_null())
                    .col(ColumnDef::new(CompletionStates::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CompletionStates::Table, CompletionStates::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CompletionStates::Table, CompletionStates::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建日历事件表
        manager
            .create_table(
                Table::create()
                    .table(CalendarEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CalendarEvents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CalendarEvents::AssignmentId).big_integer().not_null())
                    .col(ColumnDef::new(CalendarEvents::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(CalendarEvents::EventType).string().not_null())
                    .col(ColumnDef::new(CalendarEvents::Name).string().not_null())
                    .col(ColumnDef::new(CalendarEvents::TimeStart).big_integer().not_null())
                    .col(ColumnDef::new(CalendarEvents::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CalendarEvents::Table, CalendarEvents::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每个学生在每个作业下至多一条成绩 / 覆盖 / 成绩册成绩 / 完成状态
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_assignment_user")
                    .table(Grades::Table)
                    .col(Grades::AssignmentId)
                    .col(Grades::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_overrides_assignment_user")
                    .table(Overrides::Table)
                    .col(Overrides::AssignmentId)
                    .col(Overrides::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_gradebook_grades_assignment_user")
                    .table(GradebookGrades::Table)
                    .col(GradebookGrades::AssignmentId)
                    .col(GradebookGrades::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_completion_states_assignment_user")
                    .table(CompletionStates::Table)
                    .col(CompletionStates::AssignmentId)
                    .col(CompletionStates::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_calendar_events_assignment_type")
                    .table(CalendarEvents::Table)
                    .col(CalendarEvents::AssignmentId)
                    .col(CalendarEvents::EventType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrolments_course_user")
                    .table(Enrolments::Table)
                    .col(Enrolments::CourseId)
                    .col(Enrolments::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_profile_fields_user_shortname")
                    .table(UserProfileFields::Table)
                    .col(UserProfileFields::UserId)
                    .col(UserProfileFields::Shortname)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_profile_fields_shortname_data")
                    .table(UserProfileFields::Table)
                    .col(UserProfileFields::Shortname)
                    .col(UserProfileFields::Data)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_external_name")
                    .table(Assignments::Table)
                    .col(Assignments::ExternalName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_course_id")
                    .table(Assignments::Table)
                    .col(Assignments::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(CalendarEvents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CompletionStates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GradebookGrades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GradebookItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Overrides::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrolments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserProfileFields::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Firstname,
    Lastname,
    Email,
    CreatedAt,
}

#[derive(DeriveIden)]
enum UserProfileFields {
    #[sea_orm(iden = "user_profile_fields")]
    Table,
    Id,
    UserId,
    Shortname,
    Data,
}

#[derive(DeriveIden)]
enum Enrolments {
    #[sea_orm(iden = "enrolments")]
    Table,
    Id,
    CourseId,
    UserId,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    CourseId,
    Name,
    Intro,
    AlwaysShowDescription,
    ExternalName,
    ExternalLink,
    AlwaysShowLink,
    AllowSubmissionsFrom,
    DueDate,
    CutoffDate,
    ExternalGradeMax,
    ManualGradeMax,
    PassingPercentage,
    NeedsPassingGrade,
    TimeModified,
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    AssignmentId,
    UserId,
    GraderId,
    ExternalLink,
    ExternalGrade,
    ExternalFeedback,
    ManualGrade,
    ManualFeedback,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Overrides {
    #[sea_orm(iden = "overrides")]
    Table,
    Id,
    AssignmentId,
    UserId,
    AllowSubmissionsFrom,
    DueDate,
    CutoffDate,
}

#[derive(DeriveIden)]
enum GradebookItems {
    #[sea_orm(iden = "gradebook_items")]
    Table,
    Id,
    AssignmentId,
    CourseId,
    ItemName,
    GradeMax,
    GradePass,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GradebookGrades {
    #[sea_orm(iden = "gradebook_grades")]
    Table,
    Id,
    AssignmentId,
    UserId,
    RawGrade,
    Feedback,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CompletionStates {
    #[sea_orm(iden = "completion_states")]
    Table,
    Id,
    AssignmentId,
    UserId,
    State,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CalendarEvents {
    #[sea_orm(iden = "calendar_events")]
    Table,
    Id,
    AssignmentId,
    CourseId,
    EventType,
    Name,
    TimeStart,
    UpdatedAt,
}
