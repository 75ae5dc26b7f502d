use sea_orm::entity::prelude::*;

pub mod experiences {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "experiences")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text", string_len = 150)]
        pub role: String,

        #[sea_orm(column_type = "Text", string_len = 150)]
        pub organization: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub location: Option<String>,

        pub start_date: Date,

        #[sea_orm(nullable)]
        pub end_date: Option<Date>,

        // JSON text: ordered array of bullet strings
        #[sea_orm(column_type = "Text")]
        pub description: String,

        // "Work" | "Research" | "Internship" | "Volunteer"
        #[sea_orm(column_name = "kind", column_type = "Text")]
        pub kind: String,

        pub sort_order: i32,

        pub visible: bool,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
