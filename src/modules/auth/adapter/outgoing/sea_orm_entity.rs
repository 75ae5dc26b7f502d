use sea_orm::entity::prelude::*;

pub mod users {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "users")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text", unique)]
        pub email: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub name: Option<String>,

        #[sea_orm(column_type = "Text")]
        pub password_hash: String,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
