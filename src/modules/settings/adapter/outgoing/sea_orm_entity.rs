use sea_orm::entity::prelude::*;

/// Key/value settings rows. `value` holds JSON text; the resolver merges
/// rows over hardcoded defaults at read time.
pub mod settings {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "settings")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text", unique)]
        pub key: String,

        #[sea_orm(column_type = "Text")]
        pub value: String,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
