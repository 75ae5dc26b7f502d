use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

pub mod pages {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "pages")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text", unique)]
        pub slug: String,

        #[sea_orm(column_type = "Text")]
        pub title: String,

        // JSON text: `{"sections": [...]}`, decoded with an empty-list
        // fallback.
        #[sea_orm(column_type = "Text")]
        pub content: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub seo_title: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub seo_desc: Option<String>,

        pub enabled: bool,

        pub sort_order: i32,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub created_at: DateTimeWithTimeZone,

        #[sea_orm(column_type = "TimestampWithTimeZone")]
        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    #[async_trait::async_trait]
    impl ActiveModelBehavior for ActiveModel {
        async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
        where
            C: ConnectionTrait,
        {
            if let ActiveValue::Set(slug) = &self.slug {
                self.slug = Set(slug.trim().to_lowercase());
            }

            Ok(self)
        }
    }
}
