use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

pub mod blogs {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "blogs")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text", string_len = 200)]
        pub title: String,

        #[sea_orm(column_type = "Text", string_len = 200, unique)]
        pub slug: String,

        // Markdown source
        #[sea_orm(column_type = "Text")]
        pub content: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub excerpt: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub featured_image: Option<String>,

        // JSON text: array of tag strings
        #[sea_orm(column_type = "Text")]
        pub tags: String,

        pub published: bool,

        #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
        pub published_at: Option<DateTimeWithTimeZone>,

        #[sea_orm(column_type = "Text", nullable)]
        pub seo_title: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub seo_desc: Option<String>,

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

            if let ActiveValue::Set(title) = &self.title {
                self.title = Set(title.trim().to_string());
            }

            Ok(self)
        }
    }
}
