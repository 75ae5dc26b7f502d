use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

pub mod projects {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "projects")]
    pub struct Model {
        #[sea_orm(primary_key, column_type = "Uuid")]
        pub id: Uuid,

        #[sea_orm(column_type = "Text", string_len = 150)]
        pub title: String,

        #[sea_orm(column_type = "Text", string_len = 150, unique)]
        pub slug: String,

        #[sea_orm(column_type = "Text")]
        pub overview: String,

        #[sea_orm(column_type = "Text", nullable)]
        pub problem: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub process: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub solution: Option<String>,

        #[sea_orm(column_type = "Text", nullable)]
        pub result: Option<String>,

        // JSON text: array of strings
        #[sea_orm(column_type = "Text")]
        pub tech_stack: String,

        // JSON text: ordered array of URLs, first = cover
        #[sea_orm(column_type = "Text")]
        pub image_gallery: String,

        pub featured: bool,

        pub sort_order: i32,

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
