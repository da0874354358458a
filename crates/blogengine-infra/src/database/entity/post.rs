//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub pub_date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub author_id: Uuid,
    pub site_id: Uuid,
    pub category_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blogengine_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            pub_date: model.pub_date.into(),
            text: model.text,
            slug: model.slug,
            author_id: model.author_id,
            site_id: model.site_id,
            category_id: model.category_id,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<blogengine_core::domain::Post> for ActiveModel {
    fn from(post: blogengine_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            pub_date: Set(post.pub_date.into()),
            text: Set(post.text),
            slug: Set(post.slug),
            author_id: Set(post.author_id),
            site_id: Set(post.site_id),
            category_id: Set(post.category_id),
        }
    }
}
