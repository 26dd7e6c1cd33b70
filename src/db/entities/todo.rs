use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(indexed)]
    pub category: String,
    pub description: Option<String>,
    #[sea_orm(default_value = false)]
    pub done: bool,
}

impl ActiveModelBehavior for ActiveModel {}
