use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone_number: String,
    pub is_visible: bool,
    pub is_available: bool,
    pub notifications_enabled: bool,
    pub notifications_app_enabled: bool,
    pub notifications_chat_enabled: bool,
    pub notifications_sms_enabled: bool,
    pub notifications_email_enabled: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    #[sea_orm(has_many = "super::bridge_user::Entity")]
    BridgeUser,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::bridge_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BridgeUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
