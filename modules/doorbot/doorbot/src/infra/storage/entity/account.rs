use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub host: String,
    pub contact_name: String,
    pub contact_email: String,

    pub notifications_enabled: bool,
    pub notifications_hipchat_enabled: bool,
    pub notifications_hipchat_token: Option<String>,
    pub notifications_slack_enabled: bool,
    pub notifications_slack_token: Option<String>,
    pub notifications_nexmo_enabled: bool,
    pub notifications_nexmo_token: Option<String>,
    pub notifications_twilio_enabled: bool,
    pub notifications_twilio_token: Option<String>,
    pub notifications_mailgun_enabled: bool,
    pub notifications_mailgun_token: Option<String>,
    pub notifications_postmark_enabled: bool,
    pub notifications_postmark_token: Option<String>,
    pub notifications_sms_message_template: Option<String>,
    pub notifications_email_message_template: Option<String>,
    pub notifications_twilio_source_phone_number: Option<String>,

    pub bridge_hub_enabled: bool,
    pub bridge_hub_url: Option<String>,
    pub bridge_hub_token: Option<String>,
    pub bridge_google_enabled: bool,
    pub bridge_google_token: Option<String>,
    pub bridge_hipchat_enabled: bool,
    pub bridge_hipchat_token: Option<String>,
    pub bridge_slack_enabled: bool,
    pub bridge_slack_token: Option<String>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::person::Entity")]
    Person,
    #[sea_orm(has_many = "super::door::Entity")]
    Door,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::door::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Door.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
