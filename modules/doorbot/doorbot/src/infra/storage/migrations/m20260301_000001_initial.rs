use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r#"
CREATE TABLE IF NOT EXISTS accounts (
    id UUID PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    host VARCHAR(255) NOT NULL,
    contact_name VARCHAR(255) NOT NULL,
    contact_email VARCHAR(255) NOT NULL,
    notifications_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_hipchat_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_hipchat_token VARCHAR(255),
    notifications_slack_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_slack_token VARCHAR(255),
    notifications_nexmo_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_nexmo_token VARCHAR(255),
    notifications_twilio_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_twilio_token VARCHAR(255),
    notifications_mailgun_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_mailgun_token VARCHAR(255),
    notifications_postmark_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_postmark_token VARCHAR(255),
    notifications_sms_message_template TEXT,
    notifications_email_message_template TEXT,
    notifications_twilio_source_phone_number VARCHAR(255),
    bridge_hub_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    bridge_hub_url VARCHAR(255),
    bridge_hub_token VARCHAR(255),
    bridge_google_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    bridge_google_token VARCHAR(255),
    bridge_hipchat_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    bridge_hipchat_token VARCHAR(255),
    bridge_slack_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    bridge_slack_token VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    id UUID PRIMARY KEY NOT NULL,
    account_id UUID NOT NULL,
    name VARCHAR(255) NOT NULL,
    title VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    phone_number VARCHAR(255) NOT NULL,
    is_visible BOOLEAN NOT NULL DEFAULT FALSE,
    is_available BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_app_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_chat_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_sms_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_email_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS doors (
    id UUID PRIMARY KEY NOT NULL,
    account_id UUID NOT NULL,
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS bridge_users (
    id UUID PRIMARY KEY NOT NULL,
    account_id UUID NOT NULL,
    person_id UUID NOT NULL,
    bridge_id INTEGER NOT NULL,
    user_id VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_accounts_host ON accounts(host);
CREATE INDEX IF NOT EXISTS idx_people_account ON people(account_id);
CREATE INDEX IF NOT EXISTS idx_doors_account ON doors(account_id);
CREATE UNIQUE INDEX IF NOT EXISTS idx_bridge_users_account_bridge_user ON bridge_users(account_id, bridge_id, user_id);
                "#
            }
            sea_orm::DatabaseBackend::MySql => {
                r#"
CREATE TABLE IF NOT EXISTS accounts (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL,
    host VARCHAR(255) NOT NULL,
    contact_name VARCHAR(255) NOT NULL,
    contact_email VARCHAR(255) NOT NULL,
    notifications_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_hipchat_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_hipchat_token VARCHAR(255),
    notifications_slack_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_slack_token VARCHAR(255),
    notifications_nexmo_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_nexmo_token VARCHAR(255),
    notifications_twilio_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_twilio_token VARCHAR(255),
    notifications_mailgun_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_mailgun_token VARCHAR(255),
    notifications_postmark_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_postmark_token VARCHAR(255),
    notifications_sms_message_template TEXT,
    notifications_email_message_template TEXT,
    notifications_twilio_source_phone_number VARCHAR(255),
    bridge_hub_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    bridge_hub_url VARCHAR(255),
    bridge_hub_token VARCHAR(255),
    bridge_google_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    bridge_google_token VARCHAR(255),
    bridge_hipchat_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    bridge_hipchat_token VARCHAR(255),
    bridge_slack_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    bridge_slack_token VARCHAR(255),
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    account_id VARCHAR(36) NOT NULL,
    name VARCHAR(255) NOT NULL,
    title VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    phone_number VARCHAR(255) NOT NULL,
    is_visible BOOLEAN NOT NULL DEFAULT FALSE,
    is_available BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_app_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_chat_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_sms_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    notifications_email_enabled BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL
);

CREATE TABLE IF NOT EXISTS doors (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    account_id VARCHAR(36) NOT NULL,
    name VARCHAR(255) NOT NULL,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL
);

CREATE TABLE IF NOT EXISTS bridge_users (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    account_id VARCHAR(36) NOT NULL,
    person_id VARCHAR(36) NOT NULL,
    bridge_id INT NOT NULL,
    user_id VARCHAR(255) NOT NULL,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL
);

CREATE UNIQUE INDEX idx_accounts_host ON accounts(host);
CREATE INDEX idx_people_account ON people(account_id);
CREATE INDEX idx_doors_account ON doors(account_id);
CREATE UNIQUE INDEX idx_bridge_users_account_bridge_user ON bridge_users(account_id, bridge_id, user_id);
                "#
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r#"
CREATE TABLE IF NOT EXISTS accounts (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    host TEXT NOT NULL,
    contact_name TEXT NOT NULL,
    contact_email TEXT NOT NULL,
    notifications_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_hipchat_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_hipchat_token TEXT,
    notifications_slack_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_slack_token TEXT,
    notifications_nexmo_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_nexmo_token TEXT,
    notifications_twilio_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_twilio_token TEXT,
    notifications_mailgun_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_mailgun_token TEXT,
    notifications_postmark_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_postmark_token TEXT,
    notifications_sms_message_template TEXT,
    notifications_email_message_template TEXT,
    notifications_twilio_source_phone_number TEXT,
    bridge_hub_enabled INTEGER NOT NULL DEFAULT 0,
    bridge_hub_url TEXT,
    bridge_hub_token TEXT,
    bridge_google_enabled INTEGER NOT NULL DEFAULT 0,
    bridge_google_token TEXT,
    bridge_hipchat_enabled INTEGER NOT NULL DEFAULT 0,
    bridge_hipchat_token TEXT,
    bridge_slack_enabled INTEGER NOT NULL DEFAULT 0,
    bridge_slack_token TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS people (
    id TEXT PRIMARY KEY NOT NULL,
    account_id TEXT NOT NULL,
    name TEXT NOT NULL,
    title TEXT NOT NULL,
    email TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    is_visible INTEGER NOT NULL DEFAULT 0,
    is_available INTEGER NOT NULL DEFAULT 0,
    notifications_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_app_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_chat_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_sms_enabled INTEGER NOT NULL DEFAULT 0,
    notifications_email_enabled INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS doors (
    id TEXT PRIMARY KEY NOT NULL,
    account_id TEXT NOT NULL,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bridge_users (
    id TEXT PRIMARY KEY NOT NULL,
    account_id TEXT NOT NULL,
    person_id TEXT NOT NULL,
    bridge_id INTEGER NOT NULL,
    user_id TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_accounts_host ON accounts(host);
CREATE INDEX IF NOT EXISTS idx_people_account ON people(account_id);
CREATE INDEX IF NOT EXISTS idx_doors_account ON doors(account_id);
CREATE UNIQUE INDEX IF NOT EXISTS idx_bridge_users_account_bridge_user ON bridge_users(account_id, bridge_id, user_id);
                "#
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = "DROP TABLE IF EXISTS bridge_users;
DROP TABLE IF EXISTS doors;
DROP TABLE IF EXISTS people;
DROP TABLE IF EXISTS accounts;";
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
