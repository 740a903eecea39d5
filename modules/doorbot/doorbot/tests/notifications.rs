#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Knock dispatch through the service: channel selection, first-success
//! delivery and the request checks in front of it.

mod support;

use doorbot::domain::error::DomainError;
use doorbot_sdk::{ChannelKind, KnockOutcome, NotificationPreferences};
use support::{
    Behavior, FakeBridges, FakeNotifierFactory, account_fixture, inmem_db, orm_service,
    person_fixture, seed_account, seed_door, seed_person,
};
use uuid::Uuid;

#[tokio::test]
async fn first_success_stops_delivery() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let person = seed_person(&db, account.id, person_fixture("Ada", NotificationPreferences::all())).await;
    let door = seed_door(&db, account.id, "Front Door").await;

    let notifiers = FakeNotifierFactory::default()
        .with(ChannelKind::HipChat, Behavior::Fail)
        .with(ChannelKind::Slack, Behavior::Succeed)
        .with(ChannelKind::Nexmo, Behavior::Succeed);
    let log = notifiers.log.clone();
    let svc = orm_service(db, notifiers, FakeBridges::default());

    let outcome = svc.knock(&account, door.id, person.id).await.unwrap();
    assert_eq!(
        outcome,
        KnockOutcome::Accepted {
            channels: vec![ChannelKind::HipChat, ChannelKind::Slack, ChannelKind::Nexmo]
        }
    );

    svc.shutdown().await;
    assert_eq!(log.calls(), vec![ChannelKind::HipChat, ChannelKind::Slack]);
}

#[tokio::test]
async fn knock_returns_before_delivery_finishes() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let person = seed_person(&db, account.id, person_fixture("Ada", NotificationPreferences::all())).await;
    let door = seed_door(&db, account.id, "Lobby").await;

    let notifiers = FakeNotifierFactory::default()
        .with(ChannelKind::HipChat, Behavior::Hang)
        .with(ChannelKind::Postmark, Behavior::Succeed);
    let log = notifiers.log.clone();
    let svc = orm_service(db, notifiers, FakeBridges::default());

    let outcome = svc.knock(&account, door.id, person.id).await.unwrap();
    assert!(outcome.is_accepted());
    assert_eq!(svc.notifications().in_flight(), 1);

    // the hanging attempt is cut off by the attempt timeout, then email is tried
    svc.shutdown().await;
    assert_eq!(svc.notifications().in_flight(), 0);
    assert_eq!(log.calls(), vec![ChannelKind::HipChat, ChannelKind::Postmark]);
}

#[tokio::test]
async fn all_channels_failing_tries_each_once() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let person = seed_person(&db, account.id, person_fixture("Ada", NotificationPreferences::all())).await;
    let door = seed_door(&db, account.id, "Back Door").await;

    let notifiers = FakeNotifierFactory::all(Behavior::Fail);
    let log = notifiers.log.clone();
    let svc = orm_service(db, notifiers, FakeBridges::default());

    svc.knock(&account, door.id, person.id).await.unwrap();
    svc.shutdown().await;

    assert_eq!(
        log.calls(),
        vec![
            ChannelKind::HipChat,
            ChannelKind::Slack,
            ChannelKind::Nexmo,
            ChannelKind::Twilio,
            ChannelKind::Mailgun,
            ChannelKind::Postmark,
        ]
    );
}

#[tokio::test]
async fn no_opt_ins_means_no_delivery() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let person = seed_person(
        &db,
        account.id,
        person_fixture("Ada", NotificationPreferences::default()),
    )
    .await;
    let door = seed_door(&db, account.id, "Front Door").await;

    let notifiers = FakeNotifierFactory::all(Behavior::Succeed);
    let log = notifiers.log.clone();
    let svc = orm_service(db, notifiers, FakeBridges::default());

    let outcome = svc.knock(&account, door.id, person.id).await.unwrap();
    assert_eq!(outcome, KnockOutcome::NoChannel);

    svc.shutdown().await;
    assert!(log.calls().is_empty());
}

#[tokio::test]
async fn short_phone_skips_sms_providers() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let mut ada = person_fixture("Ada", NotificationPreferences::all());
    ada.phone_number = "555123".to_owned();
    let person = seed_person(&db, account.id, ada).await;
    let door = seed_door(&db, account.id, "Front Door").await;

    let svc = orm_service(
        db,
        FakeNotifierFactory::all(Behavior::Succeed),
        FakeBridges::default(),
    );

    let KnockOutcome::Accepted { channels } = svc.knock(&account, door.id, person.id).await.unwrap()
    else {
        panic!("expected accepted knock");
    };
    assert_eq!(
        channels,
        vec![
            ChannelKind::HipChat,
            ChannelKind::Slack,
            ChannelKind::Mailgun,
            ChannelKind::Postmark,
        ]
    );
    svc.shutdown().await;
}

#[tokio::test]
async fn unavailable_person_is_forbidden() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let mut ada = person_fixture("Ada", NotificationPreferences::all());
    ada.is_available = false;
    let person = seed_person(&db, account.id, ada).await;
    let door = seed_door(&db, account.id, "Front Door").await;

    let notifiers = FakeNotifierFactory::all(Behavior::Succeed);
    let log = notifiers.log.clone();
    let svc = orm_service(db, notifiers, FakeBridges::default());

    let err = svc.knock(&account, door.id, person.id).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));
    assert!(log.calls().is_empty());
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let person = seed_person(&db, account.id, person_fixture("Ada", NotificationPreferences::all())).await;
    let door = seed_door(&db, account.id, "Front Door").await;
    let svc = orm_service(
        db,
        FakeNotifierFactory::all(Behavior::Succeed),
        FakeBridges::default(),
    );

    let err = svc.knock(&account, door.id, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::PersonNotFound { .. }));

    let err = svc.knock(&account, Uuid::new_v4(), person.id).await.unwrap_err();
    assert!(matches!(err, DomainError::DoorNotFound { .. }));
}

#[tokio::test]
async fn people_of_other_accounts_are_invisible() {
    let db = inmem_db().await;
    let acme = seed_account(&db, account_fixture("acme")).await;
    let globex = seed_account(&db, account_fixture("globex")).await;
    let outsider = seed_person(&db, globex.id, person_fixture("Hank", NotificationPreferences::all())).await;
    let door = seed_door(&db, acme.id, "Front Door").await;
    let svc = orm_service(
        db,
        FakeNotifierFactory::all(Behavior::Succeed),
        FakeBridges::default(),
    );

    let err = svc.knock(&acme, door.id, outsider.id).await.unwrap_err();
    assert!(matches!(err, DomainError::PersonNotFound { .. }));
}

#[tokio::test]
async fn account_created_prefers_postmark() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let person = seed_person(&db, account.id, person_fixture("Ada", NotificationPreferences::default())).await;

    let notifiers = FakeNotifierFactory::default()
        .with(ChannelKind::Mailgun, Behavior::Succeed)
        .with(ChannelKind::Postmark, Behavior::Succeed);
    let log = notifiers.log.clone();
    let svc = orm_service(db, notifiers, FakeBridges::default());

    assert!(svc.account_created(&account, person.id, "tmp-pass").await.unwrap());
    svc.shutdown().await;
    assert_eq!(log.calls(), vec![ChannelKind::Postmark]);
}

#[tokio::test]
async fn account_created_without_email_provider_sends_nothing() {
    let db = inmem_db().await;
    let account = seed_account(&db, account_fixture("acme")).await;
    let person = seed_person(&db, account.id, person_fixture("Ada", NotificationPreferences::default())).await;

    let notifiers = FakeNotifierFactory::default().with(ChannelKind::Slack, Behavior::Succeed);
    let log = notifiers.log.clone();
    let svc = orm_service(db, notifiers, FakeBridges::default());

    assert!(!svc.account_created(&account, person.id, "tmp-pass").await.unwrap());
    svc.shutdown().await;
    assert!(log.calls().is_empty());
}
