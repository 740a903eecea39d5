//! `{{placeholder}}` templates for outgoing messages.

use doorbot_sdk::{Account, Door, Person};

pub const DEFAULT_SMS_TEMPLATE: &str =
    "Hi {{name}}, there is someone waiting for your at the {{door}}.";
pub const DEFAULT_TEXT_TEMPLATE: &str =
    "Hi {{name}},\nThere is someone waiting at the {{door}}.\n\n - Doorbot";
pub const SUBJECT_TEMPLATE: &str = "Doorbot - There is someone waiting at the {{door}}.";
pub const ACCOUNT_CREATED_SUBJECT: &str = "Doorbot - Account Created";

/// Replace every `{{key}}` whose key is present in `values`.
///
/// Unknown keys and empty placeholders are kept verbatim.
#[must_use]
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };

        let key = &after_open[..close];
        if let Some((_, value)) = values.iter().find(|(k, _)| *k == key) {
            out.push_str(value);
            rest = &after_open[close + 2..];
        } else {
            // not a placeholder we know; a later `{{` may still start one
            out.push_str("{{");
            rest = after_open;
        }
    }

    out.push_str(rest);
    out
}

/// Rendered texts for one knock event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnockMessage {
    pub subject: String,
    pub text: String,
    pub sms: String,
}

impl KnockMessage {
    #[must_use]
    pub fn compose(account: &Account, door: &Door, person: &Person) -> Self {
        let values = [("name", person.name.as_str()), ("door", door.name.as_str())];
        let settings = &account.notifications;

        let sms_template = non_empty(settings.sms_template.as_deref()).unwrap_or(DEFAULT_SMS_TEMPLATE);
        let text_template =
            non_empty(settings.email_template.as_deref()).unwrap_or(DEFAULT_TEXT_TEMPLATE);

        Self {
            subject: render(SUBJECT_TEMPLATE, &values),
            text: render(text_template, &values),
            sms: render(sms_template, &values),
        }
    }
}

/// Body of the welcome email sent when an account is registered.
#[must_use]
pub fn account_created_text(account: &Account, person: &Person, password: &str) -> String {
    format!(
        "Welcome {name},\n\nYou can log in on the dashboard using this temporary password: {password}\n\n\nAccount: {account_id}\nTemporary Host: {host}\n Email: {email}\nPassword: {password}\n\n- Doorbot",
        name = person.name,
        account_id = account.id,
        host = account.host,
        email = person.email,
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use doorbot_sdk::{BridgeSettings, NotificationPreferences, NotificationSettings};
    use uuid::Uuid;

    fn account(sms_template: Option<&str>) -> Account {
        Account {
            id: Uuid::new_v4(),
            name: "Acme".to_owned(),
            host: "acme".to_owned(),
            contact_name: "Jane".to_owned(),
            contact_email: "jane@acme.test".to_owned(),
            notifications: NotificationSettings {
                sms_template: sms_template.map(str::to_owned),
                ..NotificationSettings::default()
            },
            bridges: BridgeSettings::default(),
        }
    }

    fn person() -> Person {
        Person {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            name: "bob".to_owned(),
            title: String::new(),
            email: "bob@acme.test".to_owned(),
            phone_number: "5551234567".to_owned(),
            is_visible: true,
            is_available: true,
            notifications: NotificationPreferences::all(),
        }
    }

    fn door() -> Door {
        Door {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            name: "front door".to_owned(),
        }
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = render("Hello {{name}} {{name}}{{name}}{{}}", &[("name", "bob")]);
        assert_eq!(out, "Hello bob bobbob{{}}");
    }

    #[test]
    fn keeps_unknown_placeholders() {
        let out = render("{{greeting}} {{name}}", &[("name", "bob")]);
        assert_eq!(out, "{{greeting}} bob");
    }

    #[test]
    fn unterminated_placeholder_is_copied() {
        let out = render("Hi {{name}}, see {{door", &[("name", "bob"), ("door", "x")]);
        assert_eq!(out, "Hi bob, see {{door");
    }

    #[test]
    fn stray_braces_do_not_hide_later_placeholders() {
        let out = render("Hi {{ see {{door}} now", &[("door", "Lobby")]);
        assert_eq!(out, "Hi {{ see Lobby now");

        let out = render("{{{{name}}}}", &[("name", "bob")]);
        assert_eq!(out, "{{bob}}");
    }

    #[test]
    fn values_are_not_rendered_again() {
        let out = render("{{name}}", &[("name", "{{door}}"), ("door", "front")]);
        assert_eq!(out, "{{door}}");
    }

    #[test]
    fn compose_uses_default_sms_template() {
        let msg = KnockMessage::compose(&account(None), &door(), &person());
        assert_eq!(
            msg.sms,
            "Hi bob, there is someone waiting for your at the front door."
        );
        assert_eq!(msg.subject, "Doorbot - There is someone waiting at the front door.");
        assert_eq!(
            msg.text,
            "Hi bob,\nThere is someone waiting at the front door.\n\n - Doorbot"
        );
    }

    #[test]
    fn compose_prefers_account_template() {
        let msg = KnockMessage::compose(&account(Some("{{door}}: {{name}}")), &door(), &person());
        assert_eq!(msg.sms, "front door: bob");
    }

    #[test]
    fn empty_account_template_falls_back() {
        let msg = KnockMessage::compose(&account(Some("")), &door(), &person());
        assert!(msg.sms.starts_with("Hi bob"));
    }

    #[test]
    fn account_created_mentions_password_and_host() {
        let acc = account(None);
        let text = account_created_text(&acc, &person(), "s3cret");
        assert!(text.starts_with("Welcome bob,"));
        assert!(text.contains("temporary password: s3cret"));
        assert!(text.contains("Temporary Host: acme"));
        assert!(text.contains(&acc.id.to_string()));
    }
}
