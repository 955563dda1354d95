//! Typed record kinds for the organisations, tickets and users groups.
//!
//! Field names follow the JSON layout of the data files. Optional
//! references (`assignee_id`, `organization_id`) render as the empty scalar
//! when absent, so every record of a group shares the same schema.

use serde::{Deserialize, Serialize};

use crate::field::{FieldMap, FieldValue, ToFieldMap};

/// Builds a `FieldMap` from `name => value` pairs.
macro_rules! field_map {
    ($($name:literal => $value:expr),* $(,)?) => {{
        let mut m = FieldMap::new();
        $( m.insert($name.to_string(), FieldValue::from($value)); )*
        m
    }};
}

/// Schema of a fixed record kind: the fields its default value renders.
fn schema_of<R: ToFieldMap + Default>() -> Vec<String> {
    R::default().to_field_map().into_keys().collect()
}

/// An organisation (customer account).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organisation {
    #[serde(rename = "_id")]
    pub id: u64,
    pub url: String,
    pub external_id: String,
    pub name: String,
    pub domain_names: Vec<String>,
    pub created_at: String,
    pub details: String,
    pub shared_tickets: bool,
    pub tags: Vec<String>,
}

impl ToFieldMap for Organisation {
    fn field_names() -> Vec<String> {
        schema_of::<Self>()
    }

    fn to_field_map(&self) -> FieldMap {
        field_map! {
            "_id" => self.id,
            "url" => self.url.clone(),
            "external_id" => self.external_id.clone(),
            "name" => self.name.clone(),
            "domain_names" => self.domain_names.clone(),
            "created_at" => self.created_at.clone(),
            "details" => self.details.clone(),
            "shared_tickets" => self.shared_tickets,
            "tags" => self.tags.clone(),
        }
    }
}

/// A support ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: String,
    pub url: String,
    pub external_id: String,
    pub created_at: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub subject: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub submitter_id: Option<u64>,
    pub assignee_id: Option<u64>,
    #[serde(alias = "organisation_id")]
    pub organization_id: Option<u64>,
    pub tags: Vec<String>,
    pub has_incidents: bool,
    pub due_at: String,
    pub via: String,
}

impl ToFieldMap for Ticket {
    fn field_names() -> Vec<String> {
        schema_of::<Self>()
    }

    fn to_field_map(&self) -> FieldMap {
        field_map! {
            "_id" => self.id.clone(),
            "url" => self.url.clone(),
            "external_id" => self.external_id.clone(),
            "created_at" => self.created_at.clone(),
            "type" => self.kind.clone(),
            "subject" => self.subject.clone(),
            "description" => self.description.clone(),
            "priority" => self.priority.clone(),
            "status" => self.status.clone(),
            "submitter_id" => self.submitter_id,
            "assignee_id" => self.assignee_id,
            "organization_id" => self.organization_id,
            "tags" => self.tags.clone(),
            "has_incidents" => self.has_incidents,
            "due_at" => self.due_at.clone(),
            "via" => self.via.clone(),
        }
    }
}

/// A user (agent, admin or end-user).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: u64,
    pub url: String,
    pub external_id: String,
    pub name: String,
    pub alias: String,
    pub created_at: String,
    pub active: bool,
    pub verified: bool,
    pub shared: bool,
    pub locale: String,
    pub timezone: String,
    pub last_login_at: String,
    pub email: String,
    pub phone: String,
    pub signature: String,
    #[serde(alias = "organisation_id")]
    pub organization_id: Option<u64>,
    pub tags: Vec<String>,
    pub suspended: bool,
    pub role: String,
}

impl ToFieldMap for User {
    fn field_names() -> Vec<String> {
        schema_of::<Self>()
    }

    fn to_field_map(&self) -> FieldMap {
        field_map! {
            "_id" => self.id,
            "url" => self.url.clone(),
            "external_id" => self.external_id.clone(),
            "name" => self.name.clone(),
            "alias" => self.alias.clone(),
            "created_at" => self.created_at.clone(),
            "active" => self.active,
            "verified" => self.verified,
            "shared" => self.shared,
            "locale" => self.locale.clone(),
            "timezone" => self.timezone.clone(),
            "last_login_at" => self.last_login_at.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "signature" => self.signature.clone(),
            "organization_id" => self.organization_id,
            "tags" => self.tags.clone(),
            "suspended" => self.suspended,
            "role" => self.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organisation_field_map() {
        let org: Organisation = serde_json::from_str(
            r#"{"_id": 101, "name": "Enthaze", "domain_names": ["kage.com"], "shared_tickets": false}"#,
        )
        .unwrap();
        let m = org.to_field_map();
        assert_eq!(m["_id"], FieldValue::from("101"));
        assert_eq!(m["shared_tickets"], FieldValue::from("false"));
        assert_eq!(m["domain_names"], FieldValue::Multi(vec!["kage.com".into()]));
        assert_eq!(m["details"], FieldValue::empty());
        assert_eq!(m.len(), 9);
    }

    #[test]
    fn test_ticket_missing_reference_is_empty() {
        let ticket: Ticket =
            serde_json::from_str(r#"{"_id": "abc-1", "type": "incident", "submitter_id": 38}"#)
                .unwrap();
        let m = ticket.to_field_map();
        assert_eq!(m["type"], FieldValue::from("incident"));
        assert_eq!(m["submitter_id"], FieldValue::from("38"));
        assert_eq!(m["assignee_id"], FieldValue::empty());
        assert_eq!(m["tags"], FieldValue::Multi(vec![]));
    }

    #[test]
    fn test_british_spelling_alias() {
        let ticket: Ticket = serde_json::from_str(r#"{"organisation_id": 1}"#).unwrap();
        assert_eq!(ticket.organization_id, Some(1));
    }

    #[test]
    fn test_field_names_match_rendered_fields() {
        let org = Organisation {
            id: 3,
            ..Organisation::default()
        };
        assert_eq!(
            Organisation::field_names(),
            org.to_field_map().into_keys().collect::<Vec<_>>()
        );
        assert_eq!(Ticket::field_names().len(), 16);
        assert_eq!(User::field_names().len(), 19);
    }

    #[test]
    fn test_user_schema_is_fixed() {
        let a = User::default().to_field_map();
        let b = User {
            id: 7,
            name: "Francis".into(),
            ..User::default()
        }
        .to_field_map();
        assert_eq!(a.keys().collect::<Vec<_>>(), b.keys().collect::<Vec<_>>());
    }
}
