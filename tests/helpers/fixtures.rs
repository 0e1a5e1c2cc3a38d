// ABOUTME: Record fixtures shared by encoder and insert tests
// ABOUTME: Covers tagged and untagged fields, omitempty, sequences, nested values, and serialization failures

use chrono::{DateTime, TimeZone, Utc};
use rowkit::impl_record;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// The two-field record from the API documentation
pub struct User {
    pub name: String,
    pub tags: Vec<String>,
}

impl_record!(User {
    value name = "Name",
    value tags = "Tags",
});

pub fn user() -> User {
    User {
        name: "a".to_owned(),
        tags: vec!["x".to_owned(), "y".to_owned()],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Address {
    pub city: String,
    pub postcode: String,
}

/// A record exercising every binding rule
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub nickname: Option<String>,
    pub order: i32,
    pub display_name: String,
    pub scores: Vec<i64>,
    pub address: Address,
    pub created_at: DateTime<Utc>,
}

impl_record!(Account {
    value id,
    value email = "email,omitempty",
    value nickname = "nickname",
    value order = "order",
    value display_name = "DisplayName",
    value scores = "scores",
    nested address = "address",
    value created_at = "created_at",
});

pub fn account() -> Account {
    Account {
        id: Uuid::nil(),
        email: "ada@example.com".to_owned(),
        nickname: None,
        order: 7,
        display_name: "Ada".to_owned(),
        scores: vec![1, 2, 3],
        address: Address {
            city: "London".to_owned(),
            postcode: "NW1".to_owned(),
        },
        created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    }
}

/// A record whose fields may all be omitted
pub struct Note {
    pub title: String,
    pub body: String,
}

impl_record!(Note {
    value title = "title,omitempty",
    value body = ",omitempty",
});

/// Stand-in for a value JSON cannot represent
pub struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom("value cannot be represented as JSON"))
    }
}

pub struct Broken {
    pub name: String,
    pub handle: Unserializable,
}

impl_record!(Broken {
    value name,
    nested handle = "handle",
});

/// Nested value whose key order differs from a sorted order
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub zeta: u8,
    pub alpha: String,
}

/// A record with a single nested aggregate
pub struct Person {
    pub name: String,
    pub profile: Profile,
}

impl_record!(Person {
    value name = "name",
    nested profile = "profile",
});

pub fn person() -> Person {
    Person {
        name: "a".to_owned(),
        profile: Profile {
            zeta: 1,
            alpha: "x".to_owned(),
        },
    }
}

/// Plain and optional strings both marked omitempty
pub struct Contact {
    pub email: String,
    pub phone: Option<String>,
}

impl_record!(Contact {
    value email = "email,omitempty",
    value phone = "phone,omitempty",
});
