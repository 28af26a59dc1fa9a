//! Person record and the request/response bodies built around it.
//!
//! [`Person`] is the stored entity. [`PersonInput`] is the body accepted
//! by create and full-replace requests, [`PersonPatch`] the body of a
//! partial update, and [`PeopleStats`] the aggregate summary response.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::ids::PersonId;

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A single person record as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Person {
    /// Store-assigned identifier. Never reused after deletion.
    pub id: PersonId,
    /// Display name. Not required to be unique.
    pub name: String,
    /// Age in years. No range is enforced.
    pub age: i64,
    /// Free-form phone number.
    pub phone: String,
}

impl Person {
    /// Build a record from an input body and a freshly assigned id.
    pub fn from_input(id: PersonId, input: PersonInput) -> Self {
        Self {
            id,
            name: input.name,
            age: input.age,
            phone: input.phone,
        }
    }
}

// ---------------------------------------------------------------------------
// PersonInput
// ---------------------------------------------------------------------------

/// Body of `POST /people` and `PUT /people/{id}`.
///
/// Every field falls back to its empty value when omitted, so `{}` is a
/// valid (if useless) person. An `id` supplied by the client is discarded,
/// but it must still be an integer or `null`. Other unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PersonInput {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Phone number.
    pub phone: String,
}

/// Wire form of [`PersonInput`], which also type-checks a stray `id`.
#[derive(Deserialize, Default)]
#[serde(default)]
struct PersonInputBody {
    #[serde(rename = "id")]
    _id: Option<i64>,
    name: String,
    age: i64,
    phone: String,
}

impl<'de> Deserialize<'de> for PersonInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let body = PersonInputBody::deserialize(deserializer)?;
        Ok(Self {
            name: body.name,
            age: body.age,
            phone: body.phone,
        })
    }
}

// ---------------------------------------------------------------------------
// PersonPatch
// ---------------------------------------------------------------------------

/// Body of `PATCH /people/{id}`.
///
/// A field is applied only when present. Omitted fields and explicit
/// `null`s leave the stored value alone, while `""` and `0` are real
/// values and do overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(default)]
pub struct PersonPatch {
    /// Replacement name.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    /// Replacement age.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub age: Option<i64>,
    /// Replacement phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phone: Option<String>,
}

impl PersonPatch {
    /// Whether the patch carries no fields at all.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.phone.is_none()
    }
}

// ---------------------------------------------------------------------------
// PeopleStats
// ---------------------------------------------------------------------------

/// Response body of `GET /people/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PeopleStats {
    /// Number of stored records.
    pub total: usize,
    /// Mean age, truncated toward zero. `0` for an empty collection.
    pub average_age: i64,
    /// Every stored record, in insertion order.
    pub person_sample: Vec<Person>,
}
