use serde::Serialize;

/// A registered profile, keyed by the identity provider's subject.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub auth_id: String,
    pub name: String,
    pub created_at: String, // ISO8601
}
