//! Frontend Models
//!
//! Records returned by the Memoir API, plus request bodies.

use serde::{Deserialize, Serialize};

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub cat_name: String,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Person data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u32,
    pub person_name: String,
    pub category_id: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Uploaded file metadata (the bytes stay on the server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: u32,
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub person_id: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of a successful `/login`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_id: Option<u32>,
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewCategory<'a> {
    pub cat_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewPerson<'a> {
    pub person_name: &'a str,
    pub category_id: u32,
}
