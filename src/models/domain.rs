use serde::{Deserialize, Serialize};

// Show record - the id is store-assigned, 1-based
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Show {
    pub id: u64,
    pub name: String,
    pub episodes_seen: i64,
}

// Request body for create and update - both fields optional so handlers
// can report exactly which one is missing and apply partial patches
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShowFields {
    pub name: Option<String>,
    pub episodes_seen: Option<i64>,
}

// Validated create payload - the POST handler guarantees both fields
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NewShow {
    pub name: String,
    pub episodes_seen: i64,
}
