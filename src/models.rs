use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One daily check-in. The date stays a raw string in storage; rows that do
/// not parse as a calendar date are skipped during aggregation instead of
/// being rejected up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: String,
    /// Energy rating, 1-10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    /// Mood code, 1-6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<u8>,
}

/// One vape device's lifetime: an inclusive date range with the total puff
/// count and cost for the whole device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSession {
    pub start_date: String,
    pub end_date: String,
    pub puffs: f64,
    pub cost: f64,
}

/// Everything one user has logged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserDoc {
    #[serde(default)]
    pub daily: Vec<DailyEntry>,
    #[serde(default)]
    pub sessions: Vec<UsageSession>,
}

/// The whole persisted store: one document per username.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub users: BTreeMap<String, UserDoc>,
}

impl AppData {
    pub fn fetch_document(&self, username: &str) -> Option<&UserDoc> {
        self.users.get(username)
    }

    /// Replaces any existing document for the user.
    pub fn store_document(&mut self, username: &str, doc: UserDoc) {
        self.users.insert(username.to_string(), doc);
    }
}

#[derive(Debug, Deserialize)]
pub struct StoreLogRequest {
    pub username: String,
    pub doc: UserDoc,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: UserDoc,
}
