use std::path::PathBuf;

use rusqlite::Connection;
use serde::Deserialize;

use crate::state::Services;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Session state. `services` is the in-memory working copy hydrated when a
/// workspace is selected; reports read it directly. The observation unlock
/// is session-scoped and never persisted (there is no re-lock).
pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub db: Option<Connection>,
    pub services: Option<Services>,
    pub observation_unlocked: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            workspace: None,
            db: None,
            services: None,
            observation_unlocked: false,
        }
    }
}
