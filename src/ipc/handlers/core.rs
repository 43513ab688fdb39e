use crate::db;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::state::Services;
use serde_json::json;
use std::path::PathBuf;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "workspacePath": state.workspace.as_ref().map(|p| p.to_string_lossy().to_string())
        }),
    )
}

fn handle_workspace_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = p else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };

    let conn = match db::open_db(&path) {
        Ok(conn) => conn,
        Err(e) => return err(&req.id, "db_open_failed", format!("{e:?}"), None),
    };
    // Absent or malformed slots hydrate to their defaults; a failure here
    // means the storage itself is unreadable.
    let services = match Services::load(&conn) {
        Ok(s) => s,
        Err(e) => return err(&req.id, "db_query_failed", format!("{e:?}"), None),
    };

    state.workspace = Some(path.clone());
    state.db = Some(conn);
    state.services = Some(services);
    ok(&req.id, json!({ "workspacePath": path.to_string_lossy() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "workspace.select" => Some(handle_workspace_select(state, req)),
        _ => None,
    }
}
