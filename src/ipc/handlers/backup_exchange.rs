use crate::backup;
use crate::db;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::state::Services;
use serde_json::json;
use std::path::PathBuf;

fn workspace_for(req: &Request, state: &AppState) -> Result<PathBuf, serde_json::Value> {
    if let Some(p) = req.params.get("workspacePath").and_then(|v| v.as_str()) {
        return Ok(PathBuf::from(p));
    }
    state
        .workspace
        .clone()
        .ok_or_else(|| err(&req.id, "no_workspace", "select a workspace first", None))
}

fn handle_export_bundle(state: &mut AppState, req: &Request) -> serde_json::Value {
    let out_path = match required_str(req, "outPath") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let workspace = match workspace_for(req, state) {
        Ok(v) => v,
        Err(e) => return e,
    };

    match backup::export_workspace_bundle(&workspace, &PathBuf::from(&out_path)) {
        Ok(summary) => ok(
            &req.id,
            json!({
                "bundleFormat": summary.bundle_format,
                "entryCount": summary.entry_count,
                "outPath": out_path,
            }),
        ),
        Err(e) => err(&req.id, "export_failed", format!("{e:?}"), None),
    }
}

fn handle_import_bundle(state: &mut AppState, req: &Request) -> serde_json::Value {
    let in_path = match required_str(req, "inPath") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let workspace = match workspace_for(req, state) {
        Ok(v) => v,
        Err(e) => return e,
    };

    let summary = match backup::import_workspace_bundle(&PathBuf::from(&in_path), &workspace) {
        Ok(s) => s,
        Err(e) => return err(&req.id, "import_failed", format!("{e:?}"), None),
    };

    // When the live workspace was just replaced, reopen it and rehydrate so
    // the in-memory records match the imported storage.
    if state.workspace.as_deref() == Some(workspace.as_path()) {
        let conn = match db::open_db(&workspace) {
            Ok(c) => c,
            Err(e) => return err(&req.id, "db_open_failed", format!("{e:?}"), None),
        };
        let services = match Services::load(&conn) {
            Ok(s) => s,
            Err(e) => return err(&req.id, "db_query_failed", format!("{e:?}"), None),
        };
        state.db = Some(conn);
        state.services = Some(services);
    }

    ok(
        &req.id,
        json!({ "bundleFormatDetected": summary.bundle_format_detected }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "backup.exportBundle" => Some(handle_export_bundle(state, req)),
        "backup.importBundle" => Some(handle_import_bundle(state, req)),
        _ => None,
    }
}
