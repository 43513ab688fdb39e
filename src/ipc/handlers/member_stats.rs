use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{open_services, required_culto};
use crate::ipc::types::{AppState, Request};
use crate::model::MemberStats;
use serde_json::{json, Map, Value};

/// Applies a partial update. Only the five known fields are accepted and all
/// of them are free text; absent fields keep their current value.
fn merge_stats_patch(current: &mut MemberStats, patch: &Map<String, Value>) -> Result<(), String> {
    for (k, v) in patch {
        let Some(s) = v.as_str() else {
            return Err(format!("{} must be a string", k));
        };
        match k.as_str() {
            "totalMembros" => current.total_membros = s.to_string(),
            "visitantes" => current.visitantes = s.to_string(),
            "criancas" => current.criancas = s.to_string(),
            "vocacionados" => current.vocacionados = s.to_string(),
            "observacao" => current.observacao = s.to_string(),
            _ => return Err(format!("unknown member stats field: {}", k)),
        }
    }
    Ok(())
}

fn handle_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let culto = match required_culto(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let Some(patch) = req.params.get("patch").and_then(|v| v.as_object()) else {
        return err(&req.id, "bad_params", "patch must be an object", None);
    };
    let (conn, services) = match open_services(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };

    let mut stats = services.record(culto).member_stats.clone();
    if let Err(msg) = merge_stats_patch(&mut stats, patch) {
        return err(&req.id, "bad_params", msg, None);
    }
    if let Err(e) = services.set_member_stats(conn, culto, stats) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "saved": true }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "memberStats.update" => Some(handle_update(state, req)),
        _ => None,
    }
}
