use crate::ipc::error::{err, ok};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::model::OBSERVATION_PASSWORD;
use serde_json::json;

fn handle_status(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "unlocked": state.observation_unlocked }))
}

/// Unlocks the observation fields for the rest of the session. The check is
/// an exact match against the shared passphrase; a mismatch leaves the state
/// untouched. There is no lockout and no way to re-lock.
fn handle_unlock(state: &mut AppState, req: &Request) -> serde_json::Value {
    let password = match required_str(req, "password") {
        Ok(v) => v,
        Err(e) => return e,
    };
    if password != OBSERVATION_PASSWORD {
        return err(&req.id, "wrong_password", "Senha incorreta", None);
    }
    state.observation_unlocked = true;
    ok(
        &req.id,
        json!({
            "unlocked": true,
            "message": "Você pode editar as observações agora."
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "observation.status" => Some(handle_status(state, req)),
        "observation.unlock" => Some(handle_unlock(state, req)),
        _ => None,
    }
}
