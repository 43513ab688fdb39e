use super::handlers;
use super::types::{AppState, Request};
use crate::ipc::error::err;

pub fn handle_request(state: &mut AppState, req: Request) -> serde_json::Value {
    if let Some(resp) = handlers::core::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::schedule::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::vocacionados::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::member_stats::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::observation::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::reports::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::backup_exchange::try_handle(state, &req) {
        return resp;
    }

    err(
        &req.id,
        "not_implemented",
        format!("unknown method: {}", req.method),
        None,
    )
}
