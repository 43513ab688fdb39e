use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{
    open_services, optional_date, required_culto, required_index, required_str,
};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_set_date(state: &mut AppState, req: &Request) -> serde_json::Value {
    let culto = match required_culto(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let date = match optional_date(req, "date") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let (conn, services) = match open_services(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    if let Err(e) = services.set_vocacionados_date(conn, culto, date) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "saved": true }))
}

fn handle_set_ministry(state: &mut AppState, req: &Request) -> serde_json::Value {
    let culto = match required_culto(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let index = match required_index(req, "index") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let responsavel = match required_str(req, "responsavel") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let (conn, services) = match open_services(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    if let Err(e) = services.set_ministry_responsavel(conn, culto, index, &responsavel) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "saved": true }))
}

fn handle_set_name(state: &mut AppState, req: &Request) -> serde_json::Value {
    let culto = match required_culto(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let index = match required_index(req, "index") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let name = match required_str(req, "name") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let (conn, services) = match open_services(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    if let Err(e) = services.set_volunteer_name(conn, culto, index, &name) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "saved": true }))
}

fn handle_add_name(state: &mut AppState, req: &Request) -> serde_json::Value {
    let culto = match required_culto(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let (conn, services) = match open_services(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    if let Err(e) = services.add_volunteer_name(conn, culto) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "saved": true }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "vocacionados.setDate" => Some(handle_set_date(state, req)),
        "vocacionados.setMinistry" => Some(handle_set_ministry(state, req)),
        "vocacionados.setName" => Some(handle_set_name(state, req)),
        "vocacionados.addName" => Some(handle_add_name(state, req)),
        _ => None,
    }
}
