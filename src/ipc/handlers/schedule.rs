use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{
    open_services, optional_date, required_culto, required_index, required_str, services_ref,
};
use crate::ipc::types::{AppState, Request};
use crate::state::ServiceRecord;
use serde_json::json;

fn culto_json(rec: &ServiceRecord) -> serde_json::Value {
    json!({
        "culto": rec.culto.id(),
        "label": rec.culto.label(),
        "schedule": rec.schedule,
        "vocacionados": rec.vocacionados,
        "memberStats": rec.member_stats,
    })
}

fn handle_cultos_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let services = match services_ref(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let cultos: Vec<serde_json::Value> = services.records().iter().map(culto_json).collect();
    ok(&req.id, json!({ "cultos": cultos }))
}

fn handle_culto_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let culto = match required_culto(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let services = match services_ref(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    ok(&req.id, culto_json(services.record(culto)))
}

fn handle_set_responsible(state: &mut AppState, req: &Request) -> serde_json::Value {
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
    if let Err(e) = services.set_activity_responsible(conn, culto, index, &name) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "saved": true }))
}

fn handle_set_date(state: &mut AppState, req: &Request) -> serde_json::Value {
    let culto = match required_culto(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let index = match required_index(req, "index") {
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
    if let Err(e) = services.set_activity_date(conn, culto, index, date) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    ok(&req.id, json!({ "saved": true }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "cultos.open" => Some(handle_cultos_open(state, req)),
        "culto.get" => Some(handle_culto_get(state, req)),
        "schedule.setResponsible" => Some(handle_set_responsible(state, req)),
        "schedule.setDate" => Some(handle_set_date(state, req)),
        _ => None,
    }
}
