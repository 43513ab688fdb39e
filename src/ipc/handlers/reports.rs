use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{optional_date, services_ref};
use crate::ipc::types::{AppState, Request};
use crate::pdf;
use crate::report::{activities_by_date, CultoFilter};
use serde_json::json;
use std::path::PathBuf;

fn parse_filter(req: &Request) -> Result<CultoFilter, serde_json::Value> {
    match req.params.get("culto").and_then(|v| v.as_str()) {
        None => Ok(CultoFilter::All),
        Some(raw) => CultoFilter::parse(raw).ok_or_else(|| {
            err(
                &req.id,
                "bad_params",
                format!("unknown culto filter: {}", raw),
                Some(json!({ "culto": raw })),
            )
        }),
    }
}

/// The consolidated "what happens on date D" view. Always recomputed from
/// the in-memory records; a missing date yields an empty list, not an error.
fn handle_schedule_model(state: &mut AppState, req: &Request) -> serde_json::Value {
    let date = match optional_date(req, "date") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let filter = match parse_filter(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let services = match services_ref(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let rows = activities_by_date(services.records(), date, filter);
    ok(&req.id, json!({ "activities": rows }))
}

fn handle_export_pdf(state: &mut AppState, req: &Request) -> serde_json::Value {
    let date = match optional_date(req, "date") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let filter = match parse_filter(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let services = match services_ref(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };

    let rows = activities_by_date(services.records(), date, filter);
    let Some(date) = date else {
        return err(
            &req.id,
            "nothing_to_export",
            "Selecione uma data com programações para exportar.",
            None,
        );
    };
    if rows.is_empty() {
        return err(
            &req.id,
            "nothing_to_export",
            "Selecione uma data com programações para exportar.",
            None,
        );
    }

    let bytes = match pdf::render_schedule_pdf(date, &rows) {
        Ok(b) => b,
        Err(e) => return err(&req.id, "pdf_render_failed", e.to_string(), None),
    };

    let file_name = pdf::pdf_file_name(date);
    let out_path = match req.params.get("outPath").and_then(|v| v.as_str()) {
        Some(p) => PathBuf::from(p),
        None => match state.workspace.as_ref() {
            Some(ws) => ws.join(&file_name),
            None => return err(&req.id, "no_workspace", "select a workspace first", None),
        },
    };
    if let Err(e) = std::fs::write(&out_path, &bytes) {
        return err(&req.id, "io_failed", e.to_string(), None);
    }

    ok(
        &req.id,
        json!({
            "path": out_path.to_string_lossy(),
            "fileName": file_name,
            "activityCount": rows.len(),
            "message": "A programação foi exportada com sucesso."
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "reports.scheduleModel" => Some(handle_schedule_model(state, req)),
        "reports.exportPdf" => Some(handle_export_pdf(state, req)),
        _ => None,
    }
}
