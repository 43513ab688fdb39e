use chrono::NaiveDate;
use rusqlite::Connection;
use serde_json::json;

use crate::ipc::error::err;
use crate::ipc::types::{AppState, Request};
use crate::model::Culto;
use crate::state::Services;

pub fn required_str(req: &Request, key: &str) -> Result<String, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

pub fn required_index(req: &Request, key: &str) -> Result<usize, serde_json::Value> {
    req.params
        .get(key)
        .and_then(|v| v.as_u64())
        .map(|v| v as usize)
        .ok_or_else(|| {
            err(
                &req.id,
                "bad_params",
                format!("{} must be a non-negative integer", key),
                None,
            )
        })
}

pub fn required_culto(req: &Request) -> Result<Culto, serde_json::Value> {
    let raw = required_str(req, "culto")?;
    Culto::parse(&raw).ok_or_else(|| {
        err(
            &req.id,
            "bad_params",
            format!("unknown culto: {}", raw),
            Some(json!({ "culto": raw })),
        )
    })
}

/// Reads an optional `YYYY-MM-DD` date parameter; JSON null clears it.
pub fn optional_date(req: &Request, key: &str) -> Result<Option<NaiveDate>, serde_json::Value> {
    let Some(v) = req.params.get(key) else {
        return Ok(None);
    };
    if v.is_null() {
        return Ok(None);
    }
    let Some(s) = v.as_str() else {
        return Err(err(
            &req.id,
            "bad_params",
            format!("{} must be a string or null", key),
            None,
        ));
    };
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            err(
                &req.id,
                "bad_params",
                format!("{} must be formatted YYYY-MM-DD", key),
                None,
            )
        })
}

/// Splits the session into the open storage connection and the hydrated
/// records, or reports that no workspace is selected yet.
pub fn open_services<'a>(
    state: &'a mut AppState,
    req: &Request,
) -> Result<(&'a Connection, &'a mut Services), serde_json::Value> {
    let AppState { db, services, .. } = state;
    match (db.as_ref(), services.as_mut()) {
        (Some(conn), Some(services)) => Ok((conn, services)),
        _ => Err(err(&req.id, "no_workspace", "select a workspace first", None)),
    }
}

pub fn services_ref<'a>(
    state: &'a AppState,
    req: &Request,
) -> Result<&'a Services, serde_json::Value> {
    state
        .services
        .as_ref()
        .ok_or_else(|| err(&req.id, "no_workspace", "select a workspace first", None))
}
