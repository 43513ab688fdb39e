use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

/// Opens (or creates) the workspace storage database. The `storage` table is
/// a flat key/value map of JSON payloads, one row per persisted slot.
pub fn open_db(workspace: &Path) -> anyhow::Result<Connection> {
    std::fs::create_dir_all(workspace)?;
    let db_path = workspace.join("cultos.sqlite3");
    let conn = Connection::open(db_path)?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS storage(
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;

    reset_seeded_schedules(&conn)?;

    Ok(conn)
}

/// One-way load migration: the Thursday and Conexão Pré schedules discard
/// any persisted value and restart from their hardcoded defaults on every
/// open. Both keys are still rewritten on the next change. Flagged in
/// DESIGN.md; do not change without product confirmation.
fn reset_seeded_schedules(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "DELETE FROM storage WHERE key IN ('thursdaySchedule', 'conexaoPreSchedule')",
        [],
    )?;
    Ok(())
}

pub fn storage_set_json(
    conn: &Connection,
    key: &str,
    value: &serde_json::Value,
) -> anyhow::Result<()> {
    let text = serde_json::to_string(value)?;
    conn.execute(
        "INSERT INTO storage(key, value) VALUES (?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, text),
    )?;
    Ok(())
}

/// Returns the stored payload, or None when the key is absent or the stored
/// text is not valid JSON. Callers fall back to defaults either way.
pub fn storage_get_json(conn: &Connection, key: &str) -> anyhow::Result<Option<serde_json::Value>> {
    let text: Option<String> = conn
        .query_row("SELECT value FROM storage WHERE key = ?", [key], |r| {
            r.get(0)
        })
        .optional()?;
    Ok(text.and_then(|t| serde_json::from_str(&t).ok()))
}
