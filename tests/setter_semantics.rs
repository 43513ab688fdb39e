mod test_support;

use serde_json::json;
use test_support::{open_workspace, request_err, request_ok, spawn_sidecar};

#[test]
fn out_of_range_indexes_are_silent_noops() {
    let workspace = test_support::temp_dir("cultosd-setter-noop");
    let (mut child, mut stdin, mut reader) = open_workspace(&workspace);

    let before = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "culto.get",
        json!({ "culto": "saturday" }),
    );

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.setResponsible",
        json!({ "culto": "saturday", "index": 99, "name": "Fantasma" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.setDate",
        json!({ "culto": "saturday", "index": 42, "date": "2026-08-08" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "vocacionados.setMinistry",
        json!({ "culto": "saturday", "index": 7, "responsavel": "Fantasma" }),
    );

    let after = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "culto.get",
        json!({ "culto": "saturday" }),
    );
    assert_eq!(before, after);

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn repeating_a_setter_is_idempotent() {
    let workspace = test_support::temp_dir("cultosd-setter-idempotent");
    let (mut child, mut stdin, mut reader) = open_workspace(&workspace);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "schedule.setResponsible",
        json!({ "culto": "sunday-evening", "index": 0, "name": "Maria" }),
    );
    let first = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "culto.get",
        json!({ "culto": "sunday-evening" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.setResponsible",
        json!({ "culto": "sunday-evening", "index": 0, "name": "Maria" }),
    );
    let second = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "culto.get",
        json!({ "culto": "sunday-evening" }),
    );
    assert_eq!(first, second);

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn free_text_operations_do_not_disturb_ministry_rosters() {
    let workspace = test_support::temp_dir("cultosd-roster-modes");
    let (mut child, mut stdin, mut reader) = open_workspace(&workspace);

    let before = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "culto.get",
        json!({ "culto": "thursday" }),
    );
    assert_eq!(
        before
            .pointer("/vocacionados/ministries")
            .and_then(|v| v.as_array())
            .map(|a| a.len()),
        Some(7)
    );

    // The roster was initialized in ministries mode, so the free-text list
    // operations have nothing to act on.
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "vocacionados.addName",
        json!({ "culto": "thursday" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "vocacionados.setName",
        json!({ "culto": "thursday", "index": 0, "name": "Ana" }),
    );

    let after = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "culto.get",
        json!({ "culto": "thursday" }),
    );
    assert_eq!(before, after);

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn member_stats_patches_merge_and_reject_unknown_fields() {
    let workspace = test_support::temp_dir("cultosd-stats-merge");
    let (mut child, mut stdin, mut reader) = open_workspace(&workspace);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "memberStats.update",
        json!({ "culto": "saturday", "patch": { "totalMembros": "100" } }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "memberStats.update",
        json!({ "culto": "saturday", "patch": { "visitantes": "5" } }),
    );
    let stats = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "culto.get",
        json!({ "culto": "saturday" }),
    );
    assert_eq!(
        stats.pointer("/memberStats/totalMembros").and_then(|v| v.as_str()),
        Some("100")
    );
    assert_eq!(
        stats.pointer("/memberStats/visitantes").and_then(|v| v.as_str()),
        Some("5")
    );

    let code = request_err(
        &mut stdin,
        &mut reader,
        "4",
        "memberStats.update",
        json!({ "culto": "saturday", "patch": { "membros": "1" } }),
    );
    assert_eq!(code, "bad_params");
    let code = request_err(
        &mut stdin,
        &mut reader,
        "5",
        "memberStats.update",
        json!({ "culto": "saturday", "patch": { "visitantes": 5 } }),
    );
    assert_eq!(code, "bad_params");

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn null_date_clears_and_bad_params_are_rejected() {
    let workspace = test_support::temp_dir("cultosd-date-params");
    let (mut child, mut stdin, mut reader) = open_workspace(&workspace);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "schedule.setDate",
        json!({ "culto": "saturday", "index": 0, "date": "2026-08-08" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.setDate",
        json!({ "culto": "saturday", "index": 0, "date": null }),
    );
    let saturday = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "culto.get",
        json!({ "culto": "saturday" }),
    );
    assert!(saturday
        .pointer("/schedule/0/date")
        .map(|v| v.is_null())
        .unwrap_or(true));

    let code = request_err(
        &mut stdin,
        &mut reader,
        "4",
        "schedule.setDate",
        json!({ "culto": "saturday", "index": 0, "date": "08/08/2026" }),
    );
    assert_eq!(code, "bad_params");
    let code = request_err(
        &mut stdin,
        &mut reader,
        "5",
        "schedule.setResponsible",
        json!({ "culto": "friday", "index": 0, "name": "x" }),
    );
    assert_eq!(code, "bad_params");

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn mutations_need_a_selected_workspace() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let code = request_err(
        &mut stdin,
        &mut reader,
        "1",
        "schedule.setResponsible",
        json!({ "culto": "saturday", "index": 0, "name": "x" }),
    );
    assert_eq!(code, "no_workspace");
    let code = request_err(&mut stdin, &mut reader, "2", "cultos.open", json!({}));
    assert_eq!(code, "no_workspace");

    drop(stdin);
    let _ = child.wait();
}
