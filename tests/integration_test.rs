use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn catalog_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_therapy-catalog"))
}

fn run(dir: &Path, args: &[&str]) -> Output {
    catalog_cmd().current_dir(dir).args(args).output().unwrap()
}

fn init_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["init"]);
    assert!(output.status.success());
    tmp
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn list_json(dir: &Path, extra: &[&str]) -> Vec<serde_json::Value> {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(extra);
    let output = run(dir, &args);
    assert!(output.status.success(), "{}", stderr(&output));
    serde_json::from_str(&stdout(&output)).unwrap()
}

#[test]
fn test_init_creates_data_directory() {
    let tmp = init_project();

    assert!(tmp.path().join(".therapy-catalog").exists());
    assert!(tmp.path().join(".therapy-catalog/storage.json").exists());
    let config = fs::read_to_string(tmp.path().join(".therapy-catalog/config.yaml")).unwrap();
    assert!(config.contains("admin"));
}

#[test]
fn test_init_twice_fails() {
    let tmp = init_project();

    let output = run(tmp.path(), &["init"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Already initialized"));
}

#[test]
fn test_list_without_init_fails() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), &["list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Not in a therapy-catalog project"));
}

#[test]
fn test_fresh_project_lists_seed_entries() {
    let tmp = init_project();

    let entries = list_json(tmp.path(), &[]);
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["title"], "CBT Thought Records");
    assert_eq!(entries[9]["moduleId"], "act");

    let output = run(tmp.path(), &["list"]);
    let out = stdout(&output);
    assert!(out.contains("Gratitude Journal"));
    assert!(out.contains("Positive Psychology"));
}

#[test]
fn test_non_admin_role_is_denied() {
    let tmp = init_project();

    let output = run(tmp.path(), &["--role", "patient", "list"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Access denied"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_full_entry_workflow() {
    let tmp = init_project();

    // Create
    let output = run(
        tmp.path(),
        &[
            "add",
            "Sleep Training",
            "--description",
            "Build a calming night routine",
            "--icon",
            "Moon",
            "--category",
            "Wellness",
            "--sessions",
            "6",
            "--tag",
            "sleep",
            "--tag",
            "relaxation",
            "--json",
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    let created: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["moduleId"], "sleep-training");
    assert_eq!(created["route"], "/therapy-modules/sleep-training");
    assert_eq!(created["icon"], "Moon");
    assert_eq!(created["sessions"], 6);
    assert_eq!(created["status"], "active");
    assert!(id.parse::<u64>().unwrap() > 10);

    // Persisted
    let entries = list_json(tmp.path(), &[]);
    assert_eq!(entries.len(), 11);
    assert_eq!(entries[10]["id"], id.as_str());

    // Get
    let output = run(tmp.path(), &["get", id.as_str()]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Sleep Training"));
    assert!(out.contains("Wellness"));

    // Edit
    let output = run(
        tmp.path(),
        &["edit", id.as_str(), "--sessions", "8", "--toggle-tag", "sleep"],
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("updated successfully"));

    let output = run(tmp.path(), &["get", id.as_str(), "--json"]);
    let edited: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(edited["sessions"], 8);
    assert_eq!(edited["tags"], serde_json::json!(["relaxation"]));
    assert_eq!(edited["createdAt"], created["createdAt"]);

    // Toggle
    let output = run(tmp.path(), &["toggle", id.as_str()]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Sleep Training deactivated"));
    assert!(!stderr(&output).contains("not saved"));

    let inactive = list_json(tmp.path(), &["--status", "inactive"]);
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0]["id"], id.as_str());

    // Delete
    let output = run(tmp.path(), &["delete", id.as_str(), "--force"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("deleted successfully"));

    let entries = list_json(tmp.path(), &[]);
    assert_eq!(entries.len(), 10);
}

#[test]
fn test_add_without_description_fails_validation() {
    let tmp = init_project();

    let output = run(tmp.path(), &["add", "Sleep Training"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Description is required"));

    assert_eq!(list_json(tmp.path(), &[]).len(), 10);
}

#[test]
fn test_add_with_zero_sessions_fails_validation() {
    let tmp = init_project();

    let output = run(
        tmp.path(),
        &["add", "Sleep Training", "-d", "Night routine", "--sessions", "0"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Sessions must be a positive number"));
}

#[test]
fn test_add_with_unknown_icon_fails() {
    let tmp = init_project();

    let output = run(
        tmp.path(),
        &["add", "Sleep Training", "-d", "Night routine", "--icon", "Rocket"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid icon"));
}

#[test]
fn test_delete_without_force_in_non_interactive_mode_fails() {
    let tmp = init_project();

    let output = run(tmp.path(), &["delete", "4"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));
    assert_eq!(list_json(tmp.path(), &[]).len(), 10);
}

#[test]
fn test_delete_unknown_id_fails() {
    let tmp = init_project();

    let output = run(tmp.path(), &["delete", "404", "--force"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Entry not found: 404"));
}

#[test]
fn test_seed_changes_are_not_persisted() {
    let tmp = init_project();

    let output = run(tmp.path(), &["toggle", "3"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Stress Management deactivated"));
    assert!(stderr(&output).contains("not saved"));

    let output = run(tmp.path(), &["edit", "3", "--sessions", "9"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("updated successfully"));
    assert!(stderr(&output).contains("not saved"));

    let inactive = list_json(tmp.path(), &["--status", "inactive"]);
    assert!(inactive.is_empty());
}

#[test]
fn test_search_and_filter() {
    let tmp = init_project();

    let hits = list_json(tmp.path(), &["--search", "gratitude"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Gratitude Journal");

    let output = run(tmp.path(), &["search", "tag:journaling", "--json"]);
    assert!(output.status.success());
    let hits: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    let titles: Vec<&str> = hits.iter().map(|h| h["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["CBT Thought Records", "Gratitude Journal"]);

    let output = run(tmp.path(), &["search", "status:inactive"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No results found"));
}

#[test]
fn test_invalid_status_filter_fails() {
    let tmp = init_project();

    let output = run(tmp.path(), &["list", "--status", "archived"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid status filter"));
}

#[test]
fn test_corrupt_overlay_falls_back_to_seed() {
    let tmp = init_project();
    fs::write(
        tmp.path().join(".therapy-catalog/storage.json"),
        r#"{"mindcare_admin_therapy_modules": "not json at all"}"#,
    )
    .unwrap();

    let entries = list_json(tmp.path(), &[]);
    assert_eq!(entries.len(), 10);
}

#[test]
fn test_stats() {
    let tmp = init_project();

    let output = run(
        tmp.path(),
        &["add", "Sleep Training", "-d", "Night routine", "--sessions", "5"],
    );
    assert!(output.status.success());

    let output = run(tmp.path(), &["stats", "--json"]);
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(stats["total"], 11);
    assert_eq!(stats["active"], 11);
    assert_eq!(stats["categories"], 10);
    assert_eq!(stats["total_sessions"], 140 + 5);
}

#[test]
fn test_overlay_id_in_seed_range_is_reported() {
    let tmp = init_project();
    let overlay = serde_json::json!([{
        "id": "7",
        "title": "Imported",
        "description": "From an old export",
        "icon": "Leaf",
        "color": "from-teal-500 to-green-500",
        "duration": "10 min",
        "difficulty": "Beginner",
        "sessions": 3,
        "category": "Wellness",
        "tags": [],
        "status": "active",
        "route": "/therapy-modules/imported",
        "moduleId": "imported",
        "createdAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-01T00:00:00.000Z"
    }]);
    let slots = serde_json::json!({ "mindcare_admin_therapy_modules": overlay.to_string() });
    fs::write(
        tmp.path().join(".therapy-catalog/storage.json"),
        slots.to_string(),
    )
    .unwrap();

    let output = run(tmp.path(), &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Imported"));
    assert!(stderr(&output).contains("will be dropped on the next save"));
}

#[test]
fn test_options_lists_vocabularies() {
    let output = catalog_cmd().args(["options"]).output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Gamepad2"));
    assert!(out.contains("Blue to Cyan"));
    assert!(out.contains("Acceptance Therapy"));
    assert!(out.contains("gratitude"));
}

#[test]
fn test_unreadable_stored_entry_does_not_wipe_the_rest() {
    let tmp = init_project();
    let good = serde_json::json!({
        "id": "100",
        "title": "Kept",
        "description": "Valid entry",
        "icon": "Leaf",
        "color": "from-teal-500 to-green-500",
        "duration": "10 min",
        "difficulty": "Beginner",
        "sessions": 3,
        "category": "Wellness",
        "tags": [],
        "status": "active",
        "route": "/therapy-modules/kept",
        "moduleId": "kept",
        "createdAt": "2025-01-01T00:00:00.000Z",
        "updatedAt": "2025-01-01T00:00:00.000Z"
    });
    let mut odd = good.clone();
    odd["id"] = serde_json::json!("300");
    odd["title"] = serde_json::json!("Odd");
    odd["icon"] = serde_json::json!("Rocket");
    let overlay = serde_json::json!([good, odd]);
    let slots = serde_json::json!({ "mindcare_admin_therapy_modules": overlay.to_string() });
    fs::write(
        tmp.path().join(".therapy-catalog/storage.json"),
        slots.to_string(),
    )
    .unwrap();

    let output = run(tmp.path(), &["list"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Kept"));
    assert!(stderr(&output).contains("could not be loaded"));

    let output = run(
        tmp.path(),
        &["add", "Sleep Training", "-d", "Night routine"],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let entries = list_json(tmp.path(), &[]);
    assert_eq!(entries.len(), 12);
    assert_eq!(entries[10]["id"], "100");

    let raw = fs::read_to_string(tmp.path().join(".therapy-catalog/storage.json")).unwrap();
    assert!(raw.contains("Rocket"));
}
