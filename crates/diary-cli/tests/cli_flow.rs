use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_diary"))
}

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn store_path(&self) -> PathBuf {
        self.dir.path().join("data").join("store.json")
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.dir.path().join("xdg-data"))
            .env("DIARY_STORE", self.store_path())
            .env_remove("DIARY_CONFIG")
            .env_remove("DIARY_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run diary")
    }

    fn json(&self, args: &[&str]) -> Value {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "diary {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("valid json")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn read_store(path: &Path) -> Value {
    let raw = std::fs::read_to_string(path).expect("store file");
    serde_json::from_str(&raw).expect("store is a json object")
}

#[test]
fn test_add_show_day_search_delete_flow() {
    let sb = Sandbox::new();

    let added = sb.json(&[
        "add",
        "--text",
        "  walked to the lake  ",
        "--date",
        "2024-05-01",
        "--tag",
        "Walk",
        "--tag",
        "lake",
        "--json",
    ]);
    let id = added["id"].as_str().expect("id").to_string();
    assert!(id.starts_with("entry_"));
    assert_eq!(added["text"], "walked to the lake");
    assert_eq!(added["date"], "2024-05-01");
    assert!(added["createdAt"].is_i64());

    let shown = sb.json(&["show", &id, "--json"]);
    assert_eq!(shown, added);

    let day = sb.json(&["day", "2024-05-01", "--json"]);
    assert_eq!(day.as_array().map(Vec::len), Some(1));
    let other_day = sb.json(&["day", "2024-05-02", "--json"]);
    assert_eq!(other_day.as_array().map(Vec::len), Some(0));

    let found = sb.json(&["search", "WALK", "--json"]);
    assert_eq!(found[0]["id"], id.as_str());

    let tags = sb.json(&["tags", "--json"]);
    assert_eq!(tags, serde_json::json!(["lake", "Walk"]));

    let delete = sb.run(&["delete", &id, "--quiet"]);
    assert!(delete.status.success());

    let missing = sb.run(&["show", &id]);
    assert_eq!(missing.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("Entry not found"));
}

#[test]
fn test_store_file_layout() {
    let sb = Sandbox::new();
    let output = sb.run(&["add", "--text", "hello", "--date", "2024-01-02", "--quiet"]);
    assert!(output.status.success());
    let id = stdout(&output).trim().to_string();

    let store = read_store(&sb.store_path());
    let raw_entries = store["@daily_story_entries"].as_str().expect("entries blob");
    let entries: Value = serde_json::from_str(raw_entries).expect("entries array");
    assert_eq!(entries[0]["id"], id.as_str());
    assert_eq!(entries[0]["imageUris"], serde_json::json!([]));
    assert_eq!(entries[0]["tags"], serde_json::json!([]));
}

#[test]
fn test_edit_replaces_text_and_tags() {
    let sb = Sandbox::new();
    let added = sb.json(&[
        "add", "--text", "draft", "--date", "2024-02-02", "--tag", "old", "--json",
    ]);
    let id = added["id"].as_str().expect("id");

    let edited = sb.json(&[
        "edit",
        id,
        "--text",
        "final",
        "--clear-tags",
        "--tag",
        "new",
        "--json",
    ]);
    assert_eq!(edited["text"], "final");
    assert_eq!(edited["tags"], serde_json::json!(["new"]));
    assert_eq!(edited["createdAt"], added["createdAt"]);
}

#[test]
fn test_extra_tags_are_skipped() {
    let sb = Sandbox::new();
    let output = sb.run(&[
        "add", "--text", "x", "--date", "2024-02-02", "-t", "a", "-t", "b", "-t", "c", "-t",
        "d", "--json",
    ]);
    assert!(output.status.success());
    let entry: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(entry["tags"], serde_json::json!(["a", "b", "c"]));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Skipped tag"));
}

#[test]
fn test_on_this_day_lists_every_year() {
    let sb = Sandbox::new();
    for date in ["2022-12-25", "2024-12-25", "2024-12-24"] {
        let output = sb.run(&["add", "--text", date, "--date", date, "--quiet"]);
        assert!(output.status.success());
    }

    let entries = sb.json(&["on-this-day", "--month", "12", "--day", "25", "--json"]);
    let dates: Vec<&str> = entries
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|e| e["date"].as_str())
        .collect();
    assert_eq!(dates, vec!["2024-12-25", "2022-12-25"]);
}

#[test]
fn test_stats_json() {
    let sb = Sandbox::new();
    for (date, tag) in [
        ("2024-01-05", "a"),
        ("2024-01-09", "a"),
        ("2024-03-01", "b"),
        ("2023-03-01", "b"),
    ] {
        let output = sb.run(&["add", "--text", "x", "--date", date, "--tag", tag, "--quiet"]);
        assert!(output.status.success());
    }

    let stats = sb.json(&["stats", "--year", "2024", "--pie", "--json"]);
    assert_eq!(stats["year"], 2024);
    assert_eq!(stats["daysWithEntries"], 3);
    assert_eq!(stats["topMonth"], 1);
    assert_eq!(stats["monthCounts"][0], 2);
    assert_eq!(stats["topTags"][0]["tag"], "a");
    assert_eq!(stats["topTags"][0]["rank"], 1);
    assert_eq!(stats["topTags"][1]["rank"], 2);
    assert_eq!(stats["pie"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_calendar_plain_lists_marked_dates() {
    let sb = Sandbox::new();
    for date in ["2024-05-03", "2024-05-03", "2024-05-20", "2024-06-01"] {
        let output = sb.run(&["add", "--text", "x", "--date", date, "--quiet"]);
        assert!(output.status.success());
    }

    let output = sb.run(&["calendar", "--year", "2024", "--month", "5", "--format", "plain"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2024-05-03\n2024-05-20\n");

    let grid = sb.json(&["calendar", "--year", "2024", "--month", "5", "--json"]);
    let cells = grid.as_array().expect("array");
    // May 2024 starts on a Wednesday.
    assert_eq!(cells.len(), 3 + 31);
    assert!(cells[0]["day"].is_null());
    assert_eq!(cells[3 + 2]["day"], 3);
    assert_eq!(cells[3 + 2]["hasEntries"], true);
    assert_eq!(cells[3 + 3]["hasEntries"], false);
}

#[test]
fn test_week_starts_on_sunday() {
    let sb = Sandbox::new();
    let output = sb.run(&["add", "--text", "x", "--date", "2024-05-01", "--quiet"]);
    assert!(output.status.success());

    let week = sb.json(&["week", "2024-05-01", "--json"]);
    let days = week.as_array().expect("array");
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-04-28");
    assert_eq!(days[0]["label"], "Sun");
    assert_eq!(days[3]["entryCount"], 1);
}

#[test]
fn test_invalid_date_is_input_error() {
    let sb = Sandbox::new();
    let output = sb.run(&["add", "--text", "x", "--date", "2024-13-40"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(!sb.store_path().exists());
}

#[test]
fn test_image_without_text_is_input_error() {
    let sb = Sandbox::new();
    let output = sb.run(&[
        "add", "--text", "   ", "--date", "2024-01-01", "--image", "a.jpg",
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert!(!sb.store_path().exists());
}

#[test]
fn test_edit_to_blank_text_is_input_error() {
    let sb = Sandbox::new();
    let added = sb.json(&[
        "add", "--text", "kept", "--date", "2024-01-01", "--image", "a.jpg", "--json",
    ]);
    let id = added["id"].as_str().expect("id");

    let output = sb.run(&["edit", id, "--text", " "]);
    assert_eq!(output.status.code(), Some(4));

    let shown = sb.json(&["show", id, "--json"]);
    assert_eq!(shown["text"], "kept");
}

#[test]
fn test_week_counts_entries_per_day() {
    let sb = Sandbox::new();
    for date in ["2024-04-28", "2024-05-01", "2024-05-01", "2024-05-05"] {
        let output = sb.run(&["add", "--text", "x", "--date", date, "--quiet"]);
        assert!(output.status.success());
    }

    let week = sb.json(&["week", "2024-05-02", "--json"]);
    let counts: Vec<i64> = week
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|d| d["entryCount"].as_i64())
        .collect();
    assert_eq!(counts, vec![1, 0, 0, 2, 0, 0, 0]);
}

#[test]
fn test_blank_search_is_input_error() {
    let sb = Sandbox::new();
    let output = sb.run(&["search", "   "]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_paid_defaults_false() {
    let sb = Sandbox::new();
    let paid = sb.json(&["paid", "--json"]);
    assert_eq!(paid, serde_json::json!({ "paid": false }));
}

#[test]
fn test_init_writes_config_and_store() {
    let sb = Sandbox::new();
    let custom = sb.dir.path().join("custom").join("diary.json");
    let custom_arg = custom.to_string_lossy().to_string();

    let output = sb.run(&["init", &custom_arg, "--preview-chars", "20", "--quiet"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(std::fs::read_to_string(&custom).expect("store"), "{}");

    let config_path = sb.config_home().join("diary").join("config.toml");
    let config = std::fs::read_to_string(&config_path).expect("config");
    assert!(config.contains("diary.json"));
    assert!(config.contains("preview_chars = 20"));

    let again = sb.run(&["init", &custom_arg]);
    assert_eq!(again.status.code(), Some(4));

    let forced = sb.run(&["init", &custom_arg, "--force", "--quiet"]);
    assert!(forced.status.success());
}

#[test]
fn test_config_store_path_is_used_without_flag() {
    let sb = Sandbox::new();
    let custom = sb.dir.path().join("configured.json");
    let custom_arg = custom.to_string_lossy().to_string();
    let init = sb.run(&["init", &custom_arg, "--quiet"]);
    assert!(init.status.success());

    let output = sb
        .command()
        .env_remove("DIARY_STORE")
        .args(["add", "--text", "x", "--date", "2024-01-01", "--quiet"])
        .output()
        .expect("run diary");
    assert!(output.status.success());

    let store = read_store(&custom);
    assert!(store.get("@daily_story_entries").is_some());
}
