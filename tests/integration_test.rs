use std::fs;
use std::path::Path;
use std::process::Command;

fn cargo_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_planner-pdf"))
}

fn output_dir() -> &'static Path {
    Path::new("tests/output")
}

fn setup() {
    fs::create_dir_all(output_dir()).expect("Failed to create output directory");
}

fn cleanup_file(name: &str) {
    let path = output_dir().join(name);
    if path.exists() {
        fs::remove_file(&path).ok();
    }
}

fn out(name: &str) -> String {
    format!("tests/output/{}", name)
}

fn assert_pdf(name: &str) {
    let path = output_dir().join(name);
    assert!(path.exists(), "PDF file was not created");

    let bytes = fs::read(&path).expect("Failed to read PDF");
    assert!(bytes.len() > 1000, "PDF file is too small, likely empty or corrupt");
    assert!(bytes.starts_with(b"%PDF"), "Output is not a PDF");
}

fn read_manifest(name: &str) -> Vec<serde_json::Value> {
    let text = fs::read_to_string(output_dir().join(name)).expect("Failed to read manifest");
    serde_json::from_str(&text).expect("Manifest is not a JSON array")
}

#[test]
fn test_planner_for_year() {
    setup();
    let output_file = "test-planner-2025.pdf";
    let manifest_file = "test-planner-2025.json";
    cleanup_file(output_file);
    cleanup_file(manifest_file);

    let output = cargo_bin()
        .args([
            "planner",
            "--year", "2025",
            "-o", &out(output_file),
            "--manifest", &out(manifest_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(output_file);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pages: 382"), "Unexpected summary: {}", stdout);

    let manifest = read_manifest(manifest_file);
    assert_eq!(manifest.len(), 382);
    assert_eq!(manifest[0]["kind"], "cover");
    assert_eq!(manifest[5]["anchor"], "Month_1");
    assert_eq!(manifest[6]["anchor"], "Day_2025_1_1");
    assert_eq!(manifest[381]["anchor"], "Day_2025_12_31");

    let bytes = fs::read(output_dir().join(output_file)).expect("Failed to read PDF");
    assert!(bytes.windows(5).any(|w| w == b"/GoTo"), "No internal links in planner");
}

#[test]
fn test_leap_year_manifest() {
    setup();
    let output_file = "test-planner-2024.pdf";
    let manifest_file = "test-planner-2024.json";
    cleanup_file(output_file);
    cleanup_file(manifest_file);

    let output = cargo_bin()
        .args([
            "--manifest", &out(manifest_file),
            "planner",
            "-y", "2024",
            "-o", &out(output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);

    let manifest = read_manifest(manifest_file);
    assert_eq!(manifest.len(), 383);
    let days = manifest.iter().filter(|e| e["kind"] == "day").count();
    assert_eq!(days, 366);
    assert!(manifest.iter().any(|e| e["anchor"] == "Day_2024_2_29"));
}

#[test]
fn test_manifest_is_deterministic() {
    setup();
    let mut manifests = Vec::new();

    for run in ["a", "b"] {
        let output_file = format!("test-determinism-{}.pdf", run);
        let manifest_file = format!("test-determinism-{}.json", run);
        cleanup_file(&output_file);
        cleanup_file(&manifest_file);

        let output = cargo_bin()
            .args([
                "planner",
                "--year", "2026",
                "-o", &out(&output_file),
                "--manifest", &out(&manifest_file),
            ])
            .output()
            .expect("Failed to execute command");
        assert!(output.status.success(), "Command failed: {:?}", output);

        manifests.push(
            fs::read_to_string(output_dir().join(&manifest_file)).expect("Failed to read manifest"),
        );
    }

    assert_eq!(manifests[0], manifests[1]);
}

#[test]
fn test_meeting_notes() {
    setup();
    let output_file = "test-meeting-notes.pdf";
    let manifest_file = "test-meeting-notes.json";
    cleanup_file(output_file);
    cleanup_file(manifest_file);

    let output = cargo_bin()
        .args([
            "meeting_notes",
            "-o", &out(output_file),
            "--manifest", &out(manifest_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(output_file);

    let manifest = read_manifest(manifest_file);
    assert_eq!(manifest.len(), 2);
    assert_eq!(manifest[0]["kind"], "meeting-summary");
    assert_eq!(manifest[1]["kind"], "meeting-notes");
}

#[test]
fn test_bi_requirements() {
    setup();
    let output_file = "test-bi-requirements.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args(["bi_requirements", "-o", &out(output_file)])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(output_file);

    // Templates have no anchored pages to jump to
    let bytes = fs::read(output_dir().join(output_file)).expect("Failed to read PDF");
    assert!(!bytes.windows(5).any(|w| w == b"/GoTo"));
}

#[test]
fn test_missing_icon_directory_is_tolerated() {
    setup();
    let output_file = "test-no-icons.pdf";
    cleanup_file(output_file);

    let output = cargo_bin()
        .args([
            "--icons", "tests/output/no-such-icons",
            "meeting-notes",
            "-o", &out(output_file),
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_pdf(output_file);
}

#[test]
fn test_non_numeric_year_fails() {
    let output = cargo_bin()
        .args(["planner", "--year", "next", "-o", "tests/output/never.pdf"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_out_of_range_year_fails() {
    let output = cargo_bin()
        .args(["planner", "--year", "0", "-o", "tests/output/never.pdf"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_unknown_command_fails() {
    let output = cargo_bin()
        .args(["agenda"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Expected usage error, got: {}", stderr);
}

#[test]
fn test_unwritable_output_reports_error() {
    let output = cargo_bin()
        .args(["bi_requirements", "-o", "tests/output/missing-dir/out.pdf"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "Expected error message, got: {}", stderr);
}
