use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use magicstub_testkit::failed_rules;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CLI: i32 = 2;
const EXIT_IO: i32 = 4;

fn base_command() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_magicstub"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_cmd(args: &[&str]) -> Output {
    base_command().args(args).output().expect("run magicstub")
}

fn run_cmd_in(dir: &Path, args: &[&str]) -> Output {
    base_command()
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run magicstub")
}

fn temp_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    dir.push(format!(
        "magicstub-cli-test-{}-{}-{}",
        label,
        std::process::id(),
        nanos
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_exit(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "stdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn assert_empty_dir(dir: &Path) {
    let count = fs::read_dir(dir).expect("read dir").count();
    assert_eq!(count, 0, "unexpected files in {}", dir.display());
}

#[test]
fn creates_file_at_given_path() {
    let dir = temp_dir("create");
    let output = dir.join("result.mp4");

    let out = run_cmd(&["--ext", "mp4", path_str(&output)]);

    assert_exit(&out, EXIT_SUCCESS);
    let written = fs::read(&output).expect("read output");
    assert_eq!(written, magicstub_format::create_file("mp4").expect("mp4"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn written_files_pass_detection_rules() {
    let dir = temp_dir("detect");

    for ext in ["png", "epub", "ogg", "tar", "Z"] {
        let output = dir.join(format!("sample.{ext}"));
        let out = run_cmd(&["--ext", ext, path_str(&output)]);
        assert_exit(&out, EXIT_SUCCESS);

        let written = fs::read(&output).expect("read output");
        let failed = failed_rules(ext, &written).expect("rules");
        assert!(failed.is_empty(), ".{ext} failed {failed:?}");
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn default_output_lands_in_working_directory() {
    let dir = temp_dir("default");

    let out = run_cmd_in(&dir, &["--ext", "png"]);

    assert_exit(&out, EXIT_SUCCESS);
    let expected = dir.join("magicstub-output.png");
    assert!(expected.exists(), "missing {}", expected.display());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn shows_help_without_error() {
    let dir = temp_dir("help");

    for args in [&[][..], &["--help"][..], &["--ext"][..]] {
        let out = run_cmd_in(&dir, args);
        assert_exit(&out, EXIT_SUCCESS);
        assert!(stdout(&out).contains("--ext"), "args {args:?}");
    }

    assert_empty_dir(&dir);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unknown_extension_lists_available() {
    let dir = temp_dir("unknown");

    let out = run_cmd_in(&dir, &["--ext", "unknown"]);

    assert_exit(&out, EXIT_SUCCESS);
    let text = stdout(&out);
    assert!(text.contains("Unknown extension: unknown"));
    assert!(text.contains("Available extensions:"));
    assert!(text.contains("  mp4\n"));
    assert_empty_dir(&dir);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn list_prints_sorted_extensions() {
    let out = run_cmd(&["--list"]);

    assert_exit(&out, EXIT_SUCCESS);
    let text = stdout(&out);
    let names: Vec<&str> = text.lines().collect();
    assert_eq!(names, magicstub_format::extension_names());
}

#[test]
fn refuses_existing_output() {
    let dir = temp_dir("exists");
    let output = dir.join("existing.mp4");
    fs::write(&output, b"existing").expect("write file");

    let out = run_cmd(&["--ext", "mp4", path_str(&output)]);

    assert_exit(&out, EXIT_CLI);
    assert!(String::from_utf8_lossy(&out.stderr).contains("already exists"));
    assert_eq!(fs::read(&output).expect("read output"), b"existing");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reports_write_failure() {
    let dir = temp_dir("write-fail");
    let output = dir.join("missing-dir").join("out.zip");

    let out = run_cmd(&["--ext", "zip", path_str(&output)]);

    assert_exit(&out, EXIT_IO);
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot create file"));
    assert!(!output.exists(), "output should not be created");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rejects_unexpected_arguments() {
    let out = run_cmd(&["--ext", "mp4", "a.mp4", "b.mp4"]);
    assert_exit(&out, EXIT_CLI);
}
