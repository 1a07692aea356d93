use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const SAMPLE_JSON: &str = r#"{
    "sampleId": "CLI-001",
    "sampleName": "CLI sample",
    "analysisDate": "2024-03-01T08:00:00Z",
    "peaks": [
        {"peakName": "Alpha", "retentionTime": 1.5, "area": 500.0, "height": 60.0},
        {"peakName": "Beta", "retentionTime": 4.0, "area": 900.0, "height": 120.0}
    ]
}"#;

fn bin() -> String {
    env!("CARGO_BIN_EXE_lcmgen").to_string()
}

fn run<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(bin()).args(args).output().unwrap()
}

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("sample.json");
    std::fs::write(&input, SAMPLE_JSON).unwrap();
    input
}

#[test]
fn cli_positional_generate() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("sample.lcm");

    let out = run([&input, &output]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!("LCM file generated successfully: {}", output.display())
    );
    assert_eq!(std::fs::metadata(&output).unwrap().len(), 8427 + 2 * 82);
}

#[test]
fn cli_generate_subcommand_matches_positional() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());
    let positional = dir.path().join("positional.lcm");
    let subcommand = dir.path().join("subcommand.lcm");

    assert!(run([&input, &positional]).status.success());
    let out = Command::new(bin())
        .arg("generate")
        .arg(&input)
        .arg(&subcommand)
        .output()
        .unwrap();
    assert!(out.status.success());

    assert_eq!(
        std::fs::read(&positional).unwrap(),
        std::fs::read(&subcommand).unwrap()
    );
}

#[test]
fn cli_gaussian_profile_changes_trace() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());
    let parabolic = dir.path().join("parabolic.lcm");
    let gaussian = dir.path().join("gaussian.lcm");

    assert!(run([&input, &parabolic]).status.success());
    let out = Command::new(bin())
        .arg("generate")
        .arg(&input)
        .arg(&gaussian)
        .args(["--profile", "gaussian"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let parabolic = std::fs::read(&parabolic).unwrap();
    let gaussian = std::fs::read(&gaussian).unwrap();
    assert_eq!(parabolic.len(), gaussian.len());
    assert_ne!(parabolic, gaussian);
}

#[test]
fn cli_config_file_sets_baseline() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());
    let config = dir.path().join("lcmgen.toml");
    let output = dir.path().join("configured.lcm");
    std::fs::write(&config, "[chromatogram]\nbaseline = 0.0\n").unwrap();

    let out = Command::new(bin())
        .arg("generate")
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(out.status.success());

    let file = lcmgen::reader::LcmFile::open(&output).unwrap();
    // far from both peaks only the baseline remains
    assert_eq!(file.chromatogram.intensities[0], 0.0);
}

#[test]
fn cli_invalid_date_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad_date.json");
    let output = dir.path().join("bad_date.lcm");
    std::fs::write(
        &input,
        r#"{"sampleId": "X", "sampleName": "X", "analysisDate": "not a date", "peaks": []}"#,
    )
    .unwrap();

    let out = run([&input, &output]);
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("Error generating LCM file: "), "{}", stderr);
    assert!(stderr.contains("not a date"), "{}", stderr);
    assert!(!output.exists());
}

#[test]
fn cli_invalid_json_fails() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.json");
    let output = dir.path().join("broken.lcm");
    std::fs::write(&input, "{\"sampleId\": ").unwrap();

    let out = run([&input, &output]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error generating LCM file: "));
    assert!(!output.exists());
}

#[test]
fn cli_missing_input_fails() {
    let dir = tempdir().unwrap();
    let out = run([dir.path().join("missing.json"), dir.path().join("out.lcm")]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Error generating LCM file: "));
}

#[test]
fn cli_info_prints_contents() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("sample.lcm");
    assert!(run([&input, &output]).status.success());

    let out = Command::new(bin()).arg("info").arg(&output).output().unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Sample ID: CLI-001"));
    assert!(stdout.contains("Alpha"));
    assert!(stdout.contains("Beta"));
    assert!(stdout.contains("Points: 1000"));
}

#[test]
fn cli_validate_reports_pass_and_fail() {
    let dir = tempdir().unwrap();
    let input = write_sample(dir.path());
    let output = dir.path().join("sample.lcm");
    assert!(run([&input, &output]).status.success());

    let out = Command::new(bin()).arg("validate").arg(&output).output().unwrap();
    assert!(out.status.success());

    let mut bytes = std::fs::read(&output).unwrap();
    bytes.truncate(bytes.len() - 3);
    let corrupt = dir.path().join("corrupt.lcm");
    std::fs::write(&corrupt, bytes).unwrap();

    let out = Command::new(bin()).arg("validate").arg(&corrupt).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn cli_wrong_argument_count_exits_one() {
    let dir = tempdir().unwrap();
    let one = dir.path().join("only_one.json");
    let three = [
        dir.path().join("a.json"),
        dir.path().join("b.lcm"),
        dir.path().join("c"),
    ];

    let no_args: [&str; 0] = [];
    for out in [run(no_args), run([&one]), run(&three)] {
        assert_eq!(out.status.code(), Some(1));
        assert!(!out.stderr.is_empty());
    }
}

#[test]
fn cli_help_and_version_exit_zero() {
    for flag in ["--help", "--version"] {
        let out = run([flag]);
        assert_eq!(out.status.code(), Some(0));
        assert!(!out.stdout.is_empty());
    }
}

#[test]
fn cli_input_named_like_subcommand() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("info"), SAMPLE_JSON).unwrap();

    let out = Command::new(bin())
        .current_dir(dir.path())
        .args(["./info", "out.lcm"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(dir.path().join("out.lcm").exists());

    let help = String::from_utf8_lossy(&run(["--help"]).stdout).into_owned();
    assert!(help.contains("./info"));
}
