use std::fs;
use std::process::Command;

fn cfntypes(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cfntypes"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run cfntypes")
}

fn write_template(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("template.json");
    fs::write(&path, content).expect("Failed to write template");
    (temp_dir, path)
}

#[test]
fn list_filters_by_service() {
    let output = cfntypes(&["list", "--service", "lambda"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("AWS::Lambda::EventSourceMapping"));
    assert!(stdout.contains("AWS::Lambda::Function"));
    assert!(!stdout.contains("AWS::SQS::Queue"));
}

#[test]
fn list_unknown_service_fails() {
    let output = cfntypes(&["list", "--service", "Nope"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Known services"));
}

#[test]
fn describe_shows_catalog() {
    let output = cfntypes(&["describe", "AWS::ECR::Repository"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ImageTagMutability: String"));
    assert!(stdout.contains("Allowed values: MUTABLE, IMMUTABLE"));
    assert!(stdout.contains("RepositoryUri"));
}

#[test]
fn describe_unknown_type_fails() {
    let output = cfntypes(&["describe", "AWS::S3::Bucket"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown resource type: AWS::S3::Bucket"));
}

#[test]
fn validate_conforming_template() {
    let (_dir, path) = write_template(
        r#"{
            "Resources": {
                "Key": { "Type": "AWS::KMS::Key", "Properties": { "EnableKeyRotation": true } },
                "Logs": {
                    "Type": "AWS::Logs::LogGroup",
                    "Properties": { "KmsKeyId": { "Fn::GetAtt": ["Key", "Arn"] }, "RetentionInDays": 30 }
                }
            }
        }"#,
    );
    let output = cfntypes(&["validate", path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 conforming, 0 skipped, 0 failed"));
}

#[test]
fn validate_failing_template_exits_non_zero() {
    let (_dir, path) = write_template(
        r#"{
            "Resources": {
                "Mapping": { "Type": "AWS::Lambda::EventSourceMapping", "Properties": { "BatchSize": "ten" } }
            }
        }"#,
    );
    let output = cfntypes(&["validate", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mapping (AWS::Lambda::EventSourceMapping)"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
}
