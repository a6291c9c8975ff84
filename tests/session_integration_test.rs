use anyhow::Result;
use contact_roster::utils::validation::Validate;
use contact_roster::{
    Field, FormError, RecordEntry, RecordListForm, SessionConfig, SessionRunner, TextRenderer,
};
use tempfile::TempDir;

const TWO_USERS: &str = r#"
[session]
name = "two users"
description = "Fill one entry, add a second, submit twice"

[[steps]]
action = "set"
index = 0
field = "name"
value = "Jo"

[[steps]]
action = "set"
index = 0
field = "email"
value = "jo@x.com"

[[steps]]
action = "set"
index = 0
field = "mobile"
value = "1234567890"

[[steps]]
action = "submit"

[[steps]]
action = "add"

[[steps]]
action = "set"
index = 1
field = "name"
value = "A"

[[steps]]
action = "touch"
index = 1
field = "mobile"

[[steps]]
action = "submit"
"#;

#[test]
fn test_session_file_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let script_path = temp_dir.path().join("two_users.toml");
    std::fs::write(&script_path, TWO_USERS)?;

    let config = SessionConfig::from_file(&script_path)?;
    config.validate()?;

    let mut form = RecordListForm::new();
    let mut runner = SessionRunner::new(TextRenderer::new(Vec::new()));
    let report = runner.run(&config, &mut form)?;

    assert_eq!(report.session, "two users");
    assert_eq!(report.steps_applied, 8);
    assert_eq!(report.snapshots.len(), 2);
    assert_eq!(
        report.snapshots[0].userinfo,
        vec![RecordEntry::new("Jo", "jo@x.com", "1234567890")]
    );
    assert_eq!(report.snapshots[1].userinfo.len(), 2);
    assert_eq!(report.snapshots[1].userinfo[1].name, "A");
    assert!(!report.valid);

    let second = &report.entries[1];
    assert!(!second.valid);
    assert_eq!(second.errors[&Field::Name][0].tag(), "minlength");
    assert_eq!(second.errors[&Field::Email][0].tag(), "required");

    let output = String::from_utf8(runner.into_renderer().into_inner())?;
    assert!(output.contains("! name must be at least 2 characters"));
    assert!(output.contains("! mobile is required"));
    // Email of the second entry was never touched.
    assert!(!output.contains("! email is required"));

    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> Result<()> {
    let config = SessionConfig::from_toml_str(TWO_USERS)?;
    let mut form = RecordListForm::new();
    let report = SessionRunner::new(contact_roster::NullRenderer).run(&config, &mut form)?;

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["session"], "two users");
    assert_eq!(json["snapshots"][0]["userinfo"][0]["email"], "jo@x.com");
    assert_eq!(json["entries"][1]["errors"]["name"][0]["rule"], "minlength");
    assert_eq!(json["entries"][1]["errors"]["mobile"][0]["rule"], "required");
    assert_eq!(json["valid"], false);

    Ok(())
}

#[test]
fn test_session_with_bad_index_fails() -> Result<()> {
    let config = SessionConfig::from_toml_str(
        r#"
[session]
name = "bad remove"

[[steps]]
action = "remove"
index = 3
"#,
    )?;

    let mut form = RecordListForm::new();
    let err = SessionRunner::new(contact_roster::NullRenderer)
        .run(&config, &mut form)
        .unwrap_err();

    assert!(matches!(err, FormError::IndexOutOfRange { index: 3, len: 1 }));
    assert!(err.user_friendly_message().contains("#4"));
    Ok(())
}
