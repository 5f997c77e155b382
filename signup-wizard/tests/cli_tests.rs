use std::process::Command;

#[test]
fn submit_json_prints_summary() {
    let output = Command::new(env!("CARGO_BIN_EXE_signup"))
        .args([
            "submit",
            "--name",
            "Stephen King",
            "--email",
            "stephenking@lorem.com",
            "--phone",
            "+1 234 567 890",
            "--plan",
            "pro",
            "--yearly",
            "--add-on",
            "larger-storage",
            "--json",
        ])
        .output()
        .expect("failed to run signup binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let doc: serde_json::Value = serde_json::from_str(&stdout).expect("json output");
    assert_eq!(doc["confirmed"], true);
    assert_eq!(doc["summary"]["total"], 170);
    assert_eq!(doc["summary"]["total_price"], "$170/yr");
    assert_eq!(doc["form"]["plan_choice"]["id"], "pro");
}

#[test]
fn submit_with_empty_fields_exits_non_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_signup"))
        .args(["submit", "--plan", "arcade"])
        .output()
        .expect("failed to run signup binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Required fields are empty: name, email, phone"));
}

#[test]
fn dump_tui_renders_every_step() {
    let output = Command::new(env!("CARGO_BIN_EXE_signup"))
        .arg("--dump-tui")
        .output()
        .expect("failed to run signup binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("STEP 1/4: Personal Info"));
    assert!(stdout.contains("STEP 4/4: Finishing Up"));
    assert!(stdout.contains("Thank you!"));
}

#[test]
fn catalog_file_drives_the_listing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("catalog.toml");
    std::fs::write(
        &path,
        "schema_version = 1\n\n[[plans]]\nid = \"solo\"\nname = \"Solo\"\nmonthly_price = 3\nyearly_price = 30\n\n[[steps]]\nkind = \"personal_info\"\ntitle = \"You\"\ndescription = \"\"\n\n[[steps]]\nkind = \"plan_selection\"\ntitle = \"Plan\"\ndescription = \"\"\n",
    )
    .expect("write catalog");

    let output = Command::new(env!("CARGO_BIN_EXE_signup"))
        .arg("--catalog")
        .arg(&path)
        .arg("catalog")
        .output()
        .expect("failed to run signup binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Solo"));
    assert!(stdout.contains("$30/yr"));
    assert!(!stdout.contains("Add-ons"));
}
