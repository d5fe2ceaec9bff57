use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn recipes(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recipes").unwrap();
    cmd.env("RECIPE_BOOK_DATA_DIR", home.path())
        .env_remove("RECIPE_BOOK_DB");
    cmd
}

fn add_pasta(home: &TempDir) {
    recipes(home)
        .args([
            "add",
            "Pasta",
            "-i",
            "Pasta",
            "-i",
            "Salt",
            "--instructions",
            "Boil water; add pasta",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recipe 'Pasta' added successfully! (#1)",
        ));
}

#[test]
fn test_full_workflow() {
    let home = TempDir::new().unwrap();

    recipes(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));

    add_pasta(&home);

    recipes(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pasta"))
        .stdout(predicate::str::contains("1 recipe(s)"));

    recipes(&home)
        .args(["edit", "1", "--title", "Pasta Deluxe"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recipe 'Pasta Deluxe' updated successfully!",
        ));

    // Unchanged fields are kept
    recipes(&home)
        .args(["show", "Pasta Deluxe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 Pasta Deluxe"))
        .stdout(predicate::str::contains("  - Salt"))
        .stdout(predicate::str::contains("Boil water; add pasta"));

    recipes(&home)
        .args(["delete", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recipe 'Pasta Deluxe' has been deleted.",
        ));

    recipes(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_blank_field_is_rejected() {
    let home = TempDir::new().unwrap();

    recipes(&home)
        .args(["add", "Soup", "-i", "Water", "--instructions", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Instructions cannot be empty"));

    recipes(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipes stored:  0"));
}

#[test]
fn test_unknown_recipe_is_reported() {
    let home = TempDir::new().unwrap();

    recipes(&home)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: 42"));

    recipes(&home)
        .args(["delete", "Lasagne"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Recipe not found: Lasagne"));
}

#[test]
fn test_edit_without_changes_fails() {
    let home = TempDir::new().unwrap();
    add_pasta(&home);

    recipes(&home)
        .args(["edit", "Pasta"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_export_formats() {
    let home = TempDir::new().unwrap();
    add_pasta(&home);

    let json = home.path().join("out.json");
    recipes(&home)
        .args(["export", json.to_str().unwrap(), "--pretty"])
        .assert()
        .success();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(value["metadata"]["recipe_count"], 1);
    assert_eq!(value["recipes"][0]["ingredients"], "Pasta\nSalt");

    let csv = home.path().join("out.csv");
    recipes(&home)
        .args(["export", csv.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 recipes"));
    let text = std::fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("ID,Title,Ingredients,Instructions"));
    assert!(text.contains("\"Pasta\nSalt\""));
}

#[test]
fn test_db_override() {
    let home = TempDir::new().unwrap();
    let db = home.path().join("elsewhere").join("book.db");

    recipes(&home)
        .args(["--db", db.to_str().unwrap(), "add", "Tea"])
        .args(["-i", "Leaves", "--instructions", "Steep"])
        .assert()
        .success();

    assert!(db.exists());
    recipes(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No recipes found."));
}

#[test]
fn test_init_writes_settings() {
    let home = TempDir::new().unwrap();

    recipes(&home).arg("init").assert().success();

    let settings = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(settings.contains("\"refresh_delay_ms\": 1000"));
    assert!(home.path().join("data").join("recipes.db").exists());

    recipes(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings already exist"));
}
