use std::io::Write;

use encounter_content::{Literal, ScenarioLoader};
use encounter_core::{ActorId, Vec2};

const SCENARIO: &str = r#"
[variables.scalars]
rotation = 2

[variables.lists]
party = ["1001", "1002", "1003", "1004", "1005", "1006", "1007", "1008"]
statuses = [1, 2, 3, 4, 5, 6, 7, 8]

[variables.maps.markers]
"4000" = 0
"4001" = "1"

[[entities]]
id = "0x1001"
name = "Tank One"
job = "WAR"
x = 100.0
y = 112.5

[[entities]]
id = "1002"
name = "Tank Two"
x = 95.0
y = 100.0
"#;

#[test]
fn loads_variables_and_entities_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIO.as_bytes()).unwrap();

    let scenario = ScenarioLoader::load(file.path()).unwrap();

    assert_eq!(
        scenario.variables.scalars.get("rotation"),
        Some(&Literal::Integer(2))
    );
    let party = &scenario.variables.lists["party"];
    assert_eq!(party.len(), 8);
    assert_eq!(party[0].to_string(), "1001");
    assert_eq!(scenario.variables.lists["statuses"][7].to_string(), "8");

    let markers = &scenario.variables.maps["markers"];
    assert_eq!(markers["4000"].to_string(), "0");
    assert_eq!(markers["4001"].to_string(), "1");

    let snapshots = scenario.snapshots().unwrap();
    assert_eq!(snapshots[0].id, ActorId(0x1001));
    assert_eq!(snapshots[0].position, Vec2::new(100.0, 112.5));
    assert_eq!(snapshots[1].job, "");
}

#[test]
fn empty_scenario_is_valid() {
    let scenario = ScenarioLoader::parse("").unwrap();
    assert!(scenario.entities.is_empty());
    assert!(scenario.variables.scalars.is_empty());
}

#[test]
fn rejects_malformed_entity_id() {
    let content = r#"
[[entities]]
id = "not-hex"
name = "Nobody"
x = 0.0
y = 0.0
"#;
    let err = ScenarioLoader::parse(content).unwrap_err();
    assert!(err.to_string().contains("Invalid entity"), "{err}");
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = ScenarioLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"), "{err}");
}
