use std::io::Write;

use encounter_content::{Scenario, ScenarioLoader};
use encounter_core::{
    ActorId, CastOutcome, ConfigurationError, EncounterConfig, MissingDataError,
    RotationDirection, SkipReason, StateError, TelemetryOracle, Vec2,
};
use runtime::{
    Command, EventRecord, IngestOutcome, InMemoryTelemetry, InMemoryVariables, RecordError,
    Runtime, RuntimeConfig, RuntimeError, VariableKeys, VecSink, parse_stream,
};

/// Whole party on the arena center, markers 4000..4007 on compass 0..7.
const SCENARIO: &str = r#"
[variables.scalars]
rotation = 0

[variables.lists]
party = ["1001", "1002", "1003", "1004", "1005", "1006", "1007", "1008"]
statuses = [1, 2, 3, 4, 5, 6, 7, 8]

[variables.maps.markers]
"4000" = 0
"4001" = 1
"4002" = 2
"4003" = 3
"4004" = 4
"4005" = 5
"4006" = 6
"4007" = 7

[[entities]]
id = "1001"
name = "Main Tank"
job = "WAR"
x = 100.0
y = 100.0

[[entities]]
id = "1002"
name = "Off Tank"
job = "PLD"
x = 100.0
y = 100.0

[[entities]]
id = "1003"
name = "First Healer"
job = "WHM"
x = 100.0
y = 100.0

[[entities]]
id = "1004"
name = "Second Healer"
job = "SCH"
x = 100.0
y = 100.0

[[entities]]
id = "1005"
name = "First Melee"
job = "SAM"
x = 100.0
y = 100.0

[[entities]]
id = "1006"
name = "Second Melee"
job = "DRG"
x = 100.0
y = 100.0

[[entities]]
id = "1007"
name = "Ranged"
job = "BRD"
x = 100.0
y = 100.0

[[entities]]
id = "1008"
name = "Caster"
job = "BLM"
x = 100.0
y = 100.0
"#;

const CLEAN_STACK: &str = "command=cast\nability=9D55\ncount=6\ntarget=1001\nothers=1002,1003,1004,1007,1008";
const EXTRA_STACK: &str =
    "command=cast\nability=9D55\ncount=7\ntarget=1001\nothers=1002,1003,1004,1005,1007,1008";
const WRONG_WATER: &str = "command=cast\nability=9D4F\ncount=2\ntarget=1001\nothers=1002";

type TestRuntime = Runtime<InMemoryTelemetry, InMemoryVariables, VecSink>;

fn scenario() -> Scenario {
    ScenarioLoader::parse(SCENARIO).unwrap()
}

fn runtime_with(scenario: &Scenario, config: RuntimeConfig) -> TestRuntime {
    Runtime::new(
        config,
        InMemoryTelemetry::from_scenario(scenario).unwrap(),
        InMemoryVariables::from_spec(&scenario.variables),
        VecSink::new(),
    )
}

fn started() -> TestRuntime {
    let mut runtime = runtime_with(&scenario(), RuntimeConfig::default());
    assert_eq!(ingest(&mut runtime, "command=init"), Ok(IngestOutcome::Started));
    runtime
}

/// Ingests one record, keeping only comparable outcomes.
fn ingest(runtime: &mut TestRuntime, text: &str) -> Result<IngestOutcome, String> {
    runtime
        .ingest(&EventRecord::parse(text))
        .map_err(|err| err.to_string())
}

#[test]
fn replays_a_stream_from_a_scenario_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIO.as_bytes()).unwrap();
    let scenario = ScenarioLoader::load(file.path()).unwrap();
    let mut runtime = runtime_with(&scenario, RuntimeConfig::default());

    let stream = format!("command=init\n\n{CLEAN_STACK}\n\ncommand=cast\nability=9D2B\ncount=2\n");
    let outcomes: Vec<_> = parse_stream(&stream)
        .iter()
        .map(|record| runtime.ingest(record).unwrap())
        .collect();

    assert_eq!(
        outcomes,
        [
            IngestOutcome::Started,
            IngestOutcome::Cast(CastOutcome::Clean),
            IngestOutcome::Cast(CastOutcome::Skipped(SkipReason::TelemetryOnly)),
        ]
    );
    assert!(runtime.sink().lines().is_empty());
}

#[test]
fn surfaced_diagnosis_reaches_the_sink() {
    let mut runtime = started();

    let outcome = runtime.ingest(&EventRecord::parse(EXTRA_STACK)).unwrap();
    assert!(matches!(
        outcome,
        IngestOutcome::Cast(CastOutcome::Reported { surfaced: true, .. })
    ));

    let lines = runtime.sink().lines();
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].starts_with("Unholy Darkness #1: expected Stack1; hit extra: D1 First Melee (SAM, short-high-dps)"),
        "unexpected line: {}",
        lines[0]
    );
    assert!(lines[0].ends_with("[too close to center]"));
}

#[test]
fn per_ability_cap_limits_what_is_shown() {
    let mut runtime = started();

    for _ in 0..4 {
        let outcome = runtime.ingest(&EventRecord::parse(WRONG_WATER)).unwrap();
        assert!(matches!(
            outcome,
            IngestOutcome::Cast(CastOutcome::Reported { .. })
        ));
    }

    assert_eq!(runtime.sink().lines().len(), 3);
    assert!(runtime.sink().lines()[2].starts_with("Dark Water #3: expected Stack4"));
    let reporter = runtime.session().unwrap().reporter();
    assert_eq!(reporter.total(), 4);
}

#[test]
fn configured_caps_apply_to_the_session() {
    let config = RuntimeConfig::new(
        EncounterConfig {
            ability_cap: 1,
            total_cap: 5,
        },
        VariableKeys::default(),
    );
    let mut runtime = runtime_with(&scenario(), config);
    ingest(&mut runtime, "command=init").unwrap();

    ingest(&mut runtime, WRONG_WATER).unwrap();
    ingest(&mut runtime, WRONG_WATER).unwrap();

    assert_eq!(runtime.sink().lines().len(), 1);
}

#[test]
fn cast_before_init_has_no_session() {
    let mut runtime = runtime_with(&scenario(), RuntimeConfig::default());
    let err = runtime.ingest(&EventRecord::parse(CLEAN_STACK)).unwrap_err();
    assert!(matches!(err, RuntimeError::NoSession(Command::Cast)));
}

#[test]
fn unresolvable_target_aborts_only_that_cast() {
    let mut runtime = started();

    let outcome = ingest(
        &mut runtime,
        "command=cast\nability=9D55\ncount=2\ntarget=1001\nothers=9999",
    )
    .unwrap();
    assert_eq!(
        outcome,
        IngestOutcome::Aborted(MissingDataError::NotInRoster(ActorId(0x9999)))
    );

    // The aborted cast still consumed occurrence #1.
    let outcome = ingest(&mut runtime, CLEAN_STACK).unwrap();
    assert!(matches!(
        outcome,
        IngestOutcome::Cast(CastOutcome::Reported { .. })
    ));
}

#[test]
fn malformed_variable_fails_init_and_clears_the_session() {
    let mut runtime = started();
    runtime.variables_mut().set_scalar("rotation", "north");

    let err = runtime.ingest(&EventRecord::parse("command=init")).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Configuration(ConfigurationError::MalformedVariable { ref key, .. })
            if key == "rotation"
    ));
    assert!(runtime.session().is_none());
}

#[test]
fn missing_marker_map_fails_init() {
    let mut scenario = scenario();
    scenario.variables.maps.clear();
    let mut runtime = runtime_with(&scenario, RuntimeConfig::default());

    let err = runtime.ingest(&EventRecord::parse("command=init")).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Configuration(ConfigurationError::MissingVariable(ref key))
            if key == "markers"
    ));
}

#[test]
fn record_sets_marker_rotation() {
    let mut runtime = started();

    assert_eq!(
        ingest(&mut runtime, "command=record\nmarker=4002\nrotation=counterclockwise"),
        Ok(IngestOutcome::Recorded)
    );
    let session = runtime.session().unwrap();
    assert_eq!(
        session.marker_rotation(ActorId(0x4002)),
        Ok(RotationDirection::Counterclockwise)
    );

    let err = runtime
        .ingest(&EventRecord::parse("command=record\nmarker=9999\nrotation=clockwise"))
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::State(StateError::UnknownMarker(ActorId(0x9999)))
    ));
}

#[test]
fn unregistered_ability_is_an_error() {
    let mut runtime = started();
    let err = runtime
        .ingest(&EventRecord::parse("command=cast\nability=BEEF\ncount=1\ntarget=1001"))
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::State(StateError::UnregisteredAbility(0xBEEF))
    ));
}

#[test]
fn position_updates_are_left_to_the_telemetry_owner() {
    let mut runtime = started();
    assert_eq!(
        ingest(&mut runtime, "command=position\nid=1005\nx=103\ny=104"),
        Ok(IngestOutcome::Ignored)
    );

    assert!(runtime
        .telemetry_mut()
        .move_entity(ActorId(0x1005), Vec2::new(103.0, 104.0)));
    let moved = runtime.telemetry().entity(ActorId(0x1005)).unwrap();
    assert_eq!(moved.position, Vec2::new(103.0, 104.0));
}

#[test]
fn replay_moves_entities_before_judging() {
    let mut runtime = started();
    let stream = format!("command=position\nid=1005\nx=110\ny=100\n\n{EXTRA_STACK}\n");

    let outcomes: Vec<_> = parse_stream(&stream)
        .iter()
        .map(|record| runtime.replay(record).unwrap())
        .collect();

    assert_eq!(outcomes[0], IngestOutcome::Moved);
    let lines = runtime.sink().lines();
    assert_eq!(lines.len(), 1);
    // Ten metres out is past the too-close radius.
    assert!(lines[0].contains("D1 First Melee (SAM, short-high-dps) @ 10.0 m"), "{}", lines[0]);
    assert!(!lines[0].contains("too close"), "{}", lines[0]);
}

#[test]
fn replay_skips_a_malformed_position_and_judges_the_next_cast() {
    let mut runtime = started();
    let stream = format!("command=position\nid=1005\nx=abc\ny=100\n\n{EXTRA_STACK}\n");

    let outcomes: Vec<_> = parse_stream(&stream)
        .iter()
        .map(|record| runtime.replay(record).unwrap())
        .collect();

    assert_eq!(
        outcomes[0],
        IngestOutcome::Rejected(RecordError::MalformedField {
            field: "x",
            value: "abc".into(),
        })
    );
    assert!(matches!(
        outcomes[1],
        IngestOutcome::Cast(CastOutcome::Reported { surfaced: true, .. })
    ));
    assert_eq!(runtime.sink().lines().len(), 1);
    assert_eq!(
        runtime.telemetry().entity(ActorId(0x1005)).map(|e| e.position),
        Some(Vec2::new(100.0, 100.0))
    );
}

#[test]
fn replay_still_fails_on_fatal_errors() {
    let mut runtime = runtime_with(&scenario(), RuntimeConfig::default());
    let err = runtime.replay(&EventRecord::parse(CLEAN_STACK)).unwrap_err();
    assert!(matches!(err, RuntimeError::NoSession(Command::Cast)));

    let rejected = runtime.replay(&EventRecord::parse("command=dance")).unwrap();
    assert_eq!(
        rejected,
        IngestOutcome::Rejected(RecordError::UnknownCommand("dance".into()))
    );
}
