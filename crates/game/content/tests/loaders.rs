use std::fs;
use std::path::{Path, PathBuf};

use game_content::{ConfigLoader, ContentFactory, MapLoader, RosterKind, RosterLoader};
use game_core::{GameConfig, InitializationError, RoomId, World};
use tempfile::TempDir;

fn bundled_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

const TWO_ROOMS: &str = "\
10 10 Cottage
20 Doctor Lucky
Fortune the Cat
2
0 0 4 4 Parlor
5 0 9 4 Kitchen
1
1 6 Rolling Pin
";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn bundled_mansion_builds_a_world() {
    let world = ContentFactory::new(bundled_data())
        .build_world("mansion")
        .unwrap();

    assert_eq!(world.name(), "Doctor Lucky's Mansion");
    assert_eq!(world.map().len(), 21);
    assert_eq!(world.target().name(), "Doctor Lucky");
    assert_eq!(world.target().health(), 50);
    assert_eq!(world.pet().name(), "Fortune the Cat");
    assert_eq!(world.config().max_turns, 50);
    assert_eq!(world.config().game_seed, 42);
    assert_eq!(world.actors().len(), 3);
    assert!(!world.actors()[0].is_ai());
    assert!(world.actors()[1].is_ai());
}

#[test]
fn bundled_mansion_is_connected_and_symmetric() {
    let spec = MapLoader::load(&bundled_data().join("maps/mansion.txt")).unwrap();
    let world = World::from_spec(spec, GameConfig::default()).unwrap();
    let map = world.map();

    for a in map.room_ids() {
        assert!(!map.neighbors(a).is_empty(), "{} is isolated", map.name(a));
        for b in map.room_ids() {
            assert_eq!(map.is_adjacent(a, b), map.is_adjacent(b, a));
        }
    }
}

#[test]
fn map_loaded_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "cottage.txt", TWO_ROOMS);

    let spec = MapLoader::load(&path).unwrap();
    let world = World::from_spec(spec, GameConfig::default()).unwrap();
    let kitchen = world.map().room_by_name("Kitchen").unwrap();
    assert!(world.map().is_adjacent(RoomId::FIRST, kitchen));
    assert_eq!(world.map().room(kitchen).item_names(), vec!["Rolling Pin"]);
}

#[test]
fn map_error_names_file_and_line() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.txt", &TWO_ROOMS.replace("1 6 Rolling Pin", "1 six Rolling Pin"));

    let error = format!("{:#}", MapLoader::load(&path).unwrap_err());
    assert!(error.contains("broken.txt"), "{error}");
    assert!(error.contains("line 8: invalid item damage 'six'"), "{error}");
}

#[test]
fn item_in_missing_room_is_rejected_by_the_world() {
    let spec = MapLoader::parse(&TWO_ROOMS.replace("1 6 Rolling Pin", "7 6 Rolling Pin")).unwrap();
    assert!(matches!(
        World::from_spec(spec, GameConfig::default()),
        Err(InitializationError::InvalidRoomIndex { index: 7, .. })
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let error = MapLoader::load(&dir.path().join("nope.txt"))
        .unwrap_err()
        .to_string();
    assert!(error.starts_with("Failed to read file"), "{error}");
}

#[test]
fn factory_reads_a_data_directory() {
    let dir = TempDir::new().unwrap();
    write(&dir, "maps/cottage.txt", TWO_ROOMS);
    write(&dir, "config.toml", "max_turns = 4\nlook_consumes_turn = false\n");
    write(
        &dir,
        "roster.ron",
        r#"[(name: "Alice", kind: Human, start: 1), (name: "CPU1", kind: Ai)]"#,
    );

    let world = ContentFactory::new(dir.path()).build_world("cottage").unwrap();
    assert_eq!(world.config().max_turns, 4);
    assert!(!world.config().look_consumes_turn);
    assert_eq!(world.actors()[0].room(), RoomId(1));
    assert_eq!(world.actors()[1].room(), RoomId::FIRST);
}

#[test]
fn roster_with_bad_start_room_fails_to_seat() {
    let dir = TempDir::new().unwrap();
    write(&dir, "maps/cottage.txt", TWO_ROOMS);
    write(&dir, "roster.ron", r#"[(name: "Alice", kind: Human, start: 9)]"#);

    let error = ContentFactory::new(dir.path())
        .build_world("cottage")
        .unwrap_err()
        .to_string();
    assert!(error.contains("Failed to seat 'Alice'"), "{error}");
}

#[test]
fn config_and_roster_load_from_disk() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "rules.toml", "game_seed = 9\n");
    let roster = write(&dir, "seats.ron", r#"[(name: "CPU1", kind: Ai, start: 0)]"#);

    assert_eq!(ConfigLoader::load(&config).unwrap().game_seed, 9);
    let seats = RosterLoader::load(&roster).unwrap();
    assert_eq!(seats[0].kind, RosterKind::Ai);
}

#[test]
fn map_with_lifeless_target_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(&dir, "maps/cottage.txt", &TWO_ROOMS.replace("20 Doctor Lucky", "0 Doctor Lucky"));

    let error = ContentFactory::new(dir.path())
        .build_world("cottage")
        .unwrap_err()
        .to_string();
    assert!(error.contains("starts with no health"), "{error}");
}
