//! Listed library versions must be the ones Cargo locked for this build

use std::fs;
use std::path::Path;

use rstest::rstest;
use toml::{Table, Value};

use cpm_chain::build_info;
use cpm_chain::domain::LibraryVersion;

fn locked_versions(name: &str) -> Vec<String> {
    let lock_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.lock");
    let lock: Table = toml::from_str(&fs::read_to_string(lock_path).unwrap()).unwrap();
    lock["package"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p.get("name").and_then(Value::as_str) == Some(name))
        .filter_map(|p| p.get("version").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

#[rstest]
#[case(build_info::itertools())]
#[case(build_info::serde_json())]
#[case(build_info::rstest())]
fn given_linked_library_when_listing_then_version_matches_lockfile(#[case] library: LibraryVersion) {
    let locked = locked_versions(&library.name);

    assert!(!locked.is_empty(), "{} missing from Cargo.lock", library.name);
    assert!(
        locked.contains(&library.version.to_string()),
        "{} reported {} but Cargo.lock has {:?}",
        library.name,
        library.version,
        locked
    );
}

#[test]
fn given_legacy_itertools_request_when_listing_then_older_than_linked() {
    let legacy = build_info::itertools_legacy();

    assert_eq!(legacy.version.to_string(), "0.12.1");
    assert!(legacy.version < build_info::itertools().version);
}
