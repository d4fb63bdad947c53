//! Build-time inputs: package identity and the library versions components declare
//!
//! Linked library versions are read from Cargo.lock by `build.rs`, so the
//! listings always name what this binary was built against. A request for an
//! older release is packed as `major * 10000 + minor * 100 + patch`.

use semver::Version;

use crate::domain::LibraryVersion;

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

include!(concat!(env!("OUT_DIR"), "/locked_versions.rs"));

/// itertools 0.12.1, requested by the project top component
pub const ITERTOOLS_LEGACY_VERSION: u32 = 1201;

fn locked(name: &str, (major, minor, patch): (u64, u64, u64)) -> LibraryVersion {
    LibraryVersion::new(name, Version::new(major, minor, patch))
}

pub fn itertools() -> LibraryVersion {
    locked("itertools", ITERTOOLS_VERSION).with_purpose("iterator adaptors")
}

pub fn itertools_legacy() -> LibraryVersion {
    LibraryVersion::from_packed("itertools", ITERTOOLS_LEGACY_VERSION)
        .with_purpose("iterator adaptors")
}

pub fn rstest() -> LibraryVersion {
    locked("rstest", RSTEST_VERSION).with_purpose("testing framework")
}

pub fn serde_json() -> LibraryVersion {
    locked("serde_json", SERDE_JSON_VERSION).with_purpose("JSON library")
}
