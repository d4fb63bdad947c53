//! Records the versions Cargo locked for the libraries the components list.
//!
//! Writes `$OUT_DIR/locked_versions.rs`, included by `src/build_info.rs`.

use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use toml::{Table, Value};

/// Library name in Cargo.lock and the constant it becomes
const LIBRARIES: &[(&str, &str)] = &[
    ("itertools", "ITERTOOLS_VERSION"),
    ("rstest", "RSTEST_VERSION"),
    ("serde_json", "SERDE_JSON_VERSION"),
];

fn main() -> Result<(), Box<dyn Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let lock_path = find_lockfile(&manifest_dir)
        .ok_or("Cargo.lock not found; run `cargo generate-lockfile` first")?;
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", lock_path.display());

    let lock: Table = toml::from_str(&fs::read_to_string(&lock_path)?)?;
    let packages = lock
        .get("package")
        .and_then(Value::as_array)
        .ok_or("Cargo.lock has no [[package]] entries")?;

    let root_name = env::var("CARGO_PKG_NAME")?;
    let root_version = env::var("CARGO_PKG_VERSION")?;
    let root = packages
        .iter()
        .find(|p| {
            field(p, "name") == Some(root_name.as_str())
                && field(p, "version") == Some(root_version.as_str())
        })
        .ok_or_else(|| format!("{root_name} {root_version} missing from Cargo.lock"))?;
    let dependencies: Vec<&str> = root
        .get("dependencies")
        .and_then(Value::as_array)
        .map(|deps| deps.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut out = String::new();
    for (name, constant) in LIBRARIES {
        let version = locked_version(packages, &dependencies, name)?;
        writeln!(out, "/// {name} {version}, as locked in Cargo.lock")?;
        writeln!(
            out,
            "pub const {constant}: (u64, u64, u64) = ({}, {}, {});",
            version.major, version.minor, version.patch
        )?;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    fs::write(out_dir.join("locked_versions.rs"), out)?;
    Ok(())
}

/// The lockfile sits next to the manifest, or at the workspace root above it.
fn find_lockfile(manifest_dir: &Path) -> Option<PathBuf> {
    manifest_dir
        .ancestors()
        .map(|dir| dir.join("Cargo.lock"))
        .find(|path| path.is_file())
}

/// Dependency entries read `name`, or `name version` when several versions are locked.
fn locked_version(
    packages: &[Value],
    dependencies: &[&str],
    name: &str,
) -> Result<Version, Box<dyn Error>> {
    let entry = dependencies
        .iter()
        .find(|dep| dep.split(' ').next() == Some(name))
        .ok_or_else(|| format!("{name} is not a locked dependency of this package"))?;

    let version = match entry.split(' ').nth(1) {
        Some(version) => version,
        None => packages
            .iter()
            .find(|p| field(p, "name") == Some(name))
            .and_then(|p| field(p, "version"))
            .ok_or_else(|| format!("{name} has no [[package]] entry in Cargo.lock"))?,
    };
    Ok(Version::parse(version)?)
}

fn field<'a>(package: &'a Value, key: &str) -> Option<&'a str> {
    package.get(key).and_then(Value::as_str)
}
