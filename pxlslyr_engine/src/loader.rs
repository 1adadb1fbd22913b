//! Loader for the world map data file.
//!
//! The map lives in `world.toml` under the data root. Every field is
//! optional; anything the file leaves out comes from the built-in world.
//! Without a file at all the built-in world is used as is.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{info, warn};
use pxlslyr_data::{WorldDef, WorldMap};

use crate::data_paths::data_path;

pub const WORLD_FILE: &str = "world.toml";

/// Load the world map from the data directory, falling back to the built-in map.
///
/// # Errors
/// - if the data file exists but cannot be read, parsed or validated
pub fn load_world_map() -> Result<WorldMap> {
    let path = data_path(WORLD_FILE);
    if !path.is_file() {
        warn!("no world file at '{}'; using the built-in map", path.display());
        return Ok(WorldMap::builtin());
    }
    load_world_map_from(&path)
}

/// Load and validate a world map from a specific TOML file.
///
/// # Errors
/// - on IO failure, TOML syntax errors, or any validation error in the map
pub fn load_world_map_from(toml_path: &Path) -> Result<WorldMap> {
    let world_file =
        fs::read_to_string(toml_path).with_context(|| format!("reading world data from '{}'", toml_path.display()))?;
    let def = parse_world_def(&world_file).with_context(|| format!("parsing world data from '{}'", toml_path.display()))?;
    let map = build_world_map(def)?;
    info!(
        "world map loaded from '{}': {}x{} grid, {} landmarks",
        toml_path.display(),
        map.width(),
        map.height(),
        map.landmarks().len()
    );
    Ok(map)
}

/// Parse TOML text into a `WorldDef`.
///
/// # Errors
/// - on TOML syntax or type errors
pub fn parse_world_def(text: &str) -> Result<WorldDef> {
    let def: WorldDef = toml::from_str(text)?;
    Ok(def)
}

/// Validate a `WorldDef` and return a single aggregated error.
fn build_world_map(def: WorldDef) -> Result<WorldMap> {
    match WorldMap::from_def(def) {
        Ok(map) => Ok(map),
        Err(errors) => {
            let details = errors
                .into_iter()
                .map(|err| format!("- {err}"))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("world validation failed:\n{details}");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxlslyr_data::GridPos;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn empty_file_yields_builtin_map() {
        let file = write_temp("");
        let map = load_world_map_from(file.path()).expect("empty file is valid");
        assert_eq!(map.landmarks(), WorldMap::builtin().landmarks());
    }

    #[test]
    fn overrides_apply_on_top_of_builtin() {
        let file = write_temp("max_health = 5\nclimb_respawn = { col = 12, row = 6 }\n");
        let map = load_world_map_from(file.path()).expect("overrides are valid");
        assert_eq!(map.max_health(), 5);
        assert_eq!(map.climb_respawn(), GridPos::new(12, 6));
    }

    #[test]
    fn validation_errors_are_aggregated() {
        let file = write_temp("max_health = 0\nstart = { col = 40, row = 0 }\n");
        let err = load_world_map_from(file.path()).expect_err("invalid world");
        let text = format!("{err:#}");
        assert!(text.contains("world validation failed"));
        assert!(text.contains("max health"));
        assert!(text.contains("start cell"));
    }

    #[test]
    fn syntax_errors_name_the_file() {
        let file = write_temp("max_health = \"lots\"");
        let err = load_world_map_from(file.path()).expect_err("bad type");
        assert!(format!("{err:#}").contains("parsing world data"));
    }

    #[test]
    fn missing_file_is_an_error_when_named_explicitly() {
        let err = load_world_map_from(Path::new("/definitely/not/here/world.toml")).expect_err("no such file");
        assert!(format!("{err:#}").contains("reading world data"));
    }
}
