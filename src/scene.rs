//! Scene files for the object registry
//!
//! A scene is the editor's object list written to disk as pretty JSON,
//! one file per scene name:
//!
//! ```text
//! <scene dir>/
//!   level_one.json
//!   sandbox.json
//! ```
//!
//! # Example Usage
//!
//! ```ignore
//! let manager = SceneManager::new(SceneManager::default_dir()?)?;
//! manager.save("level_one", &registry)?;
//! let registry = manager.load("level_one")?;
//! ```

use crate::error::{GameError, Result};
use crate::registry::{GameObject, ObjectRegistry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current scene file version
pub const CURRENT_SCENE_VERSION: u32 = 1;

/// The root scene file structure
#[derive(Debug, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: u32,
    /// RFC 3339 local time of the save.
    pub saved_at: String,
    pub objects: Vec<GameObject>,
}

/// Listing entry for a saved scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneInfo {
    pub name: String,
    pub saved_at: String,
    pub object_count: usize,
}

pub struct SceneManager {
    scene_directory: PathBuf,
}

impl SceneManager {
    /// Creates a manager for `directory`, creating it if needed.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self> {
        let scene_directory = directory.as_ref().to_path_buf();
        if !scene_directory.exists() {
            fs::create_dir_all(&scene_directory)?;
        }
        Ok(SceneManager { scene_directory })
    }

    /// `<platform data dir>/game-studio/scenes`
    pub fn default_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("game-studio").join("scenes"))
            .ok_or_else(|| GameError::Config("no data directory on this platform".into()))
    }

    pub fn directory(&self) -> &Path {
        &self.scene_directory
    }

    pub fn save(&self, name: &str, registry: &ObjectRegistry) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        let scene = SceneFile {
            version: CURRENT_SCENE_VERSION,
            saved_at: chrono::Local::now().to_rfc3339(),
            objects: registry.objects().to_vec(),
        };

        let json = serde_json::to_string_pretty(&scene)?;
        fs::write(&path, json)?;
        log::info!("Scene '{name}' saved to {}", path.display());
        Ok(path)
    }

    pub fn load(&self, name: &str) -> Result<ObjectRegistry> {
        let scene = self.read(name)?;
        log::info!("Scene '{name}' loaded ({} objects)", scene.objects.len());
        Ok(ObjectRegistry::from_objects(scene.objects))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.exists()).unwrap_or(false)
    }

    /// All readable scenes, sorted by name. Unreadable files are skipped.
    pub fn list(&self) -> Result<Vec<SceneInfo>> {
        let mut scenes = Vec::new();

        for entry in fs::read_dir(&self.scene_directory)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.read(name) {
                Ok(scene) => scenes.push(SceneInfo {
                    name: name.to_string(),
                    saved_at: scene.saved_at,
                    object_count: scene.objects.len(),
                }),
                Err(e) => log::warn!("Skipping scene {}: {e}", path.display()),
            }
        }

        scenes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(scenes)
    }

    fn read(&self, name: &str) -> Result<SceneFile> {
        let path = self.path_for(name)?;
        let json = fs::read_to_string(&path)?;
        let scene: SceneFile = serde_json::from_str(&json)?;

        if scene.version > CURRENT_SCENE_VERSION {
            return Err(GameError::UnsupportedVersion {
                found: scene.version,
                supported: CURRENT_SCENE_VERSION,
            });
        }
        Ok(scene)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(GameError::InvalidName(name.to_string()));
        }
        Ok(self.scene_directory.join(format!("{name}.json")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ObjectKind;

    fn manager() -> (tempfile::TempDir, SceneManager) {
        let dir = tempfile::tempdir().unwrap();
        let manager = SceneManager::new(dir.path().join("scenes")).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, manager) = manager();
        let mut registry = ObjectRegistry::with_defaults();
        registry.select("4").unwrap();

        manager.save("level_one", &registry).unwrap();
        assert!(manager.exists("level_one"));

        let loaded = manager.load("level_one").unwrap();
        assert_eq!(loaded, registry);
        assert_eq!(loaded.selected().unwrap().kind, ObjectKind::Coin);
    }

    #[test]
    fn test_missing_scene_is_io_error() {
        let (_dir, manager) = manager();
        assert!(!manager.exists("nothing"));
        assert!(matches!(manager.load("nothing"), Err(GameError::Io(_))));
    }

    #[test]
    fn test_rejects_path_like_names() {
        let (_dir, manager) = manager();
        let registry = ObjectRegistry::new();
        for name in ["", "../escape", "a/b", "with space"] {
            assert!(matches!(
                manager.save(name, &registry),
                Err(GameError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn test_newer_version_rejected() {
        let (_dir, manager) = manager();
        let path = manager.directory().join("future.json");
        fs::write(
            &path,
            r#"{ "version": 99, "saved_at": "2030-01-01T00:00:00Z", "objects": [] }"#,
        )
        .unwrap();

        assert!(matches!(
            manager.load("future"),
            Err(GameError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn test_list_skips_broken_files() {
        let (_dir, manager) = manager();
        manager.save("b_scene", &ObjectRegistry::with_defaults()).unwrap();
        manager.save("a_scene", &ObjectRegistry::new()).unwrap();
        fs::write(manager.directory().join("broken.json"), "{").unwrap();
        fs::write(manager.directory().join("notes.txt"), "hi").unwrap();

        let scenes = manager.list().unwrap();
        let names: Vec<&str> = scenes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["a_scene", "b_scene"]);
        assert_eq!(scenes[1].object_count, 4);
    }

    #[test]
    fn test_kind_serialized_lowercase() {
        let (_dir, manager) = manager();
        let path = manager.save("kinds", &ObjectRegistry::with_defaults()).unwrap();
        let json = fs::read_to_string(path).unwrap();
        assert!(json.contains("\"kind\": \"enemy\""));
    }
}
