//! Game Object Registry
//!
//! The editor side of Game Studio: a flat list of named, placeable objects
//! (player, ground, enemies, coins, platforms) that can be added, selected,
//! renamed and deleted. The running game loop does not read this list every
//! frame; a host feeds the relevant subset (the coin layout) into the
//! session config before pressing Play.
//!
//! # Rust Learning Notes
//!
//! - Randomness is injected as `&mut impl Rng`, so tests can pass a seeded
//!   generator and get the same placements every run
//! - Selection lives on the objects themselves (`selected: bool`), and every
//!   mutation keeps "at most one selected" true

use crate::error::{GameError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Player,
    Ground,
    Enemy,
    Coin,
    Platform,
}

impl ObjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Player => "Player",
            ObjectKind::Ground => "Ground",
            ObjectKind::Enemy => "Enemy",
            ObjectKind::Coin => "Coin",
            ObjectKind::Platform => "Platform",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One placeable object in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub id: String,
    pub name: String,
    pub kind: ObjectKind,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub selected: bool,
}

impl GameObject {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ObjectKind,
        x: f32,
        y: f32,
    ) -> Self {
        GameObject {
            id: id.into(),
            name: name.into(),
            kind,
            x,
            y,
            selected: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectRegistry {
    objects: Vec<GameObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The starter scene: a player, the ground, one enemy and one coin.
    pub fn with_defaults() -> Self {
        ObjectRegistry {
            objects: vec![
                GameObject::new("1", "Player", ObjectKind::Player, 200.0, 150.0),
                GameObject::new("2", "Ground", ObjectKind::Ground, 0.0, 280.0),
                GameObject::new("3", "Enemy_1", ObjectKind::Enemy, 400.0, 150.0),
                GameObject::new("4", "Coin_1", ObjectKind::Coin, 300.0, 200.0),
            ],
        }
    }

    /// Rebuilds a registry from saved objects. Keeps at most one selection.
    pub fn from_objects(objects: Vec<GameObject>) -> Self {
        let mut registry = ObjectRegistry { objects };
        let first_selected = registry
            .objects
            .iter()
            .position(|o| o.selected);
        for (i, object) in registry.objects.iter_mut().enumerate() {
            object.selected = Some(i) == first_selected;
        }
        registry
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Adds an object of `kind` at a random spot in the middle of the stage.
    ///
    /// The id comes from the current time in milliseconds; the name is the
    /// kind plus the new list length (`Coin_5`). Returns the new id.
    pub fn add(&mut self, kind: ObjectKind, rng: &mut impl Rng) -> String {
        let id = self.fresh_id();
        let name = format!("{}_{}", kind.label(), self.objects.len() + 1);
        let x = rng.gen_range(250.0..450.0);
        let y = rng.gen_range(100.0..200.0);

        log::debug!("Adding {kind} '{name}' at ({x:.0}, {y:.0})");
        self.objects.push(GameObject::new(id.clone(), name, kind, x, y));
        id
    }

    /// Selects exactly `id`, deselecting everything else.
    pub fn select(&mut self, id: &str) -> Result<()> {
        if self.get(id).is_none() {
            return Err(GameError::UnknownObject(id.to_string()));
        }
        for object in &mut self.objects {
            object.selected = object.id == id;
        }
        Ok(())
    }

    pub fn selected(&self) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.selected)
    }

    pub fn clear_selection(&mut self) {
        for object in &mut self.objects {
            object.selected = false;
        }
    }

    /// Removes `id`. Deleting the selected object leaves nothing selected.
    pub fn delete(&mut self, id: &str) -> Result<GameObject> {
        let index = self
            .objects
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| GameError::UnknownObject(id.to_string()))?;
        let removed = self.objects.remove(index);
        log::debug!("Deleted {} '{}'", removed.kind, removed.name);
        Ok(removed)
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidName(name.to_string()));
        }
        let object = self
            .objects
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| GameError::UnknownObject(id.to_string()))?;
        object.name = name.to_string();
        Ok(())
    }

    /// Positions of every coin, in list order.
    pub fn coin_positions(&self) -> Vec<(f32, f32)> {
        self.objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Coin)
            .map(|o| (o.x, o.y))
            .collect()
    }

    // Millisecond timestamps collide when objects are added in a burst
    fn fresh_id(&self) -> String {
        let mut stamp = chrono::Utc::now().timestamp_millis();
        while self.get(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        stamp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_defaults() {
        let registry = ObjectRegistry::with_defaults();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get("3").unwrap().name, "Enemy_1");
        assert!(registry.selected().is_none());
    }

    #[test]
    fn test_add_names_and_places() {
        let mut registry = ObjectRegistry::with_defaults();
        let mut rng = StdRng::seed_from_u64(7);

        let id = registry.add(ObjectKind::Coin, &mut rng);
        let coin = registry.get(&id).unwrap();
        assert_eq!(coin.name, "Coin_5");
        assert!((250.0..450.0).contains(&coin.x));
        assert!((100.0..200.0).contains(&coin.y));
    }

    #[test]
    fn test_burst_adds_get_unique_ids() {
        let mut registry = ObjectRegistry::new();
        let mut rng = StdRng::seed_from_u64(1);
        let ids: Vec<String> = (0..20)
            .map(|_| registry.add(ObjectKind::Platform, &mut rng))
            .collect();

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_select_is_exclusive() {
        let mut registry = ObjectRegistry::with_defaults();
        registry.select("1").unwrap();
        registry.select("4").unwrap();

        let selected: Vec<&str> = registry
            .objects()
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(selected, vec!["4"]);
    }

    #[test]
    fn test_select_unknown_fails() {
        let mut registry = ObjectRegistry::with_defaults();
        registry.select("1").unwrap();
        assert!(matches!(registry.select("99"), Err(GameError::UnknownObject(_))));
        // Failed select leaves the old selection alone
        assert_eq!(registry.selected().unwrap().id, "1");
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut registry = ObjectRegistry::with_defaults();
        registry.select("3").unwrap();

        let removed = registry.delete("3").unwrap();
        assert_eq!(removed.kind, ObjectKind::Enemy);
        assert!(registry.selected().is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let mut registry = ObjectRegistry::with_defaults();
        registry.select("1").unwrap();
        registry.delete("4").unwrap();
        assert_eq!(registry.selected().unwrap().id, "1");
    }

    #[test]
    fn test_rename() {
        let mut registry = ObjectRegistry::with_defaults();
        registry.rename("1", "  Hero ").unwrap();
        assert_eq!(registry.get("1").unwrap().name, "Hero");
        assert!(matches!(registry.rename("1", "   "), Err(GameError::InvalidName(_))));
        assert!(matches!(registry.rename("nope", "X"), Err(GameError::UnknownObject(_))));
    }

    #[test]
    fn test_coin_positions() {
        let mut registry = ObjectRegistry::with_defaults();
        registry
            .objects
            .push(GameObject::new("9", "Coin_9", ObjectKind::Coin, 450.0, 180.0));
        assert_eq!(registry.coin_positions(), vec![(300.0, 200.0), (450.0, 180.0)]);
    }

    #[test]
    fn test_from_objects_keeps_one_selection() {
        let mut a = GameObject::new("a", "A", ObjectKind::Coin, 0.0, 0.0);
        let mut b = GameObject::new("b", "B", ObjectKind::Coin, 0.0, 0.0);
        a.selected = true;
        b.selected = true;

        let registry = ObjectRegistry::from_objects(vec![a, b]);
        assert_eq!(registry.selected().unwrap().id, "a");
        assert!(!registry.get("b").unwrap().selected);
    }
}
