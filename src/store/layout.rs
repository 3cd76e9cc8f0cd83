// src/store/layout.rs

use std::collections::BTreeMap;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::PlanError;
use crate::plan::{Colour, ObjectTemplate, PlacedObject, Wall};
use crate::store::backend::StorageBackend;

/// The single persistence key for the whole application state.
pub const STORAGE_KEY: &str = "layout";

/// Whether a mutation should reach the persistence backend. `Replay` is
/// threaded through the internal mutation helpers while `hydrate` rebuilds
/// the store, so suppression of the re-entrant writes is structural rather
/// than a hidden flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persistence {
    Commit,
    Replay,
}

/// The wire form of the store: self-describing, field names preserved.
/// Placed colours are normalized before this is built, so persisted state
/// never reflects transient selection.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    walls: Vec<Wall>,
    templates: Vec<ObjectTemplate>,
    placed_objects: Vec<PlacedObject>,
    configurations: BTreeMap<String, Vec<PlacedObject>>,
}

/// The authoritative in-memory collections: committed walls, the template
/// catalog, the placed-object arena, and named configuration snapshots.
///
/// Every mutation that succeeds serializes the entire store and writes it
/// under `STORAGE_KEY`; nothing is batched. Placed objects are addressed by
/// arena index, and the single selected object is an index into the arena,
/// never a held reference.
pub struct LayoutStore {
    walls: Vec<Wall>,
    templates: BTreeMap<String, ObjectTemplate>,
    placed: Vec<PlacedObject>,
    configurations: BTreeMap<String, Vec<PlacedObject>>,
    selected: Option<usize>,
    backend: Box<dyn StorageBackend>,
}

impl LayoutStore {
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            walls: Vec::new(),
            templates: BTreeMap::new(),
            placed: Vec::new(),
            configurations: BTreeMap::new(),
            selected: None,
            backend,
        }
    }

    // --- Read access ---

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn has_walls(&self) -> bool {
        !self.walls.is_empty()
    }

    pub fn templates(&self) -> impl Iterator<Item = &ObjectTemplate> {
        self.templates.values()
    }

    pub fn template(&self, name: &str) -> Option<&ObjectTemplate> {
        self.templates.get(name)
    }

    pub fn placed_objects(&self) -> &[PlacedObject] {
        &self.placed
    }

    pub fn placed_object(&self, id: usize) -> Option<&PlacedObject> {
        self.placed.get(id)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn configuration_names(&self) -> Vec<String> {
        self.configurations.keys().cloned().collect()
    }

    // --- Wall mutations ---

    pub fn add_wall(&mut self, wall: Wall) {
        self.push_wall(wall, Persistence::Commit);
    }

    /// Pops the most recently committed wall. No-op on an empty list.
    pub fn undo_last_wall(&mut self) -> Option<Wall> {
        let wall = self.walls.pop()?;
        debug!("undid wall {:?} -> {:?}", wall.start, wall.end);
        self.after_mutation(Persistence::Commit);
        Some(wall)
    }

    pub fn reset_walls(&mut self) {
        self.walls.clear();
        self.after_mutation(Persistence::Commit);
    }

    fn push_wall(&mut self, wall: Wall, persistence: Persistence) {
        self.walls.push(wall);
        self.after_mutation(persistence);
    }

    // --- Template catalog ---

    /// Adds a template to the catalog; a name collision overwrites.
    pub fn add_template(&mut self, template: ObjectTemplate) {
        self.insert_template(template, Persistence::Commit);
    }

    pub fn reset_templates(&mut self) {
        self.templates.clear();
        self.after_mutation(Persistence::Commit);
    }

    fn insert_template(&mut self, template: ObjectTemplate, persistence: Persistence) {
        if self.templates.contains_key(&template.name) {
            info!("template '{}' overwritten", template.name);
        }
        self.templates.insert(template.name.clone(), template);
        self.after_mutation(persistence);
    }

    // --- Placed objects ---

    /// Stamps an instance of a catalog template at the origin and returns
    /// its arena id.
    pub fn add_placed_object(&mut self, template_name: &str) -> Result<usize, PlanError> {
        let template = self
            .templates
            .get(template_name)
            .ok_or_else(|| PlanError::UnknownTemplate(template_name.to_string()))?;
        let object = PlacedObject::from_template(template);
        Ok(self.push_placed(object, Persistence::Commit))
    }

    pub fn move_placed_object(
        &mut self,
        id: usize,
        upper_left_x: i32,
        upper_left_y: i32,
    ) -> Result<(), PlanError> {
        let object = self
            .placed
            .get_mut(id)
            .ok_or(PlanError::UnknownObject(id))?;
        object.upper_left_x = upper_left_x;
        object.upper_left_y = upper_left_y;
        self.after_mutation(Persistence::Commit);
        Ok(())
    }

    pub fn rotate_placed_object(&mut self, id: usize) -> Result<(), PlanError> {
        let object = self
            .placed
            .get_mut(id)
            .ok_or(PlanError::UnknownObject(id))?;
        object.rotate();
        self.after_mutation(Persistence::Commit);
        Ok(())
    }

    /// Removes an object from the arena. Later ids shift down by one, so the
    /// selection index is remapped rather than left dangling.
    pub fn delete_placed_object(&mut self, id: usize) -> Result<PlacedObject, PlanError> {
        if id >= self.placed.len() {
            return Err(PlanError::UnknownObject(id));
        }
        let removed = self.placed.remove(id);
        self.selected = match self.selected {
            Some(sel) if sel == id => None,
            Some(sel) if sel > id => Some(sel - 1),
            other => other,
        };
        self.after_mutation(Persistence::Commit);
        Ok(removed)
    }

    pub fn reset_placed_objects(&mut self) {
        self.placed.clear();
        self.selected = None;
        self.after_mutation(Persistence::Commit);
    }

    /// Exclusive selection: the previous selection's highlight is cleared
    /// first, then the new object (if any) is highlighted. Selection is
    /// transient state and is not itself persisted; the snapshot normalizes
    /// colours regardless.
    pub fn select_object(&mut self, id: Option<usize>) -> Result<(), PlanError> {
        if let Some(new) = id {
            if new >= self.placed.len() {
                return Err(PlanError::UnknownObject(new));
            }
        }
        if let Some(prev) = self.selected.take() {
            if let Some(object) = self.placed.get_mut(prev) {
                object.colour = Colour::OBJECT;
            }
        }
        if let Some(new) = id {
            self.placed[new].colour = Colour::SELECTED;
            self.selected = Some(new);
        }
        Ok(())
    }

    fn push_placed(&mut self, object: PlacedObject, persistence: Persistence) -> usize {
        self.placed.push(object);
        self.after_mutation(persistence);
        self.placed.len() - 1
    }

    // --- Configurations ---

    /// Saves the current placed objects under `name`, deep-copied and
    /// colour-normalized. A name collision overwrites.
    pub fn save_configuration(&mut self, name: &str) {
        let snapshot: Vec<PlacedObject> = self.placed.iter().map(PlacedObject::normalized).collect();
        self.store_configuration(name.to_string(), snapshot, Persistence::Commit);
    }

    /// Replaces the live placed objects with a deep copy of the named
    /// configuration. Fails with `UnknownConfiguration` if absent.
    pub fn load_configuration(&mut self, name: &str) -> Result<(), PlanError> {
        let snapshot = self
            .configurations
            .get(name)
            .ok_or_else(|| PlanError::UnknownConfiguration(name.to_string()))?
            .clone();
        self.placed = snapshot;
        self.selected = None;
        self.after_mutation(Persistence::Commit);
        Ok(())
    }

    pub fn delete_configuration(&mut self, name: &str) -> Result<(), PlanError> {
        if self.configurations.remove(name).is_none() {
            return Err(PlanError::UnknownConfiguration(name.to_string()));
        }
        self.after_mutation(Persistence::Commit);
        Ok(())
    }

    pub fn reset_configurations(&mut self) {
        self.configurations.clear();
        self.after_mutation(Persistence::Commit);
    }

    // A replayed save takes the same is-this-name-new branch as a live one,
    // so anything derived from "a configuration appeared" behaves the same
    // whether the save came from the user or from hydration.
    fn store_configuration(
        &mut self,
        name: String,
        objects: Vec<PlacedObject>,
        persistence: Persistence,
    ) {
        if self.configurations.contains_key(&name) {
            info!("configuration '{}' overwritten", name);
        } else {
            debug!("new configuration '{}'", name);
        }
        self.configurations.insert(name, objects);
        self.after_mutation(persistence);
    }

    // --- Persistence ---

    /// Encodes the whole store. Placed colours are normalized first so the
    /// bytes never reflect transient selection.
    pub fn serialize(&self) -> Result<Vec<u8>, PlanError> {
        let snapshot = Snapshot {
            walls: self.walls.clone(),
            templates: self.templates.values().cloned().collect(),
            placed_objects: self.placed.iter().map(PlacedObject::normalized).collect(),
            configurations: self.configurations.clone(),
        };
        Ok(serde_json::to_vec(&snapshot)?)
    }

    /// Rebuilds the store from encoded bytes by replaying every collection
    /// through the same mutation helpers the live operations use, with
    /// persistence in `Replay` mode so nothing is written back mid-restore.
    pub fn hydrate(&mut self, bytes: &[u8]) -> Result<(), PlanError> {
        let snapshot: Snapshot = serde_json::from_slice(bytes)?;

        self.walls.clear();
        self.templates.clear();
        self.placed.clear();
        self.configurations.clear();
        self.selected = None;

        for wall in snapshot.walls {
            self.push_wall(wall, Persistence::Replay);
        }
        for template in snapshot.templates {
            self.insert_template(template, Persistence::Replay);
        }
        for object in snapshot.placed_objects {
            self.push_placed(object.normalized(), Persistence::Replay);
        }
        for (name, objects) in snapshot.configurations {
            self.store_configuration(name, objects, Persistence::Replay);
        }
        Ok(())
    }

    /// Restores state from the backend if a snapshot exists. Returns whether
    /// anything was restored.
    pub fn load_persisted(&mut self) -> Result<bool, PlanError> {
        match self.backend.get(STORAGE_KEY)? {
            Some(bytes) => {
                self.hydrate(&bytes)?;
                info!(
                    "restored layout: {} walls, {} templates, {} objects, {} configurations",
                    self.walls.len(),
                    self.templates.len(),
                    self.placed.len(),
                    self.configurations.len()
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn after_mutation(&mut self, persistence: Persistence) {
        if persistence == Persistence::Replay {
            return;
        }
        // Best effort: a backend failure is warned about, never allowed to
        // take down the in-memory state.
        match self.serialize() {
            Ok(bytes) => {
                if let Err(err) = self.backend.set(STORAGE_KEY, &bytes) {
                    warn!("failed to persist layout: {}", err);
                }
            }
            Err(err) => warn!("failed to encode layout: {}", err),
        }
    }
}
