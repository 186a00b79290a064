//! The in-memory collection of dragons and its metadata.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::internal::model::Dragon;

/// Ordered, id-assigning collection of dragons.
///
/// Records keep insertion order. The backing file path is the persistence
/// handle the save/exit handlers write to; it is runtime configuration and
/// is not serialized with the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragonCollection {
    dragons: Vec<Dragon>,
    created: DateTime<Utc>,
    next_id: u64,
    #[serde(skip)]
    file: PathBuf,
}

impl DragonCollection {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            dragons: Vec::new(),
            created: Utc::now(),
            next_id: 1,
            file: file.into(),
        }
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[Dragon] {
        &self.dragons
    }

    /// Inserts a record, assigning it a fresh unique id. Returns the id.
    pub fn add(&mut self, mut dragon: Dragon) -> u64 {
        dragon.id = self.next_id;
        self.next_id += 1;
        let id = dragon.id;
        self.dragons.push(dragon);
        id
    }

    /// Removes the record with the given id. Returns whether one was removed.
    pub fn remove_by_id(&mut self, id: u64) -> bool {
        let before = self.dragons.len();
        self.dragons.retain(|d| d.id != id);
        self.dragons.len() < before
    }

    pub fn clear(&mut self) {
        self.dragons.clear();
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Dragon> {
        self.dragons.iter_mut().find(|d| d.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.dragons.iter().any(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.dragons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dragons.is_empty()
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// The persistence handle: the file the collection is saved to.
    pub fn output_file(&self) -> &Path {
        &self.file
    }

    pub fn set_output_file(&mut self, file: impl Into<PathBuf>) {
        self.file = file.into();
    }

    /// Largest age in the collection, if any records exist.
    pub fn max_age(&self) -> Option<i64> {
        self.dragons.iter().map(|d| d.age).max()
    }

    /// Smallest age in the collection, if any records exist.
    pub fn min_age(&self) -> Option<i64> {
        self.dragons.iter().map(|d| d.age).min()
    }

    /// The record with the deepest cave, if any records exist.
    pub fn max_by_cave(&self) -> Option<&Dragon> {
        self.dragons
            .iter()
            .max_by(|a, b| a.cave.depth.total_cmp(&b.cave.depth))
    }

    /// Records sorted by natural order, youngest first.
    pub fn sorted_ascending(&self) -> Vec<Dragon> {
        let mut dragons = self.dragons.clone();
        dragons.sort();
        dragons
    }

    /// Records sorted by natural order, oldest first.
    pub fn sorted_descending(&self) -> Vec<Dragon> {
        let mut dragons = self.sorted_ascending();
        dragons.reverse();
        dragons
    }

    /// Re-establishes the id counter after deserialization, so that records
    /// loaded from older files never collide with newly added ones.
    pub fn restore_id_counter(&mut self) {
        let max_id = self.dragons.iter().map(|d| d.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1);
    }
}
