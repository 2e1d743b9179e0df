// Copyright 2016-2018 Matthew D. Michelotti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use fnv::FnvHashMap;

use crate::scene::{BodyId, RigidBody};

/// Receives the collision outcome of every body move.
///
/// A sink is passed to `World::move_bodies` (or `World::move_body`) on each
/// tick, so its lifetime is chosen by the caller rather than tied to the
/// process. Use `()` to discard outcomes.
pub trait CollisionSink {
    /// Called once per body per tick, after the body's collision status has
    /// been updated.
    fn record(&mut self, body: &RigidBody, colliding: bool);
}

impl CollisionSink for () {
    fn record(&mut self, _body: &RigidBody, _colliding: bool) {}
}

/// A `CollisionSink` that keeps a small table of text entries per body,
/// suitable for a debug overlay.
///
/// Each move sets the `"colliding"` entry of the body to `"true"` or
/// `"false"`, and the `"name"` entry if the body has a name. Other entries
/// may be added with `set`.
#[derive(Clone, Debug, Default)]
pub struct CollisionLog {
    entries: FnvHashMap<BodyId, FnvHashMap<String, String>>,
}

impl CollisionLog {
    /// Constructs an empty log.
    pub fn new() -> CollisionLog {
        CollisionLog::default()
    }

    /// Returns the entries recorded for the body with the given `id`.
    pub fn entries(&self, id: BodyId) -> Option<&FnvHashMap<String, String>> {
        self.entries.get(&id)
    }

    /// Returns a single entry for the body with the given `id`.
    pub fn get(&self, id: BodyId, key: &str) -> Option<&str> {
        self.entries
            .get(&id)
            .and_then(|entries| entries.get(key))
            .map(|val| val.as_str())
    }

    /// Returns the last recorded collision status of the body with the given `id`.
    pub fn is_colliding(&self, id: BodyId) -> Option<bool> {
        self.get(id, "colliding").map(|val| val == "true")
    }

    /// Sets an entry for the body with the given `id`.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, id: BodyId, key: K, val: V) {
        self.entries
            .entry(id)
            .or_default()
            .insert(key.into(), val.into());
    }

    /// Removes all entries of the body with the given `id`.
    pub fn forget(&mut self, id: BodyId) {
        self.entries.remove(&id);
    }

    /// Returns the ids of all bodies that have entries.
    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.entries.keys().copied()
    }

    /// Returns `true` if no entries have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl CollisionSink for CollisionLog {
    fn record(&mut self, body: &RigidBody, colliding: bool) {
        if let Some(name) = &body.name {
            self.set(body.id(), "name", name.as_str());
        }
        self.set(body.id(), "colliding", colliding.to_string());
    }
}
