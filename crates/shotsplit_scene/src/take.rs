// SPDX-License-Identifier: MIT OR Apache-2.0
//! Takes and the take hierarchy.

use crate::node::NodeId;
use crate::render::RenderSettingsId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to a take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TakeId(pub Uuid);

impl TakeId {
    /// Create a new random take ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TakeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A named configuration bundling a camera override and a render-settings
/// override, rendered as a distinct shot from the shared scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Take {
    /// Unique take ID
    pub id: TakeId,
    /// Take name
    pub name: String,
    /// Parent take (`None` only for the main take)
    pub parent: Option<TakeId>,
    /// Child takes, in display order
    pub children: Vec<TakeId>,
    /// Camera override
    pub camera: Option<NodeId>,
    /// Render-settings override
    pub render_settings: Option<RenderSettingsId>,
}

impl Take {
    fn new(name: impl Into<String>) -> Self {
        Self {
            id: TakeId::new(),
            name: name.into(),
            parent: None,
            children: Vec::new(),
            camera: None,
            render_settings: None,
        }
    }
}

/// The document's take hierarchy: an ordered tree under a fixed main take.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeTree {
    takes: IndexMap<TakeId, Take>,
    main: TakeId,
}

impl TakeTree {
    /// Create a tree holding only the main take
    pub fn new() -> Self {
        let main_take = Take::new("Main");
        let main = main_take.id;
        let mut takes = IndexMap::new();
        takes.insert(main, main_take);
        Self { takes, main }
    }

    /// ID of the main take
    pub fn main(&self) -> TakeId {
        self.main
    }

    /// Get a take by ID
    pub fn take(&self, id: TakeId) -> Option<&Take> {
        self.takes.get(&id)
    }

    /// Get a mutable take by ID
    pub fn take_mut(&mut self, id: TakeId) -> Option<&mut Take> {
        self.takes.get_mut(&id)
    }

    /// Children of a take, in display order (top to bottom)
    pub fn children_of(&self, id: TakeId) -> &[TakeId] {
        self.takes
            .get(&id)
            .map(|t| t.children.as_slice())
            .unwrap_or_default()
    }

    /// Add a take under `parent`, before the sibling `before` (or last when
    /// `before` is `None` or not a child of `parent`). Returns the new ID.
    pub fn add_take(
        &mut self,
        name: impl Into<String>,
        parent: TakeId,
        before: Option<TakeId>,
    ) -> TakeId {
        let mut take = Take::new(name);
        take.parent = Some(parent);
        let id = take.id;
        self.takes.insert(id, take);

        if let Some(parent_take) = self.takes.get_mut(&parent) {
            let position = before
                .and_then(|b| parent_take.children.iter().position(|c| *c == b))
                .unwrap_or(parent_take.children.len());
            parent_take.children.insert(position, id);
        }
        id
    }

    /// Remove a take and its whole subtree. The main take cannot be removed.
    pub fn remove_take(&mut self, id: TakeId) -> Option<Take> {
        if id == self.main {
            return None;
        }
        let take = self.takes.shift_remove(&id)?;
        if let Some(parent) = take.parent.and_then(|p| self.takes.get_mut(&p)) {
            parent.children.retain(|c| *c != id);
        }
        for child in take.children.clone() {
            self.remove_subtree(child);
        }
        Some(take)
    }

    fn remove_subtree(&mut self, id: TakeId) {
        if let Some(take) = self.takes.shift_remove(&id) {
            for child in take.children {
                self.remove_subtree(child);
            }
        }
    }

    /// Whether any take other than the main take exists
    pub fn has_non_main_takes(&self) -> bool {
        self.takes.len() > 1
    }

    /// Remove every take except the main take. Returns the number removed.
    pub fn clear_non_main(&mut self) -> usize {
        let children: Vec<TakeId> = self.children_of(self.main).to_vec();
        let before = self.takes.len();
        for child in children {
            self.remove_take(child);
        }
        before - self.takes.len()
    }

    /// Total number of takes, main included
    pub fn len(&self) -> usize {
        self.takes.len()
    }

    /// Whether only the main take exists
    pub fn is_empty(&self) -> bool {
        self.takes.len() == 1
    }
}

impl Default for TakeTree {
    fn default() -> Self {
        Self::new()
    }
}
