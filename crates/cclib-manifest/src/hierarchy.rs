use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Error, Result};
use crate::schema::{Element, Group};

/// Folder name for elements without a resolvable group, and for groups
/// without a name.
pub const UNGROUPED: &str = "Ungrouped";

/// Hard cap on the length of a parent chain.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Groups keyed by id. A later record with a duplicate id replaces the earlier one.
pub struct GroupIndex<'a> {
    groups: HashMap<&'a str, &'a Group>,
    max_depth: usize,
}

impl<'a> GroupIndex<'a> {
    pub fn new(groups: &'a [Group]) -> Self {
        Self {
            groups: groups.iter().map(|g| (g.id.as_str(), g)).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn get(&self, id: &str) -> Option<&'a Group> {
        self.groups.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Folder hierarchy of `element`, root ancestor first.
    ///
    /// Elements without a group reference land in `["Ungrouped"]`.
    pub fn hierarchy(&self, element: &Element) -> Result<Vec<String>> {
        match element.group_id() {
            Some(group_id) => self.hierarchy_from(group_id),
            None => Ok(vec![UNGROUPED.to_owned()]),
        }
    }

    /// Names from the root ancestor down to `group_id` itself.
    ///
    /// An unknown id contributes `Ungrouped` and ends the walk. Revisiting
    /// an id is a [`Error::GroupCycle`]; walking more than `max_depth`
    /// groups is a [`Error::HierarchyTooDeep`].
    pub fn hierarchy_from(&self, group_id: &str) -> Result<Vec<String>> {
        let mut hierarchy = VecDeque::new();
        let mut visited = HashSet::new();
        let mut chain = Vec::new();
        let mut next = Some(group_id);

        while let Some(id) = next {
            chain.push(id);
            if !visited.insert(id) {
                return Err(Error::GroupCycle {
                    group_id: id.to_owned(),
                    chain: chain.into_iter().map(str::to_owned).collect(),
                });
            }
            if chain.len() > self.max_depth {
                return Err(Error::HierarchyTooDeep {
                    group_id: group_id.to_owned(),
                    limit: self.max_depth,
                });
            }

            match self.get(id) {
                Some(group) => {
                    hierarchy.push_front(group.name.as_deref().unwrap_or(UNGROUPED).to_owned());
                    next = group.parent_id.as_deref().filter(|p| !p.is_empty());
                }
                None => {
                    tracing::debug!(group_id = id, "unknown group id");
                    hierarchy.push_front(UNGROUPED.to_owned());
                    next = None;
                }
            }
        }

        if hierarchy.is_empty() {
            hierarchy.push_back(UNGROUPED.to_owned());
        }
        Ok(hierarchy.into())
    }
}
