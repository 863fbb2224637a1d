use std::collections::btree_map;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::road::{Road, RoadId};

/// Roads keyed by id, iterated in ascending id order.
///
/// Inserting an id that is already present keeps the existing road.
#[derive(Debug, Clone, Default)]
pub struct RoadSet {
    roads: BTreeMap<RoadId, Arc<Road>>,
}

impl RoadSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` and leaves the set unchanged when the id is taken.
    pub fn insert(&mut self, road: Arc<Road>) -> bool {
        match self.roads.entry(road.id()) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(road);
                true
            }
        }
    }

    pub fn get(&self, id: RoadId) -> Option<&Arc<Road>> {
        self.roads.get(&id)
    }

    pub fn contains(&self, id: RoadId) -> bool {
        self.roads.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Arc<Road>> + ExactSizeIterator {
        self.roads.values()
    }

    pub fn ids(&self) -> impl DoubleEndedIterator<Item = RoadId> + ExactSizeIterator + '_ {
        self.roads.keys().copied()
    }
}

impl FromIterator<Arc<Road>> for RoadSet {
    fn from_iter<I: IntoIterator<Item = Arc<Road>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Arc<Road>> for RoadSet {
    fn extend<I: IntoIterator<Item = Arc<Road>>>(&mut self, iter: I) {
        for road in iter {
            self.insert(road);
        }
    }
}

impl<'a> IntoIterator for &'a RoadSet {
    type Item = &'a Arc<Road>;
    type IntoIter = btree_map::Values<'a, RoadId, Arc<Road>>;

    fn into_iter(self) -> Self::IntoIter {
        self.roads.values()
    }
}
