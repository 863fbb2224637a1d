use std::collections::{BTreeMap, BTreeSet};

/// Key set of an ordered map, in the map's order.
pub fn extract_keys<K: Ord + Clone, V>(input: &BTreeMap<K, V>) -> BTreeSet<K> {
    input.keys().cloned().collect()
}
