//! Memo of action-pair values for one search call.

use std::collections::HashMap;

use crate::action::Action;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Key {
    fingerprint: u64,
    depth: u8,
    user: Action,
    opponent: Action,
}

/// Values already computed during the current search, keyed on the state
/// they were computed from. Created empty by every top-level call.
#[derive(Debug, Default)]
pub struct SearchCache {
    entries: HashMap<Key, f64>,
    hits: u64,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, fingerprint: u64, depth: u8, user: &Action, opponent: &Action) -> Option<f64> {
        let key = Key {
            fingerprint,
            depth,
            user: user.clone(),
            opponent: opponent.clone(),
        };
        let value = self.entries.get(&key).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value
    }

    pub fn insert(&mut self, fingerprint: u64, depth: u8, user: &Action, opponent: &Action, value: f64) {
        let key = Key {
            fingerprint,
            depth,
            user: user.clone(),
            opponent: opponent.clone(),
        };
        self.entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_is_part_of_the_key() {
        let mut cache = SearchCache::new();
        let (a, b) = (Action::from("earthquake"), Action::from("stoneedge"));
        cache.insert(7, 1, &a, &b, 12.5);
        assert_eq!(cache.get(7, 1, &a, &b), Some(12.5));
        assert_eq!(cache.get(7, 0, &a, &b), None);
        assert_eq!(cache.get(7, 1, &b, &a), None);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }
}
