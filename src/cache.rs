//! Generation-tagged memoization of section ownership.
//!
//! Resolving which top-level controller owns an absolute section is a linear
//! scan over the model. The scan is idempotent and side-effect free, so its
//! result can be memoized per section, but only for the lifetime of the
//! current model. Instead of relying on the cache being cleared at exactly
//! the right moment, every entry is tagged with the generation of the model
//! it was computed against; replacing the model bumps the generation and all
//! older entries become unreadable at once. A lookup either returns an entry
//! from the current generation or nothing, never a stale answer.

use std::collections::HashMap;

/// A section's owner: the controller's position in the model and the section
/// re-addressed in that controller's local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResolvedSection {
    /// Position of the owning controller in the model sequence.
    pub owner: usize,
    /// The queried section translated into the owner's local frame.
    pub local_section: usize,
}

/// Read-through cache of absolute section index to resolved owner.
#[derive(Debug, Default)]
pub(crate) struct ResolutionCache {
    generation: u64,
    entries: HashMap<usize, (u64, ResolvedSection)>,
}

impl ResolutionCache {
    /// Makes every existing entry unreadable. O(1); entries are lazily
    /// overwritten by later inserts.
    pub(crate) fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns the cached resolution for a section, if one was recorded
    /// against the current generation.
    pub(crate) fn get(&self, section: usize) -> Option<ResolvedSection> {
        match self.entries.get(&section) {
            Some((generation, resolved)) if *generation == self.generation => Some(*resolved),
            _ => None,
        }
    }

    /// Records a resolution for a section under the current generation.
    pub(crate) fn insert(&mut self, section: usize, resolved: ResolvedSection) {
        self.entries.insert(section, (self.generation, resolved));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_on_empty_cache() {
        let cache = ResolutionCache::default();
        assert_eq!(cache.get(0), None);
    }

    #[test]
    fn test_hit_returns_recorded_resolution() {
        let mut cache = ResolutionCache::default();
        let resolved = ResolvedSection {
            owner: 2,
            local_section: 1,
        };
        cache.insert(3, resolved);
        assert_eq!(cache.get(3), Some(resolved));
    }

    #[test]
    fn test_invalidate_hides_older_generations() {
        let mut cache = ResolutionCache::default();
        cache.insert(
            0,
            ResolvedSection {
                owner: 0,
                local_section: 0,
            },
        );

        cache.invalidate();

        assert_eq!(cache.get(0), None);
    }

    #[test]
    fn test_reinsert_after_invalidate_is_readable() {
        let mut cache = ResolutionCache::default();
        cache.insert(
            0,
            ResolvedSection {
                owner: 0,
                local_section: 0,
            },
        );
        cache.invalidate();

        let fresh = ResolvedSection {
            owner: 1,
            local_section: 0,
        };
        cache.insert(0, fresh);

        assert_eq!(cache.get(0), Some(fresh));
    }
}
