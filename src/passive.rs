/// The occupancy values considered stable for one model instance.
///
/// A site is active iff its occupancy is absent from this set. The default
/// `{0, 1, 5, 6, 7, 8, 9, 10}` is a modeling choice tuned for this lattice
/// family, not a derived rule, so it stays configurable per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassiveSet {
    values: Vec<u32>,
}

impl PassiveSet {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Membership test; the order of the stored values is irrelevant.
    pub fn contains(&self, occupancy: u32) -> bool {
        self.values.contains(&occupancy)
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl Default for PassiveSet {
    fn default() -> Self {
        Self::new(vec![0, 1, 5, 6, 7, 8, 9, 10])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_matches_model() {
        let set = PassiveSet::default();
        assert_eq!(set.values(), &[0, 1, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn membership_ignores_order() {
        let set = PassiveSet::new(vec![5, 0, 3]);
        assert!(set.contains(0));
        assert!(set.contains(3));
        assert!(set.contains(5));
        assert!(!set.contains(1));
        assert!(!set.contains(4));
    }

    #[test]
    fn empty_set_makes_everything_active() {
        let set = PassiveSet::new(vec![]);
        assert!(!set.contains(0));
        assert!(!set.contains(7));
    }
}
