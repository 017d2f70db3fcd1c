use indexmap::IndexSet;

use crate::extract::collapse_whitespace;

/// lowercases and collapses whitespace so names from the route block and
/// from tooltips compare equal.
pub fn normalize_camera_name(name: &str) -> String {
    collapse_whitespace(&name.to_lowercase())
}

/// camera names from the route block that have not been matched yet.
/// only ever shrinks. iteration follows first appearance on the route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WantedNameSet {
    names: IndexSet<String>,
}

impl WantedNameSet {
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let names = names
            .iter()
            .map(|n| normalize_camera_name(n.as_ref()))
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// removes the normalized form of `name` if it is still wanted.
    /// returns true when a wanted name was consumed.
    pub fn claim(&mut self, name: &str) -> bool {
        self.names.shift_remove(&normalize_camera_name(name))
    }

    pub fn into_remaining(self) -> Vec<String> {
        self.names.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(
            normalize_camera_name("  Highway 401  near\tMorningside AVE "),
            "highway 401 near morningside ave"
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = WantedNameSet::from_names(&["Highway 401 A", "highway  401 a", "Highway 401 B"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_claim_consumes_once() {
        let mut set = WantedNameSet::from_names(&["A", "B"]);
        assert!(set.claim("a"));
        assert!(!set.claim("A"));
        assert_eq!(set.into_remaining(), vec!["b"]);
    }

    #[test]
    fn test_remaining_keeps_route_order() {
        let mut set = WantedNameSet::from_names(&["C", "A", "B"]);
        set.claim("a");
        assert_eq!(set.into_remaining(), vec!["c", "b"]);
    }
}
