use std::fmt;

/// Identity of a logical node across reconciliation passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(u64);

impl NodeKey {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mints keys that are unique within one document.
#[derive(Clone, Debug, Default)]
pub struct KeyGen {
    next: u64,
}

impl KeyGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self) -> NodeKey {
        self.next += 1;
        NodeKey(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique() {
        let mut keys = KeyGen::new();
        let a = keys.mint();
        let b = keys.mint();
        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(a.to_string(), "1");
    }
}
