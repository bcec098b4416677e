//! Verifier membership seam.
//!
//! Which principals count as verifiers is decided outside the registry —
//! the host implements [`VerifierDirectory`] over whatever identity source
//! it has. [`StaticVerifierSet`] covers hosts with a fixed roster, and
//! tests.

use cpi_types::PrincipalId;
use std::collections::HashSet;

/// External source of verifier membership.
pub trait VerifierDirectory {
    fn is_verifier(&self, principal: &PrincipalId) -> bool;
}

/// A fixed, in-memory verifier roster.
#[derive(Clone, Debug, Default)]
pub struct StaticVerifierSet {
    members: HashSet<PrincipalId>,
}

impl StaticVerifierSet {
    pub fn new(members: impl IntoIterator<Item = PrincipalId>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Add a verifier. Returns false if already present.
    pub fn insert(&mut self, principal: PrincipalId) -> bool {
        self.members.insert(principal)
    }

    /// Remove a verifier. Returns false if absent.
    pub fn remove(&mut self, principal: &PrincipalId) -> bool {
        self.members.remove(principal)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl VerifierDirectory for StaticVerifierSet {
    fn is_verifier(&self, principal: &PrincipalId) -> bool {
        self.members.contains(principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_checks() {
        let mut set = StaticVerifierSet::new([PrincipalId::new("v1")]);
        assert!(set.is_verifier(&PrincipalId::new("v1")));
        assert!(!set.is_verifier(&PrincipalId::new("v2")));

        set.insert(PrincipalId::new("v2"));
        assert!(set.is_verifier(&PrincipalId::new("v2")));

        set.remove(&PrincipalId::new("v1"));
        assert!(!set.is_verifier(&PrincipalId::new("v1")));
    }
}
