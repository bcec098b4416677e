//! Registry configuration: authority, weights, and calculation method.

use cpi_types::{CalcMethod, PrincipalId, RegistryError, ScoreWeights};
use serde::{Deserialize, Serialize};

/// Process-wide scoring configuration.
///
/// Mutations are gated on the authority principal. A change affects only
/// future aggregations; indices already published keep the weight snapshot
/// they were computed with.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexConfig {
    authority: Option<PrincipalId>,
    weights: ScoreWeights,
    method: CalcMethod,
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authority(&self) -> Option<&PrincipalId> {
        self.authority.as_ref()
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    pub fn method(&self) -> CalcMethod {
        self.method
    }

    /// One-time authority assignment. There is no update or rotation path.
    ///
    /// The reserved burn principal is rejected because roles assigned to it
    /// are unrecoverable.
    pub fn set_authority(&mut self, principal: PrincipalId) -> Result<(), RegistryError> {
        if principal.is_reserved() {
            return Err(RegistryError::InvalidPrincipal(principal.to_string()));
        }
        if self.authority.is_some() {
            return Err(RegistryError::AlreadySet);
        }
        self.authority = Some(principal);
        Ok(())
    }

    /// Replace all three weights atomically. Authority-only.
    ///
    /// A rejected triple leaves the prior weights fully intact — partial
    /// updates are not observable.
    pub fn set_weights(
        &mut self,
        caller: &PrincipalId,
        bribery: u32,
        transparency: u32,
        audit: u32,
    ) -> Result<(), RegistryError> {
        self.require_authority(caller)?;
        self.weights = ScoreWeights::new(bribery, transparency, audit)?;
        Ok(())
    }

    /// Replace the calculation method. Authority-only.
    pub fn set_calc_method(
        &mut self,
        caller: &PrincipalId,
        method: &str,
    ) -> Result<(), RegistryError> {
        self.require_authority(caller)?;
        self.method = method.parse()?;
        Ok(())
    }

    /// Fails unless an authority is set and `caller` is it.
    fn require_authority(&self, caller: &PrincipalId) -> Result<(), RegistryError> {
        match &self.authority {
            Some(authority) if authority == caller => Ok(()),
            _ => Err(RegistryError::Unauthorized),
        }
    }
}
