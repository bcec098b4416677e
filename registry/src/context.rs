//! Per-call ambient inputs.

use cpi_types::{BlockHeight, PrincipalId};

/// Ambient inputs for one entry-point call: who is calling, and the host's
/// current block height. Threaded explicitly into every call so the machine
/// stays deterministic under test.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub caller: PrincipalId,
    pub now: BlockHeight,
}

impl RequestContext {
    pub fn new(caller: PrincipalId, now: BlockHeight) -> Self {
        Self { caller, now }
    }
}
