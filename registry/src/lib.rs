//! The CPI registry state machine.
//!
//! Wires the subsystems into one synchronous, callable surface:
//! a submission is recorded in the ledger, independent verifier calls
//! increment its quorum counter, and the call that first completes the
//! quorum folds the submission's data into the country's published index.
//! Reads never fail; writes either fully commit or fully reject.
//!
//! The host environment supplies caller identity and block height with
//! every call via [`RequestContext`], and verifier membership via the
//! [`VerifierDirectory`] seam — the registry itself holds no clock and no
//! identity database.

pub mod context;
pub mod directory;
pub mod registry;

pub use context::RequestContext;
pub use directory::{StaticVerifierSet, VerifierDirectory};
pub use registry::IndexRegistry;
