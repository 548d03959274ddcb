//! # Scanner Addons
//!
//! The pluggable seam between target resolution and the protocol-specific
//! login attempts, which live outside this workspace. An [`Addon`] is a job
//! factory for one service category; the [`Registry`] maps category names
//! to addons, is populated once at process start, and is read-only
//! afterwards.
//!
//! High-level code depends on these traits only, never on a concrete addon.

pub mod addons;
mod registry;

pub use registry::Registry;

use passprobe_common::creds::CredentialSet;
use passprobe_common::network::target::Target;

/// One concrete login attempt, ready to hand to an execution backend.
///
/// The shape of a job is owned by the addon that built it; the core only
/// guarantees which four inputs went in.
pub trait ScanJob: Send + Sync {
    /// Human-readable one-liner for operator output.
    fn describe(&self) -> String;
}

/// Job factory for one service category.
pub trait Addon: Send + Sync {
    /// The category this addon serves.
    fn category(&self) -> &'static str;

    /// Builds one job from a credential set, a resolved target, and a
    /// single username/password pair out of that set.
    fn make_scanner(
        &self,
        set: &CredentialSet,
        target: &Target,
        username: &str,
        password: &str,
    ) -> Box<dyn ScanJob>;
}
