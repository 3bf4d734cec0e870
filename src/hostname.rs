//! Host-name resolution for notification bodies.
//!
//! Every message embeds the machine's host name, so the lookup sits
//! behind a small trait that tests can substitute.

use sysinfo::System;

/// Resolves the local machine's host name.
pub trait HostnameResolver: Send + Sync {
    /// Returns the host name reported by the OS, or `None` when the OS
    /// has no name for the machine.
    fn resolve(&self) -> Option<String>;
}

/// Resolves through the operating system via `sysinfo`.
pub struct SystemHostname;

impl HostnameResolver for SystemHostname {
    fn resolve(&self) -> Option<String> {
        System::host_name()
    }
}
