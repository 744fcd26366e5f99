//! Connectivity probe
//!
//! The client consults a probe before every request so that an offline
//! device fails fast with a distinguished error instead of timing out on
//! the network stack.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Current-connectivity check, consulted before each request
pub trait ConnectivityProbe: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Probe that always reports connectivity; the default for hosts without
/// a reachability source
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl ConnectivityProbe for AlwaysOnline {
    fn is_online(&self) -> bool {
        true
    }
}

/// Shared flag a host app flips from its reachability events
#[derive(Debug, Clone, Default)]
pub struct SharedConnectivity {
    online: Arc<AtomicBool>,
}

impl SharedConnectivity {
    /// Start in the given state
    pub fn new(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
        }
    }

    /// Update the connectivity state
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Relaxed);
    }
}

impl ConnectivityProbe for SharedConnectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}
