//! Authorization gate - maintenance mode and per-command privilege checks

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::entities::Role;

/// Process-wide maintenance flag.
///
/// Owned by the [`AuthorizationGate`]. The only write path is the
/// [`MaintenanceSwitch`] handed to handlers.
#[derive(Debug, Clone, Default)]
pub struct GlobalMode {
    admin_only: Arc<AtomicBool>,
}

impl GlobalMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_admin_only(&self) -> bool {
        self.admin_only.load(Ordering::Relaxed)
    }

    /// Handle that can flip the flag, given to owner-only commands
    pub fn switch(&self) -> MaintenanceSwitch {
        MaintenanceSwitch {
            admin_only: Arc::clone(&self.admin_only),
        }
    }
}

/// Write handle onto [`GlobalMode`]
#[derive(Debug, Clone)]
pub struct MaintenanceSwitch {
    admin_only: Arc<AtomicBool>,
}

impl MaintenanceSwitch {
    pub fn set(&self, enabled: bool) {
        self.admin_only.store(enabled, Ordering::Relaxed);
        tracing::info!("Admin-only mode {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Flip the flag and return the new state
    pub fn toggle(&self) -> bool {
        let enabled = !self.admin_only.fetch_xor(true, Ordering::Relaxed);
        tracing::info!("Admin-only mode {}", if enabled { "enabled" } else { "disabled" });
        enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.admin_only.load(Ordering::Relaxed)
    }
}

/// Why a dispatch was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    MaintenanceMode,
    InsufficientPrivilege,
}

impl DenyReason {
    /// Text sent back to the chat
    pub fn message(self) -> &'static str {
        match self {
            DenyReason::MaintenanceMode => "Sorry, only the bot admin can use commands right now.",
            DenyReason::InsufficientPrivilege => "Sorry, only the bot admin can use this command.",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenyReason::MaintenanceMode => write!(f, "maintenance mode"),
            DenyReason::InsufficientPrivilege => write!(f, "insufficient privilege"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

/// Evaluate the access rules in order: maintenance mode, then role.
///
/// A missing sender is never the owner.
pub fn authorize(role: Role, sender_id: Option<&str>, owner_id: &str, admin_only: bool) -> Decision {
    let is_owner = sender_id == Some(owner_id);

    if admin_only && !is_owner {
        return Decision::Deny(DenyReason::MaintenanceMode);
    }
    if role.is_owner_only() && !is_owner {
        return Decision::Deny(DenyReason::InsufficientPrivilege);
    }
    Decision::Allow
}

/// Gate bound to the configured owner and the live [`GlobalMode`]
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    owner_id: String,
    mode: GlobalMode,
}

impl AuthorizationGate {
    pub fn new(owner_id: impl Into<String>, mode: GlobalMode) -> Self {
        Self {
            owner_id: owner_id.into(),
            mode,
        }
    }

    pub fn authorize(&self, role: Role, sender_id: Option<&str>) -> Decision {
        authorize(role, sender_id, &self.owner_id, self.mode.is_admin_only())
    }

    pub fn mode(&self) -> &GlobalMode {
        &self.mode
    }
}
