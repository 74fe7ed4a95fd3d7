//! Module-level permission evaluation.
//!
//! A page names the module it belongs to and asks whether the current
//! principal may open it. The answer depends only on the decoded [`Claims`]:
//!
//! - no module (absent or empty) is public and always granted;
//! - no claims denies everything else;
//! - a super-admin is granted everything;
//! - otherwise the module must be listed in `permissions`.
//!
//! Claims are read once per activation through a [`ClaimsReader`]. A failed
//! read settles exactly like a missing credential, so access fails closed.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::claims::{Claims, ClaimsReader};

/// Decide access to `module_id` for the given claims.
pub fn has_permission(claims: Option<&Claims>, module_id: Option<&str>) -> bool {
    let module_id = match module_id {
        Some(id) if !id.is_empty() => id,
        _ => return true,
    };
    match claims {
        None => false,
        Some(c) if c.is_super_admin => true,
        Some(c) => c.permissions.contains(module_id),
    }
}

/// Outcome of the one claims read an activation performs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClaimsState {
    #[default]
    Pending,
    Resolved(Option<Claims>),
}

impl ClaimsState {
    /// Settle a reader result. Errors collapse to "no claims".
    pub fn from_read<E: Display>(result: Result<Option<Claims>, E>) -> Self {
        match result {
            Ok(Some(claims)) => {
                tracing::debug!(
                    subject = %claims.sub,
                    super_admin = claims.is_super_admin,
                    modules = claims.permissions.len(),
                    "claims resolved"
                );
                ClaimsState::Resolved(Some(claims))
            }
            Ok(None) => ClaimsState::Resolved(None),
            Err(e) => {
                tracing::warn!(error = %e, "claims read failed, denying module access");
                ClaimsState::Resolved(None)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ClaimsState::Pending)
    }

    pub fn claims(&self) -> Option<&Claims> {
        match self {
            ClaimsState::Resolved(Some(claims)) => Some(claims),
            _ => None,
        }
    }

    /// While pending this answers as if no claims were present. Callers
    /// gate rendering on [`is_loading`](Self::is_loading) first.
    pub fn has_permission(&self, module_id: Option<&str>) -> bool {
        has_permission(self.claims(), module_id)
    }
}

/// Per-activation evaluator: starts pending, settles once.
#[derive(Debug, Clone, Default)]
pub struct PermissionEvaluator {
    state: ClaimsState,
}

impl PermissionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator and perform its single read.
    pub fn activate<R: ClaimsReader + ?Sized>(reader: &R) -> Self {
        let mut evaluator = Self::new();
        evaluator.settle(reader.read_claims());
        evaluator
    }

    /// Record the read result. Only the first call has effect; returns
    /// whether this call settled the evaluator.
    pub fn settle<E: Display>(&mut self, result: Result<Option<Claims>, E>) -> bool {
        if !self.state.is_loading() {
            return false;
        }
        self.state = ClaimsState::from_read(result);
        true
    }

    pub fn state(&self) -> &ClaimsState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.state.claims()
    }

    pub fn has_permission(&self, module_id: Option<&str>) -> bool {
        self.state.has_permission(module_id)
    }
}

/// Access decision for a single module, as reported over the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessDecision {
    pub module: String,
    pub granted: bool,
}

/// Snapshot of what the current session may open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSummary {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub is_super_admin: bool,
    pub modules: Vec<AccessDecision>,
}

impl PermissionSummary {
    pub fn evaluate(claims: Option<&Claims>, modules: &[&str]) -> Self {
        Self {
            authenticated: claims.is_some(),
            subject: claims.map(|c| c.sub.clone()),
            is_super_admin: claims.map(|c| c.is_super_admin).unwrap_or(false),
            modules: modules
                .iter()
                .map(|m| AccessDecision {
                    module: m.to_string(),
                    granted: has_permission(claims, Some(*m)),
                })
                .collect(),
        }
    }

    pub fn granted_modules(&self) -> impl Iterator<Item = &str> {
        self.modules
            .iter()
            .filter(|d| d.granted)
            .map(|d| d.module.as_str())
    }
}
