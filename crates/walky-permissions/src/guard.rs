//! Render decisions for permission-gated content.
//!
//! A [`PermissionGuard`] names the resource and action protecting some piece of
//! the dashboard and what to show when the check fails. [`PermissionGuard::decide`]
//! is a pure function; callers turn the [`GuardDecision`] into a response.

use serde::{Deserialize, Serialize};

use crate::matrix::PermissionMatrix;
use crate::resource::{Action, Resource};
use crate::role::Role;

/// What to do when the check fails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Fallback {
    #[default]
    Hidden,
    Redirect(String),
    Content(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Hide,
    Redirect(String),
    Fallback(String),
}

impl GuardDecision {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardDecision::Render)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGuard {
    pub resource: Resource,
    pub action: Action,
    pub fallback: Fallback,
}

impl PermissionGuard {
    /// Guard `read` on `resource`, hiding the content on failure.
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            action: Action::default(),
            fallback: Fallback::default(),
        }
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// `role` is `None` when there is no recognised role in the session; that
    /// always takes the fallback.
    pub fn decide(&self, matrix: &PermissionMatrix, role: Option<Role>) -> GuardDecision {
        let allowed =
            role.is_some_and(|role| matrix.has_permission(role, self.resource, self.action));
        if allowed {
            return GuardDecision::Render;
        }

        match &self.fallback {
            Fallback::Hidden => GuardDecision::Hide,
            Fallback::Redirect(path) => GuardDecision::Redirect(path.clone()),
            Fallback::Content(content) => GuardDecision::Fallback(content.clone()),
        }
    }
}
