use thiserror::Error;

use crate::role::Role;

/// Errors raised when external strings are parsed into permission types,
/// or when an assignment table breaks the rank ordering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("unknown unmapped route policy: {0} (expected `allow` or `deny`)")]
    UnknownPolicy(String),

    #[error("role {0} is allowed to assign itself")]
    SelfAssignment(Role),

    #[error("role {assigner} may assign {target}, which does not rank below it")]
    Escalation { assigner: Role, target: Role },
}
