//! Allow/deny outcome of authorizing a request.
//!
//! Serializes to the policy shape API gateways expect from a custom
//! authorizer:
//!
//! ```json
//! {
//!   "principalId": "auth0|123",
//!   "policyDocument": {
//!     "Version": "2012-10-17",
//!     "Statement": [
//!       { "Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "*" }
//!     ]
//!   }
//! }
//! ```

use serde::Serialize;

use crate::error::ErrorKind;

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";
pub const ANY_RESOURCE: &str = "*";
/// Principal reported on a deny, so no claim data leaks out of a failed verification.
pub const DENIED_PRINCIPAL: &str = "user";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

impl PolicyDocument {
    /// A single statement applying `effect` to invoking any resource.
    fn invoke(effect: Effect) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: vec![Statement {
                action: INVOKE_ACTION.to_string(),
                effect,
                resource: ANY_RESOURCE.to_string(),
            }],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationDecision {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
    // Diagnostic only; never serialized to the caller.
    #[serde(skip)]
    reason: Option<ErrorKind>,
}

impl AuthorizationDecision {
    pub fn allow(principal_id: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
            policy_document: PolicyDocument::invoke(Effect::Allow),
            reason: None,
        }
    }

    pub fn deny(reason: ErrorKind) -> Self {
        Self {
            principal_id: DENIED_PRINCIPAL.to_string(),
            policy_document: PolicyDocument::invoke(Effect::Deny),
            reason: Some(reason),
        }
    }

    pub fn effect(&self) -> Effect {
        self.policy_document
            .statement
            .first()
            .map_or(Effect::Deny, |statement| statement.effect)
    }

    pub fn is_allowed(&self) -> bool {
        self.effect() == Effect::Allow
    }

    /// Why the request was denied, `None` on allow.
    pub fn reason(&self) -> Option<ErrorKind> {
        self.reason
    }

    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }
}
