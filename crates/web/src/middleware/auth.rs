//! PIN-based role gate. Two configured PINs map to the two roles; the PIN
//! is carried as a bearer token. Deliberately a toy gate, not a security
//! boundary: it only decides which views and actions are reachable.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::WebError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operator,
}

#[derive(Clone)]
pub struct Pins {
    admin: String,
    operator: String,
}

impl Pins {
    pub fn new(admin: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            admin: admin.into(),
            operator: operator.into(),
        }
    }

    pub fn role_for(&self, pin: &str) -> Option<Role> {
        if pin == self.admin {
            Some(Role::Admin)
        } else if pin == self.operator {
            Some(Role::Operator)
        } else {
            None
        }
    }
}

fn bearer_pin(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Allow any authenticated station, operator or admin.
pub async fn require_operator(
    State(pins): State<Pins>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let pin = bearer_pin(&request).ok_or(WebError::Unauthorized)?;

    if pins.role_for(pin).is_none() {
        tracing::warn!("Rejected request with an unknown PIN");
        return Err(WebError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Allow the admin PIN only.
pub async fn require_admin(
    State(pins): State<Pins>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let pin = bearer_pin(&request).ok_or(WebError::Unauthorized)?;

    if pins.role_for(pin) != Some(Role::Admin) {
        tracing::warn!("Rejected admin action with a non-admin PIN");
        return Err(WebError::Unauthorized);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_resolve_to_roles() {
        let pins = Pins::new("9999", "1111");
        assert_eq!(pins.role_for("9999"), Some(Role::Admin));
        assert_eq!(pins.role_for("1111"), Some(Role::Operator));
        assert_eq!(pins.role_for("0000"), None);
        assert_eq!(pins.role_for(""), None);
    }
}
