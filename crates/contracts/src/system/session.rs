use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "customer",
        }
    }
}

/// The signed-in user, as stored in the session and in client storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveUser {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: Role,
}

impl ActiveUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: ActiveUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: ActiveUser,
}

/// Client-storage key scoped to the session: `cart_42` when signed in,
/// `cart_guest` otherwise. Keeps carts from leaking between accounts on a
/// shared browser.
pub fn scoped_storage_key(base: &str, user: Option<&ActiveUser>) -> String {
    match user {
        Some(user) => format!("{base}_{}", user.id),
        None => format!("{base}_guest"),
    }
}

pub const CART_STORAGE_BASE: &str = "cart";
pub const LAST_ORDER_STORAGE_BASE: &str = "lastOrderItems";
pub const ACTIVE_USER_STORAGE_KEY: &str = "activeUser";

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, role: Role) -> ActiveUser {
        ActiveUser {
            id,
            username: "asha".to_string(),
            email: None,
            role,
        }
    }

    #[test]
    fn storage_keys_scope_per_account() {
        let signed_in = user(42, Role::Customer);
        assert_eq!(
            scoped_storage_key(CART_STORAGE_BASE, Some(&signed_in)),
            "cart_42"
        );
        assert_eq!(scoped_storage_key(CART_STORAGE_BASE, None), "cart_guest");
        assert_eq!(
            scoped_storage_key(LAST_ORDER_STORAGE_BASE, None),
            "lastOrderItems_guest"
        );
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&user(1, Role::Admin)).unwrap();
        assert!(json.contains(r#""role":"admin""#));
        let parsed: ActiveUser = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_admin());
    }
}
