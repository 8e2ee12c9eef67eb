use crate::ast::{Statement, UserUpdate, Value};
use crate::validate::collapse_none;

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl Statement {
    /// `put <value> in <key>`
    #[must_use]
    pub fn put(key: &str, value: impl Into<Value>) -> Self {
        Self::Put {
            key: key.to_string(),
            value: value.into(),
        }
    }

    /// `get <key>`
    #[must_use]
    pub fn get(key: &str) -> Self {
        Self::Get {
            key: key.to_string(),
        }
    }

    /// `delete <key>`
    #[must_use]
    pub fn delete(key: &str) -> Self {
        Self::Delete {
            key: key.to_string(),
        }
    }

    /// `get user <username>`
    #[must_use]
    pub fn get_user(username: &str) -> Self {
        Self::GetUser {
            username: username.to_string(),
        }
    }

    /// `delete user <username>`
    #[must_use]
    pub fn delete_user(username: &str) -> Self {
        Self::DeleteUser {
            username: username.to_string(),
        }
    }

    /// `update user <username> set ...`
    #[must_use]
    pub fn update_user(username: &str, update: UserUpdate) -> Self {
        Self::UpdateUser {
            username: username.to_string(),
            update,
        }
    }

    /// `list users`
    #[must_use]
    pub const fn list_users() -> Self {
        Self::ListUsers
    }
}

impl UserUpdate {
    #[must_use]
    pub fn password(password: &str) -> Self {
        Self::Password(password.to_string())
    }

    #[must_use]
    pub fn username(username: &str) -> Self {
        Self::Username(username.to_string())
    }

    /// New permission list, with the same `none` collapse the parser
    /// applies.
    #[must_use]
    pub fn permissions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Permissions(collapse_none(names.into_iter().map(Into::into).collect()))
    }

    #[must_use]
    pub const fn active(active: bool) -> Self {
        Self::Active(active)
    }
}

/// Builder for a `register_user` statement.
///
/// New users start inactive with no permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    password: String,
    permissions: Vec<String>,
    is_active: bool,
}

impl Registration {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            permissions: Vec::new(),
            is_active: false,
        }
    }

    /// Grant one permission.
    #[must_use]
    pub fn permission(mut self, name: &str) -> Self {
        self.permissions.push(name.to_string());
        self
    }

    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    #[must_use]
    pub fn build(self) -> Statement {
        Statement::RegisterUser {
            username: self.username,
            password: self.password,
            permissions: collapse_none(self.permissions),
            is_active: self.is_active,
        }
    }
}

impl From<Registration> for Statement {
    fn from(registration: Registration) -> Self {
        registration.build()
    }
}
