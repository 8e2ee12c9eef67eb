use serde::Serialize;

/// Scalar value stored by a `put` or carried by a user update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// One parsed command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statement {
    /// `put <value> in <key>`
    Put { key: String, value: Value },
    /// `get <key>`
    Get { key: String },
    /// `delete <key>`
    Delete { key: String },
    /// `register user <name> <password> with <perms> and is [not] active`
    RegisterUser {
        username: String,
        password: String,
        permissions: Vec<String>,
        #[serde(rename = "isActive")]
        is_active: bool,
    },
    /// `update user <name> set <field> ...`
    UpdateUser {
        username: String,
        #[serde(flatten)]
        update: UserUpdate,
    },
    /// `get user <name>`
    GetUser { username: String },
    /// `delete user <name>`
    DeleteUser { username: String },
    /// `list users`
    ListUsers,
}

/// The field changed by an `update user` statement, with its new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum UserUpdate {
    Password(String),
    Username(String),
    Permissions(Vec<String>),
    Active(bool),
}

impl UserUpdate {
    /// Name of the updated field as written in the command.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Password(_) => "password",
            Self::Username(_) => "username",
            Self::Permissions(_) => "permissions",
            Self::Active(_) => "active",
        }
    }
}

impl Statement {
    /// Tag of this statement, matching its serialized `type`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Put { .. } => "put",
            Self::Get { .. } => "get",
            Self::Delete { .. } => "delete",
            Self::RegisterUser { .. } => "register_user",
            Self::UpdateUser { .. } => "update_user",
            Self::GetUser { .. } => "get_user",
            Self::DeleteUser { .. } => "delete_user",
            Self::ListUsers => "list_users",
        }
    }
}
