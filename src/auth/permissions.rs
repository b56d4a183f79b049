// src/auth/permissions.rs
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    AnalyticsView,
    StoreEdit,
    UserCreate,
    VehicleView,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::AnalyticsView,
        Permission::StoreEdit,
        Permission::UserCreate,
        Permission::VehicleView,
    ];

    /// Wire spelling used by the API in a user's `permissions` list.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::AnalyticsView => "analytics:view",
            Permission::StoreEdit => "store:edit",
            Permission::UserCreate => "user:create",
            Permission::VehicleView => "vehicle:view",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
    #[default]
    Customer,
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn grants(self, permission: Permission) -> bool {
        match self {
            Role::Admin => true,
            Role::Manager => matches!(
                permission,
                Permission::AnalyticsView | Permission::StoreEdit | Permission::VehicleView
            ),
            Role::Staff => matches!(
                permission,
                Permission::AnalyticsView | Permission::VehicleView
            ),
            Role::Customer | Role::Unknown => false,
        }
    }
}

/// The signed-in user as described by the API's `/auth/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Extra grants on top of the role's defaults.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl CurrentUser {
    /// Two-letter avatar fallback.
    pub fn initials(&self) -> String {
        self.username.chars().take(2).collect::<String>().to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Viewer {
    #[default]
    Anonymous,
    User(CurrentUser),
}

impl Viewer {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::User(_))
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Viewer::User(u) => Some(u),
            Viewer::Anonymous => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Viewer::User(u) if u.role == Role::Admin)
    }

    pub fn can(&self, permission: Permission) -> bool {
        match self {
            Viewer::Anonymous => false,
            Viewer::User(u) => {
                u.role.grants(permission) || u.permissions.iter().any(|p| p == permission.as_str())
            }
        }
    }
}
