//! Organizational units, roles, and the authenticated-user shape.
//!
//! Authentication itself is simulated: the [`Roster`] lists the identities a
//! caller may assume, and everything downstream only needs the role and unit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subsidiary business unit that owns training submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationalUnit {
    /// Group-level scope with no subsidiary attached.
    Group,
    Broadcast,
    Drone,
    Automotive,
    ConstructionFm,
}

impl OrganizationalUnit {
    pub const SUBSIDIARIES: [OrganizationalUnit; 4] = [
        OrganizationalUnit::Broadcast,
        OrganizationalUnit::Drone,
        OrganizationalUnit::Automotive,
        OrganizationalUnit::ConstructionFm,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            OrganizationalUnit::Group => "Lumethis Group",
            OrganizationalUnit::Broadcast => "Bright FM",
            OrganizationalUnit::Drone => "Briech UAS",
            OrganizationalUnit::Automotive => "Luftreiber Autos",
            OrganizationalUnit::ConstructionFm => "Briech Atlantic",
        }
    }
}

impl fmt::Display for OrganizationalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    GroupAdmin,
    SubsidiaryManager,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::GroupAdmin => "Group Admin",
            UserRole::SubsidiaryManager => "Subsidiary Manager",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An already-authenticated user.
///
/// A subsidiary manager built through [`UserIdentity::subsidiary_manager`] always
/// carries a unit. Identities that arrive over the wire may not, and the
/// visibility rules treat a manager without a unit as seeing nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<OrganizationalUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl UserIdentity {
    pub fn group_admin(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId(id.into()),
            name: name.into(),
            role: UserRole::GroupAdmin,
            unit: None,
            title: None,
        }
    }

    pub fn subsidiary_manager(
        id: impl Into<String>,
        name: impl Into<String>,
        unit: OrganizationalUnit,
    ) -> Self {
        Self {
            id: UserId(id.into()),
            name: name.into(),
            role: UserRole::SubsidiaryManager,
            unit: Some(unit),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn is_group_admin(&self) -> bool {
        self.role == UserRole::GroupAdmin
    }

    /// Header label describing whose view is active.
    pub fn scope_label(&self) -> String {
        if let Some(title) = &self.title {
            return format!("{title} View");
        }
        match (self.role, self.unit) {
            (UserRole::GroupAdmin, _) => "Group Control View".to_string(),
            (UserRole::SubsidiaryManager, Some(unit)) => format!("{unit} View"),
            (UserRole::SubsidiaryManager, None) => "Unassigned View".to_string(),
        }
    }
}

/// Fixed set of identities offered by the simulated login screen.
#[derive(Debug, Clone)]
pub struct Roster {
    users: Vec<UserIdentity>,
}

impl Roster {
    pub fn new(users: Vec<UserIdentity>) -> Self {
        Self { users }
    }

    pub fn standard() -> Self {
        use OrganizationalUnit::*;

        Self::new(vec![
            UserIdentity::group_admin("u1", "Marquis Michael Abimbola")
                .with_title("Group Manager - Training"),
            UserIdentity::group_admin("u2", "Benedict Aondofa")
                .with_title("Technical Supervisor (2nd in Command)"),
            UserIdentity::subsidiary_manager("u6", "Ms. Anita", Broadcast)
                .with_title("General Manager"),
            UserIdentity::subsidiary_manager("u3", "Mubarak Sani", Drone)
                .with_title("General Manager"),
            UserIdentity::subsidiary_manager("u4", "Mr. Junaid Raza", Automotive)
                .with_title("Director"),
            UserIdentity::subsidiary_manager("u5", "Mr. Monday Apeh", ConstructionFm)
                .with_title("General Manager"),
            UserIdentity::subsidiary_manager("u7", "Mr. Giwa Ayodele", ConstructionFm)
                .with_title("Deputy General Manager"),
        ])
    }

    pub fn find(&self, id: &str) -> Option<&UserIdentity> {
        self.users.iter().find(|user| user.id.0 == id)
    }

    pub fn users(&self) -> &[UserIdentity] {
        &self.users
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::standard()
    }
}
