use std::fmt;

/// The coarse role vocabulary used by the designation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    Fighter,
    Bomber,
}

impl RoleCategory {
    /// Map an air unit's role tag onto a designation category.
    ///
    /// "Fighter" and "Fighter/Bomber" draw fighter names, "Bomber" draws
    /// bomber names. Every other role has no designation category.
    pub fn from_unit_role(role: &str) -> Option<Self> {
        let role = role.trim();
        if role.eq_ignore_ascii_case("Fighter") || role.eq_ignore_ascii_case("Fighter/Bomber") {
            Some(RoleCategory::Fighter)
        } else if role.eq_ignore_ascii_case("Bomber") {
            Some(RoleCategory::Bomber)
        } else {
            None
        }
    }

    /// Name as stored in the designation table's Type column
    pub fn as_str(self) -> &'static str {
        match self {
            RoleCategory::Fighter => "Fighter",
            RoleCategory::Bomber => "Bomber",
        }
    }

    /// Whether a designation's stored type belongs to this category
    pub fn matches(self, designation_type: &str) -> bool {
        designation_type.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
