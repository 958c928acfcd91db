//! # Role Resolver
//!
//! Maps the chosen class and level to a job title and description using a
//! fixed table. Levels `"1"` and `"9999"` have dedicated rows; any other
//! level falls back to the class's default row. No class means no role.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Warrior,
    Mage,
    Rogue,
}

impl FromStr for Class {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warrior" => Ok(Class::Warrior),
            "Mage" => Ok(Class::Mage),
            "Rogue" => Ok(Class::Rogue),
            other => Err(UnknownClass(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClass(pub String);

impl fmt::Display for UnknownClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown class: {:?}", self.0)
    }
}

impl std::error::Error for UnknownClass {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub description: &'static str,
}

impl Role {
    pub const NONE: Role = Role {
        title: "",
        description: "",
    };

    pub fn is_none(&self) -> bool {
        self.title.is_empty()
    }
}

/// One table row. `level: None` is the class's fallback row.
struct RoleEntry {
    class: Class,
    level: Option<&'static str>,
    role: Role,
}

const fn entry(
    class: Class,
    level: Option<&'static str>,
    title: &'static str,
    description: &'static str,
) -> RoleEntry {
    RoleEntry {
        class,
        level,
        role: Role { title, description },
    }
}

static ROLE_TABLE: [RoleEntry; 9] = [
    entry(
        Class::Warrior,
        Some("1"),
        "Tank Intern",
        "Assists with tank-related activities. Paid position.",
    ),
    entry(
        Class::Warrior,
        Some("9999"),
        "Tank Manager",
        "Manages tanks and tank-related activities.",
    ),
    entry(
        Class::Warrior,
        None,
        "Tank",
        "General tank. Does damage, takes damage. Responsible for tanking.",
    ),
    entry(
        Class::Mage,
        Some("1"),
        "DPS Associate",
        "Finds DPS deals and passes them on to DPS Manager.",
    ),
    entry(
        Class::Mage,
        Some("9999"),
        "DPS Operating Officer",
        "Oversees all DPS activities.",
    ),
    entry(
        Class::Mage,
        None,
        "DPS",
        "Does damage and ideally does not take damage. Logs hours in JIRA.",
    ),
    entry(
        Class::Rogue,
        Some("1"),
        "Stealth Junior Designer",
        "Designs rougue-like activities. Reports to Stealth Lead.",
    ),
    entry(
        Class::Rogue,
        Some("9999"),
        "Stealth Lead",
        "Lead designer for all things stealth. Some travel required.",
    ),
    entry(
        Class::Rogue,
        None,
        "Sneaky Person",
        "Sneaks around and does sneaky things. Reports to Stealth Lead.",
    ),
];

/// Never fails: an unset class yields [`Role::NONE`].
pub fn resolve(class: Option<Class>, level: &str) -> Role {
    let Some(class) = class else {
        return Role::NONE;
    };

    let rows = || ROLE_TABLE.iter().filter(move |row| row.class == class);
    rows()
        .find(|row| row.level == Some(level))
        .or_else(|| rows().find(|row| row.level.is_none()))
        .map_or(Role::NONE, |row| row.role)
}

/// Convenience over [`resolve`] for raw answer strings.
pub fn resolve_answers(class: &str, level: &str) -> Role {
    resolve(class.parse().ok(), level)
}
