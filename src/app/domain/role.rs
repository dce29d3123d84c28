use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Console role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Employee,
    QaOfficer,
    SystemAdmin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_strings() {
        assert_eq!(Role::QaOfficer.to_string(), "QA_OFFICER");
        assert_eq!("SYSTEM_ADMIN".parse::<Role>().unwrap(), Role::SystemAdmin);
        assert!("ADMIN".parse::<Role>().is_err());
    }
}
