use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// One of the three independent hierarchy forests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HierarchyDomain {
    /// Company → department → position.
    Organization,
    /// Course taxonomy.
    Course,
    /// Student categories.
    Student,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!(HierarchyDomain::from_str("organization").unwrap(), HierarchyDomain::Organization);
        assert_eq!(HierarchyDomain::from_str("course").unwrap(), HierarchyDomain::Course);
        assert_eq!(HierarchyDomain::from_str("student").unwrap(), HierarchyDomain::Student);
        assert!(HierarchyDomain::from_str("ORGANIZATION").is_err());
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(HierarchyDomain::Student.to_string(), "student");
    }
}
