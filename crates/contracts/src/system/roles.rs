use serde::{Deserialize, Serialize};

/// Closed set of supply-chain roles. The wire strings are the exact
/// camelCase values the credential table uses; everything keyed by role
/// (navigation, dashboard widgets, token claims) goes through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "drugSupplier")]
    DrugSupplier,
    #[serde(rename = "government")]
    Government,
    #[serde(rename = "distributor")]
    Distributor,
    #[serde(rename = "distributorLowLevel")]
    DistributorLowLevel,
    #[serde(rename = "medicalAdministrator")]
    MedicalAdministrator,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::DrugSupplier,
        Role::Government,
        Role::Distributor,
        Role::DistributorLowLevel,
        Role::MedicalAdministrator,
    ];

    /// Wire representation, matching the credential table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::DrugSupplier => "drugSupplier",
            Role::Government => "government",
            Role::Distributor => "distributor",
            Role::DistributorLowLevel => "distributorLowLevel",
            Role::MedicalAdministrator => "medicalAdministrator",
        }
    }

    /// Lenient parse: unknown strings yield `None` rather than an error.
    /// Callers that need strict validation check membership themselves;
    /// the view resolvers treat `None` as the least-privilege fallback.
    pub fn parse(s: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.as_str() == s)
    }

    /// Human-readable name for page titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::DrugSupplier => "Drug Supplier",
            Role::Government => "Government",
            Role::Distributor => "Distributor",
            Role::DistributorLowLevel => "Low-Level Distributor",
            Role::MedicalAdministrator => "Medical Administrator",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings_round_trip() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn test_parse_known() {
        assert_eq!(Role::parse("drugSupplier"), Some(Role::DrugSupplier));
        assert_eq!(Role::parse("distributorLowLevel"), Some(Role::DistributorLowLevel));
        assert_eq!(
            Role::parse("medicalAdministrator"),
            Some(Role::MedicalAdministrator)
        );
    }

    #[test]
    fn test_parse_unknown_is_none() {
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Distributor"), None); // case-sensitive
        assert_eq!(Role::parse("drugsupplier"), None);
        assert_eq!(Role::parse("admin"), None);
    }
}
