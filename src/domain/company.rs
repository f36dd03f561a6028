//! Closed registry of employers the service accepts postings for.
//!
//! [`Company`] is the only identity type the persistence layer understands.
//! The set is fixed at compile time and seeded into `company.companies` on
//! every startup, so adding an employer means adding a variant here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Returned when a display name does not match any known [`Company`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown company: {0}")]
pub struct UnknownCompanyError(pub String);

/// A known employer.
///
/// Serializes as its canonical display name, which is also the value stored
/// in `company.companies.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Company {
    /// Berkshire Hathaway Energy.
    BerkshireHathawayEnergy,
    /// Citizen Health.
    CitizenHealth,
    /// Citadel.
    Citadel,
    /// Jane Street.
    JaneStreet,
    /// Twitch.
    Twitch,
    /// Pacific Gas & Electric.
    PacificGasAndElectric,
    /// Southern California Edison.
    SouthernCaliforniaEdison,
    /// Amae Health.
    AmaeHealth,
    /// ITS Logistics.
    ItsLogistics,
    /// Affirm.
    Affirm,
}

impl Company {
    /// Every known company, in seed order.
    pub const ALL: [Self; 10] = [
        Self::BerkshireHathawayEnergy,
        Self::CitizenHealth,
        Self::Citadel,
        Self::JaneStreet,
        Self::Twitch,
        Self::PacificGasAndElectric,
        Self::SouthernCaliforniaEdison,
        Self::AmaeHealth,
        Self::ItsLogistics,
        Self::Affirm,
    ];

    /// Canonical display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BerkshireHathawayEnergy => "Berkshire Hathaway Energy",
            Self::CitizenHealth => "Citizen Health",
            Self::Citadel => "Citadel",
            Self::JaneStreet => "Jane Street",
            Self::Twitch => "Twitch",
            Self::PacificGasAndElectric => "Pacific Gas & Electric",
            Self::SouthernCaliforniaEdison => "Southern California Edison",
            Self::AmaeHealth => "Amae Health",
            Self::ItsLogistics => "ITS Logistics",
            Self::Affirm => "Affirm",
        }
    }

    /// Resolves a display name to its company.
    ///
    /// Matching is exact: no trimming and no case folding.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCompanyError`] if no company has this display name.
    pub fn resolve(name: &str) -> Result<Self, UnknownCompanyError> {
        Self::ALL
            .into_iter()
            .find(|company| company.as_str() == name)
            .ok_or_else(|| UnknownCompanyError(name.to_string()))
    }

    /// Display names of every known company, in seed order.
    #[must_use]
    pub fn display_names() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Company {
    type Err = UnknownCompanyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl Serialize for Company {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Company {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::resolve(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolve_finds_every_company() {
        for company in Company::ALL {
            assert_eq!(Company::resolve(company.as_str()), Ok(company));
        }
    }

    #[test]
    fn resolve_rejects_unknown_name() {
        let result = Company::resolve("Not A Company");
        assert_eq!(
            result,
            Err(UnknownCompanyError("Not A Company".to_string()))
        );
    }

    #[test]
    fn resolve_is_exact_match() {
        assert!(Company::resolve("twitch").is_err());
        assert!(Company::resolve(" Twitch").is_err());
        assert!(Company::resolve("Twitch ").is_err());
        assert!(Company::resolve("Jane").is_err());
        assert!(Company::resolve("").is_err());
    }

    #[test]
    fn display_names_are_unique() {
        let names: HashSet<&str> = Company::ALL.iter().map(Company::as_str).collect();
        assert_eq!(names.len(), Company::ALL.len());
    }

    #[test]
    fn from_str_delegates_to_resolve() {
        let parsed: Result<Company, _> = "Pacific Gas & Electric".parse();
        assert_eq!(parsed, Ok(Company::PacificGasAndElectric));
    }

    #[test]
    fn serde_uses_display_name() {
        let Ok(json) = serde_json::to_string(&Company::ItsLogistics) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"ITS Logistics\"");

        let Ok(company) = serde_json::from_str::<Company>("\"Amae Health\"") else {
            panic!("deserialization failed");
        };
        assert_eq!(company, Company::AmaeHealth);

        assert!(serde_json::from_str::<Company>("\"SeatGeek\"").is_err());
    }
}
