use std::collections::HashSet;
use thiserror::Error;
use validator::Validate;
use crate::core::taxonomy::{is_known_category, taxonomy};
use crate::models::{MatchingDomain, Profile};

/// Errors raised while building a roster from loaded profiles
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Invalid profile {id}: {source}")]
    InvalidProfile {
        id: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Profile {id} has profession {profession:?} outside the {domain} taxonomy")]
    UnknownProfession {
        id: String,
        profession: String,
        domain: MatchingDomain,
    },

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),
}

/// Validated candidate list for one matching domain
#[derive(Debug, Clone)]
pub struct Roster {
    domain: MatchingDomain,
    profiles: Vec<Profile>,
}

impl Roster {
    /// Build a roster, checking every profile against the domain taxonomy
    pub fn new(domain: MatchingDomain, profiles: Vec<Profile>) -> Result<Self, RosterError> {
        let mut seen: HashSet<String> = HashSet::with_capacity(profiles.len());

        for profile in &profiles {
            profile.validate().map_err(|source| RosterError::InvalidProfile {
                id: profile.id.clone(),
                source,
            })?;

            if !is_known_category(domain, &profile.profession) {
                return Err(RosterError::UnknownProfession {
                    id: profile.id.clone(),
                    profession: profile.profession.clone(),
                    domain,
                });
            }

            if !seen.insert(profile.id.clone()) {
                return Err(RosterError::DuplicateId(profile.id.clone()));
            }
        }

        tracing::debug!("Roster for {} built with {} profiles", domain, profiles.len());

        Ok(Self { domain, profiles })
    }

    pub fn domain(&self) -> MatchingDomain {
        self.domain
    }

    pub fn taxonomy(&self) -> &'static [&'static str] {
        taxonomy(self.domain)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PresenceStatus;

    fn create_profile(id: &str, profession: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            age: 34,
            location: "Boston, MA".to_string(),
            profession: profession.to_string(),
            organization: "Massachusetts General Hospital".to_string(),
            bio: String::new(),
            interests: vec![],
            photos: vec![],
            online_status: PresenceStatus::Online,
            match_score: 92,
        }
    }

    #[test]
    fn test_valid_roster() {
        let roster = Roster::new(
            MatchingDomain::Doctor,
            vec![create_profile("1", "Cardiologist"), create_profile("2", "Pediatrician")],
        )
        .unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("2").map(|p| p.profession.as_str()), Some("Pediatrician"));
    }

    #[test]
    fn test_rejects_foreign_profession() {
        let err = Roster::new(MatchingDomain::Doctor, vec![create_profile("1", "SaaS")]).unwrap_err();
        assert!(matches!(err, RosterError::UnknownProfession { .. }));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Roster::new(
            MatchingDomain::Doctor,
            vec![create_profile("1", "Cardiologist"), create_profile("1", "Neurologist")],
        )
        .unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_rejects_out_of_range_score() {
        let mut profile = create_profile("1", "Cardiologist");
        profile.match_score = 150;
        let err = Roster::new(MatchingDomain::Doctor, vec![profile]).unwrap_err();
        assert!(matches!(err, RosterError::InvalidProfile { .. }));
    }

    #[test]
    fn test_rejects_empty_id_and_name() {
        let err = Roster::new(MatchingDomain::Doctor, vec![create_profile("", "Cardiologist")]).unwrap_err();
        assert!(matches!(&err, RosterError::InvalidProfile { id, source }
            if id.is_empty() && source.field_errors().contains_key("id")));

        let mut profile = create_profile("1", "Cardiologist");
        profile.name.clear();
        let err = Roster::new(MatchingDomain::Doctor, vec![profile]).unwrap_err();
        assert!(matches!(&err, RosterError::InvalidProfile { source, .. }
            if source.field_errors().contains_key("name")));
    }

    #[test]
    fn test_empty_roster_is_valid() {
        let roster = Roster::new(MatchingDomain::Founder, vec![]).unwrap();
        assert!(roster.is_empty());
    }
}
