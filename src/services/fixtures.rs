use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use crate::core::roster::{Roster, RosterError};
use crate::models::{FixtureFile, MatchingDomain, SeedMessage};

/// Errors that can occur while loading roster fixtures
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixtures: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {domain} roster: {source}")]
    Roster {
        domain: MatchingDomain,
        #[source]
        source: RosterError,
    },

    #[error("Domain {0} listed more than once")]
    DuplicateDomain(MatchingDomain),

    #[error("No fixtures for domain {0}")]
    MissingDomain(MatchingDomain),
}

/// Validated rosters and demo seed messages, keyed by matching domain
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    rosters: HashMap<MatchingDomain, Roster>,
    seeds: HashMap<MatchingDomain, Vec<SeedMessage>>,
}

impl Fixtures {
    /// Parse fixtures from TOML text
    pub fn from_toml(raw: &str) -> Result<Self, FixtureError> {
        let file: FixtureFile = toml::from_str(raw)?;
        Self::from_file(file)
    }

    pub fn from_file(file: FixtureFile) -> Result<Self, FixtureError> {
        let mut fixtures = Fixtures::default();

        for entry in file.domains {
            let domain = entry.domain;
            if fixtures.rosters.contains_key(&domain) {
                return Err(FixtureError::DuplicateDomain(domain));
            }

            let roster = Roster::new(domain, entry.profiles)
                .map_err(|source| FixtureError::Roster { domain, source })?;

            for seed in &entry.seeds {
                if roster.get(&seed.candidate_id).is_none() {
                    tracing::warn!(
                        "Seed message for unknown {} candidate {}",
                        domain,
                        seed.candidate_id
                    );
                }
            }

            fixtures.rosters.insert(domain, roster);
            fixtures.seeds.insert(domain, entry.seeds);
        }

        Ok(fixtures)
    }

    pub fn roster(&self, domain: MatchingDomain) -> Result<Roster, FixtureError> {
        self.rosters
            .get(&domain)
            .cloned()
            .ok_or(FixtureError::MissingDomain(domain))
    }

    pub fn seeds(&self, domain: MatchingDomain) -> Vec<SeedMessage> {
        self.seeds.get(&domain).cloned().unwrap_or_default()
    }

    pub fn domains(&self) -> Vec<MatchingDomain> {
        MatchingDomain::ALL
            .into_iter()
            .filter(|d| self.rosters.contains_key(d))
            .collect()
    }
}

/// Load and validate a fixture file from disk
pub fn load_fixtures<P: AsRef<Path>>(path: P) -> Result<Fixtures, FixtureError> {
    let path = path.as_ref();
    tracing::info!("Loading fixtures from {}", path.display());

    let raw = std::fs::read_to_string(path)?;
    let fixtures = Fixtures::from_toml(&raw)?;

    tracing::info!("Loaded fixtures for {} domains", fixtures.rosters.len());
    Ok(fixtures)
}
