use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchingDomain, Profile};

/// On-disk fixture file: one entry per matching domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub domains: Vec<DomainFixture>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainFixture {
    pub domain: MatchingDomain,
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub seeds: Vec<SeedMessage>,
}

/// Demo message from a candidate, replayed when a thread is first opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMessage {
    #[serde(alias = "candidateId")]
    pub candidate_id: String,
    pub text: String,
}
