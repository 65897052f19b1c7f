use std::fmt;

/// Audience an explanation is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The hiring party.
    Client,
    /// The candidate.
    Talent,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Talent => "talent",
        }
    }

    /// Closing phrase of the user prompt.
    pub fn phrase(self) -> &'static str {
        match self {
            Role::Client => "good match for the job",
            Role::Talent => "good job to apply for",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
