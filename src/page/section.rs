//! Section identifiers
//!
//! A `SectionId` names one anchor-identified block of the home page. The
//! same value doubles as the active-section value shown by the nav bar.

use std::fmt;
use std::str::FromStr;

/// One of the five home page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Page order, which is also the resolver's priority order
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    /// Anchor identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    /// Position in page order (0-based)
    pub fn index(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::About => 1,
            SectionId::Projects => 2,
            SectionId::Skills => 3,
            SectionId::Contact => 4,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an id that is not one of the five sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_section() {
        assert_eq!(SectionId::default(), SectionId::ALL[0]);
        assert_eq!(SectionId::default(), SectionId::Hero);
    }

    #[test]
    fn test_index_matches_page_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_parse_anchor_ids() {
        assert_eq!("projects".parse::<SectionId>(), Ok(SectionId::Projects));
        assert_eq!(SectionId::Contact.to_string(), "contact");
        assert!("resume".parse::<SectionId>().is_err());
    }
}
