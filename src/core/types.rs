use serde::{Deserialize, Serialize};

/// Declared oligomeric state of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    Monomer,
    Homodimer,
    Homotrimer,
    Homotetramer,
    /// Any other tag; carries no copy count
    Unrecognized(String),
}

impl Cardinality {
    /// Parse a cardinality tag such as `monomer` or `homotrimer`
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "monomer" => Self::Monomer,
            "homodimer" => Self::Homodimer,
            "homotrimer" => Self::Homotrimer,
            "homotetramer" => Self::Homotetramer,
            _ => Self::Unrecognized(tag.to_string()),
        }
    }

    /// Number of chain copies, or `None` for unrecognized tags
    #[must_use]
    pub fn copy_count(&self) -> Option<usize> {
        match self {
            Self::Monomer => Some(1),
            Self::Homodimer => Some(2),
            Self::Homotrimer => Some(3),
            Self::Homotetramer => Some(4),
            Self::Unrecognized(_) => None,
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monomer => write!(f, "monomer"),
            Self::Homodimer => write!(f, "homodimer"),
            Self::Homotrimer => write!(f, "homotrimer"),
            Self::Homotetramer => write!(f, "homotetramer"),
            Self::Unrecognized(tag) => write!(f, "{tag}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Cardinality::parse("monomer"), Cardinality::Monomer);
        assert_eq!(Cardinality::parse("Homotrimer"), Cardinality::Homotrimer);
        assert_eq!(Cardinality::parse(" homodimer\n"), Cardinality::Homodimer);
        assert_eq!(Cardinality::Monomer.copy_count(), Some(1));
        assert_eq!(Cardinality::Homotrimer.copy_count(), Some(3));
        assert_eq!(Cardinality::Homotetramer.copy_count(), Some(4));
    }

    #[test]
    fn test_parse_unrecognized_tag() {
        let card = Cardinality::parse("heterodimer");
        assert_eq!(card, Cardinality::Unrecognized("heterodimer".to_string()));
        assert_eq!(card.copy_count(), None);
        assert_eq!(card.to_string(), "heterodimer");
    }
}
