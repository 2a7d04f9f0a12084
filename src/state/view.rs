use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Raised when a string does not name any deck section.
///
/// Navigation inside the app is typed and can never hit this; it only
/// guards the string boundary (stored ids, authored link tables).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view id {0:?}, expected one of: overview, market, scale, roadmap, fundraise, about")]
pub struct InvalidViewError(pub String);

/// One section of the deck. Exactly one is active at a time, and the
/// full set is fixed at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Overview,
    Market,
    Scale,
    Roadmap,
    Fundraise,
    About,
}

impl View {
    /// Every section, in the order the nav presents them.
    pub const ALL: [View; 6] = [
        View::Overview,
        View::Market,
        View::Scale,
        View::Roadmap,
        View::Fundraise,
        View::About,
    ];

    /// Stable lowercase id, used as render key and in link tables.
    pub const fn id(self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Market => "market",
            View::Scale => "scale",
            View::Roadmap => "roadmap",
            View::Fundraise => "fundraise",
            View::About => "about",
        }
    }

    /// Label shown on the nav button for this section.
    pub const fn label(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Market => "Market Analysis",
            View::Scale => "Scale Plan",
            View::Roadmap => "Roadmap",
            View::Fundraise => "Fundraise",
            View::About => "About Me",
        }
    }

    /// Resolves a stored or authored id back to a section. Unknown ids
    /// are an error for the caller to surface, never coerced to a
    /// default.
    pub fn from_id(id: &str) -> Result<Self, InvalidViewError> {
        Self::ALL
            .iter()
            .copied()
            .find(|view| view.id() == id)
            .ok_or_else(|| InvalidViewError(id.to_string()))
    }
}

impl FromStr for View {
    type Err = InvalidViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_overview() {
        assert_eq!(View::default(), View::Overview);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in View::ALL.iter().enumerate() {
            for b in View::ALL.iter().skip(i + 1) {
                assert_ne!(a.id(), b.id(), "{a:?} and {b:?} share an id");
            }
        }
    }

    #[test]
    fn test_every_id_parses_back_to_its_view() {
        for view in View::ALL {
            assert_eq!(View::from_id(view.id()), Ok(view));
        }
    }

    #[test]
    fn test_from_id_rejects_unknown_ids() {
        let err = View::from_id("pricing").unwrap_err();
        assert_eq!(err, InvalidViewError("pricing".to_string()));
        assert!(err.to_string().contains("pricing"));
    }

    #[test]
    fn test_from_id_is_case_sensitive() {
        assert!(View::from_id("Overview").is_err());
    }

    #[test]
    fn test_from_str_matches_from_id() {
        assert_eq!("market".parse::<View>(), Ok(View::Market));
        assert!("".parse::<View>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_id() {
        assert_eq!(View::Fundraise.to_string(), "fundraise");
        assert_eq!(View::from_id(&View::About.to_string()), Ok(View::About));
    }

    #[test]
    fn test_nav_labels() {
        assert_eq!(View::Market.label(), "Market Analysis");
        assert_eq!(View::Scale.label(), "Scale Plan");
        for view in View::ALL {
            assert!(!view.label().is_empty());
        }
    }
}
