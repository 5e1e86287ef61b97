use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Page sections that can be scrolled to, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Hero,
    About,
    Skills,
    Projects,
    Leadership,
    Contact,
}

/// Anchors linked from the header. `Skills` has a section but no link.
pub const NAV_LINKS: [Anchor; 4] = [
    Anchor::About,
    Anchor::Projects,
    Anchor::Leadership,
    Anchor::Contact,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section anchor `{0}`")]
pub struct UnknownAnchor(pub String);

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Hero,
        Anchor::About,
        Anchor::Skills,
        Anchor::Projects,
        Anchor::Leadership,
        Anchor::Contact,
    ];

    /// Element id, also used as the link fragment.
    pub fn id(self) -> &'static str {
        match self {
            Anchor::Hero => "hero",
            Anchor::About => "about",
            Anchor::Skills => "skills",
            Anchor::Projects => "projects",
            Anchor::Leadership => "leadership",
            Anchor::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Hero => "Home",
            Anchor::About => "About",
            Anchor::Skills => "Skills",
            Anchor::Projects => "Projects",
            Anchor::Leadership => "Leadership",
            Anchor::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Anchor {
    type Err = UnknownAnchor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.strip_prefix('#').unwrap_or(s);
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.id() == id)
            .ok_or_else(|| UnknownAnchor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_parse_back() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.id().parse::<Anchor>(), Ok(anchor));
            assert_eq!(anchor.href().parse::<Anchor>(), Ok(anchor));
        }
    }

    #[test]
    fn test_unknown_anchor() {
        let err = "footer".parse::<Anchor>().unwrap_err();
        assert_eq!(err, UnknownAnchor("footer".into()));
        assert_eq!(err.to_string(), "unknown section anchor `footer`");
    }

    #[test]
    fn test_nav_links_exclude_hero_and_skills() {
        let ids: Vec<_> = NAV_LINKS.iter().map(|a| a.id()).collect();
        assert_eq!(ids, ["about", "projects", "leadership", "contact"]);
    }

    #[test]
    fn test_nav_links_follow_page_order() {
        let positions: Vec<_> = NAV_LINKS
            .iter()
            .map(|link| Anchor::ALL.iter().position(|a| a == link).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_href_is_fragment() {
        assert_eq!(Anchor::Projects.href(), "#projects");
        assert_eq!(Anchor::Projects.to_string(), "projects");
    }
}
