//! The resource catalog: one entry per backend collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// All resource collections exposed by the backend, in REST path order.
pub const ALL_RESOURCES: [ResourceKind; 7] = [
    ResourceKind::Condos,
    ResourceKind::Hotels,
    ResourceKind::Courses,
    ResourceKind::Restaurants,
    ResourceKind::Docs,
    ResourceKind::General,
    ResourceKind::TravelPosts,
];

/// A backend resource collection.
///
/// Every kind maps to one REST path with uniform list/detail/create/update/
/// patch/delete conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Condos,
    Hotels,
    Courses,
    Restaurants,
    Docs,
    General,
    TravelPosts,
}

impl ResourceKind {
    /// REST collection path, without the API base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Condos => "/condos",
            Self::Hotels => "/hotels",
            Self::Courses => "/courses",
            Self::Restaurants => "/restaurants",
            Self::Docs => "/docs",
            Self::General => "/general",
            Self::TravelPosts => "/travel-posts",
        }
    }

    /// CLI-facing name (matches the serde kebab-case form).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Condos => "condos",
            Self::Hotels => "hotels",
            Self::Courses => "courses",
            Self::Restaurants => "restaurants",
            Self::Docs => "docs",
            Self::General => "general",
            Self::TravelPosts => "travel-posts",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_RESOURCES
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnknownResource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for kind in ALL_RESOURCES {
            let parsed: ResourceKind = kind.as_str().parse().expect("known name");
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn paths_are_rooted_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for kind in ALL_RESOURCES {
            assert!(kind.path().starts_with('/'), "{kind} path must be rooted");
            assert!(seen.insert(kind.path()), "{kind} path duplicated");
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("jobs ".parse::<ResourceKind>().is_err());
        assert!("Condos".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn travel_posts_uses_kebab_case() {
        assert_eq!(ResourceKind::TravelPosts.as_str(), "travel-posts");
        assert_eq!(ResourceKind::TravelPosts.path(), "/travel-posts");
    }
}
