//! Release profiles
//!
//! Each binary runs exactly one `Release`. Everything that distinguishes the
//! blue process from the green one lives here as static data; the handlers
//! never branch on the color themselves.

use serde::Serialize;
use std::fmt;

/// Deployment slot label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Blue,
    Green,
}

impl Environment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Capitalized form used in startup logs ("Blue", "Green")
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }

    /// Uppercase banner shown on the landing page
    pub const fn banner(self) -> &'static str {
        match self {
            Self::Blue => "BLUE ENVIRONMENT",
            Self::Green => "GREEN ENVIRONMENT",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry of the `/api/features` catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    pub status: &'static str,
}

/// Landing page copy and colors
#[derive(Debug)]
pub struct PageTheme {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub footer: &'static str,
    /// Label of the "Deployment State" / "Deployment Stage" row
    pub state_label: &'static str,
    /// Label of the timestamp row
    pub time_label: &'static str,
    /// CSS `background` value of the page body
    pub background: &'static str,
    /// Accent color for the release number
    pub accent: &'static str,
    /// Background of the environment chip
    pub chip: &'static str,
    /// Background of the deployment badge
    pub badge: &'static str,
}

/// Immutable per-process release constants
#[derive(Debug)]
pub struct Release {
    pub version: &'static str,
    pub environment: Environment,
    /// Value of the `status` field in `/api/info`
    pub status: &'static str,
    /// Badge on the landing page ("LIVE", "STAGING")
    pub deployment_badge: &'static str,
    pub theme: PageTheme,
    /// "What's included" bullets on the landing page
    pub highlights: &'static [&'static str],
    /// `features` list of `/api/info`, omitted from the payload when `None`
    pub info_features: Option<&'static [&'static str]>,
    /// `/api/features` catalog; the route is not served when `None`
    pub new_features: Option<&'static [Feature]>,
}

impl Release {
    /// Whether this release serves `GET /api/features`
    pub const fn has_feature_catalog(&self) -> bool {
        self.new_features.is_some()
    }
}

pub static BLUE: Release = Release {
    version: "1.0",
    environment: Environment::Blue,
    status: "production",
    deployment_badge: "LIVE",
    theme: PageTheme {
        title: "Blue Deployment | Release v1",
        subtitle: "Blue-Green Release Strategy Demo",
        description: "This instance represents the active production workload currently \
                      serving users under the blue deployment phase.",
        footer: "Managed deployment \u{2022} Zero-downtime architecture",
        state_label: "Deployment State",
        time_label: "Server Timestamp",
        background: "radial-gradient(circle at top, #1b6ca8, #0f4c81)",
        accent: "#0f4c81",
        chip: "#0f4c81",
        badge: "#2ecc71",
    },
    highlights: &[],
    info_features: None,
    new_features: None,
};

pub static GREEN: Release = Release {
    version: "2.0",
    environment: Environment::Green,
    status: "staging",
    deployment_badge: "STAGING",
    theme: PageTheme {
        title: "Green Deployment | Release v2.0",
        subtitle: "Green Phase \u{2013} Pre-Production Validation",
        description: "This instance is the next production candidate currently running in the \
                      green environment for validation and testing before production deployment.",
        footer: "Blue-Green deployment \u{2022} Release validation phase",
        state_label: "Deployment Stage",
        time_label: "Server Time",
        background: "linear-gradient(145deg, #0f766e, #14532d)",
        accent: "#0f766e",
        chip: "#064e3b",
        badge: "#f59e0b",
    },
    highlights: &[
        "Updated interface with improved UX",
        "Performance optimizations across services",
        "Security hardening and configuration fixes",
        "Improved logging and monitoring hooks",
        "Resolved issues from previous release",
    ],
    info_features: Some(&[
        "Refreshed UI",
        "Improved performance",
        "Enhanced security",
        "Better analytics",
        "Bug fixes",
    ]),
    new_features: Some(&[
        Feature {
            name: "Modern UI",
            description: "Complete redesign with modern aesthetics",
            status: "completed",
        },
        Feature {
            name: "Performance Boost",
            description: "50% faster load times",
            status: "completed",
        },
        Feature {
            name: "Advanced Analytics",
            description: "Real-time insights and reporting",
            status: "completed",
        },
    ]),
};
