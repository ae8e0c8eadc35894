//! Fixed answer catalogs
//!
//! Every choice the wizard offers is a closed enum. On the wire each value
//! travels as its German UI label, exactly as the intake form sends it.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident, $catalog:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// All values in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Catalog name used in error messages
            pub const CATALOG: &'static str = $catalog;

            /// Wire and display label
            #[inline]
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| CatalogError::Unknown {
                        catalog: $catalog,
                        value: s.to_string(),
                    })
            }
        }
    };
}

catalog! {
    /// Applications used in the described process
    Application, "application" {
        /// Notion
        Notion => "Notion",
        /// Slack
        Slack => "Slack",
        /// Microsoft Teams
        MicrosoftTeams => "Microsoft Teams",
        /// Asana
        Asana => "Asana",
        /// Trello
        Trello => "Trello",
        /// Google Workspace suite
        GoogleWorkspace => "Google Workspace (Sheets, Docs, Slides, Gmail, Drive)",
        /// Apple iWork suite
        AppleIWork => "Apple Numbers | Pages | Keynote",
        /// LibreOffice
        LibreOffice => "LibreOffice",
        /// Confluence
        Confluence => "Confluence",
        /// Miro
        Miro => "Miro",
        /// Figma
        Figma => "Figma",
        /// Coda
        Coda => "Coda",
        /// Salesforce
        Salesforce => "Salesforce",
        /// HubSpot
        HubSpot => "HubSpot",
    }
}

catalog! {
    /// Time required per execution of the process
    TimeRequired, "time_required" {
        /// Under 15 minutes
        UnderFifteenMinutes => "< 15 min",
        /// 15 to 30 minutes
        FifteenToThirtyMinutes => "15-30 min",
        /// 30 to 60 minutes
        ThirtyToSixtyMinutes => "30-60 min",
        /// One to two hours
        OneToTwoHours => "1-2 h",
        /// More than two hours
        OverTwoHours => "> 2 h",
    }
}

catalog! {
    /// How often the process runs
    Frequency, "frequency" {
        /// Daily
        Daily => "täglich",
        /// Several times per week
        SeveralPerWeek => "mehrmals pro Woche",
        /// Weekly
        Weekly => "wöchentlich",
        /// Monthly
        Monthly => "monatlich",
        /// Less often than monthly
        Rarer => "seltener",
    }
}

catalog! {
    /// People affected by the process
    Stakeholder, "stakeholder" {
        /// The submitting user
        Myself => "mich",
        /// The user's team
        Team => "mein Team",
        /// The user's manager
        Manager => "meinen Chef",
        /// Customers
        Customers => "Kunden",
        /// Anyone else
        Other => "andere",
    }
}
