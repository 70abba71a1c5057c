//! Fixed choice catalogs offered by the lead form.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! catalog {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Look up an option by its exact label.
            pub fn from_label(label: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|o| o.label() == label)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

catalog! {
    /// Headcount bracket.
    CompanySize {
        Micro => "1-10",
        Small => "11-50",
        Medium => "51-200",
        Large => "201-1000",
        Enterprise => "1000+",
    }
}

catalog! {
    /// Budget bracket in euros.
    Budget {
        UpTo1k => "≤1.000€",
        From1kTo3k => "1.000-3.000€",
        From3kTo6k => "3.000-6.000€",
        From6kTo10k => "6.000-10.000€",
        Over10k => "10.000€+",
    }
}

catalog! {
    /// Main area of interest.
    Interest {
        Automation => "Automatización",
        AiAgents => "Agentes IA",
        Chatbot => "Chatbot",
        SystemsFusion => "Fusión de Sistemas",
        FullTransformation => "Transformación Completa",
    }
}
