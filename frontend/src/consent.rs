//! Consent status persistence and the banner's decision sequence.

use web_sys::window;
use yew::prelude::*;

pub const CONSENT_KEY: &str = "consent_status";

/// Delay before the banner slides in on a first visit.
pub const PROMPT_DELAY_MS: u32 = 1_500;
const PROCESSING_MS: u32 = 600;
const CONFIRMED_MS: u32 = 800;
const CLOSING_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentStatus {
    Granted,
    Denied,
}

impl ConsentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }

    /// Anything besides the two known values is treated as no decision.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "granted" => Some(Self::Granted),
            "denied" => Some(Self::Denied),
            _ => None,
        }
    }
}

pub fn load_status() -> Option<ConsentStatus> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(CONSENT_KEY).ok())
        .flatten()
        .and_then(|raw| ConsentStatus::parse(&raw))
}

pub fn store_status(status: ConsentStatus) {
    let stored = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .map(|storage| storage.set_item(CONSENT_KEY, status.as_str()).is_ok())
        .unwrap_or(false);
    if !stored {
        log::warn!("Could not persist consent status {}", status.as_str());
    }
}

/// Where the banner is in `idle -> processing -> confirmed -> closing -> idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerPhase {
    #[default]
    Idle,
    Processing(ConsentStatus),
    Confirmed(ConsentStatus),
    Closing(ConsentStatus),
}

/// What the owner has to do when a timed phase ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: BannerPhase,
    pub persist: Option<ConsentStatus>,
    pub hide: bool,
}

impl BannerPhase {
    /// Starts a decision. Ignored while another one is still running.
    pub fn choose(self, status: ConsentStatus) -> Option<BannerPhase> {
        match self {
            Self::Idle => Some(Self::Processing(status)),
            _ => None,
        }
    }

    /// How long this phase is shown before `tick`. `None` for idle.
    pub fn dwell_ms(self) -> Option<u32> {
        match self {
            Self::Idle => None,
            Self::Processing(_) => Some(PROCESSING_MS),
            Self::Confirmed(_) => Some(CONFIRMED_MS),
            Self::Closing(_) => Some(CLOSING_MS),
        }
    }

    pub fn tick(self) -> Transition {
        match self {
            Self::Idle => Transition { next: Self::Idle, persist: None, hide: false },
            Self::Processing(status) => Transition {
                next: Self::Confirmed(status),
                persist: None,
                hide: false,
            },
            Self::Confirmed(status) => Transition {
                next: Self::Closing(status),
                persist: Some(status),
                hide: false,
            },
            Self::Closing(_) => Transition { next: Self::Idle, persist: None, hide: true },
        }
    }

    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }

    pub fn pending(self) -> Option<ConsentStatus> {
        match self {
            Self::Processing(status) => Some(status),
            _ => None,
        }
    }

    pub fn confirmed(self) -> Option<ConsentStatus> {
        match self {
            Self::Confirmed(status) | Self::Closing(status) => Some(status),
            _ => None,
        }
    }
}

/// Shared through a context so any component can ask for the banner again
/// without knowing where it lives.
#[derive(Clone, PartialEq)]
pub struct ConsentHandle {
    pub status: Option<ConsentStatus>,
    pub visible: bool,
    pub reopen: Callback<()>,
    pub decided: Callback<ConsentStatus>,
    pub close: Callback<()>,
}
