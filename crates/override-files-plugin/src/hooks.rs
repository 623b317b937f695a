//! Composer-compatible hooks.
//!
//! Only the events a host raises around installs, updates and autoload
//! generation are modelled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a plugin runs among the plugins subscribed to the same hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HookPriority {
    /// Runs before everything else.
    Highest,
    /// Runs before `Normal`.
    High,
    /// Default slot.
    #[default]
    Normal,
    /// Runs after `Normal`.
    Low,
    /// Runs after everything else.
    Lowest,
    /// Explicit sort key; lower runs first.
    Custom(i32),
}

impl HookPriority {
    /// Sort key, lower runs first.
    #[must_use]
    pub const fn as_value(&self) -> i32 {
        match self {
            Self::Highest => -1000,
            Self::High => -100,
            Self::Normal => 0,
            Self::Low => 100,
            Self::Lowest => 1000,
            Self::Custom(v) => *v,
        }
    }
}

/// Events a dependency manager raises around installs and autoload generation.
///
/// Names and serialized forms match Composer's script events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Hook {
    /// `pre-install-cmd`.
    PreInstallCmd,
    /// `post-install-cmd`.
    PostInstallCmd,
    /// `pre-update-cmd`.
    PreUpdateCmd,
    /// `post-update-cmd`.
    PostUpdateCmd,
    /// `pre-autoload-dump`: the autoload section may still be changed.
    PreAutoloadDump,
    /// `post-autoload-dump`.
    PostAutoloadDump,
}

impl Hook {
    /// Composer event name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PreInstallCmd => "pre-install-cmd",
            Self::PostInstallCmd => "post-install-cmd",
            Self::PreUpdateCmd => "pre-update-cmd",
            Self::PostUpdateCmd => "post-update-cmd",
            Self::PreAutoloadDump => "pre-autoload-dump",
            Self::PostAutoloadDump => "post-autoload-dump",
        }
    }

    /// Look a hook up by its Composer event name.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|hook| hook.as_str() == s)
    }

    /// Check if the hook fires before its command does its work.
    #[must_use]
    pub const fn is_pre_hook(&self) -> bool {
        matches!(
            self,
            Self::PreInstallCmd | Self::PreUpdateCmd | Self::PreAutoloadDump
        )
    }

    /// The `pre-`/`post-` twin of this hook.
    #[must_use]
    pub const fn counterpart(&self) -> Self {
        match self {
            Self::PreInstallCmd => Self::PostInstallCmd,
            Self::PostInstallCmd => Self::PreInstallCmd,
            Self::PreUpdateCmd => Self::PostUpdateCmd,
            Self::PostUpdateCmd => Self::PreUpdateCmd,
            Self::PreAutoloadDump => Self::PostAutoloadDump,
            Self::PostAutoloadDump => Self::PreAutoloadDump,
        }
    }

    /// Every hook, in firing order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        vec![
            Self::PreInstallCmd,
            Self::PostInstallCmd,
            Self::PreUpdateCmd,
            Self::PostUpdateCmd,
            Self::PreAutoloadDump,
            Self::PostAutoloadDump,
        ]
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
