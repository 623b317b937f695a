//! Plugin registration and hook dispatch.

use crate::hooks::{Hook, HookPriority};
use crate::host::Host;
use crate::io::Io;
use override_files_core::Result;
use std::fmt;
use tracing::debug;

/// A plugin reacting to host hooks.
pub trait Plugin: fmt::Debug {
    /// Plugin name, for logs.
    fn name(&self) -> &str;

    /// Hooks this plugin wants to receive.
    fn subscribed_hooks(&self) -> Vec<Hook>;

    /// Priority relative to other plugins on the same hook.
    fn priority(&self) -> HookPriority {
        HookPriority::Normal
    }

    /// Handle one hook.
    fn handle(&self, hook: Hook, host: &mut dyn Host, io: &mut dyn Io) -> Result<()>;
}

/// Runs registered plugins for a hook.
///
/// Plugins run by priority, then in registration order. The first error
/// stops the dispatch.
#[derive(Debug, Default)]
pub struct HookDispatcher {
    plugins: Vec<Box<dyn Plugin>>,
}

impl HookDispatcher {
    /// Create an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin.
    pub fn register(&mut self, plugin: impl Plugin + 'static) {
        debug!(plugin = plugin.name(), "registered plugin");
        self.plugins.push(Box::new(plugin));
    }

    /// Register a plugin, builder style.
    #[must_use]
    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        self.register(plugin);
        self
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if no plugin is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Dispatch `hook` and return how many plugins handled it.
    ///
    /// # Errors
    /// Returns the first plugin error, after naming the failing plugin on
    /// `io`.
    pub fn dispatch(&self, hook: Hook, host: &mut dyn Host, io: &mut dyn Io) -> Result<usize> {
        let mut subscribed: Vec<&dyn Plugin> = self
            .plugins
            .iter()
            .map(|plugin| &**plugin)
            .filter(|plugin| plugin.subscribed_hooks().contains(&hook))
            .collect();
        subscribed.sort_by_key(|plugin| plugin.priority().as_value());

        for plugin in &subscribed {
            debug!(plugin = plugin.name(), %hook, "dispatching hook");
            if let Err(err) = plugin.handle(hook, host, io) {
                io.error(&format!("Plugin {} failed during {hook}", plugin.name()));
                return Err(err);
            }
        }
        Ok(subscribed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{BufferIo, LineKind, Verbosity};
    use override_files_config::AutoloadConfig;
    use override_files_core::Error;
    use pretty_assertions::assert_eq;
    use sonic_rs::Value;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Default)]
    struct MemoryHost {
        autoload: AutoloadConfig,
    }

    impl Host for MemoryHost {
        fn root_dir(&self) -> &Path {
            Path::new("/project")
        }

        fn vendor_dir(&self) -> PathBuf {
            PathBuf::from("/project/vendor")
        }

        fn extra(&self) -> Option<&Value> {
            None
        }

        fn autoload(&self) -> AutoloadConfig {
            self.autoload.clone()
        }

        fn set_autoload(&mut self, autoload: AutoloadConfig) -> Result<()> {
            self.autoload = autoload;
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Recorder {
        name: &'static str,
        priority: HookPriority,
        fail: bool,
    }

    impl Plugin for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn subscribed_hooks(&self) -> Vec<Hook> {
            vec![Hook::PreAutoloadDump]
        }

        fn priority(&self) -> HookPriority {
            self.priority
        }

        fn handle(&self, hook: Hook, _host: &mut dyn Host, io: &mut dyn Io) -> Result<()> {
            if self.fail {
                return Err(Error::config(format!("{} failed", self.name)));
            }
            io.write(Verbosity::Normal, &format!("{} {hook}", self.name));
            Ok(())
        }
    }

    fn recorder(name: &'static str, priority: HookPriority, fail: bool) -> Recorder {
        Recorder {
            name,
            priority,
            fail,
        }
    }

    #[test]
    fn runs_by_priority_then_registration() {
        let dispatcher = HookDispatcher::new()
            .with(recorder("first", HookPriority::Normal, false))
            .with(recorder("second", HookPriority::Normal, false))
            .with(recorder("early", HookPriority::High, false));
        let mut host = MemoryHost::default();
        let mut io = BufferIo::new(Verbosity::Normal);

        let handled = dispatcher
            .dispatch(Hook::PreAutoloadDump, &mut host, &mut io)
            .unwrap();

        assert_eq!(handled, 3);
        let lines: Vec<&str> = io.lines_of(LineKind::Output).collect();
        assert_eq!(
            lines,
            vec![
                "early pre-autoload-dump",
                "first pre-autoload-dump",
                "second pre-autoload-dump"
            ]
        );
    }

    #[test]
    fn unsubscribed_hooks_are_ignored() {
        let dispatcher = HookDispatcher::new().with(recorder("only", HookPriority::Normal, false));
        let mut host = MemoryHost::default();
        let mut io = BufferIo::new(Verbosity::Normal);

        let handled = dispatcher
            .dispatch(Hook::PostInstallCmd, &mut host, &mut io)
            .unwrap();
        assert_eq!(handled, 0);
        assert!(io.lines().is_empty());
    }

    #[test]
    fn first_error_stops_dispatch() {
        let dispatcher = HookDispatcher::new()
            .with(recorder("broken", HookPriority::Normal, true))
            .with(recorder("never", HookPriority::Normal, false));
        let mut host = MemoryHost::default();
        let mut io = BufferIo::new(Verbosity::Normal);

        let err = dispatcher
            .dispatch(Hook::PreAutoloadDump, &mut host, &mut io)
            .unwrap_err();
        assert!(err.to_string().contains("broken failed"));
        assert_eq!(
            io.lines(),
            [(
                LineKind::Error,
                "Plugin broken failed during pre-autoload-dump".to_string()
            )]
        );
        assert_eq!(dispatcher.len(), 2);
    }
}
