//! Per-invocation state handed to every command handler.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::StratusConfig;
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Global flags that shape output.
pub struct OutputFlags {
    pub no_color: bool,
    pub quiet: bool,
    pub json: bool,
}

pub struct AppContext {
    pub output: OutputContext,
    pub mode: OutputMode,
    pub config_store: YamlConfigStore,
    /// Prompts are answered with their default. Set by the `CI` or
    /// `STRATUS_YES` environment variables.
    pub non_interactive: bool,
}

impl AppContext {
    /// Context backed by the default configuration location.
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        Self::with_store(flags, YamlConfigStore::new())
    }

    #[must_use]
    pub fn with_store(flags: &OutputFlags, config_store: YamlConfigStore) -> Self {
        let non_interactive =
            std::env::var_os("CI").is_some() || std::env::var_os("STRATUS_YES").is_some();
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode: if flags.json {
                OutputMode::Json
            } else {
                OutputMode::Human
            },
            config_store,
            non_interactive,
        }
    }

    /// Renderer for the active output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read.
    pub fn load_config(&self) -> Result<StratusConfig> {
        self.config_store.load()
    }

    /// Ask a yes/no question, or return `default` when non-interactive.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        if self.non_interactive {
            return Ok(default);
        }
        Ok(dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}
