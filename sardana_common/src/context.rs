//! Process context.
//!
//! Everything a sardana client needs from the definitions lives in one
//! [`SardanaContext`], created by the process bootstrap and handed to
//! consumers by reference. Building it expands the interface graph eagerly,
//! so a misconfigured table stops the process before any reader exists.

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, SardanaConfig};
use crate::element::State;
use crate::interface::{InterfaceError, InterfaceGraph};
use crate::numeric::ScalarNumberFilter;

/// Bootstrap failure.
#[derive(Debug, Clone, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("interface table rejected: {0}")]
    Interfaces(#[from] InterfaceError),
}

/// Definitions and server state owned by the process bootstrap.
#[derive(Debug, Clone)]
pub struct SardanaContext {
    server_state: State,
    interfaces: InterfaceGraph,
    filter: ScalarNumberFilter,
}

impl SardanaContext {
    /// Validate `config` and build the builtin interface graph.
    ///
    /// The server state starts as [`State::Invalid`].
    pub fn init(config: &SardanaConfig) -> Result<Self, InitError> {
        config.validate()?;
        let interfaces = InterfaceGraph::builtin()?;
        info!(
            service = %config.shared.service_name,
            interfaces = interfaces.len(),
            "sardana definitions initialized"
        );
        Ok(Self::with_interfaces(config, interfaces))
    }

    /// Context over an already built interface graph.
    pub fn with_interfaces(config: &SardanaConfig, interfaces: InterfaceGraph) -> Self {
        Self {
            server_state: State::Invalid,
            interfaces,
            filter: ScalarNumberFilter::new(config.filter.epsilon),
        }
    }

    pub fn server_state(&self) -> State {
        self.server_state
    }

    pub fn set_server_state(&mut self, state: State) {
        if state != self.server_state {
            debug!(from = %self.server_state, to = %state, "server state changed");
        }
        self.server_state = state;
    }

    pub fn interfaces(&self) -> &InterfaceGraph {
        &self.interfaces
    }

    /// Change filter configured with the context's epsilon.
    pub fn filter(&self) -> &ScalarNumberFilter {
        &self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use crate::consts::EPSILON_ERROR;

    #[test]
    fn init_with_defaults() {
        let ctx = SardanaContext::init(&SardanaConfig::default()).unwrap();
        assert_eq!(ctx.server_state(), State::Invalid);
        assert!(ctx.interfaces().is_a("PseudoCounter", "ExpChannel"));
        assert_eq!(ctx.filter().epsilon, EPSILON_ERROR);
    }

    #[test]
    fn init_rejects_invalid_config() {
        let mut config = SardanaConfig::default();
        config.shared.service_name.clear();
        assert!(matches!(
            SardanaContext::init(&config),
            Err(InitError::Config(ConfigError::ValidationError(_)))
        ));
    }

    #[test]
    fn filter_epsilon_comes_from_config() {
        let config = SardanaConfig {
            filter: FilterConfig { epsilon: 0.01 },
            ..Default::default()
        };
        let ctx = SardanaContext::init(&config).unwrap();
        assert_eq!(ctx.filter().epsilon, 0.01);
    }

    #[test]
    fn server_state_is_owned_by_context() {
        let mut ctx = SardanaContext::init(&SardanaConfig::default()).unwrap();
        ctx.set_server_state(State::Running);
        assert_eq!(ctx.server_state(), State::Running);
    }
}
