//! Etcher - section rendering orchestrator
//!
//! This module provides the Etcher struct which holds the configuration and
//! the collaborators (type name resolver, parameter renderer) used while
//! rendering, and drives the "Types" section over a list of type nodes.

use crate::diagnostics::{EtchError, EtchResult};
use crate::fragment::{Fragment, Inline};
use crate::model::TypeGeneralData;
use crate::params::{DefaultParamRenderer, ParamRenderer};
use crate::ts_types::{TypeDocResolver, TypeNameResolver};
use crate::types::RECORD_MARKER;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Heading level of the section title
pub const SECTION_HEADING_LEVEL: u8 = 2;

/// Key of the section block
pub const SECTION_KEY: &str = "types";

/// Configuration for the Etcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields, default)]
pub struct EtchConfig {
    /// Section heading text
    pub section_title: String,
    /// Name of the generic key/value container type
    pub container_marker: String,
}

impl Default for EtchConfig {
    fn default() -> Self {
        Self {
            section_title: "Types".to_string(),
            container_marker: RECORD_MARKER.to_string(),
        }
    }
}

impl EtchConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the section title
    pub fn with_section_title(mut self, title: impl Into<String>) -> Self {
        self.section_title = title.into();
        self
    }

    /// Set the container marker
    pub fn with_container_marker(mut self, marker: impl Into<String>) -> Self {
        self.container_marker = marker.into();
        self
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> EtchResult<Self> {
        toml::from_str(text).map_err(|e| EtchError::Config(e.to_string()))
    }

    /// Load a config from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> EtchResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| EtchError::Config(format!("{}: {}", path.display(), e)))
    }
}

/// The section renderer
///
/// Etcher renders exported types into fragments:
/// 1. Classify each type's shape
/// 2. Render the shape (tables, value lists, argument lists)
/// 3. Group the rendered types under the section heading
///
/// Rendering takes `&self` and keeps no state between calls.
pub struct Etcher {
    /// Configuration
    config: EtchConfig,
    /// Type name resolver
    resolver: Box<dyn TypeNameResolver>,
    /// Parameter renderer
    param_renderer: Box<dyn ParamRenderer>,
}

impl Default for Etcher {
    fn default() -> Self {
        Self::new(EtchConfig::default())
    }
}

impl fmt::Debug for Etcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Etcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Etcher {
    /// Create a new Etcher with the default collaborators
    pub fn new(config: EtchConfig) -> Self {
        Self {
            config,
            resolver: Box::new(TypeDocResolver),
            param_renderer: Box::new(DefaultParamRenderer),
        }
    }

    /// Replace the type name resolver
    pub fn with_resolver(mut self, resolver: impl TypeNameResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Replace the parameter renderer
    pub fn with_param_renderer(mut self, renderer: impl ParamRenderer + 'static) -> Self {
        self.param_renderer = Box::new(renderer);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &EtchConfig {
        &self.config
    }

    /// Get the type name resolver
    pub fn resolver(&self) -> &dyn TypeNameResolver {
        self.resolver.as_ref()
    }

    /// Get the parameter renderer
    pub fn param_renderer(&self) -> &dyn ParamRenderer {
        self.param_renderer.as_ref()
    }

    /// Render the section for a list of exported types
    ///
    /// Returns `None` for an empty list. Otherwise the section heading comes
    /// first, followed by every type that renders, in input order.
    pub fn render_section(&self, nodes: &[TypeGeneralData]) -> Option<Fragment> {
        if nodes.is_empty() {
            return None;
        }

        let mut children = vec![Fragment::heading(
            SECTION_HEADING_LEVEL,
            vec![Inline::text(self.config.section_title.clone())],
        )];
        children.extend(nodes.iter().filter_map(|node| self.render_type(node)));

        debug!(
            total = nodes.len(),
            rendered = children.len() - 1,
            "rendered types section"
        );

        Some(Fragment::block(SECTION_KEY, children))
    }
}

/// Render the section with the default configuration
pub fn render_section(nodes: &[TypeGeneralData]) -> Option<Fragment> {
    Etcher::default().render_section(nodes)
}
