//! Tracing setup for inspecting a writer session.
//!
//! `JAVAGEN_LOG` holds the filter directives (falling back to `RUST_LOG`);
//! `JAVAGEN_LOG_FORMAT` picks the output:
//!
//! ```bash
//! # Scope pushes/pops and registry growth, nested by span
//! JAVAGEN_LOG=trace JAVAGEN_LOG_FORMAT=tree cargo test -p javagen
//!
//! # Only the annotation path, one JSON object per event
//! JAVAGEN_LOG="javagen_emitter::writer=trace" JAVAGEN_LOG_FORMAT=json cargo test
//! ```
//!
//! Nothing is installed unless one of the filter variables is set.

use std::str::FromStr;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

const LOG_VAR: &str = "JAVAGEN_LOG";
const FALLBACK_LOG_VAR: &str = "RUST_LOG";
const FORMAT_VAR: &str = "JAVAGEN_LOG_FORMAT";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat `tracing-subscriber` lines.
    #[default]
    Text,
    /// Indented spans via `tracing-tree`; mirrors `begin_*`/`end` nesting.
    Tree,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to `Text`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "tree" => LogFormat::Tree,
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        })
    }
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    fn layer(self) -> BoxedLayer {
        match self {
            LogFormat::Text => fmt::layer().with_writer(std::io::stderr).boxed(),
            LogFormat::Json => fmt::layer().json().with_writer(std::io::stderr).boxed(),
            LogFormat::Tree => tracing_tree::HierarchicalLayer::new(2)
                .with_indent_lines(true)
                .with_targets(true)
                .with_writer(std::io::stderr)
                .boxed(),
        }
    }
}

/// Filter directives from the environment, if tracing was requested.
fn filter_from_env() -> Option<EnvFilter> {
    [LOG_VAR, FALLBACK_LOG_VAR]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(|directives| EnvFilter::builder().parse_lossy(directives))
}

/// Install the global subscriber on stderr.
///
/// Returns `false` when tracing was not requested or a subscriber is
/// already installed.
pub fn init_tracing() -> bool {
    let Some(filter) = filter_from_env() else {
        return false;
    };
    let format = LogFormat::parse(&std::env::var(FORMAT_VAR).unwrap_or_default());

    let installed = Registry::default()
        .with(format.layer())
        .with(filter)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(?format, "tracing initialised");
    }
    installed
}
