//! Landing page template.
//!
//! The HTML landing page is an optional bundled asset. It is read and parsed
//! once at startup; if that fails the page stays disabled for the life of the
//! process and the root endpoint serves JSON only.

use std::path::Path;

use tera::{Context, Tera};

/// Name the landing template is registered under. The `.html` suffix turns on
/// Tera's autoescaping for the substituted values.
const LANDING_TEMPLATE_NAME: &str = "index.html";

/// The parsed landing page, or nothing if it could not be loaded.
pub struct LandingPage {
    tera: Option<Tera>,
}

impl LandingPage {
    /// Load and parse the template at `path`. Failures are logged, not returned.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Landing template not found, HTML landing page disabled"
                );
                return Self::disabled();
            }
        };

        match Self::from_source(&contents) {
            Ok(page) => {
                tracing::info!(path = %path.display(), "Loaded landing template");
                page
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse landing template, HTML landing page disabled"
                );
                Self::disabled()
            }
        }
    }

    /// Parse a template from an in-memory string.
    pub fn from_source(source: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(LANDING_TEMPLATE_NAME, source)?;
        Ok(Self { tera: Some(tera) })
    }

    /// A landing page that never renders.
    pub fn disabled() -> Self {
        Self { tera: None }
    }

    pub fn is_available(&self) -> bool {
        self.tera.is_some()
    }

    /// Render the page with the environment and version substituted.
    pub fn render(&self, environment: &str, version: &str) -> Result<String, tera::Error> {
        let tera = self
            .tera
            .as_ref()
            .ok_or_else(|| tera::Error::msg("landing template is not loaded"))?;

        let mut context = Context::new();
        context.insert("environment", environment);
        context.insert("version", version);
        tera.render(LANDING_TEMPLATE_NAME, &context)
    }
}
