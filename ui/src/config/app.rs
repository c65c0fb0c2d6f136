use super::{LoggingConfig, limits::*, validation::ConfigValidationError};
use crate::render::OutputFormat;
use pager::{BoundsPolicy, LinkLabels, PaginationView, SiteRouter};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    routing: RoutingConfig,
    #[serde(default)]
    labels: LabelsConfig,
    #[serde(default)]
    bounds: BoundsConfig,
    #[serde(default)]
    output: OutputConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Some(base_path) = &self.routing.base_path {
            if !base_path.trim().starts_with('/') {
                errors.push(ConfigValidationError::BasePath {
                    configured: base_path.clone(),
                });
            }
        }

        if self.labels.previous().trim().is_empty() {
            errors.push(ConfigValidationError::EmptyLabel { which: "previous" });
        }
        if self.labels.next().trim().is_empty() {
            errors.push(ConfigValidationError::EmptyLabel { which: "next" });
        }

        let width = self.output.width();
        if !(MIN_TERMINAL_WIDTH..=MAX_TERMINAL_WIDTH).contains(&width) {
            errors.push(ConfigValidationError::TerminalWidth {
                configured: width,
                min_limit: MIN_TERMINAL_WIDTH,
                max_limit: MAX_TERMINAL_WIDTH,
            });
        }

        let level = self.logging.level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn routing(&self) -> &RoutingConfig {
        &self.routing
    }

    pub fn routing_mut(&mut self) -> &mut RoutingConfig {
        &mut self.routing
    }

    pub fn labels(&self) -> &LabelsConfig {
        &self.labels
    }

    pub fn bounds(&self) -> &BoundsConfig {
        &self.bounds
    }

    pub fn bounds_mut(&mut self) -> &mut BoundsConfig {
        &mut self.bounds
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut OutputConfig {
        &mut self.output
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Pagination view wired with the configured router, labels and policy.
    pub fn pagination_view(&self) -> PaginationView<SiteRouter> {
        PaginationView::new(self.routing.router())
            .with_labels(self.labels.link_labels())
            .with_policy(self.bounds.policy())
    }
}

/// Where listing pages live on the site
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RoutingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    base_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_segment: Option<String>,
}

impl RoutingConfig {
    pub fn base_path(&self) -> &str {
        self.base_path.as_deref().unwrap_or("/")
    }

    /// Empty strings count as unset so `page_segment = ""` disables the segment.
    pub fn page_segment(&self) -> Option<&str> {
        self.page_segment
            .as_deref()
            .filter(|segment| !segment.trim_matches('/').is_empty())
    }

    pub fn set_base_path(&mut self, base_path: String) {
        self.base_path = Some(base_path);
    }

    pub fn set_page_segment(&mut self, segment: String) {
        self.page_segment = Some(segment);
    }

    pub fn router(&self) -> SiteRouter {
        let router = SiteRouter::new(self.base_path());
        match self.page_segment() {
            Some(segment) => router.with_page_segment(segment),
            None => router,
        }
    }
}

/// Literal previous/next link text
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LabelsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next: Option<String>,
}

impl LabelsConfig {
    pub fn previous(&self) -> &str {
        self.previous.as_deref().unwrap_or("← Previous Page")
    }

    pub fn next(&self) -> &str {
        self.next.as_deref().unwrap_or("Next Page →")
    }

    pub fn link_labels(&self) -> LinkLabels {
        LinkLabels::new(self.previous(), self.next())
    }
}

/// Out-of-range page handling
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoundsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    policy: Option<BoundsPolicy>,
}

impl BoundsConfig {
    pub fn policy(&self) -> BoundsPolicy {
        self.policy.unwrap_or_default()
    }

    pub fn set_policy(&mut self, policy: BoundsPolicy) {
        self.policy = Some(policy);
    }
}

/// Output format and presentation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    with_style: Option<bool>,
    /// Width of the terminal buffer for the `terminal` format (default: 80)
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u16>,
}

impl OutputConfig {
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn with_style(&self) -> bool {
        self.with_style.unwrap_or(false)
    }

    pub fn width(&self) -> u16 {
        self.width.unwrap_or(80)
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = Some(format);
    }

    pub fn set_with_style(&mut self, with_style: bool) {
        self.with_style = Some(with_style);
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = Some(width);
    }
}
