//! Harness configuration
//!
//! The output location and the framing text are plain values handed to the
//! reporter and runner; nothing is read from the environment.

use std::path::{Path, PathBuf};

/// Default report location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "./rust_benchmark_results.txt";

/// First line of every report.
pub const DEFAULT_BANNER: &str = "========== RUST BENCHMARK REPORT ==========";

/// Last line of every completed report.
pub const DEFAULT_FOOTER: &str = "========== END OF REPORT ==========";

/// Configuration for a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    output_path: PathBuf,
    banner: String,
    footer: String,
    runtime_line: String,
    environment_line: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfigBuilder::new().build()
    }
}

impl HarnessConfig {
    /// Create a builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> HarnessConfigBuilder {
        HarnessConfigBuilder::new()
    }

    /// Where the report is written.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Banner line written when the report is truncated.
    #[must_use]
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Footer line written after the last trial.
    #[must_use]
    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Line identifying the harness build.
    #[must_use]
    pub fn runtime_line(&self) -> &str {
        &self.runtime_line
    }

    /// Line describing the host the run executes on.
    #[must_use]
    pub fn environment_line(&self) -> &str {
        &self.environment_line
    }
}

/// Builder for `HarnessConfig`.
#[derive(Debug)]
pub struct HarnessConfigBuilder {
    output_path: PathBuf,
    banner: String,
    footer: String,
    runtime_line: String,
    environment_line: String,
}

impl Default for HarnessConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HarnessConfigBuilder {
    /// Create a builder with the default path and framing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            banner: DEFAULT_BANNER.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            runtime_line: default_runtime_line(),
            environment_line: default_environment_line(),
        }
    }

    /// Set the report location.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the banner line.
    #[must_use]
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Set the footer line.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Override the runtime identifier line.
    #[must_use]
    pub fn runtime_line(mut self, line: impl Into<String>) -> Self {
        self.runtime_line = line.into();
        self
    }

    /// Override the environment description line.
    #[must_use]
    pub fn environment_line(mut self, line: impl Into<String>) -> Self {
        self.environment_line = line.into();
        self
    }

    /// Build the `HarnessConfig`.
    #[must_use]
    pub fn build(self) -> HarnessConfig {
        HarnessConfig {
            output_path: self.output_path,
            banner: self.banner,
            footer: self.footer,
            runtime_line: self.runtime_line,
            environment_line: self.environment_line,
        }
    }
}

fn default_runtime_line() -> String {
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };
    format!(
        "Rust Harness  : {} {} ({profile} build)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}

fn default_environment_line() -> String {
    format!(
        "System        : {} {}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default();
        assert_eq!(config.output_path(), Path::new(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.banner(), DEFAULT_BANNER);
        assert_eq!(config.footer(), DEFAULT_FOOTER);
        assert!(config.runtime_line().starts_with("Rust Harness  : trialbench "));
        assert!(config.environment_line().contains(std::env::consts::OS));
    }

    #[test]
    fn test_builder_overrides() {
        let config = HarnessConfig::builder()
            .output_path("/tmp/out.txt")
            .banner("BEGIN")
            .footer("END")
            .runtime_line("rt")
            .environment_line("env")
            .build();

        assert_eq!(config.output_path(), Path::new("/tmp/out.txt"));
        assert_eq!(config.banner(), "BEGIN");
        assert_eq!(config.footer(), "END");
        assert_eq!(config.runtime_line(), "rt");
        assert_eq!(config.environment_line(), "env");
    }
}
