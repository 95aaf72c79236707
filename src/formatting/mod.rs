//! Terminal color handling for report output.

use colored::*;
use std::env;
use std::io::IsTerminal;

use crate::core::DerivedResult;
use crate::formulas::ThresholdStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    /// Resolve the color mode from the environment, then the config file.
    ///
    /// `NO_COLOR` and `CLICOLOR=0` win over everything, `CLICOLOR_FORCE=1`
    /// wins over the config file.
    pub fn from_env_and_config(use_color: Option<bool>) -> Self {
        let mut config = Self::default();

        if let Some(preference) = use_color {
            config.color = if preference {
                ColorMode::Always
            } else {
                ColorMode::Never
            };
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        config
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;

    /// Render a derived result, dimming "Not calculated".
    fn result(&self, result: &DerivedResult) -> String {
        match result {
            DerivedResult::Calculated { .. } => result.to_string(),
            DerivedResult::NotCalculated => self.dim(&result.to_string()),
        }
    }

    /// Render a Kt/V target flag, warning when below target.
    fn status(&self, status: ThresholdStatus) -> String {
        let text = status.to_string();
        match status {
            ThresholdStatus::Met => self.success(&text),
            ThresholdStatus::BelowTarget => self.warning(&text),
            ThresholdStatus::NotCalculated => self.dim(&text),
        }
    }
}

pub fn formatter_for(config: FormattingConfig) -> Box<dyn OutputFormatter> {
    if config.color.should_use_color() {
        colored::control::set_override(true);
        Box::new(ColoredFormatter)
    } else {
        Box::new(PlainFormatter)
    }
}

pub struct ColoredFormatter;

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.yellow().bold().to_string()
    }

    fn header(&self, text: &str) -> String {
        text.blue().bold().to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
