//! Configuration loaded from `.renalcalc.toml`.
//!
//! Only display concerns are configurable: the Kt/V target used to flag
//! results and the default output format. The formulas themselves, their
//! constants and their precision are fixed.
//!
//! ```toml
//! [thresholds]
//! total_ktv = 1.7
//!
//! [output]
//! default_format = "terminal"
//! use_color = true
//! ```

mod accessors;
mod core;
mod loader;
mod thresholds;

pub use self::core::{OutputConfig, RenalcalcConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::ThresholdsConfig;

/// Default configuration written by `renalcalc init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# renalcalc configuration

[thresholds]
# Weekly total Kt/V at or above which the adequacy target is shown as met
total_ktv = 1.7

[output]
# terminal, json or markdown
default_format = "terminal"
"#;
