//! WASM bindings for pathtab
//!
//! This module provides JavaScript-accessible functions for rendering plan
//! text as a LaTeX tabular.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Rendering options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct TabularConvertOptions {
    /// Filler token for short rows (defaults to `\textbf{S}`)
    #[serde(default)]
    pub filler: Option<String>,
    /// Repeat each row's last value instead of inserting the filler
    #[serde(default)]
    pub repeat_last: bool,
    /// Row label prefix
    #[serde(default)]
    pub agent_label: Option<String>,
    /// Header row label
    #[serde(default)]
    pub header_label: Option<String>,
    /// Escape LaTeX special characters in tokens
    #[serde(default)]
    pub escape: bool,
}

#[cfg(feature = "wasm")]
impl From<TabularConvertOptions> for crate::TabularOptions {
    fn from(opts: TabularConvertOptions) -> Self {
        let defaults = crate::TabularOptions::default();
        crate::TabularOptions {
            filler: opts.filler.unwrap_or(defaults.filler),
            pad_mode: if opts.repeat_last {
                crate::PadMode::RepeatLast
            } else {
                crate::PadMode::Filler
            },
            agent_label: opts.agent_label.unwrap_or(defaults.agent_label),
            header_label: opts.header_label.unwrap_or(defaults.header_label),
            escape_tokens: opts.escape,
        }
    }
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The rendered tabular
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings about the input
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Render plan text as a LaTeX tabular with default options
///
/// # Arguments
/// * `input` - One line per agent, whitespace-separated values
///
/// # Returns
/// LaTeX tabular code
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "makeTabular")]
pub fn make_tabular_wasm(input: &str) -> String {
    crate::make_tabular(input)
}

/// Render plan text with options
///
/// Invalid option objects are reported in `error` rather than silently
/// replaced with defaults.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "makeTabularWithOptions")]
pub fn make_tabular_with_options_wasm(input: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let parsed: Result<TabularConvertOptions, _> = if options.is_undefined() || options.is_null() {
        Ok(TabularConvertOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
    };

    let result = match parsed {
        Ok(opts) => {
            let output = crate::make_tabular_with_options(input, &opts.into());
            ConvertResult {
                warnings: output.warning_messages(),
                output: output.content,
                success: true,
                error: None,
            }
        }
        Err(e) => ConvertResult {
            output: String::new(),
            success: false,
            error: Some(format!("Invalid options: {}", e)),
            warnings: vec![],
        },
    };

    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
