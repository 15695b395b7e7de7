// ============================================================================
// config.rs — Icon configuration (sizes, file names, tool templates)
// ============================================================================
//
// Everything the generator needs is held in `IconConfig`. The built-in
// default reproduces the classic behaviour:
//   - sizes 16, 48, 128
//   - input  icon128.svg
//   - output icon{size}.png
//   - inkscape first, ImageMagick `convert` as fallback
//
// An `icons.toml` file may override any of these; missing keys keep their
// defaults.
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "icons.toml";

pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];
pub const DEFAULT_INPUT_FILE: &str = "icon128.svg";
pub const DEFAULT_OUTPUT_PATTERN: &str = "icon{size}.png";

const SIZE_PLACEHOLDER: &str = "{size}";
const INPUT_PLACEHOLDER: &str = "{input}";
const OUTPUT_PLACEHOLDER: &str = "{output}";

// ---------------------------------------------------------------------------
// Tool template
// ---------------------------------------------------------------------------

/// An external program plus its argument list. Arguments may contain the
/// placeholders `{input}`, `{output}` and `{size}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolTemplate {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Name shown in the install hint (e.g. "ImageMagick" for `convert`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ToolTemplate {
    pub fn new(program: &str, args: &[&str]) -> Self {
        ToolTemplate {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            display_name: None,
        }
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    /// Vector-to-raster exporter: `inkscape --export-type=png ...`
    pub fn inkscape() -> Self {
        ToolTemplate::new(
            "inkscape",
            &[
                "--export-type=png",
                "--export-filename",
                OUTPUT_PLACEHOLDER,
                "--export-width",
                SIZE_PLACEHOLDER,
                "--export-height",
                SIZE_PLACEHOLDER,
                INPUT_PLACEHOLDER,
            ],
        )
    }

    /// General image converter: `convert -resize NxN in out`
    pub fn imagemagick() -> Self {
        ToolTemplate::new("convert", &["-resize", "{size}x{size}", INPUT_PLACEHOLDER, OUTPUT_PLACEHOLDER])
            .with_display_name("ImageMagick")
    }

    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.program)
    }

    /// Substitutes the placeholders in every argument. Only the template text
    /// is scanned; substituted values are copied verbatim.
    pub fn expand(&self, input: &Path, output: &str, size: u32) -> Vec<String> {
        let input = input.to_string_lossy();
        let size = size.to_string();
        self.args
            .iter()
            .map(|arg| expand_placeholders(arg, &input, output, &size))
            .collect()
    }
}

fn expand_placeholders(arg: &str, input: &str, output: &str, size: &str) -> String {
    let mut expanded = String::with_capacity(arg.len());
    let mut rest = arg;
    while let Some(pos) = rest.find('{') {
        expanded.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let substitution = [
            (INPUT_PLACEHOLDER, input),
            (OUTPUT_PLACEHOLDER, output),
            (SIZE_PLACEHOLDER, size),
        ]
        .into_iter()
        .find(|(placeholder, _)| tail.starts_with(*placeholder));
        match substitution {
            Some((placeholder, value)) => {
                expanded.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                expanded.push('{');
                rest = &tail[1..];
            }
        }
    }
    expanded.push_str(rest);
    expanded
}

// ---------------------------------------------------------------------------
// Icon configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IconConfig {
    pub sizes: Vec<u32>,
    pub input_file: PathBuf,
    pub output_pattern: String,
    pub primary_tool: ToolTemplate,
    pub fallback_tool: ToolTemplate,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            sizes: DEFAULT_SIZES.to_vec(),
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_pattern: DEFAULT_OUTPUT_PATTERN.to_string(),
            primary_tool: ToolTemplate::inkscape(),
            fallback_tool: ToolTemplate::imagemagick(),
        }
    }
}

impl IconConfig {
    /// Reads and validates a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: IconConfig = toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path if given, otherwise `icons.toml` in `dir` when present,
    /// otherwise the built-in defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return IconConfig::load(path);
        }
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            IconConfig::load(&candidate)
        } else {
            Ok(IconConfig::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig("size list is empty".to_string()));
        }
        let mut seen = HashSet::new();
        for &size in &self.sizes {
            if size == 0 {
                return Err(Error::InvalidConfig("size 0 is not a valid icon size".to_string()));
            }
            if !seen.insert(size) {
                return Err(Error::InvalidConfig(format!("size {} is listed more than once", size)));
            }
        }
        if !self.output_pattern.contains(SIZE_PLACEHOLDER) {
            return Err(Error::InvalidConfig(format!(
                "output pattern '{}' must contain {}",
                self.output_pattern, SIZE_PLACEHOLDER
            )));
        }
        for (role, tool) in [("primary", &self.primary_tool), ("fallback", &self.fallback_tool)] {
            if tool.program.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{} tool has no program", role)));
            }
        }
        Ok(())
    }

    /// Output filename for one size, e.g. `icon48.png`.
    pub fn output_for(&self, size: u32) -> String {
        self.output_pattern.replace(SIZE_PLACEHOLDER, &size.to_string())
    }

    /// One line of advice printed when neither tool worked for a size.
    pub fn install_hint(&self) -> String {
        let source_kind = self
            .input_file
            .extension()
            .map(|e| e.to_string_lossy().to_uppercase())
            .unwrap_or_else(|| "source image".to_string());
        format!(
            "Please install {} or {}, or convert the {} manually",
            self.primary_tool.name(),
            self.fallback_tool.name(),
            source_kind
        )
    }
}
