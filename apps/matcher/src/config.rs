use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::matching::ScoringMode;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_REPORT_DIR: &str = "reports";
pub const REPORT_FILE: &str = "report.txt";

/// Run configuration, resolved as defaults < config file < overrides.
///
/// Never fails: a malformed config file logs a warning and the defaults
/// stand; a missing one is silently ignored. Within a readable file each key
/// is taken on its own, so one bad value never discards its siblings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: ScoringMode,
    pub top_k: usize,
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ScoringMode::Weighted,
            top_k: DEFAULT_TOP_K,
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
        }
    }
}

/// Values that take precedence over the config file (environment or CLI).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub mode: Option<String>,
    pub top_k: Option<i64>,
    pub report_dir: Option<PathBuf>,
}

/// Keys recognized in `config.json`. Unknown keys are ignored and `null`
/// counts as absent.
#[derive(Debug, Default)]
struct FileConfig {
    mode: Option<String>,
    top_k: Option<i64>,
    report_dir: Option<PathBuf>,
}

impl FileConfig {
    fn from_object(obj: &Map<String, Value>) -> Self {
        let field = |key: &str| obj.get(key).filter(|v| !v.is_null());

        // A non-string mode is kept as its JSON text so it reads as unrecognized
        let mode = field("mode").map(|v| match v.as_str() {
            Some(s) => s.to_string(),
            None => v.to_string(),
        });

        let top_k = field("top_k").and_then(|v| {
            let k = integer_value(v);
            if k.is_none() {
                warn!(top_k = %v, "top_k must be a positive integer; using {DEFAULT_TOP_K}");
            }
            k
        });

        let report_dir = field("report_dir").and_then(|v| match v.as_str() {
            Some(s) => Some(PathBuf::from(s)),
            None => {
                warn!(report_dir = %v, "report_dir must be a string; ignoring");
                None
            }
        });

        Self {
            mode,
            top_k,
            report_dir,
        }
    }
}

/// Integers, integral floats (`3.0`) and integer strings (`"3"`).
fn integer_value(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                // integral and in range, so the cast is exact
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl Config {
    pub fn load(path: &Path, overrides: &Overrides) -> Self {
        let mut config = Config::default();

        match read_config_file(path) {
            Ok(Some(file)) => {
                debug!("Loaded config from {}", path.display());
                config.apply(file.mode.as_deref(), file.top_k, file.report_dir);
            }
            Ok(None) => debug!("No config file at {}; using defaults", path.display()),
            Err(e) => warn!("Failed to read config: {e:#}. Using defaults."),
        }

        config.apply(
            overrides.mode.as_deref(),
            overrides.top_k,
            overrides.report_dir.clone(),
        );
        config
    }

    pub fn report_path(&self) -> PathBuf {
        self.report_dir.join(REPORT_FILE)
    }

    /// A non-positive `top_k` resets to the default.
    fn apply(&mut self, mode: Option<&str>, top_k: Option<i64>, report_dir: Option<PathBuf>) {
        if let Some(mode) = mode {
            self.mode = ScoringMode::parse_lossy(mode);
            if !mode.trim().eq_ignore_ascii_case(self.mode.as_str()) {
                warn!(requested = mode, "Unrecognized scoring mode; falling back to cosine");
            }
        }
        if let Some(k) = top_k {
            match usize::try_from(k) {
                Ok(k) if k > 0 => self.top_k = k,
                _ => {
                    warn!(top_k = k, "top_k must be a positive integer; using {DEFAULT_TOP_K}");
                    self.top_k = DEFAULT_TOP_K;
                }
            }
        }
        if let Some(dir) = report_dir {
            self.report_dir = dir;
        }
    }
}

/// `Ok(None)` when the file does not exist.
fn read_config_file(path: &Path) -> Result<Option<FileConfig>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("cannot read {}", path.display())),
    };

    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    let Some(obj) = value.as_object() else {
        bail!("config must be a JSON object");
    };
    Ok(Some(FileConfig::from_object(obj)))
}
