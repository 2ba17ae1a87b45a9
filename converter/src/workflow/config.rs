use airfoilcore::export::{DEFAULT_STROKE, ExportOptions, OutputFormat};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one conversion, loadable from YAML.
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    pub format: OutputFormat,
    pub chord: Option<f64>,
    pub stroke: f64,
    pub interpolate: Option<usize>,
    pub xfoil: PathBuf,
    pub plot: bool,
    pub plot_file: PathBuf,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            chord: None,
            stroke: DEFAULT_STROKE,
            interpolate: None,
            xfoil: PathBuf::from("xfoil"),
            plot: false,
            plot_file: PathBuf::from("airfoil-plot.svg"),
        }
    }
}

impl ConversionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading conversion config {}", path_ref.display()))?;
        let config: ConversionConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing conversion config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn to_export_options(&self) -> ExportOptions {
        ExportOptions {
            stroke: self.stroke,
            chord: self.chord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_cli_defaults() {
        let cfg = ConversionConfig::default();
        assert_eq!(cfg.format, OutputFormat::Xfoil);
        assert_eq!(cfg.to_export_options(), ExportOptions::default());
        assert!(cfg.interpolate.is_none());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"format: dxf\nchord: 250.0\ninterpolate: 160\nxfoil: /opt/xfoil/bin/xfoil\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = ConversionConfig::load(&path).unwrap();
        assert_eq!(cfg.format, OutputFormat::Dxf);
        assert_eq!(cfg.chord, Some(250.0));
        assert_eq!(cfg.interpolate, Some(160));
        assert_eq!(cfg.stroke, DEFAULT_STROKE);
        assert_eq!(cfg.xfoil, PathBuf::from("/opt/xfoil/bin/xfoil"));
    }

    #[test]
    fn unknown_format_in_yaml_is_rejected() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"format: iges\n").unwrap();
        let path = temp.into_temp_path();
        assert!(ConversionConfig::load(&path).is_err());
    }
}
