use super::STOCK_XFOIL_MAX_PANELS;
use crate::airfoil::Airfoil;
use crate::export::PlainExporter;
use crate::parser;
use crate::prelude::{AirfoilError, AirfoilResult, Exporter, PanelRefiner};
use crate::telemetry::LogManager;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Drives an xfoil executable over stdin to repanel an airfoil.
///
/// Each call works inside its own temporary directory, which is removed when
/// the call returns. The call blocks until xfoil exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct Xfoil {
    executable: PathBuf,
    args: Vec<OsString>,
}

impl Xfoil {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
        }
    }

    /// Adds a leading argument, for wrappers such as `xvfb-run xfoil`.
    pub fn with_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Command sequence fed to xfoil's stdin.
    ///
    /// The blank lines leave the PPAR menu and its confirmation prompts.
    pub fn script(input: &Path, output: &Path, panels: usize) -> String {
        format!(
            "LOAD {}\nPPAR\nN {}\n\n\n\nSAVE {}\nQUIT\n",
            input.display(),
            panels,
            output.display()
        )
    }

    fn run(&self, script: &str, logger: &LogManager) -> AirfoilResult<()> {
        let mut child = Command::new(&self.executable)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                AirfoilError::Refiner(format!(
                    "could not start {}: {}",
                    self.executable.display(),
                    err
                ))
            })?;

        // Dropping stdin after the write closes the pipe so xfoil sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(script.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        logger.detail(
            "xfoil",
            &format!(
                "exited with {} ({} bytes of output)",
                output.status,
                output.stdout.len()
            ),
        );

        if !output.status.success() {
            return Err(AirfoilError::Refiner(format!(
                "{} exited with {}: {}",
                self.executable.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written.map_err(|err| {
            AirfoilError::Refiner(format!("could not send commands to xfoil: {}", err))
        })
    }
}

impl Default for Xfoil {
    fn default() -> Self {
        Self::new("xfoil")
    }
}

impl PanelRefiner for Xfoil {
    fn refine(&self, airfoil: &Airfoil, panels: usize) -> AirfoilResult<Airfoil> {
        let logger = LogManager::new(airfoil.name());
        if panels > STOCK_XFOIL_MAX_PANELS {
            logger.detail(
                "xfoil",
                &format!("{} panels needs a custom-built xfoil", panels),
            );
        }

        let workdir = tempfile::Builder::new().prefix("airfoil-xfoil-").tempdir()?;
        let input = workdir.path().join("in.dat");
        let output = workdir.path().join("out.dat");

        let mut file = File::create(&input)?;
        PlainExporter.export(airfoil, &mut file)?;
        drop(file);

        self.run(&Self::script(&input, &output, panels), &logger)?;

        if !output.exists() {
            return Err(AirfoilError::Refiner(format!(
                "xfoil did not save {}",
                output.display()
            )));
        }
        parser::parse_bytes(&fs::read(&output)?)
    }
}
