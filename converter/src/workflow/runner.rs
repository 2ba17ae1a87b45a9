use crate::workflow::config::ConversionConfig;
use airfoilcore::prelude::PanelRefiner;
use airfoilcore::refine::Xfoil;
use airfoilcore::telemetry::LogManager;
use airfoilcore::Airfoil;
use anyhow::Context;
use std::io::{Read, Write};

/// Outcome of the parse and optional refinement stages.
pub struct Conversion {
    pub airfoil: Airfoil,
    /// Contour as parsed, kept when refinement replaced it.
    pub original: Option<Airfoil>,
}

impl Conversion {
    /// Every contour worth plotting, oldest first.
    pub fn snapshots(&self) -> Vec<&Airfoil> {
        self.original.iter().chain(Some(&self.airfoil)).collect()
    }
}

pub struct Runner {
    config: ConversionConfig,
    refiner: Box<dyn PanelRefiner>,
}

impl Runner {
    pub fn new(config: ConversionConfig) -> Self {
        let refiner = Box::new(Xfoil::new(config.xfoil.clone()));
        Self::with_refiner(config, refiner)
    }

    pub fn with_refiner(config: ConversionConfig, refiner: Box<dyn PanelRefiner>) -> Self {
        Self { config, refiner }
    }

    /// Parses `input` and applies the configured refinement.
    pub fn prepare<R: Read>(&self, input: R, source: &str) -> anyhow::Result<Conversion> {
        let mut airfoil = Airfoil::from_reader(input)
            .with_context(|| format!("reading airfoil from {}", source))?;
        let logger = LogManager::new(airfoil.name());
        logger.record("parse", &format!("{} points from {}", airfoil.len(), source));

        let original = match self.config.interpolate {
            Some(panels) => {
                let before = airfoil.clone();
                airfoil
                    .interpolate(self.refiner.as_ref(), panels)
                    .with_context(|| format!("interpolating {} to {} panels", source, panels))?;
                Some(before)
            }
            None => None,
        };

        Ok(Conversion { airfoil, original })
    }

    pub fn export(&self, conversion: &Conversion, out: &mut dyn Write) -> anyhow::Result<()> {
        let format = self.config.format;
        format
            .write(&conversion.airfoil, &self.config.to_export_options(), out)
            .with_context(|| format!("writing {} output", format))?;
        LogManager::new(conversion.airfoil.name()).record("export", &format!("wrote {}", format));
        Ok(())
    }
}
