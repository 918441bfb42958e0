use std::{fmt, io, path::PathBuf, str::FromStr};

use ccitt_g4::{bits::FillOrder, g42d::EncodeOptions};
use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

/// The order of bits in the output bytes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitOrder {
    /// Most significant bit first (TIFF `FillOrder = 1`)
    Msb,
    /// Least significant bit first (TIFF `FillOrder = 2`)
    Lsb,
}

#[derive(Debug, Error)]
#[error("Use one of `msb` or `lsb`")]
/// Failed to parse a bit order
pub struct BitOrderError {}

impl Default for BitOrder {
    fn default() -> Self {
        BitOrder::Msb
    }
}

impl FromStr for BitOrder {
    type Err = BitOrderError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "msb" | "1" => Ok(Self::Msb),
            "lsb" | "2" => Ok(Self::Lsb),
            _ => Err(BitOrderError {}),
        }
    }
}

impl fmt::Display for BitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Msb => f.write_str("msb"),
            Self::Lsb => f.write_str("lsb"),
        }
    }
}

impl From<BitOrder> for FillOrder {
    fn from(order: BitOrder) -> Self {
        match order {
            BitOrder::Msb => FillOrder::MsbToLsb,
            BitOrder::Lsb => FillOrder::LsbToMsb,
        }
    }
}

/// Encoder settings from a RON file
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Pad every row to a byte boundary
    pub aligned: Option<bool>,
    /// Order of bits in the output bytes
    pub fill_order: Option<BitOrder>,
    /// Swap black and white after thresholding
    pub invert: Option<bool>,
}

impl EncodeConfig {
    /// The options for the encoder
    pub fn options(&self) -> EncodeOptions {
        EncodeOptions {
            byte_align: self.aligned.unwrap_or(false),
            fill_order: self.fill_order.unwrap_or_default().into(),
        }
    }

    /// Whether to swap black and white
    pub fn invert(&self) -> bool {
        self.invert.unwrap_or(false)
    }
}

#[derive(Parser)]
/// Encode a bi-level image as CCITT group 4 (T.6)
pub struct Options {
    /// The image to encode (PNG or PNM)
    pub file: PathBuf,
    /// Where to store the output (defaults to `<FILE>.g4`)
    pub out: Option<PathBuf>,

    /// Pad every row to a byte boundary
    #[clap(long, short = 'a')]
    pub aligned: bool,
    /// Order of bits in the output bytes: "msb" or "lsb"
    #[clap(long = "fill-order", short = 'f')]
    pub fill_order: Option<BitOrder>,
    /// Swap black and white after thresholding
    #[clap(long, short = 'i')]
    pub invert: bool,

    /// Encoder settings as a RON file
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Feed the image to the encoder row by row
    #[clap(long, short = 's')]
    pub stream: bool,
    /// Print a table of the coding modes that were used
    #[clap(long)]
    pub stats: bool,
    /// Draw the bitmap to the console
    #[clap(long, short = 'p')]
    pub print: bool,
}

#[derive(Debug, Error)]
/// Error when loading the config file
pub enum ConfigError {
    /// The file could not be read
    #[error("IO Error")]
    Io(#[from] io::Error),
    /// The file is not a valid config
    #[error("Deserialize Error")]
    Ron(#[from] ron::error::Error),
}

impl Options {
    /// The settings from the config file, overridden by command line args
    pub fn config(&self) -> Result<EncodeConfig, ConfigError> {
        let mut config = if let Some(config_path) = &self.config {
            let text = std::fs::read_to_string(config_path)?;
            ron::from_str(&text)?
        } else {
            EncodeConfig::default()
        };
        if self.aligned {
            config.aligned = Some(true);
        }
        if let Some(fill_order) = self.fill_order {
            config.fill_order = Some(fill_order);
        }
        if self.invert {
            config.invert = Some(true);
        }
        Ok(config)
    }

    /// The output path
    pub fn out_path(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| self.file.with_extension("g4"))
    }
}
