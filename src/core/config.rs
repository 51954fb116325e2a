// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Host-side configuration
//!
//! Tooling reads an optional TOML file describing the target clock, where the
//! delay routine is linked, the instruction timing table and the log level.
//! Every section and every key may be omitted.
//!
//! ```toml
//! [clock]
//! frequency_hz = 32000000
//!
//! [delay]
//! link_address = 0x0421
//! layout = "parity-balanced"
//!
//! [timing]
//! odd_target_penalty = 1
//!
//! [logging]
//! level = "debug"
//! ```

use crate::core::delay::model::{
    assemble, CycleTable, Layout, ModeledDelay, TimingModel, DEFAULT_CLOCK_HZ,
};
use crate::core::error::{HalError, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// System clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub frequency_hz: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_CLOCK_HZ,
        }
    }
}

/// Placement of the delay routine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    /// Code address the routine is linked at
    pub link_address: u16,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HalConfig {
    pub clock: ClockConfig,
    pub delay: DelayConfig,
    pub timing: CycleTable,
    pub logging: LoggingConfig,
}

impl HalConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: HalConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write the configuration as TOML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.to_toml_string()?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| HalError::Config(e.to_string()))
    }

    /// Reject values the delay model cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.clock.frequency_hz == 0 {
            return Err(HalError::Config("clock.frequency_hz must be nonzero".into()));
        }
        if self.timing.nop == 0 {
            return Err(HalError::Config("timing.nop must be nonzero".into()));
        }
        if let Some((name, cycles)) = self.timing.oversized_entry() {
            return Err(HalError::Config(format!(
                "timing.{} = {} exceeds {} cycles",
                name,
                cycles,
                CycleTable::MAX_ENTRY
            )));
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed `logging.level`
    pub fn log_level(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.logging.level)
            .map_err(|_| HalError::Config(format!("unknown log level: {}", self.logging.level)))
    }

    /// Delay model for the configured routine, clock and timing
    pub fn modeled_delay(&self) -> ModeledDelay {
        ModeledDelay::with_model(
            assemble(self.delay.link_address, self.delay.layout),
            TimingModel::new(self.timing),
            self.clock.frequency_hz,
        )
    }
}
