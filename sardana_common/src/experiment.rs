//! Experiment configuration model.
//!
//! A Door keeps the experiment configuration (measurement groups, scan
//! output location, compression) as a JSON document. This module models
//! that document, the local editing session on top of it, and the list of
//! channels a measurement group may use. Reading and writing the document
//! on the Door is left to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::element::ElementType;

/// Rank meaning "do not compress".
pub const NO_COMPRESSION: i32 = -1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperimentError {
    #[error("unknown measurement group '{0}'")]
    UnknownMeasurementGroup(String),

    #[error("invalid data compression rank {0} (must be >= -1)")]
    InvalidCompressionRank(i32),

    #[error("invalid data compression index {0} (must be >= 0)")]
    InvalidCompressionIndex(i32),

    #[error("invalid experiment configuration: {0}")]
    Json(String),
}

/// The experiment configuration document.
///
/// ```json
/// {
///   "ActiveMntGrp": "mg1",
///   "MntGrpConfigs": {"mg1": {}},
///   "ScanDir": "/tmp/scandir",
///   "ScanFile": ["scan.h5"],
///   "DataCompressionRank": -1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExperimentConfiguration {
    /// Name of the measurement group used by scans.
    #[serde(default)]
    pub active_mnt_grp: String,

    /// Configuration of every measurement group, by name.
    #[serde(default)]
    pub mnt_grp_configs: BTreeMap<String, Value>,

    /// Directory scan files are written to.
    #[serde(default)]
    pub scan_dir: String,

    /// Scan file names; a single string is accepted as one file.
    #[serde(default, deserialize_with = "one_or_many")]
    pub scan_file: Vec<String>,

    /// `-1` disables compression, otherwise the minimum rank compressed.
    #[serde(default = "default_compression_rank")]
    pub data_compression_rank: i32,
}

fn default_compression_rank() -> i32 {
    NO_COMPRESSION
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(file) => vec![file],
        OneOrMany::Many(files) => files,
    })
}

impl Default for ExperimentConfiguration {
    fn default() -> Self {
        Self {
            active_mnt_grp: String::new(),
            mnt_grp_configs: BTreeMap::new(),
            scan_dir: String::new(),
            scan_file: Vec::new(),
            data_compression_rank: NO_COMPRESSION,
        }
    }
}

impl ExperimentConfiguration {
    pub fn from_json(json: &str) -> Result<Self, ExperimentError> {
        serde_json::from_str(json).map_err(|e| ExperimentError::Json(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ExperimentError> {
        serde_json::to_string(self).map_err(|e| ExperimentError::Json(e.to_string()))
    }

    /// Measurement group names, sorted.
    pub fn measurement_group_names(&self) -> impl Iterator<Item = &str> {
        self.mnt_grp_configs.keys().map(String::as_str)
    }

    /// Configuration of the active measurement group, if it exists.
    pub fn active_measurement_group_config(&self) -> Option<&Value> {
        self.mnt_grp_configs.get(&self.active_mnt_grp)
    }

    /// Make `name` the active measurement group.
    ///
    /// # Errors
    ///
    /// `UnknownMeasurementGroup` if `name` has no configuration; the
    /// active group is left unchanged.
    pub fn set_active_measurement_group(&mut self, name: &str) -> Result<(), ExperimentError> {
        if !self.mnt_grp_configs.contains_key(name) {
            return Err(ExperimentError::UnknownMeasurementGroup(name.to_string()));
        }
        self.active_mnt_grp = name.to_string();
        Ok(())
    }

    pub fn set_compression_rank(&mut self, rank: i32) -> Result<(), ExperimentError> {
        if rank < NO_COMPRESSION {
            return Err(ExperimentError::InvalidCompressionRank(rank));
        }
        self.data_compression_rank = rank;
        Ok(())
    }

    /// Position of the compression rank in a selection list that starts
    /// with "no compression".
    ///
    /// # Errors
    ///
    /// `InvalidCompressionRank` if the rank has no index (`i32::MAX`).
    pub fn compression_index(&self) -> Result<i32, ExperimentError> {
        self.data_compression_rank
            .checked_add(1)
            .ok_or(ExperimentError::InvalidCompressionRank(self.data_compression_rank))
    }

    pub fn set_compression_index(&mut self, index: i32) -> Result<(), ExperimentError> {
        let rank = index
            .checked_sub(1)
            .ok_or(ExperimentError::InvalidCompressionIndex(index))?;
        self.set_compression_rank(rank)
    }
}

/// Local editing session over a configuration fetched from a Door.
#[derive(Debug, Clone)]
pub struct ExperimentEditor {
    original: ExperimentConfiguration,
    local: ExperimentConfiguration,
}

impl ExperimentEditor {
    pub fn new(configuration: ExperimentConfiguration) -> Self {
        Self {
            local: configuration.clone(),
            original: configuration,
        }
    }

    /// Replace both the original and the local copy.
    pub fn load(&mut self, configuration: ExperimentConfiguration) {
        self.local = configuration.clone();
        self.original = configuration;
    }

    pub fn original(&self) -> &ExperimentConfiguration {
        &self.original
    }

    pub fn local(&self) -> &ExperimentConfiguration {
        &self.local
    }

    pub fn local_mut(&mut self) -> &mut ExperimentConfiguration {
        &mut self.local
    }

    /// Local copy differs from the last loaded or applied configuration.
    pub fn is_changed(&self) -> bool {
        self.original != self.local
    }

    /// Commit local edits; the returned configuration is what the caller
    /// should send to the Door.
    pub fn apply(&mut self) -> &ExperimentConfiguration {
        debug!(changed = self.is_changed(), "applying experiment configuration");
        self.original = self.local.clone();
        &self.original
    }

    /// Discard local edits.
    pub fn reset(&mut self) {
        self.local = self.original.clone();
    }
}

/// Channel entry of the macro server channel list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Element type name as sent by the server.
    #[serde(rename = "type", default)]
    pub type_name: String,

    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ChannelDescriptor {
    pub fn from_json(json: &str) -> Result<Self, ExperimentError> {
        serde_json::from_str(json).map_err(|e| ExperimentError::Json(e.to_string()))
    }

    /// Element type; unknown names map to [`ElementType::Unknown`].
    pub fn element_type(&self) -> ElementType {
        self.type_name.parse().unwrap_or_default()
    }
}

/// Channels a measurement group may use, by name.
///
/// `descriptors` are JSON channel entries as published by the macro server.
/// Every entry that parses is kept, whatever its element type; entries that
/// do not parse are skipped. A later entry replaces an earlier one with the
/// same name.
pub fn available_channels<'a, I>(descriptors: I) -> BTreeMap<String, ChannelDescriptor>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut available = BTreeMap::new();
    for raw in descriptors {
        match ChannelDescriptor::from_json(raw) {
            Ok(channel) => {
                available.insert(channel.name.clone(), channel);
            }
            Err(e) => warn!("skipping channel descriptor: {e}"),
        }
    }
    debug!(channels = available.len(), "available channels loaded");
    available
}
