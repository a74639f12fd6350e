//! Output artifacts: the per-player file and the run's multidata.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::Result;

/// Name/id tables of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub item_name_to_id: BTreeMap<String, u64>,
    pub location_name_to_id: BTreeMap<String, u64>,
    pub version: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPackageData {
    pub games: BTreeMap<String, GameData>,
}

/// Name/id tables of every game in the artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPackage {
    pub data: DataPackageData,
}

impl DataPackage {
    /// A package holding a single game.
    pub fn single(game: impl Into<String>, data: GameData) -> Self {
        let mut games = BTreeMap::new();
        games.insert(game.into(), data);
        Self {
            data: DataPackageData { games },
        }
    }
}

/// Per-player artifact written by single-player generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputFile {
    pub slot_data: serde_json::Value,
    /// Location address → item id.
    pub location_to_item: BTreeMap<u64, u64>,
    pub data_package: DataPackage,
}

impl OutputFile {
    /// Write as JSON to `dir/file_name`.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let path = dir.join(file_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        info!(path = %path.display(), "wrote output file");
        Ok(path)
    }

    /// Read back a written file.
    pub fn read_from(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
}

/// What one location ended up holding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub item: u64,
    /// Slot number of the item's owner.
    pub owner: u16,
}

/// Run-wide data handed to the aggregation stage.
///
/// Slot data is kept as JSON text so the whole structure stays encodable
/// with bincode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiData {
    pub seed_name: String,
    /// Slot number → game name.
    pub games: BTreeMap<u16, String>,
    /// Slot number → slot data JSON.
    pub slot_data: BTreeMap<u16, String>,
    /// Slot number → location address → placement.
    pub locations: BTreeMap<u16, BTreeMap<u64, PlacedItem>>,
    /// Slot number → location address → entrance that leads there.
    pub er_hint_data: BTreeMap<u16, BTreeMap<u64, String>>,
}

impl MultiData {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multidata_bytes() {
        let mut data = MultiData {
            seed_name: "00000000000000000042".into(),
            ..MultiData::default()
        };
        data.slot_data.insert(1, "{\"DeathLink\":false}".into());
        data.er_hint_data
            .entry(1)
            .or_default()
            .insert(3626000, "Whomp's Fortress Entrance".into());
        data.locations
            .entry(1)
            .or_default()
            .insert(3626000, PlacedItem { item: 3626000, owner: 1 });

        let bytes = data.to_bytes().unwrap();
        assert_eq!(MultiData::from_bytes(&bytes).unwrap(), data);
    }

    #[test]
    fn test_output_file_keys_are_strings() {
        let mut location_to_item = BTreeMap::new();
        location_to_item.insert(3626000u64, 3626184u64);
        let file = OutputFile {
            slot_data: serde_json::json!({ "StarsToFinish": 70 }),
            location_to_item,
            data_package: DataPackage::default(),
        };

        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["location_to_item"]["3626000"], 3626184);
        assert_eq!(json["slot_data"]["StarsToFinish"], 70);
    }
}
