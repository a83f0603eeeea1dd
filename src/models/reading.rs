use serde::{Deserialize, Serialize};

use crate::models::block::{BlockKind, FieldBlock};
use crate::models::station::StationConfig;

/// Accepted observation from one station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "estacion")]
    pub station_name: String,

    #[serde(rename = "latitud")]
    pub latitude: String,

    #[serde(rename = "longitud")]
    pub longitude: String,

    /// dd/mm/yyyy as declared by the station
    #[serde(rename = "fecha")]
    pub date: String,

    /// HH:MM as declared by the station
    #[serde(rename = "hora")]
    pub time: String,

    #[serde(rename = "actuales")]
    pub current: FieldBlock,

    #[serde(rename = "diarios")]
    pub daily: FieldBlock,

    #[serde(rename = "mensuales")]
    pub monthly: FieldBlock,

    #[serde(rename = "anuales")]
    pub yearly: FieldBlock,

    #[serde(rename = "astronomia")]
    pub astronomy: FieldBlock,
}

impl Reading {
    /// Reading with identity taken from the registry and every block empty of values.
    pub fn new(station: &StationConfig, date: String, time: String) -> Self {
        Self {
            station_name: station.name.clone(),
            latitude: station.latitude.clone(),
            longitude: station.longitude.clone(),
            date,
            time,
            current: FieldBlock::for_kind(BlockKind::Current),
            daily: FieldBlock::for_kind(BlockKind::Daily),
            monthly: FieldBlock::for_kind(BlockKind::Monthly),
            yearly: FieldBlock::for_kind(BlockKind::Yearly),
            astronomy: FieldBlock::for_kind(BlockKind::Astronomy),
        }
    }

    pub fn block(&self, kind: BlockKind) -> &FieldBlock {
        match kind {
            BlockKind::Current => &self.current,
            BlockKind::Daily => &self.daily,
            BlockKind::Monthly => &self.monthly,
            BlockKind::Yearly => &self.yearly,
            BlockKind::Astronomy => &self.astronomy,
        }
    }

    pub fn block_mut(&mut self, kind: BlockKind) -> &mut FieldBlock {
        match kind {
            BlockKind::Current => &mut self.current,
            BlockKind::Daily => &mut self.daily,
            BlockKind::Monthly => &mut self.monthly,
            BlockKind::Yearly => &mut self.yearly,
            BlockKind::Astronomy => &mut self.astronomy,
        }
    }

    pub fn declared_timestamp(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}
