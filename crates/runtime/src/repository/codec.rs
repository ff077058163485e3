//! Binary save-file layout.
//!
//! A save file is a plain concatenation of fixed-size records, one per
//! entity, in registry order. Each record is [`RECORD_SIZE`] bytes:
//!
//! ```text
//! offset  size  field
//!      0    32  name (UTF-8, NUL padded)
//!     32     4  health    (i32 LE)
//!     36     4  armor     (i32 LE)
//!     40     4  damage    (i32 LE)
//!     44     4  x / row   (i32 LE)
//!     48     4  y / col   (i32 LE)
//!     52     1  is_player (0 or 1)
//!     53     3  padding   (written as zero, ignored on read)
//! ```
//!
//! Decoding is all-or-nothing: any malformed record fails the whole file so
//! that a partial read can never reach the registry.

use game_core::{Entity, EntityName, Faction, GameConfig, Position};

use super::{RepositoryError, Result};

/// Bytes per encoded entity.
pub const RECORD_SIZE: usize = 56;

const NAME_LEN: usize = GameConfig::NAME_CAPACITY;
const HEALTH_AT: usize = 32;
const ARMOR_AT: usize = 36;
const DAMAGE_AT: usize = 40;
const X_AT: usize = 44;
const Y_AT: usize = 48;
const PLAYER_FLAG_AT: usize = 52;

/// Encodes `entities` into the save-file layout.
pub fn encode(entities: &[Entity]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(entities.len() * RECORD_SIZE);
    for entity in entities {
        bytes.extend_from_slice(&encode_record(entity));
    }
    bytes
}

/// Decodes a complete save file.
///
/// An empty buffer is a valid save of zero entities.
pub fn decode(bytes: &[u8]) -> Result<Vec<Entity>> {
    let chunks = bytes.chunks_exact(RECORD_SIZE);
    let remainder = chunks.remainder().len();
    if remainder != 0 {
        return Err(RepositoryError::TruncatedRecord {
            offset: bytes.len() - remainder,
            expected: RECORD_SIZE,
            actual: remainder,
        });
    }

    chunks
        .enumerate()
        .map(|(index, record)| decode_record(index, record))
        .collect()
}

fn encode_record(entity: &Entity) -> [u8; RECORD_SIZE] {
    let mut record = [0u8; RECORD_SIZE];

    let name = entity.name.as_bytes();
    record[..name.len()].copy_from_slice(name);

    record[HEALTH_AT..HEALTH_AT + 4].copy_from_slice(&entity.health.to_le_bytes());
    record[ARMOR_AT..ARMOR_AT + 4].copy_from_slice(&entity.armor.to_le_bytes());
    record[DAMAGE_AT..DAMAGE_AT + 4].copy_from_slice(&entity.damage.to_le_bytes());
    record[X_AT..X_AT + 4].copy_from_slice(&entity.position.x.to_le_bytes());
    record[Y_AT..Y_AT + 4].copy_from_slice(&entity.position.y.to_le_bytes());
    record[PLAYER_FLAG_AT] = u8::from(entity.is_player());

    record
}

fn decode_record(index: usize, record: &[u8]) -> Result<Entity> {
    let corrupted =
        |reason: String| RepositoryError::CorruptedData(format!("record {index}: {reason}"));

    let raw_name = &record[..NAME_LEN];
    let name_len = raw_name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
    let name = std::str::from_utf8(&raw_name[..name_len])
        .map_err(|e| corrupted(format!("name is not valid UTF-8 ({e})")))?;
    let name = EntityName::from(name).map_err(|e| corrupted(e.to_string()))?;

    let faction = match record[PLAYER_FLAG_AT] {
        0 => Faction::Enemy,
        1 => Faction::Player,
        other => return Err(corrupted(format!("invalid player flag {other}"))),
    };

    let position = Position::new(read_i32(record, X_AT), read_i32(record, Y_AT));
    if !position.in_bounds() {
        return Err(corrupted(format!("position {position} is off the map")));
    }

    Ok(Entity {
        name,
        health: read_i32(record, HEALTH_AT),
        armor: read_i32(record, ARMOR_AT),
        damage: read_i32(record, DAMAGE_AT),
        position,
        faction,
    })
}

fn read_i32(record: &[u8], at: usize) -> i32 {
    let mut field = [0u8; 4];
    field.copy_from_slice(&record[at..at + 4]);
    i32::from_le_bytes(field)
}
