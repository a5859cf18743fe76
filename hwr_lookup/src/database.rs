use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_derive::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::debug;

use super::error::{LookupError, Result};

/// Bytes per packed substroke: direction, length, center.
pub const SUBSTROKE_BYTES: usize = 3;

/// One character in the reference database.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    pub hanzi: String,
    pub stroke_count: usize,
    pub sub_stroke_count: usize,
    // Byte offset of the first substroke triple
    pub index_base: usize,
}

/// Typed view of one packed substroke triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubStrokeRef<'a> {
    bytes: &'a [u8],
}

impl<'a> SubStrokeRef<'a> {
    pub fn direction(&self) -> u8 {
        self.bytes[0]
    }

    pub fn length(&self) -> u8 {
        self.bytes[1]
    }

    /// Center cell as `(x, y)`, each in `0..16`. Stored as one byte: high nibble X, low nibble Y.
    pub fn center(&self) -> (u8, u8) {
        let packed = self.bytes[2];
        ((packed & 0xf0) >> 4, packed & 0x0f)
    }
}

/// Decoded, immutable stroke database. Shared read-only across lookups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ReferenceDatabase {
    entries: Vec<CharacterEntry>,
    substroke_data: Vec<u8>,
}

// JSON resource layout: {"chars": [["丿",1,2,0], ...], "substrokes": "<base64>"}
#[derive(Deserialize)]
struct JsonDatabase {
    chars: Vec<(String, usize, usize, usize)>,
    substrokes: String,
}

impl ReferenceDatabase {
    /// Validates entries against the data array and builds the database.
    pub fn from_parts(entries: Vec<CharacterEntry>, substroke_data: Vec<u8>) -> Result<ReferenceDatabase> {
        let db = ReferenceDatabase { entries, substroke_data };
        db.validate()?;
        debug!(
            entries = db.entries.len(),
            bytes = db.substroke_data.len(),
            "loaded stroke database"
        );
        Ok(db)
    }

    pub fn from_json_str(json: &str) -> Result<ReferenceDatabase> {
        let parsed: JsonDatabase = serde_json::from_str(json)?;
        Self::from_json_database(parsed)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<ReferenceDatabase> {
        let parsed: JsonDatabase = serde_json::from_reader(reader)?;
        Self::from_json_database(parsed)
    }

    fn from_json_database(parsed: JsonDatabase) -> Result<ReferenceDatabase> {
        let substroke_data = decode_substrokes(&parsed.substrokes)?;
        let entries = parsed
            .chars
            .into_iter()
            .map(|(hanzi, stroke_count, sub_stroke_count, index_base)| CharacterEntry {
                hanzi,
                stroke_count,
                sub_stroke_count,
                index_base,
            })
            .collect();
        Self::from_parts(entries, substroke_data)
    }

    /// Reads the compact binary form written by [`ReferenceDatabase::write_binary`].
    pub fn read_binary<R: Read>(reader: R) -> Result<ReferenceDatabase> {
        let db: ReferenceDatabase = bincode::deserialize_from(reader)?;
        Self::from_parts(db.entries, db.substroke_data)
    }

    pub fn write_binary<W: Write>(&self, writer: W) -> Result<()> {
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let len = self.substroke_data.len();
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.hanzi.is_empty() {
                return Err(LookupError::EmptyLabel { index });
            }
            let start = entry.index_base;
            let end = entry
                .sub_stroke_count
                .checked_mul(SUBSTROKE_BYTES)
                .and_then(|n| n.checked_add(start));
            match end {
                Some(end) if end <= len => {}
                _ => {
                    return Err(LookupError::EntryOutOfBounds {
                        index,
                        hanzi: entry.hanzi.clone(),
                        start,
                        end: end.unwrap_or(usize::MAX),
                        len,
                    })
                }
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[CharacterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn substroke_data(&self) -> &[u8] {
        &self.substroke_data
    }

    /// The entry's substrokes, in drawing order.
    pub fn substrokes<'a>(&'a self, entry: &CharacterEntry) -> impl ExactSizeIterator<Item = SubStrokeRef<'a>> + 'a {
        let end = entry.index_base + entry.sub_stroke_count * SUBSTROKE_BYTES;
        self.substroke_data[entry.index_base..end]
            .chunks_exact(SUBSTROKE_BYTES)
            .map(|bytes| SubStrokeRef { bytes })
    }
}

/// Decodes the base64 substroke blob back into raw bytes.
pub fn decode_substrokes(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded.trim())?)
}

/// Packs raw substroke bytes the way the JSON resource stores them.
pub fn encode_substrokes(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Packs a center cell into its one-byte form.
pub fn pack_center(x: u8, y: u8) -> u8 {
    ((x & 0x0f) << 4) | (y & 0x0f)
}
