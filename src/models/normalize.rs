//! Loosely typed board records and the one place where they are turned
//! into canonical [`Board`] values.
//!
//! Every ingestion path goes through [`normalize_board`]: the store, file
//! imports, the bundled example and builder captures.

use super::board::{Board, UNTITLED_BOARD};
use super::character::{Character, placeholder_name};
use super::crop::Crop;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashSet;

/// Board as found on disk. Every field is optional, and a field of the
/// wrong type reads as absent instead of failing the record.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawBoard {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, alias = "createdAt", deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_characters")]
    pub characters: Option<Vec<RawCharacter>>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawCharacter {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, alias = "imageUrl", deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub zoom: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub x: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub y: Option<f64>,
}

/// Strings as they are, numbers in their decimal form, anything else absent.
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Numbers, or strings holding a number (`"2"`).
fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Non-object entries of the list are dropped.
fn lenient_characters<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Vec<RawCharacter>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Values used when a record leaves a field out.
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    pub y: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            y: super::crop::DEFAULT_Y,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn normalize_character(raw: RawCharacter, index: usize, defaults: &Defaults) -> Character {
    Character {
        id: non_blank(raw.id).unwrap_or_default(),
        name: non_blank(raw.name).unwrap_or_else(|| placeholder_name(index)),
        image: raw.image.unwrap_or_default(),
        crop: Crop::from_parts(raw.zoom, raw.x, raw.y, defaults.y),
    }
}

pub fn normalize_board(raw: RawBoard, defaults: &Defaults) -> Board {
    let mut seen = HashSet::new();
    let characters = raw
        .characters
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, rc)| {
            let mut c = normalize_character(rc, i, defaults);
            if c.id.is_empty() || seen.contains(&c.id) {
                c.id = unique_card_id(i, &seen);
            }
            seen.insert(c.id.clone());
            c
        })
        .collect();

    Board {
        id: non_blank(raw.id).unwrap_or_default(),
        title: non_blank(raw.title).unwrap_or_else(|| UNTITLED_BOARD.to_string()),
        created_at: raw.created_at.unwrap_or_default(),
        characters,
    }
}

fn unique_card_id(index: usize, seen: &HashSet<String>) -> String {
    let base = format!("card-{}", index + 1);
    if !seen.contains(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !seen.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Parse and normalize a single board document.
pub fn parse_board(json: &str, defaults: &Defaults) -> serde_json::Result<Board> {
    let raw: RawBoard = serde_json::from_str(json)?;
    Ok(normalize_board(raw, defaults))
}

/// Boards read from a stored collection, plus the entries that could not
/// be turned into a board.
#[derive(Debug, Default)]
pub struct ParsedBoards {
    pub boards: Vec<Board>,
    pub rejected: Vec<String>,
}

/// Parse and normalize an array of boards.
///
/// Only a value that is not a JSON array is an error. Entries that are not
/// board objects are skipped and reported in `rejected`.
pub fn parse_boards(json: &str, defaults: &Defaults) -> serde_json::Result<ParsedBoards> {
    let items: Vec<Value> = serde_json::from_str(json)?;
    let mut parsed = ParsedBoards::default();

    for (i, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            parsed.rejected.push(format!("entry {} is not a board object", i + 1));
            continue;
        }
        match serde_json::from_value::<RawBoard>(item) {
            Ok(raw) => parsed.boards.push(normalize_board(raw, defaults)),
            Err(e) => parsed.rejected.push(format!("entry {}: {}", i + 1, e)),
        }
    }
    Ok(parsed)
}
