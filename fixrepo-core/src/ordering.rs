/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Ordering keys for repository content rows and message types.

use smallvec::SmallVec;
use std::cmp::Ordering;

/// Minimum number of segments a [`Position`] carries.
const MIN_SEGMENTS: usize = 3;

/// Parsed content row position.
///
/// Positions are dotted numbers such as `"1"`, `"8.1"` or `"11.21"`. Each
/// segment is compared numerically, so `"8.1"` sorts before `"11.21"` even
/// though the strings compare the other way.
#[derive(Debug, Clone)]
pub struct Position {
    segments: SmallVec<[f64; MIN_SEGMENTS]>,
}

impl Position {
    /// Parses a dotted position string.
    ///
    /// Segments that are not numbers count as `0.0`, and the result is padded
    /// with `0.0` up to three segments. Never fails.
    ///
    /// # Arguments
    /// * `text` - The `Position` cell of a content row
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut segments: SmallVec<[f64; MIN_SEGMENTS]> = text
            .split('.')
            .map(|segment| segment.trim().parse::<f64>().unwrap_or(0.0))
            .collect();
        while segments.len() < MIN_SEGMENTS {
            segments.push(0.0);
        }
        Self { segments }
    }

    /// Returns the numeric segments.
    #[must_use]
    pub fn segments(&self) -> &[f64] {
        &self.segments
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.segments.iter().zip(other.segments.iter()) {
            match a.total_cmp(b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.segments.len().cmp(&other.segments.len())
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Position {}

/// Sort key for message type codes.
///
/// The tuple is `(bucket, first, second)`: bucket 0 holds single digits,
/// 1 single uppercase letters, 2 any other single character and 3 every
/// multi-character code.
pub type MsgTypeKey = (u8, u32, u32);

/// Returns the sort key of a message type code.
///
/// Single-character codes come first (digits, then uppercase, then the rest),
/// followed by two-character codes ordered by their first and second
/// characters.
///
/// # Arguments
/// * `msg_type` - The `MsgType` cell of a repository message
#[must_use]
pub fn msg_type_sort_key(msg_type: &str) -> MsgTypeKey {
    let mut chars = msg_type.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => (0, u32::from(c), 0),
        (Some(c), None) if c.is_uppercase() => (1, u32::from(c), 0),
        (Some(c), None) => (2, u32::from(c), 0),
        (first, second) => (
            3,
            first.map_or(0, u32::from),
            second.map_or(0, u32::from),
        ),
    }
}
