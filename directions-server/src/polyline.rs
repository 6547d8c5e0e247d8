//! Encoded polyline format.
//!
//! The directions service ships route geometry as text: each coordinate is
//! stored as the signed difference from the previous one, scaled by 1e5,
//! zigzag-encoded and split into 5-bit chunks offset into printable ASCII
//! (`?` through `~`). A chunk with bit `0x20` set is followed by another
//! chunk of the same value.
//!
//! Every encoded string starts from `(0, 0)`, so when a route is shipped as
//! several strings (one per step) each is decoded independently.

use crate::domain::Coordinate;

/// Fixed-point scale of the format (five decimal places).
const SCALE: f64 = 1e5;

/// Offset added to each chunk to make it printable.
const CHAR_OFFSET: u8 = 63;

/// Continuation bit of a chunk.
const CONTINUATION: i64 = 0x20;

/// Largest shift a well-formed value reaches (seven chunks).
const MAX_SHIFT: u32 = 30;

/// Errors from decoding malformed polyline text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Input ended in the middle of a value.
    #[error("polyline truncated at byte {offset}")]
    Truncated { offset: usize },

    /// Byte outside the `?`..=`~` range.
    #[error("invalid polyline byte 0x{byte:02x} at byte {offset}")]
    InvalidCharacter { byte: u8, offset: usize },

    /// Value spans more chunks than fit in 32 bits.
    #[error("polyline value overflows at byte {offset}")]
    Overflow { offset: usize },
}

/// Iterator over the coordinates of one encoded polyline.
///
/// Yields `Err` at most once; iteration stops after an error.
#[derive(Debug, Clone)]
pub struct Points<'a> {
    bytes: &'a [u8],
    index: usize,
    latitude: i64,
    longitude: i64,
    failed: bool,
}

impl<'a> Points<'a> {
    /// Start decoding `encoded` from the origin.
    pub fn new(encoded: &'a str) -> Self {
        Self {
            bytes: encoded.as_bytes(),
            index: 0,
            latitude: 0,
            longitude: 0,
            failed: false,
        }
    }

    fn next_delta(&mut self) -> Result<i64, DecodeError> {
        let mut result: i64 = 0;
        let mut shift: u32 = 0;

        loop {
            let offset = self.index;
            let byte = *self
                .bytes
                .get(offset)
                .ok_or(DecodeError::Truncated { offset })?;

            if !(CHAR_OFFSET..=b'~').contains(&byte) {
                return Err(DecodeError::InvalidCharacter { byte, offset });
            }
            if shift > MAX_SHIFT {
                return Err(DecodeError::Overflow { offset });
            }

            let chunk = i64::from(byte - CHAR_OFFSET);
            result |= (chunk & 0x1f) << shift;
            shift += 5;
            self.index += 1;

            if chunk & CONTINUATION == 0 {
                break;
            }
        }

        Ok(if result & 1 != 0 {
            !(result >> 1)
        } else {
            result >> 1
        })
    }

    fn next_point(&mut self) -> Result<Coordinate, DecodeError> {
        self.latitude += self.next_delta()?;
        self.longitude += self.next_delta()?;

        Ok(Coordinate::new(
            self.latitude as f64 / SCALE,
            self.longitude as f64 / SCALE,
        ))
    }
}

impl Iterator for Points<'_> {
    type Item = Result<Coordinate, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.index >= self.bytes.len() {
            return None;
        }

        let point = self.next_point();
        self.failed = point.is_err();
        Some(point)
    }
}

impl std::iter::FusedIterator for Points<'_> {}

/// Decode a single encoded polyline.
pub fn decode_segment(encoded: &str) -> Result<Vec<Coordinate>, DecodeError> {
    Points::new(encoded).collect()
}

/// Decode several encoded polylines and concatenate them in order.
///
/// Each segment restarts from `(0, 0)`.
pub fn decode<S: AsRef<str>>(segments: &[S]) -> Result<Vec<Coordinate>, DecodeError> {
    let mut points = Vec::new();
    for segment in segments {
        for point in Points::new(segment.as_ref()) {
            points.push(point?);
        }
    }
    Ok(points)
}

/// Encode coordinates, rounding each to five decimal places.
pub fn encode(points: &[Coordinate]) -> String {
    let mut out = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for point in points {
        let lat = (point.latitude * SCALE).round() as i64;
        let lng = (point.longitude * SCALE).round() as i64;

        encode_value(lat - prev_lat, &mut out);
        encode_value(lng - prev_lng, &mut out);

        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn encode_value(delta: i64, out: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= CONTINUATION {
        out.push(char::from((CONTINUATION | (value & 0x1f)) as u8 + CHAR_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHAR_OFFSET));
}
