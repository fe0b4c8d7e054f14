//! Day-cycle keyframe bands.

use crate::error::TableError;

pub const SECONDS_PER_DAY: u32 = 86_400;
pub const MAX_KEYFRAMES: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe<T> {
    /// Seconds since midnight.
    pub time: u32,
    pub value: T,
}

/// An ordered keyframe list describing one attribute over a day. The segment after the last
/// keyframe wraps to the first keyframe of the next day.
///
/// Construction validates the list, so a `Band` always has `1..=16` keyframes with
/// non-decreasing times inside the day.
#[derive(Clone, Debug, PartialEq)]
pub struct Band<T> {
    id: u32,
    keyframes: Vec<Keyframe<T>>,
}

/// Packed `0x00BBGGRR` colours.
pub type IntBand = Band<u32>;
pub type FloatBand = Band<f32>;

impl<T: Copy> Band<T> {
    pub fn new(id: u32, keyframes: Vec<Keyframe<T>>) -> Result<Self, TableError> {
        let malformed = |reason: String| TableError::MalformedBand { id, reason };
        if keyframes.is_empty() {
            return Err(malformed("no keyframes".into()));
        }
        if keyframes.len() > MAX_KEYFRAMES {
            return Err(malformed(format!(
                "{} keyframes (max {MAX_KEYFRAMES})",
                keyframes.len()
            )));
        }
        if let Some(k) = keyframes.iter().find(|k| k.time >= SECONDS_PER_DAY) {
            return Err(malformed(format!("time {} is past the end of the day", k.time)));
        }
        if let Some(w) = keyframes.windows(2).find(|w| w[1].time < w[0].time) {
            return Err(malformed(format!(
                "time goes backwards ({} after {})",
                w[1].time, w[0].time
            )));
        }
        Ok(Band { id, keyframes })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}

impl<T: Copy> Band<T> {
    /// Builds a band from `(time, value)` pairs.
    pub fn from_pairs(id: u32, pairs: &[(u32, T)]) -> Result<Self, TableError> {
        Self::new(
            id,
            pairs
                .iter()
                .map(|&(time, value)| Keyframe { time, value })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(IntBand::from_pairs(1, &[]).is_err());
        let many: Vec<(u32, u32)> = (0..17).map(|i| (i * 60, 0)).collect();
        assert!(IntBand::from_pairs(1, &many).is_err());
        let max: Vec<(u32, u32)> = (0..16).map(|i| (i * 60, 0)).collect();
        assert_eq!(IntBand::from_pairs(1, &max).map(|b| b.len()), Ok(16));
    }

    #[test]
    fn rejects_backwards_and_out_of_day_times() {
        let err = IntBand::from_pairs(4, &[(100, 0), (50, 0)]).unwrap_err();
        assert!(matches!(err, TableError::MalformedBand { id: 4, .. }));
        assert!(FloatBand::from_pairs(5, &[(0, 1.0), (86_400, 2.0)]).is_err());
        assert!(FloatBand::from_pairs(6, &[(0, 1.0), (0, 2.0), (7200, 3.0)]).is_ok());
    }
}
