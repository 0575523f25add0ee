//! Median-cut color quantization.
//!
//! Reduces a sampled set of RGB colors to at most `target_count`
//! representatives. The algorithm is fully deterministic: bucket selection,
//! channel selection and the midpoint split all have fixed tie-break rules,
//! so identical inputs always produce identical palettes.

use crate::color::Color;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Channel {
    R,
    G,
    B,
}

impl Channel {
    fn value(self, color: Color) -> u8 {
        match self {
            Channel::R => color.r,
            Channel::G => color.g,
            Channel::B => color.b,
        }
    }
}

/// A bucket of sampled colors awaiting splitting. Lives only for the
/// duration of one `quantize` call.
#[derive(Debug, Clone)]
struct Bucket {
    samples: Vec<Color>,
}

impl Bucket {
    fn new(samples: Vec<Color>) -> Self {
        Self { samples }
    }

    /// The channel with the widest value range and that range's span.
    /// Channels are checked in R, G, B order with strict improvement, so
    /// R beats G beats B when spans tie.
    fn widest_channel(&self) -> (Channel, u8) {
        let mut best = (Channel::R, 0u8);
        let mut first = true;
        for channel in [Channel::R, Channel::G, Channel::B] {
            let mut min = u8::MAX;
            let mut max = u8::MIN;
            for sample in &self.samples {
                let v = channel.value(*sample);
                min = min.min(v);
                max = max.max(v);
            }
            let span = max - min;
            if first || span > best.1 {
                best = (channel, span);
                first = false;
            }
        }
        best
    }

    /// Mean color of the bucket, each channel rounded to the nearest
    /// integer with ties rounding half up. Must not be called on an empty
    /// bucket; buckets are non-empty by construction.
    fn mean(&self) -> Color {
        let count = self.samples.len() as u32;
        let mut sum_r = 0u32;
        let mut sum_g = 0u32;
        let mut sum_b = 0u32;
        for sample in &self.samples {
            sum_r += sample.r as u32;
            sum_g += sample.g as u32;
            sum_b += sample.b as u32;
        }
        Color::new(
            ((sum_r + count / 2) / count) as u8,
            ((sum_g + count / 2) / count) as u8,
            ((sum_b + count / 2) / count) as u8,
        )
    }
}

/// Quantize `samples` down to at most `target_count` colors via median cut.
///
/// Returns an empty palette for empty input; the caller must handle an
/// empty palette before attempting to map pixels against it. The result may
/// hold fewer than `target_count` colors when the input runs out of
/// splittable buckets first.
pub fn quantize(samples: &[Color], target_count: usize) -> Vec<Color> {
    if samples.is_empty() || target_count == 0 {
        return Vec::new();
    }

    // Explicit worklist instead of recursion: bucket order is part of the
    // tie-break contract (first splittable bucket with the widest span wins).
    let mut buckets = vec![Bucket::new(samples.to_vec())];

    while buckets.len() < target_count {
        let mut winner: Option<(usize, Channel, u8)> = None;
        for (idx, bucket) in buckets.iter().enumerate() {
            if bucket.samples.len() < 2 {
                continue;
            }
            let (channel, span) = bucket.widest_channel();
            match winner {
                Some((_, _, best_span)) if span <= best_span => {}
                _ => winner = Some((idx, channel, span)),
            }
        }

        // All buckets are singletons; result stays short of target_count.
        let Some((idx, channel, _)) = winner else {
            break;
        };

        let mut bucket = buckets.remove(idx);
        // Stable sort: equal channel values keep their sampled order, which
        // keeps the midpoint split deterministic.
        bucket.samples.sort_by_key(|c| channel.value(*c));
        let mid = bucket.samples.len() / 2;
        let upper = Bucket::new(bucket.samples.split_off(mid));
        buckets.push(bucket);
        buckets.push(upper);
    }

    buckets.iter().map(Bucket::mean).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(r: u8, g: u8, b: u8) -> Color {
        Color::new(r, g, b)
    }

    #[test]
    fn test_empty_samples_return_empty_palette() {
        assert!(quantize(&[], 8).is_empty());
    }

    #[test]
    fn test_single_target_returns_overall_mean() {
        let samples = [c(0, 0, 0), c(10, 20, 30), c(20, 40, 60)];
        assert_eq!(quantize(&samples, 1), vec![c(10, 20, 30)]);
    }

    #[test]
    fn test_groups_near_identical_reds_away_from_green() {
        // Widest span is the red channel; the two reds end up in the upper
        // half after the midpoint split and their means use half-up rounding.
        let samples = [c(255, 0, 0), c(254, 1, 0), c(0, 255, 0)];
        let palette = quantize(&samples, 2);
        assert_eq!(palette, vec![c(0, 255, 0), c(255, 1, 0)]);
    }

    #[test]
    fn test_stops_early_when_no_bucket_is_splittable() {
        let samples = [c(10, 10, 10), c(200, 200, 200)];
        let palette = quantize(&samples, 5);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_identical_samples_split_until_singletons() {
        // Zero-span buckets are still splittable as long as they hold two
        // or more samples, matching the splice-and-push bucket discipline.
        let samples = [c(5, 5, 5); 3];
        let palette = quantize(&samples, 8);
        assert_eq!(palette, vec![c(5, 5, 5); 3]);
    }

    #[test]
    fn test_red_channel_wins_span_tie() {
        // Red and green spans are both 10; splitting must sort on red,
        // putting (0,10,0) in the lower half.
        let samples = [c(10, 0, 0), c(0, 10, 0)];
        let palette = quantize(&samples, 2);
        assert_eq!(palette, vec![c(0, 10, 0), c(10, 0, 0)]);
    }

    #[test]
    fn test_first_bucket_wins_span_tie() {
        // After the first split both buckets have a green span of 10; the
        // earlier bucket in worklist order must be the one that splits.
        let samples = [c(0, 0, 0), c(10, 0, 0), c(0, 10, 0), c(10, 10, 0)];
        let palette = quantize(&samples, 3);
        assert_eq!(palette, vec![c(10, 5, 0), c(0, 0, 0), c(0, 10, 0)]);
    }

    #[test]
    fn test_deterministic_across_repeated_calls() {
        let samples: Vec<Color> = (0..60u8).map(|i| c(i * 4, 255 - i * 4, i)).collect();
        let first = quantize(&samples, 7);
        let second = quantize(&samples, 7);
        assert_eq!(first, second);
        assert_eq!(first.len(), 7);
    }

    #[test]
    fn test_quantization_is_idempotent_on_representatives() {
        let samples = [c(255, 0, 0), c(250, 5, 5), c(0, 0, 255), c(5, 5, 250), c(0, 200, 0)];
        let palette = quantize(&samples, 3);
        let again = quantize(&palette, 3);

        let mut sorted_palette = palette.clone();
        let mut sorted_again = again.clone();
        sorted_palette.sort_by_key(|c| (c.r, c.g, c.b));
        sorted_again.sort_by_key(|c| (c.r, c.g, c.b));
        assert_eq!(sorted_palette, sorted_again);
    }
}
