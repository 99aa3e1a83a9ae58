//! Configuration types.

/// Thresholds for the media-candidate sniffer.
///
/// The defaults match observed gateway traffic; override only when the
/// surrounding deployment handles unusual attachment sizes.
#[derive(Debug, Clone)]
pub struct SnifferConfig {
    /// Minimum length for a string to be considered a base64 media candidate.
    pub min_base64_len: usize,
    /// Markerless base64 longer than this is classified as video.
    pub video_len_threshold: usize,
    /// Markerless base64 longer than this (but below the video cutoff) is audio.
    pub audio_len_threshold: usize,
}

impl Default for SnifferConfig {
    fn default() -> Self {
        Self {
            min_base64_len: 200,
            video_len_threshold: 4_000_000,
            audio_len_threshold: 1_000_000,
        }
    }
}
