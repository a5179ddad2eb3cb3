// ABOUTME: Voice clip capture buffer and WAV encoding for the fatigue prediction API
// ABOUTME: Mixes to mono, resamples to 8 kHz, clamps, and writes 16-bit PCM WAV
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seneca Coach Contributors

//! # Voice Clips
//!
//! The fatigue model expects mono 16-bit PCM WAV at 8 kHz. Captured audio can
//! arrive at any rate and channel count, so a clip is normalized to mono
//! float samples on the way in and resampled on the way out.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;
use std::time::Duration;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::debug;

use crate::constants::audio::{BITS_PER_SAMPLE, FATIGUE_SAMPLE_RATE};
use crate::errors::{AppError, AppResult};

/// Mono audio at a known sample rate, samples in `[-1, 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceClip {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl VoiceClip {
    /// Wrap captured mono samples
    ///
    /// # Errors
    ///
    /// Returns an error if `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> AppResult<Self> {
        if sample_rate == 0 {
            return Err(AppError::invalid_input(
                "Voice clip sample rate must be greater than zero",
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Decode a WAV stream, mixing every channel down to mono
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is not a readable WAV file.
    pub fn from_wav_reader<R: Read>(reader: R) -> AppResult<Self> {
        let reader = WavReader::new(reader).map_err(unreadable_wav)?;
        let spec = reader.spec();
        debug!(
            sample_rate = spec.sample_rate,
            channels = spec.channels,
            bits = spec.bits_per_sample,
            "Decoding voice clip"
        );

        let interleaved: Vec<f32> = match spec.sample_format {
            SampleFormat::Int => {
                let full_scale = (1_i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / full_scale))
                    .collect::<Result<_, _>>()
                    .map_err(unreadable_wav)?
            }
            SampleFormat::Float => reader
                .into_samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(unreadable_wav)?,
        };

        let channels = usize::from(spec.channels.max(1));
        let samples = if channels > 1 {
            interleaved
                .chunks(channels)
                .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
                .collect()
        } else {
            interleaved
        };

        Self::new(samples, spec.sample_rate)
    }

    /// Decode a WAV file from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded.
    pub fn from_wav_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            AppError::invalid_input(format!(
                "Cannot open voice clip {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_wav_reader(BufReader::new(file))
    }

    /// Captured samples
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Capture sample rate in Hz
    #[must_use]
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Clip length
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(self.sample_rate))
    }

    /// Samples linearly resampled to `target_rate`
    #[must_use]
    pub fn resampled(&self, target_rate: u32) -> Vec<f32> {
        if target_rate == self.sample_rate || self.samples.is_empty() || target_rate == 0 {
            return self.samples.clone();
        }

        let ratio = f64::from(self.sample_rate) / f64::from(target_rate);
        let out_len = (self.samples.len() as f64 / ratio) as usize;
        let last = self.samples.len() - 1;

        (0..out_len)
            .map(|i| {
                let position = i as f64 * ratio;
                let index = (position as usize).min(last);
                let frac = (position - index as f64) as f32;
                match self.samples.get(index + 1) {
                    Some(&next) => {
                        let current = self.samples[index];
                        (next - current).mul_add(frac, current)
                    }
                    None => self.samples[index],
                }
            })
            .collect()
    }

    /// Encode as the fatigue model's WAV format: mono, 16-bit, 8 kHz
    ///
    /// Samples are clamped to `[-1, 1]` before quantization.
    ///
    /// # Errors
    ///
    /// Returns an error if the WAV writer fails.
    pub fn to_fatigue_wav(&self) -> AppResult<Vec<u8>> {
        let spec = WavSpec {
            channels: 1,
            sample_rate: FATIGUE_SAMPLE_RATE,
            bits_per_sample: BITS_PER_SAMPLE,
            sample_format: SampleFormat::Int,
        };

        let mut buffer = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut buffer, spec).map_err(wav_write_failed)?;
        for sample in self.resampled(FATIGUE_SAMPLE_RATE) {
            writer
                .write_sample(quantize(sample))
                .map_err(wav_write_failed)?;
        }
        writer.finalize().map_err(wav_write_failed)?;

        Ok(buffer.into_inner())
    }
}

/// Clamp to `[-1, 1]` and scale asymmetrically onto the full `i16` range
fn quantize(sample: f32) -> i16 {
    let clamped = if sample.is_nan() {
        0.0
    } else {
        sample.clamp(-1.0, 1.0)
    };
    if clamped < 0.0 {
        (clamped * 32_768.0) as i16
    } else {
        (clamped * 32_767.0) as i16
    }
}

fn unreadable_wav(error: hound::Error) -> AppError {
    AppError::invalid_input(format!("Voice clip is not a readable WAV file: {error}")).with_source(error)
}

fn wav_write_failed(error: hound::Error) -> AppError {
    AppError::internal(format!("Failed to encode voice clip: {error}")).with_source(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_clamps_and_scales() {
        assert_eq!(quantize(2.0), i16::MAX);
        assert_eq!(quantize(-2.0), i16::MIN);
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(f32::NAN), 0);
    }

    #[test]
    fn test_resample_halves_length() -> AppResult<()> {
        let clip = VoiceClip::new(vec![0.0, 0.5, 1.0, 0.5], 16_000)?;
        assert_eq!(clip.resampled(8_000), vec![0.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        assert!(VoiceClip::new(vec![0.1], 0).is_err());
    }
}
