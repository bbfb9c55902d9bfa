//! WAV container encoding.
//!
//! The speech model returns raw PCM samples; browsers need a playable
//! container. This is the only byte-level transform in the system and
//! it is deterministic: a fixed 44-byte RIFF header followed by the
//! samples unchanged.

/// Default channel count for synthesized speech.
pub const DEFAULT_CHANNELS: u16 = 1;
/// Default sample rate for synthesized speech.
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;
/// Default bits per sample for synthesized speech.
pub const DEFAULT_BITS_PER_SAMPLE: u16 = 16;

/// Wrap raw PCM samples in a WAV container.
pub fn pcm_to_wav(pcm: &[u8], channels: u16, sample_rate: u32, bits_per_sample: u16) -> Vec<u8> {
    let data_len = pcm.len() as u32;
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * u32::from(block_align);

    let mut out = Vec::with_capacity(44 + pcm.len());
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    out.extend_from_slice(&channels.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&bits_per_sample.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);
    out
}

/// Wrap raw PCM with the speech model defaults (mono, 24 kHz, 16-bit).
pub fn pcm_to_wav_default(pcm: &[u8]) -> Vec<u8> {
    pcm_to_wav(pcm, DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE, DEFAULT_BITS_PER_SAMPLE)
}
