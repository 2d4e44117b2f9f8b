use std::path::Path;

use crate::audio::domain::waveform::Waveform;
use crate::video::domain::audio_reader::AudioReader;

/// Decodes the audio track of a video file using ffmpeg-next.
///
/// Whatever the source codec, channel layout and rate, the output is a single
/// mono f32 stream resampled to the requested rate.
pub struct FfmpegAudioReader;

impl AudioReader for FfmpegAudioReader {
    fn read_audio(
        &self,
        video_path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<Waveform>, Box<dyn std::error::Error>> {
        ffmpeg_next::init()?;

        let mut ictx = ffmpeg_next::format::input(video_path)?;

        let stream = match ictx.streams().best(ffmpeg_next::media::Type::Audio) {
            Some(stream) => stream,
            None => return Ok(None),
        };
        let stream_index = stream.index();

        let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())?;
        let mut decoder = codec_ctx.decoder().audio()?;

        let mut resampler = ffmpeg_next::software::resampling::Context::get(
            decoder.format(),
            decoder.channel_layout(),
            decoder.rate(),
            ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Planar),
            ffmpeg_next::ChannelLayout::MONO,
            target_sample_rate,
        )?;

        let mut samples: Vec<f32> = Vec::new();
        let mut decoded = ffmpeg_next::util::frame::audio::Audio::empty();
        let mut resampled = ffmpeg_next::util::frame::audio::Audio::empty();

        for (stream, packet) in ictx.packets() {
            if stream.index() != stream_index {
                continue;
            }
            decoder.send_packet(&packet)?;
            while decoder.receive_frame(&mut decoded).is_ok() {
                resampler.run(&decoded, &mut resampled)?;
                append_mono_f32(&resampled, &mut samples);
            }
        }

        // Drain the decoder, then the resampler's internal buffer
        decoder.send_eof()?;
        while decoder.receive_frame(&mut decoded).is_ok() {
            resampler.run(&decoded, &mut resampled)?;
            append_mono_f32(&resampled, &mut samples);
        }
        if let Ok(Some(delay)) = resampler.flush(&mut resampled) {
            if delay.output > 0 {
                append_mono_f32(&resampled, &mut samples);
            }
        }

        log::debug!(
            "decoded {} samples ({:.1}s) from {}",
            samples.len(),
            samples.len() as f64 / target_sample_rate as f64,
            video_path.display()
        );
        Ok(Some(Waveform::new(samples, target_sample_rate)))
    }
}

/// Copy samples out of a planar mono f32 frame.
fn append_mono_f32(frame: &ffmpeg_next::util::frame::audio::Audio, out: &mut Vec<f32>) {
    let num_samples = frame.samples();
    if num_samples == 0 {
        return;
    }
    let data = frame.data(0);
    let floats = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, num_samples) };
    out.extend_from_slice(floats);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_audio_nonexistent_file() {
        let reader = FfmpegAudioReader;
        let path = if cfg!(windows) {
            Path::new("Z:\\nonexistent\\clip.mp4")
        } else {
            Path::new("/nonexistent/clip.mp4")
        };
        assert!(reader.read_audio(path, 16000).is_err());
    }
}
