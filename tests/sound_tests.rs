// Host-side tests for sound selection, the envelope and the tone session.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod location {
        include!("../src/core/location.rs");
    }
    pub mod status {
        include!("../src/core/status.rs");
    }
    pub mod sound {
        include!("../src/core/sound.rs");
    }
}

use crate::core::location::Coordinate;
use crate::core::sound::*;
use crate::core::status::AudioStatus;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn at(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng)
}

#[derive(Default)]
struct FakeBackend {
    live: Vec<ToneId>,
    started: Vec<(ToneId, ToneSpec, Envelope)>,
    wakes: usize,
    fail: bool,
}

impl ToneBackend for FakeBackend {
    type Voice = ToneId;

    fn start_voice(
        &mut self,
        id: ToneId,
        spec: &ToneSpec,
        envelope: &Envelope,
    ) -> Result<ToneId, ToneError> {
        if self.fail {
            return Err(ToneError::Backend("no audio".into()));
        }
        self.live.push(id);
        self.started.push((id, *spec, *envelope));
        Ok(id)
    }

    fn stop_voice(&mut self, voice: ToneId) {
        self.live.retain(|v| *v != voice);
    }

    fn wake(&mut self) {
        self.wakes += 1;
    }
}

#[test]
fn low_latitudes_are_coast_whatever_the_longitude() {
    for lat in [-23.49, -10.0, 0.0, 5.5, 23.49] {
        for lng in [-180.0, -121.0, 0.0, 58.0, 150.0, 180.0] {
            assert_eq!(SoundType::for_coordinate(at(lat, lng)), SoundType::Coast);
        }
    }
}

#[test]
fn mid_latitudes_split_on_longitude() {
    for lat in [-60.0, -34.6, 23.5, 45.0, 60.0] {
        for lng in [-179.9, -120.01, 121.0, 170.0] {
            assert_eq!(SoundType::for_coordinate(at(lat, lng)), SoundType::Nature);
        }
        for lng in [-120.0, -58.38, 0.0, 119.99, 120.0] {
            assert_eq!(SoundType::for_coordinate(at(lat, lng)), SoundType::Urban);
        }
    }
}

#[test]
fn high_latitudes_are_mountain_even_far_east() {
    for lat in [-89.0, -60.01, 60.01, 78.2] {
        assert_eq!(SoundType::for_coordinate(at(lat, 0.0)), SoundType::Mountain);
        assert_eq!(SoundType::for_coordinate(at(lat, 150.0)), SoundType::Mountain);
        assert_eq!(SoundType::for_coordinate(at(lat, -170.0)), SoundType::Mountain);
    }
}

#[test]
fn buenos_aires_sounds_urban() {
    assert_eq!(
        SoundType::for_coordinate(at(-34.6037, -58.3816)),
        SoundType::Urban
    );
}

#[test]
fn tone_table_matches_sound_types() {
    let urban = SoundType::Urban.spec();
    assert_eq!(urban.frequency_hz, 330.0);
    assert_eq!(urban.duration_sec, 2.0);
    assert_eq!(urban.waveform, Waveform::Sine);

    let nature = SoundType::Nature.spec();
    assert_eq!((nature.frequency_hz, nature.duration_sec), (440.0, 2.5));
    assert_eq!(nature.waveform, Waveform::Triangle);

    let coast = SoundType::Coast.spec();
    assert_eq!((coast.frequency_hz, coast.duration_sec), (220.0, 3.0));
    assert_eq!(coast.waveform, Waveform::Sine);

    let mountain = SoundType::Mountain.spec();
    assert_eq!((mountain.frequency_hz, mountain.duration_sec), (550.0, 1.5));
    assert_eq!(mountain.waveform, Waveform::Square);
}

#[test]
fn captions_use_spanish_labels() {
    assert_eq!(SoundType::Urban.caption(), "Sonido: Urbano");
    assert_eq!(SoundType::Nature.caption(), "Sonido: Naturaleza");
    assert_eq!(SoundType::Coast.caption(), "Sonido: Costa");
    assert_eq!(SoundType::Mountain.caption(), "Sonido: Montaña");
}

#[test]
fn random_sound_covers_every_type() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(SoundType::random(&mut rng));
    }
    assert_eq!(seen.len(), SoundType::ALL.len());
}

#[test]
fn envelope_rises_then_releases_before_stop() {
    let env = Envelope::for_duration(2.0);
    assert_eq!(env.peak_gain, 0.15);
    assert!((env.attack_end - 0.2).abs() < 1e-12);
    assert!((env.release_end - 1.8).abs() < 1e-12);
    assert!((env.stop_at - 2.0).abs() < 1e-12);
    assert!(env.floor_gain > 0.0 && env.floor_gain < 0.01);
}

#[test]
fn envelope_stays_ordered_for_very_short_tones() {
    for d in [0.0, 0.1, 0.3, 0.4] {
        let env = Envelope::for_duration(d);
        assert!(env.attack_end <= env.release_end, "d={d}");
        assert!(env.release_end <= env.stop_at, "d={d}");
    }
}

#[test]
fn new_tone_preempts_the_previous_one() {
    let mut session = ToneSession::new(FakeBackend::default());
    let first = session.play_sound(SoundType::Coast).unwrap();
    let second = session.play_sound(SoundType::Mountain).unwrap();

    assert_ne!(first, second);
    assert_eq!(session.backend().live, vec![second]);
    assert_eq!(session.active_id(), Some(second));

    for _ in 0..5 {
        session.play_sound(SoundType::Urban).unwrap();
        assert_eq!(session.backend().live.len(), 1);
    }
}

#[test]
fn started_voice_gets_the_tone_envelope() {
    let mut session = ToneSession::new(FakeBackend::default());
    session.play_sound(SoundType::Nature).unwrap();
    let (_, spec, env) = session.backend().started[0];
    assert_eq!(spec, SoundType::Nature.spec());
    assert_eq!(env, Envelope::for_duration(2.5));
    assert_eq!(session.backend().wakes, 1);
}

#[test]
fn late_completion_of_a_preempted_tone_is_ignored() {
    let mut session = ToneSession::new(FakeBackend::default());
    let old = session.play_sound(SoundType::Coast).unwrap();
    let new = session.play_sound(SoundType::Urban).unwrap();

    assert_eq!(session.finished(old), None);
    assert_eq!(session.active_id(), Some(new));

    assert_eq!(session.finished(new), Some(AudioStatus::Idle));
    assert!(!session.is_playing());
}

#[test]
fn stop_all_reports_paused_and_clears_voice() {
    let mut session = ToneSession::new(FakeBackend::default());
    let id = session.play_sound(SoundType::Urban).unwrap();

    assert_eq!(session.stop_all(), AudioStatus::Paused);
    assert!(!session.is_playing());
    assert!(session.backend().live.is_empty());
    // The ended event of the stopped voice arrives afterwards.
    assert_eq!(session.finished(id), None);

    // Stopping again with nothing live is harmless.
    assert_eq!(session.stop_all(), AudioStatus::Paused);
}

#[test]
fn backend_failure_leaves_session_silent() {
    let mut session = ToneSession::new(FakeBackend::default());
    session.play_sound(SoundType::Urban).unwrap();
    session.backend_mut().fail = true;

    assert!(session.play_sound(SoundType::Coast).is_err());
    assert!(!session.is_playing());
    assert!(session.backend().live.is_empty());
}

#[test]
fn audio_status_texts_and_indicator() {
    assert_eq!(AudioStatus::Playing.text(), "Reproduciendo");
    assert_eq!(AudioStatus::Idle.text(), "Audio disponible");
    assert_eq!(AudioStatus::Paused.text(), "Audio pausado");
    assert!(AudioStatus::Playing.indicator_on());
    assert!(!AudioStatus::Idle.indicator_on());
    assert!(!AudioStatus::Paused.indicator_on());
}
