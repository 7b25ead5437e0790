use super::location::Coordinate;
use super::status::AudioStatus;
use rand::Rng;
use thiserror::Error;

/// Oscillator shape used for location tones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
}

/// A single tone request: pitch, length and timbre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub duration_sec: f64,
    pub waveform: Waveform,
}

/// Semantic sound picked from where the user is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundType {
    Urban,
    Nature,
    Coast,
    Mountain,
}

// Latitude band considered tropical coast, and the polar cut-off.
pub const COAST_MAX_ABS_LAT: f64 = 23.5;
pub const MOUNTAIN_MIN_ABS_LAT: f64 = 60.0;
pub const NATURE_MIN_ABS_LNG: f64 = 120.0;

impl SoundType {
    pub const ALL: [SoundType; 4] = [
        SoundType::Urban,
        SoundType::Nature,
        SoundType::Coast,
        SoundType::Mountain,
    ];

    /// First match wins: coast, then mountain, then nature, otherwise urban.
    pub fn for_coordinate(c: Coordinate) -> Self {
        let lat = c.lat.abs();
        let lng = c.lng.abs();
        if lat < COAST_MAX_ABS_LAT {
            SoundType::Coast
        } else if lat > MOUNTAIN_MIN_ABS_LAT {
            SoundType::Mountain
        } else if lng > NATURE_MIN_ABS_LNG {
            SoundType::Nature
        } else {
            SoundType::Urban
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn spec(self) -> ToneSpec {
        let (frequency_hz, duration_sec, waveform) = match self {
            SoundType::Urban => (330.0, 2.0, Waveform::Sine),
            SoundType::Nature => (440.0, 2.5, Waveform::Triangle),
            SoundType::Coast => (220.0, 3.0, Waveform::Sine),
            SoundType::Mountain => (550.0, 1.5, Waveform::Square),
        };
        ToneSpec {
            frequency_hz,
            duration_sec,
            waveform,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SoundType::Urban => "Urbano",
            SoundType::Nature => "Naturaleza",
            SoundType::Coast => "Costa",
            SoundType::Mountain => "Montaña",
        }
    }

    /// Text for the current-sound line.
    pub fn caption(self) -> String {
        format!("Sonido: {}", self.label())
    }
}

pub const ENVELOPE_PEAK_GAIN: f32 = 0.15;
pub const ENVELOPE_ATTACK_SEC: f64 = 0.2;
pub const ENVELOPE_RELEASE_LEAD_SEC: f64 = 0.2;
// Exponential ramps cannot reach zero.
pub const ENVELOPE_FLOOR_GAIN: f32 = 0.001;

/// Gain automation for one tone, in seconds relative to its start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub peak_gain: f32,
    pub attack_end: f64,
    pub floor_gain: f32,
    pub release_end: f64,
    pub stop_at: f64,
}

impl Envelope {
    /// Linear rise to the peak over the attack, exponential fall to the floor
    /// ending shortly before the stop time.
    pub fn for_duration(duration_sec: f64) -> Self {
        let stop_at = duration_sec.max(0.0);
        let attack_end = ENVELOPE_ATTACK_SEC.min(stop_at);
        let release_end = (stop_at - ENVELOPE_RELEASE_LEAD_SEC).max(attack_end);
        Self {
            peak_gain: ENVELOPE_PEAK_GAIN,
            attack_end,
            floor_gain: ENVELOPE_FLOOR_GAIN,
            release_end,
            stop_at,
        }
    }
}

/// Identifies one started tone so late completion callbacks can be matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToneId(pub u64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToneError {
    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Platform side of the tone engine: builds and tears down one voice.
pub trait ToneBackend {
    type Voice;

    /// Build, envelope and start a voice that stops itself at `envelope.stop_at`.
    /// The backend reports natural completion by calling back with `id`.
    fn start_voice(
        &mut self,
        id: ToneId,
        spec: &ToneSpec,
        envelope: &Envelope,
    ) -> Result<Self::Voice, ToneError>;

    /// Stop and disconnect a voice. Errors from already-stopped nodes are ignored.
    fn stop_voice(&mut self, voice: Self::Voice);

    /// Resume the output if the platform suspended it.
    fn wake(&mut self) {}
}

/// Owns the single live voice. Starting a tone always preempts the previous one.
pub struct ToneSession<B: ToneBackend> {
    backend: B,
    active: Option<(ToneId, B::Voice)>,
    next_id: u64,
}

impl<B: ToneBackend> ToneSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: None,
            next_id: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<ToneId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    pub fn play_sound(&mut self, sound: SoundType) -> Result<ToneId, ToneError> {
        self.play_tone(sound.spec())
    }

    /// Start `spec`, stopping whatever is playing first.
    pub fn play_tone(&mut self, spec: ToneSpec) -> Result<ToneId, ToneError> {
        if let Some((_, voice)) = self.active.take() {
            self.backend.stop_voice(voice);
        }
        self.backend.wake();
        let id = ToneId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let envelope = Envelope::for_duration(spec.duration_sec);
        let voice = self.backend.start_voice(id, &spec, &envelope)?;
        self.active = Some((id, voice));
        Ok(id)
    }

    /// Force-stop the live voice, if any. Always reports paused.
    pub fn stop_all(&mut self) -> AudioStatus {
        if let Some((_, voice)) = self.active.take() {
            self.backend.stop_voice(voice);
        }
        AudioStatus::Paused
    }

    /// Natural completion of tone `id`. Returns the idle status only when `id`
    /// is still the live tone; completions of preempted tones are ignored.
    pub fn finished(&mut self, id: ToneId) -> Option<AudioStatus> {
        match &self.active {
            Some((live, _)) if *live == id => {
                self.active = None;
                Some(AudioStatus::Idle)
            }
            _ => None,
        }
    }
}
