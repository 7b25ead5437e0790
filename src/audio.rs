use crate::core::{Envelope, ToneBackend, ToneError, ToneId, ToneSpec, Waveform};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Oscillator and gain pair for one tone.
pub struct WebVoice {
    oscillator: web::OscillatorNode,
    gain: web::GainNode,
}

/// WebAudio implementation of the tone backend.
///
/// The `AudioContext` is created on first use and recreated if the browser
/// closed it. Natural completion of a voice is reported through `on_ended`.
pub struct WebToneBackend {
    ctx: Option<web::AudioContext>,
    on_ended: Rc<dyn Fn(ToneId)>,
}

fn js_err(label: &str, e: wasm_bindgen::JsValue) -> ToneError {
    log::error!("[audio] {} error: {:?}", label, e);
    ToneError::Backend(format!("{}: {:?}", label, e))
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Square => web::OscillatorType::Square,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

impl WebToneBackend {
    pub fn new(on_ended: impl Fn(ToneId) + 'static) -> Self {
        Self {
            ctx: None,
            on_ended: Rc::new(on_ended),
        }
    }

    /// The live context, creating a new one if there is none or it was closed.
    pub fn context(&mut self) -> Result<web::AudioContext, ToneError> {
        if let Some(ctx) = &self.ctx {
            if ctx.state() != web::AudioContextState::Closed {
                return Ok(ctx.clone());
            }
        }
        let ctx = web::AudioContext::new().map_err(|e| js_err("AudioContext", e))?;
        log::info!("[audio] context created (state={:?})", ctx.state());
        self.ctx = Some(ctx.clone());
        Ok(ctx)
    }

    fn resume_if_suspended(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
        }
    }
}

impl ToneBackend for WebToneBackend {
    type Voice = WebVoice;

    fn start_voice(
        &mut self,
        id: ToneId,
        spec: &ToneSpec,
        envelope: &Envelope,
    ) -> Result<WebVoice, ToneError> {
        let ctx = self.context()?;
        self.resume_if_suspended();

        let oscillator = web::OscillatorNode::new(&ctx).map_err(|e| js_err("OscillatorNode", e))?;
        let gain = web::GainNode::new(&ctx).map_err(|e| js_err("GainNode", e))?;
        oscillator
            .connect_with_audio_node(&gain)
            .map_err(|e| js_err("connect oscillator", e))?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(|e| js_err("connect gain", e))?;

        oscillator.set_type(oscillator_type(spec.waveform));
        oscillator.frequency().set_value(spec.frequency_hz);

        let now = ctx.current_time();
        let g = gain.gain();
        _ = g.set_value_at_time(0.0, now);
        _ = g.linear_ramp_to_value_at_time(envelope.peak_gain, now + envelope.attack_end);
        _ = g.exponential_ramp_to_value_at_time(envelope.floor_gain, now + envelope.release_end);

        // `ended` fires exactly once, also after an explicit stop; the session
        // ignores ids that are no longer live.
        let on_ended = self.on_ended.clone();
        let ended = Closure::once_into_js(move || on_ended(id));
        oscillator.set_onended(Some(ended.unchecked_ref()));

        oscillator
            .start()
            .map_err(|e| js_err("oscillator start", e))?;
        _ = oscillator.stop_with_when(now + envelope.stop_at);

        log::info!(
            "[audio] tone {:?} {:.0}Hz {:.1}s {:?}",
            id,
            spec.frequency_hz,
            spec.duration_sec,
            spec.waveform
        );
        Ok(WebVoice { oscillator, gain })
    }

    fn stop_voice(&mut self, voice: WebVoice) {
        // Nodes may already be stopped or disconnected.
        _ = voice.oscillator.stop();
        _ = voice.oscillator.disconnect();
        _ = voice.gain.disconnect();
    }

    fn wake(&mut self) {
        self.resume_if_suspended();
    }
}
