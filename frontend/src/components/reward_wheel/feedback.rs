use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{window, AudioContext, OscillatorType};

use crate::config::FeedbackSettings;

const CLICK_VOLUME: f32 = 0.08;
const CELEBRATION_VOLUME: f32 = 0.15;
const TICK_VIBRATION_MS: u32 = 10;
const CELEBRATION_VIBRATION: [u32; 5] = [80, 40, 80, 40, 160];

#[derive(Debug, Clone, Copy)]
struct Tone {
    frequency: f32,
    offset: f64,
    duration: f64,
}

const CLICK: [Tone; 1] = [Tone { frequency: 1200.0, offset: 0.0, duration: 0.03 }];

// C5 E5 G5 C6
const CELEBRATION: [Tone; 4] = [
    Tone { frequency: 523.25, offset: 0.0, duration: 0.12 },
    Tone { frequency: 659.25, offset: 0.12, duration: 0.12 },
    Tone { frequency: 783.99, offset: 0.24, duration: 0.12 },
    Tone { frequency: 1046.5, offset: 0.36, duration: 0.3 },
];

/// Click, celebration and vibration effects. Fire-and-forget: failures are
/// logged and never reach the caller.
#[derive(Default)]
pub struct FeedbackPlayer {
    context: Option<AudioContext>,
}

impl FeedbackPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, settings: &FeedbackSettings) {
        if settings.sound {
            if let Err(e) = self.play(&CLICK, CLICK_VOLUME, OscillatorType::Square) {
                log::warn!("Click sound unavailable: {:?}", e);
            }
        }
        if settings.haptics {
            vibrate(&[TICK_VIBRATION_MS]);
        }
    }

    pub fn celebrate(&mut self, settings: &FeedbackSettings) {
        if settings.sound {
            if let Err(e) = self.play(&CELEBRATION, CELEBRATION_VOLUME, OscillatorType::Sine) {
                log::warn!("Celebration sound unavailable: {:?}", e);
            }
        }
        if settings.haptics {
            vibrate(&CELEBRATION_VIBRATION);
        }
    }

    fn context(&mut self) -> Result<&AudioContext, JsValue> {
        if self.context.is_none() {
            self.context = Some(AudioContext::new()?);
        }
        self.context
            .as_ref()
            .ok_or_else(|| JsValue::from_str("audio context missing"))
    }

    fn play(&mut self, tones: &[Tone], volume: f32, wave: OscillatorType) -> Result<(), JsValue> {
        let ctx = self.context()?;
        let gain = ctx.create_gain()?;
        gain.gain().set_value(volume);
        gain.connect_with_audio_node(&ctx.destination())?;

        let now = ctx.current_time();
        for tone in tones {
            let osc = ctx.create_oscillator()?;
            osc.set_type(wave);
            osc.frequency().set_value(tone.frequency);
            osc.connect_with_audio_node(&gain)?;
            osc.start_with_when(now + tone.offset)?;
            osc.stop_with_when(now + tone.offset + tone.duration)?;
        }
        Ok(())
    }
}

impl Drop for FeedbackPlayer {
    fn drop(&mut self) {
        if let Some(ctx) = self.context.take() {
            // let in-flight tones finish before releasing the device
            Timeout::new(600, move || {
                if let Err(e) = ctx.close() {
                    log::warn!("Failed to close audio context: {:?}", e);
                }
            })
            .forget();
        }
    }
}

/// Vibrates with the given on/off pattern in milliseconds where supported.
pub fn vibrate(pattern: &[u32]) {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return;
    };
    // calling vibrate where the API is missing throws
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
    if !supported {
        return;
    }
    let pattern: js_sys::Array = pattern.iter().map(|&ms| JsValue::from(ms)).collect();
    if !navigator.vibrate_with_pattern(&pattern) {
        log::debug!("Vibration request rejected");
    }
}
