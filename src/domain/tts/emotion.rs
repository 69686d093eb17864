/// Named bundle of prosody controls applied to voices that accept pitch and rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionPreset {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Semitones relative to the voice's natural pitch
    pub pitch_semitones: f64,
    /// Multiplier over the voice's natural speaking rate, always > 0
    pub rate_multiplier: f64,
}

pub const NEUTRAL_EMOTION: &str = "neutral";

static EMOTION_PRESETS: [EmotionPreset; 12] = [
    preset(NEUTRAL_EMOTION, "Neutral", 0.0, 1.0),
    preset("happy", "Happy", 3.0, 1.2),
    preset("sad", "Sad", -2.0, 0.8),
    preset("excited", "Excited", 4.0, 1.5),
    preset("dynamic", "Dynamic", 2.0, 1.3),
    preset("serious", "Serious", -1.0, 0.9),
    preset("whisper", "Whisper", 1.5, 0.7),
    preset("dramatic", "Dramatic", -1.5, 0.9),
    preset("robotic", "Robotic", -4.0, 0.9),
    preset("gentle", "Gentle", 1.0, 0.7),
    preset("assertive", "Assertive", 0.0, 1.3),
    preset("storytelling", "Storytelling", 0.5, 0.85),
];

const fn preset(
    id: &'static str,
    display_name: &'static str,
    pitch_semitones: f64,
    rate_multiplier: f64,
) -> EmotionPreset {
    EmotionPreset {
        id,
        display_name,
        pitch_semitones,
        rate_multiplier,
    }
}

/// Resolve an emotion id to its preset.
///
/// Unknown and empty ids fall back to the neutral preset; there is no error path.
pub fn lookup(id: &str) -> &'static EmotionPreset {
    EMOTION_PRESETS
        .iter()
        .find(|preset| preset.id == id)
        .unwrap_or_else(neutral)
}

pub fn neutral() -> &'static EmotionPreset {
    &EMOTION_PRESETS[0]
}

/// All presets in catalogue order
pub fn all() -> &'static [EmotionPreset] {
    &EMOTION_PRESETS
}
