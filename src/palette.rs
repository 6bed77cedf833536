//! Fixed candidate lists used to decorate a fact.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::sampler::choose_two;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(color: Rgb) -> Self {
        ratatui::style::Color::Rgb(color.r, color.g, color.b)
    }
}

/// Gradient endpoint candidates, ordered around the color wheel so that
/// neighbours blend well.
pub const GRADIENT_COLORS: [Rgb; 7] = [
    Rgb::new(255, 45, 85),
    Rgb::new(255, 149, 0),
    Rgb::new(255, 204, 0),
    Rgb::new(52, 199, 89),
    Rgb::new(90, 200, 250),
    Rgb::new(88, 86, 214),
    Rgb::new(175, 82, 222),
];

pub const CAT_EMOJIS: [&str; 8] = ["😺", "😸", "😹", "😻", "😼", "😽", "🙀", "🐱"];

pub const EXCLAMATIONS: [&str; 9] = [
    "Me-wow!",
    "Nyan~",
    "Mrow~",
    "(ﾉΦωΦ)ﾉ",
    "A-meow-zing!",
    ":3",
    "Meow meow!",
    "Fur real?!",
    "Purr-fect!",
];

pub fn random_emoji<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CAT_EMOJIS.choose(rng).copied().unwrap_or_default()
}

pub fn random_exclamation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EXCLAMATIONS.choose(rng).copied().unwrap_or_default()
}

/// Two nearby gradient colors, at most `max_distance` apart on the palette.
pub fn random_gradient<R: Rng + ?Sized>(max_distance: usize, rng: &mut R) -> (Rgb, Rgb) {
    choose_two(&GRADIENT_COLORS, max_distance, rng)
        .map(|(start, end)| (*start, *end))
        .unwrap_or((GRADIENT_COLORS[0], GRADIENT_COLORS[0]))
}
