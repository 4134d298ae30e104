//! Cosmetic presentation effects.
//!
//! Add-to-cart particles and per-character text reveal are computed here and
//! rendered into the page. Pointer glow, card tilt, parallax and scroll
//! progress run in `static/js/storefront.js`, tuned by [`EffectSettings`] and
//! the reveal thresholds. None of these touch cart or catalog data. Each one
//! returns "nothing to do" (`None` or an empty list) when the visitor prefers
//! reduced motion.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Whether the visitor asked for reduced motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Full,
    Reduced,
}

impl Motion {
    #[must_use]
    pub const fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}

/// Intersection ratio at which `.reveal` elements animate in.
pub const SCROLL_REVEAL_THRESHOLD: f64 = 0.2;

/// Intersection ratio at which tilt cards get their glass finish.
pub const GLASS_REVEAL_THRESHOLD: f64 = 0.15;

// =============================================================================
// Pointer And Scroll Tuning
// =============================================================================

/// Fraction of the remaining distance the cursor glow covers per frame.
pub const GLOW_LERP: f64 = 0.15;

/// Maximum card rotation in degrees on each axis.
pub const TILT_MAX_DEG: f64 = 3.0;

/// Background offset per scrolled pixel.
pub const PARALLAX_FACTOR: f64 = -0.2;

/// Tuning for the pointer and scroll effects the page script runs.
///
/// Rendered as `data-*` attributes on `<body>`. The script starts glow, tilt
/// and parallax only when these are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSettings {
    pub glow_lerp: f64,
    pub tilt_max_deg: f64,
    pub parallax_factor: f64,
}

impl EffectSettings {
    /// Settings for `motion`. `None` under reduced motion.
    #[must_use]
    pub const fn for_motion(motion: Motion) -> Option<Self> {
        if motion.is_reduced() {
            return None;
        }
        Some(Self {
            glow_lerp: GLOW_LERP,
            tilt_max_deg: TILT_MAX_DEG,
            parallax_factor: PARALLAX_FACTOR,
        })
    }
}

// =============================================================================
// Particles
// =============================================================================

/// Particles per burst.
pub const PARTICLE_COUNT: usize = 15;

/// How long a particle stays in the page before removing itself.
pub const PARTICLE_LIFETIME_MS: u32 = 1000;

/// Particle palette.
pub const PARTICLE_COLORS: [&str; 5] = ["#ffb4f6", "#ff8b5d", "#8aa8ff", "#64ff96", "#ffd700"];

/// One particle of an add-to-cart burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Anchor in page coordinates.
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
    /// Travel offset applied by the CSS animation.
    pub tx: f64,
    pub ty: f64,
}

impl Particle {
    /// Inline style for the particle element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left:{:.0}px;top:{:.0}px;background:{};--tx:{:.1}px;--ty:{:.1}px",
            self.x, self.y, self.color, self.tx, self.ty
        )
    }
}

/// Scatter particles from `(x, y)`. Empty under reduced motion.
pub fn particle_burst<R: Rng>(motion: Motion, x: f64, y: f64, rng: &mut R) -> Vec<Particle> {
    if motion.is_reduced() {
        return Vec::new();
    }

    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            x,
            y,
            color: PARTICLE_COLORS.choose(rng).copied().unwrap_or("#ffd700"),
            tx: (rng.random::<f64>() - 0.5) * 200.0,
            ty: (rng.random::<f64>() - 0.5) * 200.0 - 50.0,
        })
        .collect()
}

// =============================================================================
// Text Reveal
// =============================================================================

/// Delay between consecutive characters.
pub const CHAR_REVEAL_STEP_SECS: f64 = 0.05;

/// One character of a revealed heading.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealChar {
    pub ch: char,
    pub delay_secs: f64,
    pub is_space: bool,
}

impl RevealChar {
    /// Inline style for the character's span.
    #[must_use]
    pub fn style(&self) -> String {
        if self.is_space {
            format!("animation-delay:{:.2}s;margin-right:0.3em", self.delay_secs)
        } else {
            format!("animation-delay:{:.2}s", self.delay_secs)
        }
    }
}

/// Split `text` into staggered characters. Empty under reduced motion, in
/// which case the heading is rendered as plain text.
#[must_use]
pub fn text_reveal(motion: Motion, text: &str) -> Vec<RevealChar> {
    if motion.is_reduced() {
        return Vec::new();
    }

    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            #[allow(clippy::cast_precision_loss)] // headings are short
            let delay_secs = i as f64 * CHAR_REVEAL_STEP_SECS;
            RevealChar {
                ch,
                delay_secs,
                is_space: ch == ' ',
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_reduced_motion_declines_everything() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(EffectSettings::for_motion(Motion::Reduced).is_none());
        assert!(particle_burst(Motion::Reduced, 1.0, 1.0, &mut rng).is_empty());
        assert!(text_reveal(Motion::Reduced, "Hello").is_empty());
    }

    #[test]
    fn test_empty_heading_reveals_nothing() {
        assert!(text_reveal(Motion::Full, "").is_empty());
    }

    #[test]
    fn test_full_motion_settings() {
        let settings = EffectSettings::for_motion(Motion::Full).unwrap();
        assert!((settings.glow_lerp - 0.15).abs() < f64::EPSILON);
        assert!((settings.tilt_max_deg - 3.0).abs() < f64::EPSILON);
        assert!((settings.parallax_factor + 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_particle_burst() {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = particle_burst(Motion::Full, 50.0, 60.0, &mut rng);
        assert_eq!(particles.len(), PARTICLE_COUNT);
        for p in &particles {
            assert!((p.x - 50.0).abs() < f64::EPSILON);
            assert!(PARTICLE_COLORS.contains(&p.color));
            assert!((-100.0..100.0).contains(&p.tx));
            assert!((-150.0..50.0).contains(&p.ty));
        }
        assert!(particles[0].style().starts_with("left:50px;top:60px;"));
    }

    #[test]
    fn test_text_reveal_staggers() {
        let chars = text_reveal(Motion::Full, "Hi you");
        assert_eq!(chars.len(), 6);
        assert!((chars[5].delay_secs - 0.25).abs() < 1e-9);
        assert!(chars[2].is_space);
        assert_eq!(chars[2].style(), "animation-delay:0.10s;margin-right:0.3em");
        assert_eq!(chars[0].style(), "animation-delay:0.00s");
    }
}
