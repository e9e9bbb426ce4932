//! Decorative particle backgrounds.
//!
//! Every section renders a [`Background`], itself a small template
//! (`partials/background.html`): a static gradient plus, when particles are
//! on, one `<canvas>` carrying the config as a data attribute. `static/js/portal.js` reads it, picks the
//! preset for the device tier, and owns the animation frame, the resize
//! listener and cleanup on `pagehide`. When no 2D context is available, or
//! particles are disabled, the section keeps its static gradient.

use askama::Template;
use serde::Serialize;

/// Viewports narrower than this use the mobile preset.
const MOBILE_BREAKPOINT_PX: u32 = 768;
/// Devices reporting this many cores or fewer use the low-end preset.
const LOW_END_MAX_CORES: u32 = 4;
const RESIZE_DEBOUNCE_MS: u32 = 100;
const PARTICLE_COLOR: &str = "#7c3aed";
const PARTICLE_OPACITY: f32 = 0.4;

/// Tuning for one device tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticlePreset {
    pub count: u32,
    pub size: f32,
    /// Side of the cube particles are scattered in, in scene units.
    pub spread: f32,
    /// Radians added per frame on both axes.
    pub rotation: f32,
    pub fps: u32,
}

pub const DESKTOP: ParticlePreset = ParticlePreset {
    count: 3000,
    size: 0.03,
    spread: 15.0,
    rotation: 0.0003,
    fps: 60,
};

pub const MOBILE: ParticlePreset = ParticlePreset {
    count: 1500,
    size: 0.05,
    spread: 10.0,
    rotation: 0.0002,
    fps: 45,
};

pub const LOW_END: ParticlePreset = ParticlePreset {
    count: 800,
    size: 0.05,
    spread: 10.0,
    rotation: 0.0001,
    fps: 30,
};

/// Page sections that carry a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Features,
    Programs,
    About,
    WhyChoose,
    Services,
    Testimonials,
    Faq,
    Contact,
    Founder,
    Dashboard,
}

impl Section {
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Programs => "programs",
            Self::About => "about",
            Self::WhyChoose => "why-choose",
            Self::Services => "services",
            Self::Testimonials => "testimonials",
            Self::Faq => "faq",
            Self::Contact => "contact",
            Self::Founder => "founder",
            Self::Dashboard => "dashboard",
        }
    }

    /// Share of the tier's particle count drawn in this section.
    #[must_use]
    pub const fn density(self) -> f32 {
        match self {
            Self::Hero => 1.0,
            Self::Dashboard => 0.66,
            Self::Services | Self::Founder => 0.5,
            _ => 0.35,
        }
    }
}

/// Config handed to the client script.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    pub color: &'static str,
    pub opacity: f32,
    pub mobile_breakpoint: u32,
    pub low_end_max_cores: u32,
    pub resize_debounce_ms: u32,
    pub desktop: ParticlePreset,
    pub mobile: ParticlePreset,
    pub low_end: ParticlePreset,
}

/// Background for one section.
#[derive(Debug, Clone, Template)]
#[template(path = "partials/background.html")]
pub struct Background {
    section: Section,
    enabled: bool,
}

impl Background {
    #[must_use]
    pub const fn new(section: Section, enabled: bool) -> Self {
        Self { section, enabled }
    }

    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Class for the static gradient, always present under the canvas.
    #[must_use]
    pub fn fallback_class(&self) -> String {
        format!("bg-static bg-static--{}", self.section.slug())
    }

    #[must_use]
    pub fn config(&self) -> ParticleConfig {
        let density = self.section.density();
        ParticleConfig {
            color: PARTICLE_COLOR,
            opacity: PARTICLE_OPACITY,
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            low_end_max_cores: LOW_END_MAX_CORES,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            desktop: scaled(DESKTOP, density),
            mobile: scaled(MOBILE, density),
            low_end: scaled(LOW_END, density),
        }
    }

    /// The config as JSON for a `data-particles` attribute.
    #[must_use]
    pub fn config_json(&self) -> String {
        serde_json::to_string(&self.config()).unwrap_or_default()
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn scaled(preset: ParticlePreset, density: f32) -> ParticlePreset {
    ParticlePreset {
        count: ((preset.count as f32) * density).round().max(1.0) as u32,
        ..preset
    }
}
