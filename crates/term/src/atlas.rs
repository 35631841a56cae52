//! Glyph atlas: the terminal's sprite sheet.
//!
//! An atlas maps draw kinds to a glyph and an optional color, loaded from a
//! JSON file:
//!
//! ```json
//! {
//!   "player": { "glyph": "@", "fg": [50, 100, 255] },
//!   "enemy":  { "glyph": "g" }
//! }
//! ```
//!
//! A glyph without `fg` is tinted with the fallback color supplied by the
//! core, so normal enemies and bosses can share one glyph. Kinds missing
//! from the atlas are drawn with geometric placeholders.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::{DrawKind, Rgb};

#[derive(Debug, Clone, Deserialize)]
struct GlyphSpec {
    glyph: char,
    #[serde(default)]
    fg: Option<[u8; 3]>,
}

/// A resolved sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    /// None means "use the fallback color".
    pub fg: Option<Rgb>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Atlas {
    glyphs: HashMap<DrawKind, Glyph>,
}

impl Atlas {
    /// An atlas with no sprites; everything renders as placeholders.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse atlas JSON. Unknown kinds are skipped with a warning.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: HashMap<String, GlyphSpec> =
            serde_json::from_str(text).context("invalid glyph atlas JSON")?;

        let mut glyphs = HashMap::with_capacity(raw.len());
        for (name, spec) in raw {
            let Some(kind) = DrawKind::from_str(&name) else {
                log::warn!("glyph atlas: unknown kind {name:?}, skipped");
                continue;
            };
            glyphs.insert(
                kind,
                Glyph {
                    ch: spec.glyph,
                    fg: spec.fg.map(|[r, g, b]| Rgb::new(r, g, b)),
                },
            );
        }
        Ok(Self { glyphs })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read glyph atlas {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to load {}", path.display()))
    }

    /// Load the atlas, degrading to placeholders on any failure.
    pub fn load_or_placeholders(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(atlas) => {
                log::info!("glyph atlas loaded ({} glyphs)", atlas.len());
                atlas
            }
            Err(e) => {
                log::warn!("{e:#}; drawing placeholders instead");
                Self::empty()
            }
        }
    }

    pub fn get(&self, kind: DrawKind) -> Option<Glyph> {
        self.glyphs.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
