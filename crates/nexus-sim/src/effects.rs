//! Transient visual effects — explosions and floating score text.
//!
//! Effects are a tagged enum dispatched by `match`, owned exclusively by
//! the `EffectManager` inside the engine. Each effect advances with the
//! tick delta and reports `is_done` once its fixed lifetime is exhausted;
//! the manager drops finished effects in the same sweep.

use nexus_core::constants::{
    EXPLOSION_DURATION_MS, EXPLOSION_FRAME_COLS, EXPLOSION_FRAME_ROWS, SCORE_TEXT_DURATION_MS,
    SCORE_TEXT_RISE,
};
use nexus_core::state::EffectView;
use nexus_core::types::Color;

/// A transient visual effect.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Sprite-sheet explosion animation at a fixed position.
    Explosion { x: f64, y: f64, elapsed_ms: f64 },
    /// Reward text rising from a destroyed drone.
    ScoreText {
        x: f64,
        y: f64,
        text: String,
        color: Color,
        elapsed_ms: f64,
    },
}

impl Effect {
    /// Advance the effect by the tick delta.
    pub fn advance(&mut self, delta_ms: f64) {
        match self {
            Effect::Explosion { elapsed_ms, .. } => {
                *elapsed_ms += delta_ms;
            }
            Effect::ScoreText { y, elapsed_ms, .. } => {
                *y -= SCORE_TEXT_RISE * delta_ms;
                *elapsed_ms += delta_ms;
            }
        }
    }

    /// Whether the effect's lifetime is exhausted.
    pub fn is_done(&self) -> bool {
        match self {
            Effect::Explosion { elapsed_ms, .. } => *elapsed_ms >= EXPLOSION_DURATION_MS,
            Effect::ScoreText { elapsed_ms, .. } => *elapsed_ms > SCORE_TEXT_DURATION_MS,
        }
    }

    /// Render view for the snapshot.
    pub fn view(&self) -> EffectView {
        match self {
            Effect::Explosion { x, y, elapsed_ms } => {
                let (frame_col, frame_row) = explosion_frame(*elapsed_ms);
                EffectView::Explosion {
                    x: *x,
                    y: *y,
                    frame_col,
                    frame_row,
                }
            }
            Effect::ScoreText {
                x, y, text, color, ..
            } => EffectView::ScoreText {
                x: *x,
                y: *y,
                text: text.clone(),
                color: *color,
            },
        }
    }
}

/// Select the explosion sheet frame for an elapsed time, clamped to the
/// last frame so a view taken at the lifetime boundary stays valid.
fn explosion_frame(elapsed_ms: f64) -> (u32, u32) {
    let total_frames = EXPLOSION_FRAME_COLS * EXPLOSION_FRAME_ROWS;
    let frame_ms = EXPLOSION_DURATION_MS / total_frames as f64;
    let frame = ((elapsed_ms / frame_ms) as u32).min(total_frames - 1);
    (frame % EXPLOSION_FRAME_COLS, frame / EXPLOSION_FRAME_COLS)
}

/// Owns every live effect; advances, prunes, and exposes render views.
#[derive(Debug, Default)]
pub struct EffectManager {
    effects: Vec<Effect>,
}

impl EffectManager {
    pub fn spawn_explosion(&mut self, x: f64, y: f64) {
        self.effects.push(Effect::Explosion {
            x,
            y,
            elapsed_ms: 0.0,
        });
    }

    pub fn spawn_score_text(&mut self, x: f64, y: f64, text: String, color: Color) {
        self.effects.push(Effect::ScoreText {
            x,
            y,
            text,
            color,
            elapsed_ms: 0.0,
        });
    }

    /// Advance every effect, then drop the finished ones.
    pub fn advance(&mut self, delta_ms: f64) {
        for effect in &mut self.effects {
            effect.advance(delta_ms);
        }
        self.effects.retain(|effect| !effect.is_done());
    }

    /// Render views for the snapshot.
    pub fn views(&self) -> Vec<EffectView> {
        self.effects.iter().map(Effect::view).collect()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
