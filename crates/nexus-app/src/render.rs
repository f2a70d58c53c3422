//! Scene rendering against the embedding UI's drawing primitives.
//!
//! The UI implements `RenderTarget`; the scene walks the latest snapshot
//! and issues primitive calls. Draw order is part of the look and is
//! fixed: background, link lines, effects, then the drones on top.

use nexus_core::constants::{EXPLOSION_FRAME_SIZE, FIELD_HEIGHT, FIELD_WIDTH};
use nexus_core::enums::{DroneClass, SpriteId};
use nexus_core::state::{DroneView, EffectView, GameStateSnapshot};
use nexus_core::types::{Color, FieldSize};

use crate::sprites::{Sprite, SpriteAtlas};

/// Drawing primitives supplied by the embedding UI layer.
///
/// Coordinates are field pixels; `draw_text` renders the string
/// horizontally centered on `x`.
pub trait RenderTarget {
    fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64, w: f64, h: f64);

    /// Draw a sub-rectangle of a sprite sheet.
    #[allow(clippy::too_many_arguments)]
    fn draw_image_region(
        &mut self,
        sprite: &Sprite,
        src_x: f64,
        src_y: f64,
        src_w: f64,
        src_h: f64,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    );

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color);

    fn draw_text(&mut self, text: &str, x: f64, y: f64, color: Color);
}

/// Draw one frame of the game from a snapshot.
pub fn render_scene(
    snapshot: &GameStateSnapshot,
    atlas: &SpriteAtlas,
    field: FieldSize,
    target: &mut dyn RenderTarget,
) {
    // Background, centered when the surface is larger than the artwork.
    target.draw_image(
        atlas.get(SpriteId::BackgroundNexus),
        (field.width - FIELD_WIDTH) / 2.0,
        (field.height - FIELD_HEIGHT) / 2.0,
        FIELD_WIDTH,
        FIELD_HEIGHT,
    );

    for drone in &snapshot.drones {
        draw_links(drone, snapshot, target);
    }

    for effect in &snapshot.effects {
        draw_effect(effect, atlas, target);
    }

    for drone in &snapshot.drones {
        draw_drone(drone, atlas, target);
    }
}

/// Lines from a drone to each chained partner. The stroke width pulses
/// with the drone's age.
fn draw_links(drone: &DroneView, snapshot: &GameStateSnapshot, target: &mut dyn RenderTarget) {
    let stroke = (drone.lifespan_ms / 40.0) as i64 % 15 + 5;
    for partner_id in &drone.links {
        if let Some(partner) = snapshot.drones.iter().find(|d| d.id == *partner_id) {
            target.draw_line(
                drone.x,
                drone.y,
                partner.x,
                partner.y,
                stroke as f64,
                Color::LINK_LINE,
            );
        }
    }
}

fn draw_effect(effect: &EffectView, atlas: &SpriteAtlas, target: &mut dyn RenderTarget) {
    match effect {
        EffectView::Explosion {
            x,
            y,
            frame_col,
            frame_row,
        } => {
            let size = EXPLOSION_FRAME_SIZE;
            target.draw_image_region(
                atlas.get(SpriteId::ExplosionSheet),
                *frame_col as f64 * size,
                *frame_row as f64 * size,
                size,
                size,
                x - size / 2.0,
                y - size / 2.0,
                size,
                size,
            );
        }
        EffectView::ScoreText { x, y, text, color } => {
            target.draw_text(text, *x, *y, *color);
        }
    }
}

fn draw_drone(drone: &DroneView, atlas: &SpriteAtlas, target: &mut dyn RenderTarget) {
    let sprite_id = match (drone.class, drone.moving) {
        (DroneClass::Normal, true) => SpriteId::DroneNormalMoving,
        (DroneClass::Normal, false) => SpriteId::DroneNormalStill,
        (DroneClass::Fast, true) => SpriteId::DroneFastMoving,
        (DroneClass::Fast, false) => SpriteId::DroneFastStill,
    };
    let half = drone.half_extent;
    target.draw_image(
        atlas.get(sprite_id),
        drone.x - half,
        drone.y - half,
        2.0 * half,
        2.0 * half,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_core::enums::Heading;

    /// Records primitive calls for draw-order assertions.
    #[derive(Default)]
    struct RecordingTarget {
        calls: Vec<Call>,
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Image { id: SpriteId, x: f64, y: f64, w: f64 },
        Region { id: SpriteId, src_x: f64, src_y: f64 },
        Line { stroke: f64 },
        Text { text: String },
    }

    impl RenderTarget for RecordingTarget {
        fn draw_image(&mut self, sprite: &Sprite, x: f64, y: f64, w: f64, _h: f64) {
            self.calls.push(Call::Image {
                id: sprite.id,
                x,
                y,
                w,
            });
        }

        fn draw_image_region(
            &mut self,
            sprite: &Sprite,
            src_x: f64,
            src_y: f64,
            _src_w: f64,
            _src_h: f64,
            _x: f64,
            _y: f64,
            _w: f64,
            _h: f64,
        ) {
            self.calls.push(Call::Region {
                id: sprite.id,
                src_x,
                src_y,
            });
        }

        fn draw_line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64, stroke: f64, _color: Color) {
            self.calls.push(Call::Line { stroke });
        }

        fn draw_text(&mut self, text: &str, _x: f64, _y: f64, _color: Color) {
            self.calls.push(Call::Text { text: text.into() });
        }
    }

    fn test_atlas() -> SpriteAtlas {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        // Unique per call: render tests run in parallel.
        let dir = std::env::temp_dir().join(format!(
            "nexus-render-{}-{}",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        ));
        std::fs::create_dir_all(&dir).unwrap();
        for name in [
            "drone_normal.png",
            "drone_fast.png",
            "drone_normal_still.png",
            "drone_fast_still.png",
            "nexus_background.png",
            "nexus_portrait.png",
            "explosion.png",
        ] {
            std::fs::write(dir.join(name), [0u8; 4]).unwrap();
        }
        let atlas = SpriteAtlas::load(&dir).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        atlas
    }

    fn drone_view(id: u32, x: f64, links: Vec<u32>, moving: bool) -> DroneView {
        DroneView {
            id,
            x,
            y: 300.0,
            class: DroneClass::Normal,
            heading: Heading::Up,
            half_extent: 20.0,
            moving,
            lifespan_ms: 0.0,
            links,
        }
    }

    #[test]
    fn test_scene_draw_order() {
        let snapshot = GameStateSnapshot {
            drones: vec![
                drone_view(0, 100.0, vec![1], true),
                drone_view(1, 200.0, vec![0], true),
            ],
            effects: vec![EffectView::ScoreText {
                x: 150.0,
                y: 250.0,
                text: "100".into(),
                color: Color::CYAN,
            }],
            ..Default::default()
        };

        let atlas = test_atlas();
        let mut target = RecordingTarget::default();
        render_scene(&snapshot, &atlas, FieldSize::default(), &mut target);

        // Background first.
        assert!(matches!(
            target.calls[0],
            Call::Image {
                id: SpriteId::BackgroundNexus,
                ..
            }
        ));
        // Both drones draw their link line (each end draws once).
        let lines = target
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Line { .. }))
            .count();
        assert_eq!(lines, 2);
        // Effect text before the drone sprites, drones last.
        let text_idx = target
            .calls
            .iter()
            .position(|c| matches!(c, Call::Text { .. }))
            .unwrap();
        let first_drone_idx = target
            .calls
            .iter()
            .position(|c| {
                matches!(
                    c,
                    Call::Image {
                        id: SpriteId::DroneNormalMoving,
                        ..
                    }
                )
            })
            .unwrap();
        assert!(text_idx < first_drone_idx);
        assert_eq!(
            target
                .calls
                .iter()
                .filter(|c| matches!(
                    c,
                    Call::Image {
                        id: SpriteId::DroneNormalMoving,
                        ..
                    }
                ))
                .count(),
            2
        );
    }

    #[test]
    fn test_still_drone_uses_still_sprite_and_grown_box() {
        let mut drone = drone_view(0, 400.0, vec![], false);
        drone.half_extent = 26.0;
        let snapshot = GameStateSnapshot {
            drones: vec![drone],
            ..Default::default()
        };

        let atlas = test_atlas();
        let mut target = RecordingTarget::default();
        render_scene(&snapshot, &atlas, FieldSize::default(), &mut target);

        assert!(target.calls.iter().any(|c| matches!(
            c,
            Call::Image {
                id: SpriteId::DroneNormalStill,
                x,
                w,
                ..
            } if *x == 400.0 - 26.0 && *w == 52.0
        )));
    }

    #[test]
    fn test_explosion_draws_sheet_region() {
        let snapshot = GameStateSnapshot {
            effects: vec![EffectView::Explosion {
                x: 320.0,
                y: 240.0,
                frame_col: 2,
                frame_row: 1,
            }],
            ..Default::default()
        };

        let atlas = test_atlas();
        let mut target = RecordingTarget::default();
        render_scene(&snapshot, &atlas, FieldSize::default(), &mut target);

        assert!(target.calls.iter().any(|c| matches!(
            c,
            Call::Region {
                id: SpriteId::ExplosionSheet,
                src_x,
                src_y,
            } if *src_x == 2.0 * EXPLOSION_FRAME_SIZE && *src_y == EXPLOSION_FRAME_SIZE
        )));
    }
}
