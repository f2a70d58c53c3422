//! Session sprite atlas — the named image assets loaded once at startup.
//!
//! The atlas is an explicitly constructed, session-owned value (no
//! process-wide global), so a lookup can never happen before the assets
//! exist: a `SpriteAtlas` in hand proves every sprite loaded. Image
//! bytes stay encoded; decoding and blitting are the render target's
//! concern.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use nexus_core::enums::SpriteId;

/// Failure to assemble the sprite atlas. Fatal to the session.
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("failed to load sprite asset {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One loaded sprite: its id and the raw encoded image bytes.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub id: SpriteId,
    pub bytes: Vec<u8>,
}

/// The complete session asset table, keyed by `SpriteId`.
#[derive(Debug)]
pub struct SpriteAtlas {
    sprites: Vec<Sprite>,
}

impl SpriteAtlas {
    /// Load every sprite from `dir`. Any missing or unreadable file fails
    /// the whole load — a session cannot start with partial assets.
    pub fn load(dir: &Path) -> Result<SpriteAtlas, SpriteError> {
        let mut sprites = Vec::with_capacity(SpriteId::ALL.len());
        for id in SpriteId::ALL {
            let path = dir.join(asset_file(id));
            let bytes = fs::read(&path).map_err(|source| SpriteError::Load {
                path: path.clone(),
                source,
            })?;
            sprites.push(Sprite { id, bytes });
        }
        log::info!("loaded {} sprites from {}", sprites.len(), dir.display());
        Ok(SpriteAtlas { sprites })
    }

    /// Look up a sprite. Total: the atlas always holds every id.
    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[slot(id)]
    }
}

/// Asset file name for a sprite id.
fn asset_file(id: SpriteId) -> &'static str {
    match id {
        SpriteId::DroneNormalMoving => "drone_normal.png",
        SpriteId::DroneFastMoving => "drone_fast.png",
        SpriteId::DroneNormalStill => "drone_normal_still.png",
        SpriteId::DroneFastStill => "drone_fast_still.png",
        SpriteId::BackgroundNexus => "nexus_background.png",
        SpriteId::NexusPortrait => "nexus_portrait.png",
        SpriteId::ExplosionSheet => "explosion.png",
    }
}

/// Storage slot for a sprite id, in `SpriteId::ALL` order.
fn slot(id: SpriteId) -> usize {
    match id {
        SpriteId::DroneNormalMoving => 0,
        SpriteId::DroneFastMoving => 1,
        SpriteId::DroneNormalStill => 2,
        SpriteId::DroneFastStill => 3,
        SpriteId::BackgroundNexus => 4,
        SpriteId::NexusPortrait => 5,
        SpriteId::ExplosionSheet => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a directory with all seven asset files.
    fn populate_assets(dir: &Path) {
        fs::create_dir_all(dir).unwrap();
        for id in SpriteId::ALL {
            fs::write(dir.join(asset_file(id)), [0x89, b'P', b'N', b'G']).unwrap();
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nexus-sprites-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_load_full_atlas() {
        let dir = scratch_dir("full");
        populate_assets(&dir);

        let atlas = SpriteAtlas::load(&dir).unwrap();
        for id in SpriteId::ALL {
            let sprite = atlas.get(id);
            assert_eq!(sprite.id, id);
            assert!(!sprite.bytes.is_empty());
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_asset_fails_whole_load() {
        let dir = scratch_dir("partial");
        populate_assets(&dir);
        fs::remove_file(dir.join(asset_file(SpriteId::ExplosionSheet))).unwrap();

        let result = SpriteAtlas::load(&dir);
        match result {
            Err(SpriteError::Load { path, .. }) => {
                assert!(path.ends_with("explosion.png"));
            }
            Ok(_) => panic!("load must fail when an asset is missing"),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = scratch_dir("absent");
        assert!(SpriteAtlas::load(&dir).is_err());
    }
}
