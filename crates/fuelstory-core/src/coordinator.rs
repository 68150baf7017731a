//! Scene state machine
//!
//! The coordinator owns the active scene pass. Every transition renders the
//! target scene from scratch and bumps the generation counter, so pointer
//! events captured against an earlier pass can be recognised and dropped.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use fuelstory_io::DatasetBundle;

use crate::config::StoryConfig;
use crate::error::StoryResult;
use crate::inspect::Inspection;
use crate::scene::SceneId;
use crate::scenes::{render_scene, ScenePass};

/// Identifies the pass a pointer event was issued against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerToken {
    pub scene: SceneId,
    pub generation: u64,
}

/// Drives the four-scene narrative
#[derive(Debug)]
pub struct SceneCoordinator {
    bundle: Arc<DatasetBundle>,
    config: StoryConfig,
    generation: u64,
    pass: ScenePass,
}

impl SceneCoordinator {
    /// Start at scene 1
    pub fn new(bundle: Arc<DatasetBundle>, config: StoryConfig) -> StoryResult<Self> {
        let pass = render_scene(SceneId::Distribution, &bundle, &config, 0)?;
        Ok(Self {
            bundle,
            config,
            generation: 0,
            pass,
        })
    }

    /// Active scene
    pub fn current(&self) -> SceneId {
        self.pass.scene
    }

    /// Active scene pass
    pub fn pass(&self) -> &ScenePass {
        &self.pass
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    pub fn bundle(&self) -> &DatasetBundle {
        &self.bundle
    }

    /// Token to attach to pointer events for the active pass
    pub fn token(&self) -> PointerToken {
        PointerToken {
            scene: self.pass.scene,
            generation: self.generation,
        }
    }

    /// Jump to scene `n` in `1..=4`
    ///
    /// An invalid number leaves the active pass untouched.
    pub fn go_to(&mut self, n: u8) -> StoryResult<&ScenePass> {
        let scene = SceneId::try_from(n)?;
        self.activate(scene)
    }

    /// Advance, wrapping from 4 to 1
    pub fn next(&mut self) -> StoryResult<&ScenePass> {
        self.activate(self.current().next())
    }

    /// Go back, wrapping from 1 to 4
    pub fn prev(&mut self) -> StoryResult<&ScenePass> {
        self.activate(self.current().prev())
    }

    /// Inspect a plot-area position
    ///
    /// Tokens from an earlier generation get `Inspection::Stale` without
    /// consulting the active pass.
    pub fn inspect(&self, token: PointerToken, px: f64, py: f64) -> Inspection {
        if token != self.token() {
            tracing::trace!(
                token_generation = token.generation,
                generation = self.generation,
                "dropping stale pointer event"
            );
            return Inspection::Stale;
        }
        self.pass.inspect(px, py)
    }

    /// Inspect a position given in canvas pixels, margins included
    pub fn inspect_canvas(&self, token: PointerToken, cx: f64, cy: f64) -> Inspection {
        let (px, py) = self.pass.plot.from_canvas(cx, cy);
        self.inspect(token, px, py)
    }

    fn activate(&mut self, scene: SceneId) -> StoryResult<&ScenePass> {
        let generation = self.generation + 1;
        let pass = render_scene(scene, &self.bundle, &self.config, generation)?;
        tracing::debug!(
            from = self.pass.scene.number(),
            to = scene.number(),
            generation,
            "scene transition"
        );
        self.generation = generation;
        self.pass = pass;
        Ok(&self.pass)
    }
}
