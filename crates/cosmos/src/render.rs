//! The boundary between the simulation and whatever draws it.
//!
//! The core only ever asks a renderer to create or mutate objects; it never
//! reads anything back. `SceneRecorder` is an in-memory scene graph that
//! honours the contract without a window, for tests and headless runs.

use std::collections::HashMap;

use nalgebra::{Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use units::Length;

use crate::color::BodyColor;
use crate::constants::{SCENE_FORWARD, SCENE_HEIGHT, SCENE_TITLE, SCENE_WIDTH};
use crate::pacing::FramePacer;

/// Opaque reference to an object owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RenderHandle(pub u64);

impl std::fmt::Display for RenderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("unknown render handle {0}")]
    UnknownHandle(RenderHandle),

    #[error("render backend failure: {0}")]
    Backend(String),
}

/// Window and camera settings applied once before anything is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSettings {
    pub title: String,
    pub background: BodyColor,
    pub width: u32,
    pub height: u32,
    /// Camera view direction
    pub forward: Vector3<f64>,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            title: SCENE_TITLE.to_string(),
            background: BodyColor::BACKGROUND,
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
            forward: Vector3::from(SCENE_FORWARD),
        }
    }
}

/// What the simulation needs from a 3D scene toolkit.
pub trait RenderAdapter {
    fn configure_scene(&mut self, _settings: &SceneSettings) -> Result<(), RenderError> {
        Ok(())
    }

    fn create_sphere(
        &mut self,
        position: Point3<f64>,
        radius: Length,
        color: BodyColor,
        emissive: bool,
    ) -> Result<RenderHandle, RenderError>;

    fn create_point_light(
        &mut self,
        position: Point3<f64>,
        color: BodyColor,
    ) -> Result<RenderHandle, RenderError>;

    fn set_position(
        &mut self,
        handle: RenderHandle,
        position: Point3<f64>,
    ) -> Result<(), RenderError>;

    fn set_color(&mut self, handle: RenderHandle, color: BodyColor) -> Result<(), RenderError>;

    /// Rotate an object about `axis` through its own centre.
    fn rotate(
        &mut self,
        handle: RenderHandle,
        angle: f64,
        axis: Unit<Vector3<f64>>,
    ) -> Result<(), RenderError>;

    /// Block until the next frame boundary at `tick_rate` frames per second.
    fn pace(&mut self, tick_rate: u32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneObjectKind {
    Sphere { emissive: bool },
    PointLight,
}

/// Last known state of one object in a `SceneRecorder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub kind: SceneObjectKind,
    pub position: Point3<f64>,
    /// Position the object was created at
    pub spawn_position: Point3<f64>,
    pub radius: Length,
    pub color: BodyColor,
    /// Sum of every rotation angle applied, in radians.
    pub accumulated_rotation: f64,
}

/// In-memory scene graph.
///
/// Unpaced by default so tests run as fast as the CPU allows;
/// `SceneRecorder::realtime` sleeps to the requested tick rate.
#[derive(Debug, Default)]
pub struct SceneRecorder {
    objects: HashMap<RenderHandle, SceneObject>,
    next_handle: u64,
    settings: Option<SceneSettings>,
    pacer: Option<FramePacer>,
    realtime: bool,
    frames: u64,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn realtime() -> Self {
        Self {
            realtime: true,
            ..Self::default()
        }
    }

    pub fn object(&self, handle: RenderHandle) -> Option<&SceneObject> {
        self.objects.get(&handle)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.objects
            .values()
            .filter(|o| o.kind == SceneObjectKind::PointLight)
            .count()
    }

    pub fn settings(&self) -> Option<&SceneSettings> {
        self.settings.as_ref()
    }

    /// Number of frame boundaries paced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn insert(&mut self, object: SceneObject) -> RenderHandle {
        let handle = RenderHandle(self.next_handle);
        self.next_handle += 1;
        self.objects.insert(handle, object);
        handle
    }

    fn get_mut(&mut self, handle: RenderHandle) -> Result<&mut SceneObject, RenderError> {
        self.objects
            .get_mut(&handle)
            .ok_or(RenderError::UnknownHandle(handle))
    }
}

impl RenderAdapter for SceneRecorder {
    fn configure_scene(&mut self, settings: &SceneSettings) -> Result<(), RenderError> {
        debug!(
            title = %settings.title,
            width = settings.width,
            height = settings.height,
            "scene configured"
        );
        self.settings = Some(settings.clone());
        Ok(())
    }

    fn create_sphere(
        &mut self,
        position: Point3<f64>,
        radius: Length,
        color: BodyColor,
        emissive: bool,
    ) -> Result<RenderHandle, RenderError> {
        Ok(self.insert(SceneObject {
            kind: SceneObjectKind::Sphere { emissive },
            position,
            spawn_position: position,
            radius,
            color,
            accumulated_rotation: 0.0,
        }))
    }

    fn create_point_light(
        &mut self,
        position: Point3<f64>,
        color: BodyColor,
    ) -> Result<RenderHandle, RenderError> {
        Ok(self.insert(SceneObject {
            kind: SceneObjectKind::PointLight,
            position,
            spawn_position: position,
            radius: Length::zero(),
            color,
            accumulated_rotation: 0.0,
        }))
    }

    fn set_position(
        &mut self,
        handle: RenderHandle,
        position: Point3<f64>,
    ) -> Result<(), RenderError> {
        self.get_mut(handle)?.position = position;
        Ok(())
    }

    fn set_color(&mut self, handle: RenderHandle, color: BodyColor) -> Result<(), RenderError> {
        self.get_mut(handle)?.color = color;
        Ok(())
    }

    fn rotate(
        &mut self,
        handle: RenderHandle,
        angle: f64,
        _axis: Unit<Vector3<f64>>,
    ) -> Result<(), RenderError> {
        self.get_mut(handle)?.accumulated_rotation += angle;
        Ok(())
    }

    fn pace(&mut self, tick_rate: u32) {
        self.frames += 1;
        if !self.realtime {
            return;
        }
        let pacer = self.pacer.get_or_insert_with(|| FramePacer::new(tick_rate));
        if pacer.tick_rate() != tick_rate {
            *pacer = FramePacer::new(tick_rate);
        }
        pacer.wait();
    }
}
