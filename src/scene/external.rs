use crate::foundation::core::{PointerOffset, Viewport};

/// Per-frame input for the external 3D gate renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene3DInput {
    /// Smoothed pointer offset driving the model's rotation.
    pub pointer: PointerOffset,
    /// Narrow layout flag.
    pub is_mobile: bool,
}

/// Container size handed to the 2D distortion renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DistortionMount {
    /// Container width in pixels.
    pub width: f64,
    /// Container height in pixels.
    pub height: f64,
}

impl DistortionMount {
    /// The phase-2 visual panel: left half on desktop, top half on mobile.
    pub fn for_viewport(viewport: Viewport, is_mobile: bool) -> Self {
        if is_mobile {
            Self {
                width: viewport.width,
                height: viewport.height / 2.0,
            }
        } else {
            Self {
                width: viewport.width / 2.0,
                height: viewport.height,
            }
        }
    }
}

/// Renderer owning the 3D gate scene and its own render loop.
pub trait SceneRenderer {
    /// Start rendering.
    fn mount(&mut self);
    /// New pointer input for the next frame.
    fn update(&mut self, input: &Scene3DInput);
    /// Stop rendering and release resources.
    fn unmount(&mut self);
}

/// Renderer owning the continuous water-distortion surface.
pub trait DistortionRenderer {
    /// Start rendering into a container of the given size.
    fn mount(&mut self, size: DistortionMount);
    /// Container size changed.
    fn resize(&mut self, size: DistortionMount);
    /// Stop rendering and release resources.
    fn unmount(&mut self);
}

/// Tracks which collaborators are mounted and issues only the calls needed to match a frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollaboratorSync {
    scene3d: bool,
    distortion: Option<DistortionMount>,
}

impl CollaboratorSync {
    /// Nothing mounted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the 3D renderer is mounted.
    pub fn scene3d_mounted(&self) -> bool {
        self.scene3d
    }

    /// Current distortion container, if mounted.
    pub fn distortion(&self) -> Option<DistortionMount> {
        self.distortion
    }

    /// Bring the 3D renderer in line with `input` (`None` unmounts).
    pub fn sync_scene3d(&mut self, renderer: &mut dyn SceneRenderer, input: Option<&Scene3DInput>) {
        match (self.scene3d, input) {
            (false, Some(i)) => {
                renderer.mount();
                renderer.update(i);
                self.scene3d = true;
            }
            (true, Some(i)) => renderer.update(i),
            (true, None) => {
                renderer.unmount();
                self.scene3d = false;
            }
            (false, None) => {}
        }
    }

    /// Bring the distortion renderer in line with `mount` (`None` unmounts).
    pub fn sync_distortion(
        &mut self,
        renderer: &mut dyn DistortionRenderer,
        mount: Option<DistortionMount>,
    ) {
        match (self.distortion, mount) {
            (None, Some(m)) => renderer.mount(m),
            (Some(old), Some(m)) if old != m => renderer.resize(m),
            (Some(_), None) => renderer.unmount(),
            _ => {}
        }
        self.distortion = mount;
    }

    /// Unmount everything still mounted.
    pub fn release(
        &mut self,
        scene: &mut dyn SceneRenderer,
        distortion: &mut dyn DistortionRenderer,
    ) {
        self.sync_scene3d(scene, None);
        self.sync_distortion(distortion, None);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/external.rs"]
mod tests;
