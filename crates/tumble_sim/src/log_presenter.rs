//! Headless presenter that logs proxy transforms

use tumble_scene::{Presenter, SceneGraph};

/// Logs every proxy's position once every `interval` frames
#[derive(Debug, Clone)]
pub struct LogPresenter {
    interval: u64,
    size: (u32, u32),
}

impl LogPresenter {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            size: (0, 0),
        }
    }

    /// Last size received through `resize`
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: u64, scene: &SceneGraph) {
        if frame % self.interval != 0 {
            return;
        }
        log::info!("Frame {}: {} proxies", frame, scene.len());
        for (id, proxy) in scene.iter() {
            let [x, y, z] = proxy.transform.position;
            log::debug!("  {:?} {:?} at ({:.3}, {:.3}, {:.3})", id, proxy.geometry, x, y, z);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        log::info!("Output resized to {}x{}", width, height);
    }
}
