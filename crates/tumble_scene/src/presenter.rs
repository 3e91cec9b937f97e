//! Presentation sink

use crate::graph::SceneGraph;

/// Receives the synchronized scene once per frame.
///
/// Window resize notifications are forwarded here and nowhere else; the
/// physics side never sees them.
pub trait Presenter {
    /// Present the scene for a frame
    fn present(&mut self, frame: u64, scene: &SceneGraph);

    /// Handle a resize of the output surface
    fn resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }
}

/// Presenter that discards every frame
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _frame: u64, _scene: &SceneGraph) {}
}
