//! Tumble Scene - visual proxies
//!
//! Every simulated body has a [`VisualProxy`] in the [`SceneGraph`]. The
//! simulation copies body poses onto proxies each frame and hands the graph
//! to a [`Presenter`].

pub mod graph;
pub mod presenter;
pub mod proxy;
pub mod transform;

pub mod prelude {
    pub use crate::graph::{ProxyId, SceneGraph};
    pub use crate::presenter::{NullPresenter, Presenter};
    pub use crate::proxy::{Geometry, SurfaceLook, VisualProxy};
    pub use crate::transform::Transform;
}

pub use prelude::*;
