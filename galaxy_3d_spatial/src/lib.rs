/*!
# Galaxy 3D Spatial

Dynamic octree spatial index for the Galaxy 3D engine.

Answers "which entities are near / visible / hit" queries (ray, box,
sphere, frustum) without scanning every entity every frame. The scene
calls `insert` / `remove` / `update` when an entity's extent changes and
runs one `collect_*` query per frame to get a working set of keys.

## Architecture

- **Octree**: arena of nodes, insertion / removal / subdivision / queries
- **OctreeNode**: passive container (bounds, entity set, child/parent links)
- **AABB / Frustum**: bounding volume primitives used by every test
- **SpatialEntity**: how an entity exposes its key and world extent
- **Engine**: global logger and log level
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geometry;
pub mod entity;
pub mod octree;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging facade
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Spatial sub-module: geometry, entity handles and the octree
    pub mod spatial {
        pub use crate::geometry::*;
        pub use crate::entity::*;
        pub use crate::octree::*;
    }
}

// Re-export math library at crate root
pub use glam;
