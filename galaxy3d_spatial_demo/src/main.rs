//! Galaxy3D spatial demo
//!
//! Scatters random entities in a cubic world, indexes them in an octree,
//! moves some of them around for a few frames and runs one query of each
//! kind, logging the tree shape through the engine logger.

use clap::Parser;
use galaxy_3d_spatial::galaxy3d::{Engine, Result};
use galaxy_3d_spatial::galaxy3d::log::LogSeverity;
use galaxy_3d_spatial::galaxy3d::spatial::{
    AABB, EntityKey, Frustum, Octree, OctreeConfig, SpatialEntity,
};
use galaxy_3d_spatial::{spatial_bail, spatial_debug, spatial_info};
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use slotmap::SlotMap;

const SOURCE: &str = "galaxy3d::demo";

/// Octree spatial index demo
#[derive(Parser, Debug)]
#[command(name = "galaxy3d_spatial_demo")]
#[command(about = "Populates an octree with random entities and runs queries against it")]
struct Args {
    /// Number of entities to spawn
    #[arg(short = 'n', long, default_value_t = 2000)]
    count: usize,

    /// Seed of the random scene
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Half size of the cubic world
    #[arg(short, long, default_value_t = 100.0)]
    extent: f32,

    /// Leaf capacity before subdivision
    #[arg(long, default_value_t = galaxy_3d_spatial::galaxy3d::spatial::MAX_ENTITIES_PER_NODE)]
    capacity: usize,

    /// Maximum subdivision depth
    #[arg(long, default_value_t = galaxy_3d_spatial::galaxy3d::spatial::MAXIMUM_DEPTH)]
    depth: u32,

    /// Number of simulated frames
    #[arg(long, default_value_t = 5)]
    frames: usize,

    /// Also dump the node hierarchy (Debug severity)
    #[arg(short, long)]
    verbose: bool,
}

struct DemoEntity {
    key: EntityKey,
    position: Vec3,
    half_extents: Option<Vec3>,
}

impl SpatialEntity for DemoEntity {
    type Key = EntityKey;

    fn key(&self) -> EntityKey {
        self.key
    }

    fn render_bounds(&self) -> Option<AABB> {
        self.half_extents
            .map(|half| AABB::from_center_half_extents(self.position, half))
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

fn random_point(rng: &mut StdRng, extent: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
        rng.random_range(-extent..extent),
    )
}

fn main() -> Result<()> {
    let args = Args::parse();

    Engine::set_log_level(if args.verbose { LogSeverity::Debug } else { LogSeverity::Info });

    if !(args.extent > 0.0) {
        spatial_bail!(SOURCE, InvalidBounds, "world extent must be positive, got {}", args.extent);
    }

    let config = OctreeConfig::default()
        .with_max_entities_per_node(args.capacity)
        .with_maximum_depth(args.depth);
    let world = AABB::new(Vec3::splat(-args.extent), Vec3::splat(args.extent));
    let mut octree: Octree<EntityKey> = Octree::with_config(world, config)?;

    // Populate
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut entities: SlotMap<EntityKey, DemoEntity> = SlotMap::with_key();
    let max_half = (args.extent * 0.02).max(0.01);
    for index in 0..args.count {
        let position = random_point(&mut rng, args.extent);
        let half_extents = (index % 4 != 0)
            .then(|| Vec3::splat(rng.random_range(0.0..max_half)));
        let key = entities.insert_with_key(|key| DemoEntity { key, position, half_extents });
        octree.insert(&entities[key]);
    }
    spatial_info!(SOURCE, "Spawned {} entities", octree.len());
    octree.debug_print_octree_statistics();

    // Simulate a few frames of movement
    let keys: Vec<EntityKey> = entities.keys().collect();
    for frame in 0..args.frames {
        let mut moved = 0;
        for key in keys.iter().skip(frame).step_by(10) {
            if let Some(entity) = entities.get_mut(*key) {
                entity.position = random_point(&mut rng, args.extent);
                octree.update(&*entity);
                moved += 1;
            }
        }
        spatial_debug!(SOURCE, "Frame {}: moved {} entities, {} nodes", frame, moved, octree.node_count());
    }

    // Queries
    let mut results = FxHashSet::default();

    let visited = octree.collect_intersecting_objects_with_sphere(Vec3::ZERO, args.extent * 0.25, &mut results);
    spatial_info!(SOURCE, "Sphere query: {} candidates, {} nodes tested", results.len(), visited);

    results.clear();
    let query_box = AABB::new(Vec3::ZERO, Vec3::splat(args.extent * 0.5));
    let visited = octree.collect_intersecting_objects_with_aabb(&query_box, &mut results);
    spatial_info!(SOURCE, "Box query: {} candidates, {} nodes tested", results.len(), visited);

    results.clear();
    let origin = Vec3::new(-args.extent * 2.0, 0.0, 0.0);
    let visited = octree.collect_intersecting_objects_with_ray(origin, Vec3::X, &mut results);
    let hits = results
        .iter()
        .filter(|key| {
            entities
                .get(**key)
                .is_some_and(|entity| entity.world_aabb().intersects_ray(origin, Vec3::X).is_some())
        })
        .count();
    spatial_info!(SOURCE, "Ray query: {} candidates, {} exact hits, {} nodes tested", results.len(), hits, visited);

    results.clear();
    let eye = Vec3::new(0.0, args.extent * 0.5, args.extent * 1.5);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let projection = Mat4::perspective_rh(60f32.to_radians(), 16.0 / 9.0, 0.1, args.extent * 3.0);
    let frustum = Frustum::from_view_projection(&(projection * view));
    let visited = octree.collect_visible_entities_frustum(&frustum, &mut results);
    spatial_info!(SOURCE, "Frustum query: {} visible candidates, {} nodes tested", results.len(), visited);

    // Compact the tree after all the movement
    octree.rebuild();
    octree.debug_print_octree_statistics();
    if args.verbose {
        octree.debug_print_octree_hierarchy();
    }

    Ok(())
}
