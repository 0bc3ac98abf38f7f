//! Integration tests for the logging emitted by the spatial index
//!
//! Run with: cargo test --test logging_integration_tests

use galaxy_3d_spatial::galaxy3d::{Engine, Error};
use galaxy_3d_spatial::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use galaxy_3d_spatial::galaxy3d::spatial::{AABB, Octree, OctreeConfig};
use galaxy_3d_spatial::glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

const OCTREE_SOURCE: &str = "galaxy3d::Octree";

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_test_logger() -> Arc<Mutex<Vec<LogEntry>>> {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_log_level(LogSeverity::Trace);
    Engine::set_logger(test_logger);
    entries
}

fn teardown() {
    Engine::reset_logger();
    Engine::set_log_level(LogSeverity::Trace);
}

fn world() -> AABB {
    AABB::new(Vec3::splat(-10.0), Vec3::splat(10.0))
}

/// Fill a leaf one past its capacity
fn overflow_root(octree: &mut Octree<u32>) {
    for key in 0..=octree.config().max_entities_per_node as u32 {
        let offset = key as f32;
        octree.insert_aabb(key, AABB::from_point(Vec3::new(-9.0 + offset, 5.0, 5.0)));
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_subdivide_logs_debug() {
    let entries = install_test_logger();

    let mut octree = Octree::new(world()).unwrap();
    overflow_root(&mut octree);

    {
        let captured = entries.lock().unwrap();
        let subdivisions: Vec<&LogEntry> = captured
            .iter()
            .filter(|entry| entry.source == OCTREE_SOURCE && entry.message.starts_with("Subdivided"))
            .collect();

        assert!(!subdivisions.is_empty());
        assert!(subdivisions.iter().all(|entry| entry.severity == LogSeverity::Debug));
        assert!(subdivisions[0].message.contains("node 0"));
        assert_eq!(subdivisions[0].file, None);
    }

    teardown();
}

#[test]
#[serial]
fn test_integration_invalid_bounds_logs_error_with_location() {
    let entries = install_test_logger();

    let inverted = AABB::new(Vec3::ONE, -Vec3::ONE);
    let result = Octree::<u32>::new(inverted);
    assert!(matches!(result, Err(Error::InvalidBounds(_))));

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);

        let entry = &captured[0];
        assert_eq!(entry.severity, LogSeverity::Error);
        assert_eq!(entry.source, OCTREE_SOURCE);
        assert!(entry.message.contains("world bounds"));
        assert!(entry.file.is_some());
        assert!(entry.line.is_some());
    }

    teardown();
}

#[test]
#[serial]
fn test_integration_invalid_config_logs_error() {
    let entries = install_test_logger();

    let config = OctreeConfig::default().with_max_entities_per_node(0);
    let result = Octree::<u32>::with_config(world(), config);
    assert!(matches!(result, Err(Error::InvalidConfig(_))));

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Error);
        assert!(captured[0].message.contains("max_entities_per_node"));
    }

    teardown();
}

#[test]
#[serial]
fn test_integration_unknown_remove_logs_trace_only() {
    let entries = install_test_logger();

    let mut octree = Octree::<u32>::new(world()).unwrap();
    assert!(!octree.remove(42));

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Trace);
    }

    teardown();
}

#[test]
#[serial]
fn test_integration_log_level_filters_structural_logs() {
    let entries = install_test_logger();
    Engine::set_log_level(LogSeverity::Info);

    let mut octree = Octree::new(world()).unwrap();
    overflow_root(&mut octree);
    octree.remove(1000);
    octree.rebuild();
    octree.clear();
    assert!(entries.lock().unwrap().is_empty());

    octree.debug_print_octree_statistics();
    {
        let captured = entries.lock().unwrap();
        assert!(!captured.is_empty());
        assert!(captured.iter().all(|entry| entry.severity == LogSeverity::Info));
        assert!(captured[0].message.starts_with("Octree statistics"));
    }

    teardown();
}

#[test]
#[serial]
fn test_integration_hierarchy_dump_one_line_per_node() {
    let entries = install_test_logger();

    let mut octree = Octree::new(world()).unwrap();
    overflow_root(&mut octree);

    entries.lock().unwrap().clear();
    octree.debug_print_octree_hierarchy();

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), octree.node_count());
        assert!(captured.iter().all(|entry| entry.severity == LogSeverity::Debug));
        assert!(captured[0].message.starts_with("Node 0 [internal]"));
    }

    teardown();
}

#[test]
#[serial]
fn test_integration_rebuild_and_clear_log_debug() {
    let entries = install_test_logger();

    let mut octree = Octree::new(world()).unwrap();
    overflow_root(&mut octree);

    entries.lock().unwrap().clear();
    octree.rebuild();
    octree.clear();

    {
        let captured = entries.lock().unwrap();
        assert!(captured.iter().any(|entry| entry.message.starts_with("Rebuilt: 9 entities")));
        assert_eq!(captured.last().map(|entry| entry.message.as_str()), Some("Cleared"));
    }

    teardown();
}
