use crate::util::{mesh_around, random_centroids, ten_distinct_centroids};
use octreefy::math::{Point, Real};
use octreefy::output::{
    naming, CollisionSink, GeometrySink, HierarchySink, LeafRecord, OutputScene, SceneNode,
};
use octreefy::partitioning::TriangleSummary;
use octreefy::shape::{IndexedMesh, MeshSource};
use octreefy::{
    build_tree, octreefy, quadtreefy, ConfigurationError, InputShapeError, Octreefier,
    OctreefyError, OutputKind, PartitionConfig, PartitionMode, Verbosity,
};

struct EmptyMesh;

impl MeshSource for EmptyMesh {
    fn num_primitives(&self) -> usize {
        0
    }

    fn primitive_vertices(&self, _: usize) -> &[u32] {
        &[]
    }

    fn vertices(&self) -> &[Point<Real>] {
        &[]
    }
}

#[test]
fn node_names() {
    assert_eq!(naming::leaf_name(3), "leaf-3");
    assert_eq!(naming::branch_name(1), "branch-1");
    assert_eq!(naming::root_name(PartitionMode::Octree), "octree-root");
    assert_eq!(naming::root_name(PartitionMode::Quadtree), "quadtree-root");

    let mesh = mesh_around(&ten_distinct_centroids());
    let out = octreefy(&mesh, 3, &mut HierarchySink).unwrap();

    for child in &out.root.children {
        let expected = if child.payload.is_some() {
            "leaf-1"
        } else {
            "branch-1"
        };
        assert_eq!(child.name, expected);
    }

    for leaf in out.root.find_all("leaf-2") {
        assert_eq!(leaf.payload.as_ref().map(|p| p.depth), Some(2));
    }
}

#[test]
fn leaf_root_is_wrapped() {
    let mesh = mesh_around(&ten_distinct_centroids()[..3]);
    let out = quadtreefy(&mesh, 4, &mut GeometrySink::default()).unwrap();

    assert_eq!(out.root.name, "quadtree-root");
    assert_eq!(out.root.children.len(), 1);
    assert_eq!(out.root.children[0].name, "leaf-0");
    assert_eq!(out.stats.num_branches, 0);
    assert_eq!(out.root.listing(), "quadtree-root\n  leaf-0 (3 triangles)\n");
}

#[test]
fn listing_follows_the_tree() {
    let mesh = mesh_around(&random_centroids(3, 40));
    let out = octreefy(&mesh, 4, &mut HierarchySink).unwrap();
    let listing = out.root.listing();
    let lines: Vec<_> = listing.lines().collect();

    assert_eq!(lines.len(), out.root.num_nodes());
    assert_eq!(lines[0], "octree-root");
    assert!(lines[1..].iter().all(|l| l.starts_with("  ")));

    let listed: usize = lines
        .iter()
        .filter_map(|l| l.split_once(" (")?.1.strip_suffix(" triangles)"))
        .map(|n| n.parse::<usize>().unwrap())
        .sum();
    assert_eq!(listed, 40);
}

#[test]
fn markers_at_the_highest_verbosity() {
    let mesh = mesh_around(&random_centroids(8, 60));
    let config = PartitionConfig::octree()
        .with_output(OutputKind::GenericHierarchy)
        .with_verbosity(Verbosity::Markers)
        .with_marker_seed(1234);
    let octreefier = Octreefier::new(config).unwrap();
    let out = octreefier.run(&mesh, &mut HierarchySink).unwrap();

    assert!(out.root.marker.is_none());

    for child in &out.root.children {
        child.visit(&mut |node: &SceneNode<LeafRecord>| {
            let marker = node.marker.as_ref().unwrap();
            assert!(marker.bounds.is_valid());
            assert_eq!(marker.color[3], 1.0);

            if let Some(record) = &node.payload {
                for id in &record.triangle_ids {
                    for vid in mesh.primitive_vertices(*id as usize) {
                        assert!(marker.bounds.contains_local_point(&mesh.vertex(*vid)));
                    }
                }
            }

            for grandchild in &node.children {
                let inner = grandchild.marker.as_ref().unwrap().bounds;
                assert!(marker.bounds.contains_local_point(&inner.mins));
                assert!(marker.bounds.contains_local_point(&inner.maxs));
            }
        });
    }

    let again = octreefier.run(&mesh, &mut HierarchySink).unwrap();
    assert_eq!(out, again);
}

#[test]
fn no_markers_below_the_highest_verbosity() {
    let mesh = mesh_around(&random_centroids(8, 60));
    let config = PartitionConfig::octree().with_verbosity(Verbosity::Sizes);
    let out = Octreefier::new(config)
        .unwrap()
        .run(&mesh, &mut GeometrySink::default())
        .unwrap();

    out.root.visit(&mut |node| assert!(node.marker.is_none()));
}

#[test]
fn sink_must_match_the_requested_output() {
    let mesh = mesh_around(&ten_distinct_centroids());
    let octreefier = Octreefier::new(PartitionConfig::quadtree()).unwrap();

    assert_eq!(
        octreefier.run(&mesh, &mut HierarchySink).unwrap_err(),
        OctreefyError::Configuration(ConfigurationError::SinkMismatch {
            requested: OutputKind::CollisionVolume,
            provided: OutputKind::GenericHierarchy,
        })
    );
    assert!(octreefier.run(&mesh, &mut CollisionSink::new()).is_ok());
}

#[test]
fn invalid_runs_are_rejected() {
    let mesh = mesh_around(&ten_distinct_centroids());

    assert_eq!(
        octreefy(&mesh, 0, &mut HierarchySink).unwrap_err(),
        OctreefyError::Configuration(ConfigurationError::NonPositiveThreshold)
    );
    assert_eq!(
        octreefy(&EmptyMesh, 4, &mut HierarchySink).unwrap_err(),
        OctreefyError::InputShape(InputShapeError::NoTriangles)
    );
    assert_eq!(
        build_tree(Vec::<TriangleSummary>::new(), &PartitionConfig::default()).unwrap_err(),
        OctreefyError::InputShape(InputShapeError::NoTriangles)
    );
}

#[test]
fn default_sink_follows_the_output_kind() {
    let mesh = mesh_around(&random_centroids(21, 30));

    for kind in [
        OutputKind::Geometry,
        OutputKind::CollisionVolume,
        OutputKind::GenericHierarchy,
    ] {
        let config = PartitionConfig::octree().with_output(kind);
        let out = Octreefier::new(config).unwrap().run_default(&mesh).unwrap();

        assert_eq!(out.root.kind(), kind);
        assert_eq!(out.root.name(), "octree-root");
        assert!(out.root.listing().starts_with("octree-root\n"));
    }
}

#[test]
fn geometry_leaves_hold_their_triangles() {
    let mesh = mesh_around(&random_centroids(4, 50));
    let out = octreefy(&mesh, 5, &mut GeometrySink::positions_only()).unwrap();

    let mut primitives = Vec::new();
    for batch in out.root.payloads() {
        assert!(batch.indices.len() <= 5);
        assert!(batch.vertices.len() <= 3 * batch.indices.len());

        for (tri, prim) in batch.indices.iter().zip(&batch.primitives) {
            let source = mesh.triangle(*prim);
            assert_eq!(batch.vertices[tri[0] as usize], source.a);
            assert_eq!(batch.vertices[tri[1] as usize], source.b);
            assert_eq!(batch.vertices[tri[2] as usize], source.c);
        }

        primitives.extend_from_slice(&batch.primitives);
    }

    primitives.sort_unstable();
    assert_eq!(primitives, (0..50u32).collect::<Vec<_>>());
}

#[test]
fn collision_sink_counts_degenerate_triangles() {
    let good = mesh_around(&random_centroids(6, 20));
    let mut vertices = good.vertices().to_vec();
    let mut indices = good.indices().to_vec();

    // Two flat triangles.
    for offset in [0.0, 1.0] {
        let base = vertices.len() as u32;
        vertices.extend([
            Point::new(offset, 0.0, 0.0),
            Point::new(offset + 1.0, 0.0, 0.0),
            Point::new(offset + 2.0, 0.0, 0.0),
        ]);
        indices.push([base, base + 1, base + 2]);
    }

    let mesh = IndexedMesh::new(vertices, indices).unwrap();
    let mut sink = CollisionSink::new();
    let out = quadtreefy(&mesh, 4, &mut sink).unwrap();

    assert_eq!(sink.num_discarded(), 2);
    assert_eq!(out.root.num_triangles(), 20);

    let discarded: usize = out.root.payloads().iter().map(|s| s.num_discarded).sum();
    assert_eq!(discarded, 2);

    let scene = OutputScene::CollisionVolume(out.root);
    assert_eq!(scene.kind(), OutputKind::CollisionVolume);
    assert_eq!(scene.name(), "quadtree-root");
}
