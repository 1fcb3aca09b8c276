use crate::util::{mesh_around, random_centroids, ten_distinct_centroids};
use octreefy::math::Point;
use octreefy::output::HierarchySink;
use octreefy::partitioning::{extract_summaries, TreeNode, TriangleSummary};
use octreefy::{build_tree, octreefy, quadtreefy, PartitionConfig, PartitionMode};

#[test]
fn ten_triangles_three_per_leaf() {
    let summaries = extract_summaries(&mesh_around(&ten_distinct_centroids()));
    let config = PartitionConfig::octree().with_max_triangles_per_leaf(3);
    let tree = build_tree(summaries, &config).unwrap();

    assert!(!tree.is_leaf());
    tree.assert_well_formed(3);

    let leaves = tree.leaves();
    assert!(leaves.len() >= 4);

    let mut ids = Vec::new();
    for leaf in leaves {
        if let TreeNode::Leaf { triangles, .. } = leaf {
            assert!(!triangles.is_empty() && triangles.len() <= 3);
            ids.extend(triangles.iter().map(|t| t.id));
        }
    }

    ids.sort_unstable();
    assert_eq!(ids, (0..10u32).collect::<Vec<_>>());
}

#[test]
fn ten_triangles_ten_per_leaf_is_a_single_leaf() {
    let summaries = extract_summaries(&mesh_around(&ten_distinct_centroids()));
    let config = PartitionConfig::octree().with_max_triangles_per_leaf(10);
    let tree = build_tree(summaries, &config).unwrap();

    assert!(tree.is_leaf());
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.num_triangles(), 10);
}

#[test]
fn coincident_centroids_give_one_oversized_leaf() {
    let summaries: Vec<_> = (0..5)
        .map(|i| TriangleSummary::new(i, Point::origin()))
        .collect();

    for max in 1..5 {
        let config = PartitionConfig::octree().with_max_triangles_per_leaf(max);
        let tree = build_tree(summaries.clone(), &config).unwrap();

        match &tree {
            TreeNode::Leaf {
                triangles,
                degenerate,
                ..
            } => {
                assert_eq!(triangles.len(), 5);
                assert!(*degenerate);
            }
            TreeNode::Branch { .. } => panic!("the guard should have forced a leaf"),
        }

        tree.assert_well_formed(max);
    }
}

#[test]
fn coincident_subset_is_forced_below_the_root() {
    let mut centroids = vec![Point::new(5.0, 5.0, 5.0); 4];
    centroids.extend(random_centroids(11, 6));
    let tree = build_tree(
        extract_summaries(&mesh_around(&centroids)),
        &PartitionConfig::octree().with_max_triangles_per_leaf(2),
    )
    .unwrap();

    tree.assert_well_formed(2);
    assert_eq!(tree.stats().forced_leaves, 1);
    assert_eq!(tree.num_triangles(), 10);
}

#[test]
fn quadtree_and_octree_on_the_same_input() {
    let mesh = mesh_around(&random_centroids(5, 300));
    let oct = octreefy(&mesh, 6, &mut HierarchySink).unwrap();
    let quad = quadtreefy(&mesh, 6, &mut HierarchySink).unwrap();

    assert_eq!(oct.root.name, "octree-root");
    assert_eq!(quad.root.name, "quadtree-root");
    assert!(oct.root.children.len() <= 8);
    assert!(quad.root.children.len() <= 4);

    for out in [&oct, &quad] {
        assert_eq!(out.root.num_triangles(), 300);
        assert!(out
            .root
            .payloads()
            .iter()
            .all(|leaf| leaf.triangle_ids.len() <= 6));
    }

    for (mode, max_children) in [(PartitionMode::Octree, 8), (PartitionMode::Quadtree, 4)] {
        let config = PartitionConfig::default()
            .with_mode(mode)
            .with_max_triangles_per_leaf(6);
        let tree = build_tree(extract_summaries(&mesh), &config).unwrap();
        tree.visit(&mut |node| assert!(node.children().len() <= max_children));
    }
}
