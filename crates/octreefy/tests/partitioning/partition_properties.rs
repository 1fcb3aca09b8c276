use crate::util::{mesh_around, random_centroids};
use octreefy::math::Point;
use octreefy::partitioning::{
    bucket_key, compute_center, extract_summaries, partition, SplitAxes, TreeNode,
    TriangleSummary,
};
use octreefy::{build_tree, PartitionConfig, PartitionMode};

fn sorted(mut ids: Vec<u32>) -> Vec<u32> {
    ids.sort_unstable();
    ids
}

#[test]
fn random_trees_are_well_formed_and_complete() {
    for seed in 0..20 {
        for (n, max) in [(1, 1), (17, 1), (100, 3), (250, 8), (64, 64)] {
            for mode in [PartitionMode::Octree, PartitionMode::Quadtree] {
                let summaries = extract_summaries(&mesh_around(&random_centroids(seed, n)));
                let config = PartitionConfig::default()
                    .with_mode(mode)
                    .with_max_triangles_per_leaf(max);
                let tree = build_tree(summaries, &config).unwrap();

                tree.assert_well_formed(max);
                assert_eq!(tree.num_triangles(), n);
                assert_eq!(tree.stats().forced_leaves, 0);
                assert_eq!(
                    sorted(tree.triangle_ids()),
                    (0..n as u32).collect::<Vec<_>>()
                );
            }
        }
    }
}

#[test]
fn branch_fan_out_is_bounded_by_the_mode() {
    let summaries = extract_summaries(&mesh_around(&random_centroids(7, 500)));

    for (mode, max_children) in [(PartitionMode::Octree, 8), (PartitionMode::Quadtree, 4)] {
        let config = PartitionConfig::default()
            .with_mode(mode)
            .with_max_triangles_per_leaf(5);
        let tree = build_tree(summaries.clone(), &config).unwrap();

        tree.visit(&mut |node| {
            if let TreeNode::Branch { children, .. } = node {
                assert!(!children.is_empty() && children.len() <= max_children);
            }
        });
    }
}

#[test]
fn partition_is_deterministic_and_exclusive() {
    let summaries = extract_summaries(&mesh_around(&random_centroids(3, 200)));
    let center = compute_center(&summaries);

    for axes in [SplitAxes::xyz(), SplitAxes::xy(), SplitAxes::xz()] {
        let first = partition(&summaries, &center, &axes);
        let second = partition(&summaries, &center, &axes);
        assert_eq!(first, second);

        let keys: Vec<_> = first.iter().map(|(key, _)| *key).collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));

        let mut seen = Vec::new();

        for (key, bucket) in &first {
            assert!(!bucket.is_empty());

            for summary in bucket {
                assert_eq!(bucket_key(&summary.centroid, &center, &axes), *key);

                for (bit, axis) in axes.as_slice().iter().enumerate() {
                    let above = summary.centroid[*axis] > center[*axis];
                    assert_eq!(above, *key & (1u8 << bit) != 0);
                }

                seen.push(summary.id);
            }
        }

        assert_eq!(sorted(seen), (0..200u32).collect::<Vec<_>>());
    }
}

#[test]
fn centroids_on_the_split_plane_go_low() {
    let summaries = [
        TriangleSummary::new(0, Point::new(-1.0, 0.0, 2.0)),
        TriangleSummary::new(1, Point::new(1.0, 0.0, -2.0)),
        TriangleSummary::new(2, Point::new(0.0, 0.0, 0.0)),
    ];
    let center = compute_center(&summaries);
    assert_eq!(center, Point::origin());

    let result = partition(&summaries, &center, &SplitAxes::xyz());

    let key_of = |id: u32| {
        result
            .iter()
            .find(|(_, bucket)| bucket.iter().any(|s| s.id == id))
            .map(|(key, _)| *key)
    };

    assert_eq!(key_of(0), Some(0b100));
    assert_eq!(key_of(1), Some(0b001));
    assert_eq!(key_of(2), Some(0b000));
}
