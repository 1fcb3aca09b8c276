use octreefy::math::{Point, Real, Vector};
use octreefy::shape::IndexedMesh;
use oorandom::Rand32;

/// A mesh with one small triangle around each of the given centroids.
pub fn mesh_around(centroids: &[Point<Real>]) -> IndexedMesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for c in centroids {
        let base = vertices.len() as u32;
        // Centroid of these three offsets is zero.
        vertices.push(*c + Vector::new(-0.01, -0.01, 0.0));
        vertices.push(*c + Vector::new(0.02, -0.01, 0.0));
        vertices.push(*c + Vector::new(-0.01, 0.02, 0.0));
        indices.push([base, base + 1, base + 2]);
    }

    IndexedMesh::new(vertices, indices).unwrap()
}

/// `n` pseudo-random centroids in `[-10, 10]^3`.
pub fn random_centroids(seed: u64, n: usize) -> Vec<Point<Real>> {
    let mut rng = Rand32::new(seed);
    let mut coord = move || (rng.rand_float() * 20.0 - 10.0) as Real;
    (0..n)
        .map(|_| Point::new(coord(), coord(), coord()))
        .collect()
}

/// Ten centroids with pairwise distinct coordinates.
pub fn ten_distinct_centroids() -> Vec<Point<Real>> {
    (0..10)
        .map(|i| {
            let i = i as Real;
            Point::new(i, (i * 7.0) % 10.0, (i * 3.0) % 10.0)
        })
        .collect()
}
