// File: crates/scatter-core/src/grid.rs
// Summary: Fixed-cell grid line layout in device pixels.

/// Offsets `0, cell, 2*cell, ...` up to and including `extent`.
/// A non-positive `cell` yields only the origin line.
pub fn grid_lines(extent: f32, cell: f32) -> Vec<f32> {
    if !(cell > 0.0) {
        return vec![0.0];
    }
    let steps = (extent / cell).floor().max(0.0) as usize;
    (0..=steps).map(|i| i as f32 * cell).collect()
}
