//! Builds the envelope of a small branching network and logs a summary.
//!
//! Run with `RUST_LOG=debug cargo run --example envelope` to see the
//! per-stage logs.

use panelnet::math::Point3;
use panelnet::{Envelope, EnvelopeParams, Segment, WidthLists};
use tracing_subscriber::EnvFilter;

fn main() -> panelnet::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let p = |x: f64, y: f64| Point3::new(x, y, 0.0);
    let lines = vec![
        Segment::new(p(0.0, 0.0), p(4.0, 0.0)),
        Segment::new(p(4.0, 0.0), p(8.0, 1.0)),
        Segment::new(p(4.0, 0.0), p(4.0, 4.0)),
        Segment::new(p(4.0, 4.0), p(1.0, 6.0)),
        Segment::new(p(4.0, 4.0), p(7.0, 6.0)),
    ];

    let output = Envelope::new(lines, WidthLists::new(vec![0.6], vec![0.4]))
        .with_params(
            EnvelopeParams::default()
                .with_subdivisions(4, 6)
                .with_angle(0.8)
                .with_deviation(0.05),
        )
        .execute()?;

    tracing::info!(
        vertices = output.topology.vertex_count(),
        panels = output.panels.len(),
        groups = output.groups.len(),
        free_ends = output.free_end_lines().len(),
        fixed_points = output.fixed_points().len(),
        "envelope built"
    );
    for (group, lines) in output.group_lines().iter().enumerate() {
        tracing::info!(group, ?lines, "group");
    }
    Ok(())
}
