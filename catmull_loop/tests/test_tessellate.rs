mod test_utils;

use catmull_loop::{
    Color, PlacementPolicy, Quadrant, SeededSource, Vertex,
    angles::generate_angles,
    assert_fuzzy_eq,
    config::{MAX_POINTS, VERTICES_PER_CURVE},
    core::math::{Vector2, vec2},
    placement::place_points,
    spline::{basis, tessellate, tessellate_into},
};
use test_utils::REFERENCE_POINTS;

const CENTER: Vector2 = Vector2 { x: 400.0, y: 400.0 };

fn reference_points() -> Vec<Vector2> {
    REFERENCE_POINTS.iter().map(|&(x, y)| vec2(x, y)).collect()
}

fn random_points(seed: u64) -> Vec<Vector2> {
    let mut source = SeededSource::new(seed);
    let angles = generate_angles(MAX_POINTS, 10, 35, &mut source);
    place_points(&angles, 200.0, 250.0, CENTER, PlacementPolicy::Random, &mut source)
}

#[test]
fn length_is_points_times_samples() {
    for seed in 0..10 {
        let vertices = tessellate(&random_points(seed), VERTICES_PER_CURVE, CENTER);
        assert_eq!(vertices.len(), MAX_POINTS * VERTICES_PER_CURVE);
        assert_eq!(vertices.len(), 1200);
    }

    let degenerate = vec![CENTER; MAX_POINTS];
    assert_eq!(tessellate(&degenerate, VERTICES_PER_CURVE, CENTER).len(), 1200);
}

#[test]
fn empty_points_give_empty_curve() {
    assert!(tessellate::<f64>(&[], VERTICES_PER_CURVE, CENTER).is_empty());
}

#[test]
fn segments_start_on_control_points() {
    let points = reference_points();
    let vertices = tessellate(&points, VERTICES_PER_CURVE, CENTER);
    // segment j runs from points[j + 1] to points[j + 2]
    for j in 0..MAX_POINTS {
        let start = vertices[j * VERTICES_PER_CURVE].pos;
        assert_fuzzy_eq!(start, points[(j + 1) % MAX_POINTS], 1e-9);
    }
}

#[test]
fn curve_is_closed() {
    for points in [reference_points(), random_points(3), random_points(8)] {
        let vertices = tessellate(&points, VERTICES_PER_CURVE, CENTER);
        let n = points.len();

        // last segment evaluated at t = 1 lands on the first vertex
        let last_window = [points[n - 1], points[0], points[1], points[2]];
        assert_fuzzy_eq!(basis::blend(1.0, &last_window), vertices[0].pos, 1e-9);

        let max_step = vertices
            .windows(2)
            .map(|w| w[0].pos.distance_to(w[1].pos))
            .fold(0.0, f64::max);
        let wrap_step = vertices[vertices.len() - 1].pos.distance_to(vertices[0].pos);
        assert!(wrap_step > 0.0);
        assert!(
            wrap_step < 2.0 * max_step,
            "wrap step {wrap_step} max step {max_step}"
        );
    }
}

#[test]
fn quadrant_colors() {
    let color_at = |dx: f64, dy: f64| Vertex::new(CENTER + vec2(dx, dy), CENTER).color;
    assert_eq!(color_at(10.0, 10.0), Color::YELLOW);
    assert_eq!(color_at(-10.0, 10.0), Color::CYAN);
    assert_eq!(color_at(-10.0, -10.0), Color::MAGENTA);
    assert_eq!(color_at(10.0, -10.0), Color::BLUE);
}

#[test]
fn center_lines_fall_to_last_quadrant() {
    assert_eq!(Quadrant::of(CENTER, CENTER), Quadrant::TopRight);
    assert_eq!(Quadrant::of(CENTER + vec2(0.0, 10.0), CENTER), Quadrant::TopRight);
    assert_eq!(Quadrant::of(CENTER + vec2(-10.0, 0.0), CENTER), Quadrant::TopRight);
    assert_eq!(Quadrant::TopRight.color(), Color::BLUE);
}

#[test]
fn vertex_colors_match_positions() {
    let vertices = tessellate(&random_points(21), VERTICES_PER_CURVE, CENTER);
    for v in &vertices {
        assert_eq!(v.color, Quadrant::of(v.pos, CENTER).color());
    }
}

#[test]
fn tessellate_into_rebuilds_buffer() {
    let mut vertices = Vec::with_capacity(8000);
    tessellate_into(&mut vertices, &random_points(1), VERTICES_PER_CURVE, CENTER);
    let first = vertices.clone();
    tessellate_into(&mut vertices, &reference_points(), VERTICES_PER_CURVE, CENTER);
    assert_eq!(vertices.len(), first.len());
    assert_fuzzy_eq!(vertices[0].pos, vec2(REFERENCE_POINTS[1].0, REFERENCE_POINTS[1].1), 1e-9);

    tessellate_into(&mut vertices, &reference_points(), 10, CENTER);
    assert_eq!(vertices.len(), MAX_POINTS * 10);
}

#[test]
fn works_with_f32() {
    let points: Vec<Vector2<f32>> = REFERENCE_POINTS
        .iter()
        .map(|&(x, y)| vec2(x as f32, y as f32))
        .collect();
    let center = vec2(400.0f32, 400.0);
    let vertices = tessellate(&points, VERTICES_PER_CURVE, center);
    assert_eq!(vertices.len(), 1200);
    assert!(vertices[0].pos.fuzzy_eq_eps(points[1], 1e-3));
}
