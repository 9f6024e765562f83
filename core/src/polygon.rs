use rand::{Rng, SeedableRng, rngs::StdRng};

/// How far outside the viewport a shape's centre may sit before its
/// velocity reflects. The check runs after integration, so a fast shape can
/// overshoot the margin and spends a frame out of bounds before turning
/// around.
const BOUNCE_MARGIN: f32 = 100.0;

const MIN_SCALE: f32 = 20.0;
const MAX_SCALE: f32 = 100.0;

/// A decoration polygon drifting slowly around the viewport.
///
/// The shape itself (vertex offsets, starting position, scale) is derived
/// from a per-instance seed so it is reproducible across runs; its motion is
/// driven by the caller's rng and is not.
#[derive(Debug, Clone)]
pub struct PolygonGroup {
    /// Vertex offsets on a jittered unit circle, scaled up at render time.
    pub vertices: Vec<(f32, f32)>,
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub vel_x: f32,
    pub vel_y: f32,
}

impl PolygonGroup {
    pub fn generate<R: Rng>(seed: u64, width: f32, height: f32, rng: &mut R) -> Self {
        let mut shape_rng = StdRng::seed_from_u64(seed);
        let x = shape_rng.random_range(0.0..width);
        let y = shape_rng.random_range(0.0..height);
        let scale_x = shape_rng.random_range(30.0..80.0);
        let scale_y = shape_rng.random_range(30.0..80.0);
        let num_vertices: usize = shape_rng.random_range(5..=10);
        let vertices = (0..num_vertices)
            .map(|i| {
                let angle = i as f32 * (std::f32::consts::TAU / num_vertices as f32)
                    + (shape_rng.random::<f32>() - 0.5) * 0.8;
                let radius = shape_rng.random_range(0.4..0.8);
                (angle.cos() * radius, angle.sin() * radius)
            })
            .collect();
        Self {
            vertices,
            x,
            y,
            scale_x,
            scale_y,
            vel_x: (rng.random::<f32>() - 0.5) * 4.0,
            vel_y: (rng.random::<f32>() - 0.5) * 4.0,
        }
    }

    /// Integrate one frame of drift: move by velocity, reflect off the
    /// extended viewport bounds, and jitter each scale by up to 2% either
    /// way within its clamp range.
    pub fn advance<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.x += self.vel_x;
        self.y += self.vel_y;
        if self.x < -BOUNCE_MARGIN || self.x > width + BOUNCE_MARGIN {
            self.vel_x = -self.vel_x;
        }
        if self.y < -BOUNCE_MARGIN || self.y > height + BOUNCE_MARGIN {
            self.vel_y = -self.vel_y;
        }
        self.scale_x = jitter_scale(self.scale_x, rng);
        self.scale_y = jitter_scale(self.scale_y, rng);
    }

    /// World-space edges of the closed outline, last vertex wrapping back to
    /// the first. Fewer than 2 vertices produce no edges.
    pub fn edges(&self) -> impl Iterator<Item = ((f32, f32), (f32, f32))> + '_ {
        let num_edges = if self.vertices.len() < 2 {
            0
        } else {
            self.vertices.len()
        };
        (0..num_edges).map(move |i| {
            let to_world =
                |(dx, dy): (f32, f32)| (self.x + dx * self.scale_x, self.y + dy * self.scale_y);
            (
                to_world(self.vertices[i]),
                to_world(self.vertices[(i + 1) % self.vertices.len()]),
            )
        })
    }
}

fn jitter_scale<R: Rng>(scale: f32, rng: &mut R) -> f32 {
    (scale * (1.0 + (rng.random::<f32>() - 0.5) * 0.04)).clamp(MIN_SCALE, MAX_SCALE)
}

#[cfg(test)]
mod test {
    use super::*;

    const WIDTH: f32 = 640.0;
    const HEIGHT: f32 = 480.0;

    fn motion_rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    fn square_at(x: f32, y: f32, vel_x: f32, vel_y: f32) -> PolygonGroup {
        PolygonGroup {
            vertices: vec![(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)],
            x,
            y,
            scale_x: 50.0,
            scale_y: 50.0,
            vel_x,
            vel_y,
        }
    }

    #[test]
    fn same_seed_reproduces_the_shape() {
        let a = PolygonGroup::generate(7, WIDTH, HEIGHT, &mut motion_rng());
        let b = PolygonGroup::generate(7, WIDTH, HEIGHT, &mut StdRng::seed_from_u64(1234));
        assert_eq!(a.vertices, b.vertices);
        assert_eq!((a.x, a.y), (b.x, b.y));
        assert_eq!((a.scale_x, a.scale_y), (b.scale_x, b.scale_y));
    }

    #[test]
    fn generated_shape_respects_its_ranges() {
        for seed in 0..50 {
            let group = PolygonGroup::generate(seed, WIDTH, HEIGHT, &mut motion_rng());
            assert!((5..=10).contains(&group.vertices.len()));
            assert!((0.0..WIDTH).contains(&group.x));
            assert!((0.0..HEIGHT).contains(&group.y));
            assert!((30.0..80.0).contains(&group.scale_x));
            assert!((30.0..80.0).contains(&group.scale_y));
            for &(dx, dy) in &group.vertices {
                let radius = (dx * dx + dy * dy).sqrt();
                assert!(radius > 0.39 && radius < 0.81);
            }
        }
    }

    #[test]
    fn scales_never_leave_the_clamp_range() {
        let mut rng = motion_rng();
        let mut group = PolygonGroup::generate(3, WIDTH, HEIGHT, &mut rng);
        for _ in 0..10_000 {
            group.advance(WIDTH, HEIGHT, &mut rng);
            assert!((MIN_SCALE..=MAX_SCALE).contains(&group.scale_x));
            assert!((MIN_SCALE..=MAX_SCALE).contains(&group.scale_y));
        }
    }

    #[test]
    fn velocity_reflects_on_overshoot_past_the_margin() {
        let mut group = square_at(WIDTH + 99.5, 240.0, 1.0, 0.0);
        group.advance(WIDTH, HEIGHT, &mut motion_rng());
        // 740.5 is past the extended bound, and only then does the
        // x velocity flip.
        assert_eq!(group.x, WIDTH + 100.5);
        assert_eq!(group.vel_x, -1.0);
        assert_eq!(group.vel_y, 0.0);
    }

    #[test]
    fn velocity_is_unchanged_inside_the_margin() {
        let mut group = square_at(WIDTH + 98.0, -99.5, 1.0, -1.0);
        group.advance(WIDTH, HEIGHT, &mut motion_rng());
        assert_eq!(group.vel_x, 1.0);
        // y moved to -100.5, which is past the lower extended bound.
        assert_eq!(group.vel_y, 1.0);
    }

    #[test]
    fn closed_outline_wraps_back_to_the_first_vertex() {
        let group = square_at(100.0, 100.0, 0.0, 0.0);
        let edges: Vec<_> = group.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].1, edges[0].0);
    }

    #[test]
    fn degenerate_outline_has_no_edges() {
        let mut group = square_at(0.0, 0.0, 0.0, 0.0);
        group.vertices.truncate(1);
        assert_eq!(group.edges().count(), 0);
    }
}
