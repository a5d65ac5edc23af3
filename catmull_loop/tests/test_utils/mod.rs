use catmull_loop::angles::RandomSource;

/// Deterministic [RandomSource] replaying scripted draws and coin flips in a cycle.
///
/// `reseed` and `restart` leave the script position untouched so every draw of a generation
/// pass consumes the next scripted value.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<u32>,
    flips: Vec<bool>,
    draw_pos: usize,
    flip_pos: usize,
    pub draw_count: usize,
    pub restart_count: usize,
    pub reseed_count: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<u32>, flips: Vec<bool>) -> Self {
        assert!(!draws.is_empty() && !flips.is_empty());
        Self {
            draws,
            flips,
            draw_pos: 0,
            flip_pos: 0,
            draw_count: 0,
            restart_count: 0,
            reseed_count: 0,
        }
    }

    /// Script producing the reference curve used across tests.
    pub fn reference() -> Self {
        Self::new(
            REFERENCE_DRAWS.to_vec(),
            vec![true, true, false], // inner, inner, outer
        )
    }
}

impl RandomSource for ScriptedSource {
    fn seed(&self) -> u64 {
        0
    }

    fn reseed(&mut self, _seed: u64) {
        self.reseed_count += 1;
    }

    fn restart(&mut self) {
        self.restart_count += 1;
    }

    fn angle_between(&mut self, _min: u32, _max: u32) -> u32 {
        let angle = self.draws[self.draw_pos % self.draws.len()];
        self.draw_pos += 1;
        self.draw_count += 1;
        angle
    }

    fn coin_flip(&mut self) -> bool {
        let flip = self.flips[self.flip_pos % self.flips.len()];
        self.flip_pos += 1;
        flip
    }
}

/// One value inside each of the eight default drawing windows.
pub const REFERENCE_DRAWS: [u32; 8] = [20, 60, 110, 150, 200, 240, 290, 330];

/// Angles generated from [REFERENCE_DRAWS] with the default base window.
pub const REFERENCE_ANGLES: [u32; 12] = [0, 20, 60, 90, 110, 150, 180, 200, 240, 270, 290, 330];

/// Control points for [REFERENCE_ANGLES] with the reference coin flips, center (400, 400), inner
/// radius 200 and outer radius 250.
pub const REFERENCE_POINTS: [(f64, f64); 12] = [
    (600.0, 400.0),
    (587.9385241571817, 468.40402866513375),
    (525.0, 616.5063509461097),
    (400.0, 600.0),
    (331.59597133486625, 587.9385241571817),
    (183.49364905389032, 525.0),
    (200.0, 400.0),
    (212.0614758428183, 331.59597133486625),
    (274.9999999999999, 183.4936490538904),
    (399.99999999999994, 200.0),
    (468.4040286651338, 212.06147584281834),
    (616.5063509461096, 274.9999999999999),
];

/// First five tessellated vertices of the reference curve (segment from point 1 to point 2).
pub const REFERENCE_FIRST_VERTICES: [(f64, f64); 5] = [
    (587.9385241571817, 468.40402866513375),
    (587.5615339339287, 469.50263852940384),
    (587.1805408953145, 470.6329159988192),
    (586.7955114880564, 471.79412815247946),
    (586.4064121588721, 472.985542069484),
];
