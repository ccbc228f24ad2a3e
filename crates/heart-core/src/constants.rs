// Rendering constants shared by the CPU evaluator, the GPU uniforms and both frontends.
//
// They fix the exact visual shape of the heart; changing one changes the picture.

// Heart curve sampling
pub const POINT_COUNT: usize = 8; // samples in the sliding window
pub const SEGMENT_COUNT: usize = POINT_COUNT - 1; // quadratic pieces built from the window
pub const SEGMENT_LEN: f32 = 0.25; // curve-parameter spacing between samples
pub const SCROLL_SPEED: f32 = -0.5; // turns per second, negative scrolls backwards
pub const HEART_EXTENT: f32 = 17.0; // max |coordinate| of the parametric heart

// Heart instances, as curve-parameter offsets
pub const PHASE_OFFSETS: [f32; 2] = [0.0, 3.4];
pub const MAX_HEART_INSTANCES: usize = 4; // capacity of the GPU uniform block

// Glow
pub const GLOW_RADIUS: f32 = 0.008;
pub const GLOW_INTENSITY: f32 = 1.3;
pub const MIN_GLOW_DISTANCE: f32 = 1e-6; // distance floor keeping glow finite

// Color
pub const HUE_RATE: f32 = 0.1; // hue turns per second
pub const GAMMA: f32 = 0.4545; // ~1/2.2

// Animation period search, see `HeartConfig::animation_period`
pub const MAX_PERIOD_TURNS: u32 = 64;
pub const PERIOD_TOLERANCE: f64 = 1e-4; // f32 constants are not exact in f64

// Viewport mapping
pub const VIEWPORT_SCALE: f32 = 0.000015; // curve units to screen units, per pixel of height
pub const VERTICAL_OFFSET: f32 = 0.02; // nudges the heart up in normalized space

// Distance evaluation
pub const FAR_DISTANCE: f32 = 10000.0; // initial value of the min-distance reduction
#[allow(clippy::excessive_precision)]
pub const SQRT_3: f32 = 1.732050808; // kept as written, root selection depends on it
pub const BEZIER_DEGENERATE_EPSILON: f32 = 1e-10; // below this |A-2B+C|^2 the segment is a line
pub const ROOT_REFINE_STEPS: usize = 2; // Newton polish of each cubic root
