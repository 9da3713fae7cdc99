// Screen
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Player physics (per tick)
pub const GRAVITY: f64 = 0.25;
pub const FLAP_VELOCITY: f64 = -7.0;
pub const PLAYER_SIZE: f64 = 30.0;

// Pipes
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_WIDTH: f64 = 50.0;
/// Distance kept between a gap center and the top/bottom screen edge.
pub const GAP_MARGIN: f64 = 200.0;
pub const SPAWN_INTERVAL_MS: u64 = 1500;

// Loop timing
pub const TICK_RATE: u32 = 60;
