use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Session storage keys. Each concern owns exactly one key.
pub const VISITOR_KEY: &str = "visitorType";
pub const MODE_KEY: &str = "pillChoice";
pub const INTRO_SEEN_KEY: &str = "matrixIntroSeen";

pub const SCRAMBLE_STEP_MS: u32 = 30;
pub const SCRAMBLE_MOUNT_DELAY_MS: u32 = 100;
/// Steps spent per character before it locks in.
pub const SCRAMBLE_STEPS_PER_CHAR: usize = 3;

pub const SCRAMBLE_GLYPHS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/\\アァカサタナハマヤャラワABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const TYPING_SPEED_MS: u32 = 50;
pub const INTRO_TYPING_SPEED_MS: u32 = 80;

pub const INTRO_STAGES: &[(u32, &str)] = &[
    (500, "Wake up, Neo..."),
    (2500, "The Matrix has you..."),
    (5000, "Follow the white rabbit."),
    (7500, "Knock, knock, Neo."),
];
pub const INTRO_SKIP_AFTER_MS: u32 = 1000;
pub const INTRO_COMPLETE_MS: u32 = 10_000;

pub const RAIN_GLYPHS: &str = "アァカサタナハマヤャラワガザダバパイィキシチニヒミリヰギジヂビピウゥクスツヌフムユュルグズブヅプエェケセテネヘメレヱゲゼデベペオォコソトノホモヨョロヲゴゾドボポヴッン0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ@#$%^&*()";
pub const RAIN_CELL_PX: f64 = 14.0;
/// ~30 frames per second regardless of display refresh rate.
pub const RAIN_FRAME_MS: f64 = 33.0;
pub const RAIN_RESIZE_DEBOUNCE_MS: u32 = 100;
pub const RAIN_HIGHLIGHT_CHANCE: f64 = 0.02;
pub const RAIN_RESET_CHANCE: f64 = 0.025;
pub const RAIN_FADE_ALPHA: f64 = 0.05;
/// Columns start up to this many cells above the viewport.
pub const RAIN_MAX_START_OFFSET: f64 = 100.0;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
