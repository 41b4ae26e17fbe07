//! Layout defaults, sweep limits and output settings

// Layout defaults for a single tiling pass
/// Default pitch of a rectangular strip in pixels
pub const DEFAULT_STRIP_WIDTH: u32 = 10;
/// Default number of slices in the radial fan
pub const DEFAULT_NUM_STRIPS: u32 = 50;
/// Default distance between consecutive anchors along a strip
pub const DEFAULT_STEP_SIZE: f64 = 1.0;
/// Default lower bound of the filled strip fraction, in percent
pub const DEFAULT_PCT_MIN: u32 = 10;
/// Default upper bound of the filled strip fraction, in percent
pub const DEFAULT_PCT_MAX: u32 = 100;
/// Default first fan angle in degrees
pub const DEFAULT_ANGLE_START: i32 = -90;
/// Default last fan angle in degrees
pub const DEFAULT_ANGLE_END: i32 = 90;

// Limits shared by parameter validation
/// Smallest admissible fan angle in degrees
pub const MIN_FAN_ANGLE: i32 = -90;
/// Largest admissible fan angle in degrees
pub const MAX_FAN_ANGLE: i32 = 90;
/// Upper bound of any width percentage
pub const MAX_PERCENT: u32 = 100;
/// Most fan slices a pass may draw (a twentieth of a degree each over the full range)
pub const MAX_NUM_STRIPS: u32 = 3600;

// Triangle-wave sweep limits, one set per animated parameter
/// Strip pitch sweep bounds (rectangular scheme)
pub const STRIP_WIDTH_SWEEP: (u32, u32) = (5, 150);
/// Strip pitch change per frame
pub const STRIP_WIDTH_SWEEP_STEP: u32 = 1;
/// Fan strip count sweep bounds
pub const NUM_STRIPS_SWEEP: (u32, u32) = (5, 50);
/// Fan strip count change per frame
pub const NUM_STRIPS_SWEEP_STEP: u32 = 1;
/// Upper bound of the maximum width percentage sweep
pub const PCT_MAX_SWEEP_HIGH: u32 = 90;
/// Maximum width percentage change per frame
pub const PCT_MAX_SWEEP_STEP: u32 = 5;
/// Fan end angle sweep bounds in degrees
pub const ANGLE_END_SWEEP: (i32, i32) = (-80, 90);
/// Fan end angle change per frame in degrees
pub const ANGLE_END_SWEEP_STEP: i32 = 5;

// Frame rendering defaults
/// Canvas colour painted before each pass
pub const BACKGROUND_COLOR: [u8; 3] = [255, 255, 220];
/// Stroke colour for segments without a colour override
pub const STROKE_COLOR: [u8; 3] = [20, 120, 210];
/// Stroke width of every segment in pixels
pub const STROKE_WIDTH: f32 = 2.0;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_fukuda";
/// Input extensions picked up when the target is a directory
pub const INPUT_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
/// Default number of animation frames (0 renders a single still)
pub const DEFAULT_FRAMES: usize = 0;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Hold multiplier applied to the last frame of an animation
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
