//! Command-line interface for batch rendering of Fukuda-style tilings

use crate::animation::{AnimationState, SweepToggles};
use crate::io::configuration::{
    DEFAULT_ANGLE_END, DEFAULT_ANGLE_START, DEFAULT_FRAMES, DEFAULT_NUM_STRIPS, DEFAULT_PCT_MAX,
    DEFAULT_PCT_MIN, DEFAULT_STEP_SIZE, DEFAULT_STRIP_WIDTH, GIF_FRAME_DELAY_MS, INPUT_EXTENSIONS,
    OUTPUT_SUFFIX,
};
use crate::io::error::{Result, path_error};
use crate::io::image::{export_png, load_rgba, raster_view};
use crate::io::progress::ProgressManager;
use crate::io::render::FrameRenderer;
use crate::io::visualization::FrameCapture;
use crate::tiling::params::{LayoutParams, Scheme};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "fukudatile")]
#[command(
    author,
    version,
    about = "Render images as width-modulated ink strips (Fukuda-style tiling)"
)]
/// Command-line arguments for the tiling renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image (PNG or JPEG) or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Strip layout
    #[arg(short = 's', long, value_enum, default_value_t = Scheme::Fan)]
    pub scheme: Scheme,

    /// Pitch of rectangular strips in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_STRIP_WIDTH)]
    pub strip_width: u32,

    /// Number of fan slices
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_STRIPS)]
    pub strips: u32,

    /// Distance between anchors along a strip
    #[arg(long, default_value_t = DEFAULT_STEP_SIZE)]
    pub step: f64,

    /// Smallest filled fraction of a strip, in percent
    #[arg(long, default_value_t = DEFAULT_PCT_MIN)]
    pub pct_min: u32,

    /// Largest filled fraction of a strip, in percent
    #[arg(long, default_value_t = DEFAULT_PCT_MAX)]
    pub pct_max: u32,

    /// First fan angle in degrees
    #[arg(long, default_value_t = DEFAULT_ANGLE_START, allow_negative_numbers = true)]
    pub angle_start: i32,

    /// Last fan angle in degrees
    #[arg(long, default_value_t = DEFAULT_ANGLE_END, allow_negative_numbers = true)]
    pub angle_end: i32,

    /// Colour each segment with its anchor pixel instead of the default stroke
    #[arg(short = 'c', long)]
    pub image_color: bool,

    /// Number of animation frames written as GIF (0 writes a single PNG)
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Animate the rectangular strip pitch
    #[arg(long)]
    pub pulse: bool,

    /// Animate the number of fan strips
    #[arg(long)]
    pub evolve: bool,

    /// Animate the maximum strip width
    #[arg(long)]
    pub breathe: bool,

    /// Animate the fan's end angle
    #[arg(long)]
    pub unfurl: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if an animation rather than a still is requested
    pub const fn is_animated(&self) -> bool {
        self.frames > 0
    }

    /// Most detailed log level to emit
    pub const fn log_filter(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Layout parameters for the first pass
    pub const fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            strip_width: self.strip_width,
            num_strips: self.strips,
            step_size: self.step,
            pct_min: self.pct_min,
            pct_max: self.pct_max,
            angle_start: self.angle_start,
            angle_end: self.angle_end,
            solid_color: !self.image_color,
        }
    }

    /// Parameters animated between frames
    pub const fn sweep_toggles(&self) -> SweepToggles {
        SweepToggles {
            pulse: self.pulse,
            evolve: self.evolve,
            breathe: self.breathe,
            unfurl: self.unfurl,
        }
    }

    /// Output path for `input_path`: `<stem>_fukuda.png`, or `.gif` when animated
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = if self.is_animated() { "gif" } else { "png" };
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Orchestrates batch rendering of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a usable image or directory, the
    /// layout parameters are invalid, or any file fails to load, render or save
    pub fn process(&mut self) -> Result<()> {
        // Fail on bad parameters before touching any file
        self.cli.layout_params().validate()?;
        if self.cli.is_animated() {
            AnimationState::new(self.cli.layout_params(), self.cli.sweep_toggles())?;
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(path_error(target, "Target file must be a PNG or JPEG image"));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_supported_image(&path)
                    && !is_rendered_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error(
                target,
                "Target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.cli.output_path(input_path);
        if output_path.exists() {
            tracing::warn!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    #[tracing::instrument(level = "info", skip(self), fields(path = %input_path.display()))]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.cli.output_path(input_path);

        let image = load_rgba(input_path)?;
        let raster = raster_view(&image)?;
        let renderer = FrameRenderer::new(image.width(), image.height());
        let scheme = self.cli.scheme;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, self.cli.frames.max(1));
        }

        if self.cli.is_animated() {
            let mut state = AnimationState::new(self.cli.layout_params(), self.cli.sweep_toggles())?;
            if !state.sweeps().any() {
                tracing::warn!("animation requested without any sweep, frames will repeat");
            }

            let mut capture = FrameCapture::new(self.cli.frames);
            for frame in 0..self.cli.frames {
                state = state.advance();
                capture.push(renderer.render_pass(raster, scheme, state.params())?);
                if let Some(ref pm) = self.progress_manager {
                    pm.update_frame(index, frame + 1);
                }
            }
            capture.export_gif(&output_path, self.cli.frame_delay)?;
        } else {
            let frame = renderer.render_pass(raster, scheme, &self.cli.layout_params())?;
            export_png(&frame, &output_path)?;
            if let Some(ref pm) = self.progress_manager {
                pm.update_frame(index, 1);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, start_time.elapsed());
        }
        tracing::info!(
            output = %output_path.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "output written"
        );

        Ok(())
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

fn is_rendered_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
