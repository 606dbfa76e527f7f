// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r##"Render Options:
    --poses, -p <FILE>     Pose sequence (JSON array or JSON Lines)
    --config <FILE>        Renderer config (JSON); flags below override it
    --width / --height     Surface size in pixels [default: 640x480]
    --conf <CONF>          Keypoint confidence threshold [default: 0.5]
    --radius <PX>          Head radius; limbs taper from it [default: 30]
    --falloff <F>          Radius factor per joint level [default: 0.75]
    --window <N>           Smoothing window in frames [default: 5]
    --mode <MODE>          stick, keypoints or skeleton [default: stick]
    --save                 Save PNG frames to runs/render/render<N>
    --show                 Display frames in a window

Examples:
    pictogram render --poses poses.jsonl --save
    pictogram render -p poses.json --width 1280 --height 720 --show
    pictogram render -p poses.jsonl --conf 0.3 --window 3 --save
    pictogram render -p poses.jsonl --mode skeleton --background "#000000" --show"##)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a recorded pose sequence as pictogram frames
    Render(RenderArgs),
}

/// Arguments for the render command.
#[derive(Args, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderArgs {
    /// Pose sequence file (JSON array of frames or JSON Lines)
    #[arg(short, long)]
    pub poses: PathBuf,

    /// Renderer configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Surface width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Keypoint confidence threshold
    #[arg(long)]
    pub conf: Option<f32>,

    /// Head radius in pixels
    #[arg(long)]
    pub radius: Option<f32>,

    /// Radius factor applied per joint level
    #[arg(long)]
    pub falloff: Option<f32>,

    /// Smoothing window size in frames
    #[arg(long)]
    pub window: Option<usize>,

    /// Draw mode (stick, keypoints, skeleton)
    #[arg(long)]
    pub mode: Option<String>,

    /// Figure fill color
    #[arg(long)]
    pub color: Option<String>,

    /// Background color
    #[arg(long, default_value = "#ffffff")]
    pub background: String,

    /// Keep the background transparent in saved frames
    #[arg(long, default_value_t = false)]
    pub transparent: bool,

    /// Playback rate for --show
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    /// Save frames to <output>/render<N>
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Parent directory for saved runs
    #[arg(long, default_value = "runs")]
    pub output: PathBuf,

    /// Display frames in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Show per-frame output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,

    /// Print errors only
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
