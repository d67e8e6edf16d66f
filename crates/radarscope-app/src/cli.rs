use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Render a toy air-traffic display as SVG", long_about = None)]
pub struct Cli {
    /// Aircraft in the first spawn pass; unusable values fall back to the default.
    #[arg(short = 'n', long)]
    pub count: Option<String>,

    /// RNG seed. A random seed is chosen (and logged) when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub config_file: Option<std::path::PathBuf>,

    /// JSON map document with the static layers and the radials.
    #[arg(long)]
    pub map: Option<std::path::PathBuf>,

    #[arg(short, long, default_value = "radarscope.svg")]
    pub output: std::path::PathBuf,

    /// Also write a JSON snapshot of the traffic after every render.
    #[arg(long)]
    pub snapshot: Option<std::path::PathBuf>,

    /// Read respawn/move commands from stdin after the first render.
    #[arg(short, long, default_value_t = false)]
    pub interactive: bool,

    #[arg(short, long, default_value_t = log::LevelFilter::Info)]
    pub logging_level: log::LevelFilter,
}
