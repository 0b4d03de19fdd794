use clap::Parser;
use ofdside_svg::{DEFAULT_MAX_SEAL_DEPTH, RenderOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ofdside-svg", about = "Render OFD files to HTML with inline SVG")]
struct Args {
    /// Input OFD file (or XML file with --xml)
    input: PathBuf,
    /// Output HTML file (defaults to input with .html extension)
    output: Option<PathBuf>,
    /// Pixels per millimetre (default: 96 dpi)
    #[arg(long)]
    pixels_per_mm: Option<f64>,
    /// Scale so the first page is this many pixels wide
    #[arg(long)]
    screen_width: Option<f64>,
    /// Deepest nested OFD seal to render
    #[arg(long, default_value_t = DEFAULT_MAX_SEAL_DEPTH)]
    max_seal_depth: usize,
    /// Pretty-print the input as generic XML instead
    #[arg(long)]
    xml: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.input.exists() {
        eprintln!("Error: file not found: {}", args.input.display());
        std::process::exit(1);
    }
    if !args.input.is_file() {
        eprintln!("Error: not a file: {}", args.input.display());
        std::process::exit(1);
    }

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("html"));

    let result = if args.xml {
        ofdside_svg::convert_xml_to_html(&args.input, &output)
    } else {
        let mut options = RenderOptions {
            screen_width: args.screen_width,
            max_seal_depth: args.max_seal_depth,
            ..RenderOptions::default()
        };
        if let Some(ppm) = args.pixels_per_mm {
            options.pixels_per_mm = ppm;
        }
        ofdside_svg::convert_ofd_to_html(&args.input, &output, &options)
    };

    if let Err(e) = result {
        eprintln!("Error [{} {}]: {e}", e.domain().as_str(), e.code());
        std::process::exit(1);
    }
}
