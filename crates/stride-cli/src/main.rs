//! Command-line video analysis.
//!
//! Takes one positional argument, the video path, and prints the analysis
//! result as a single JSON object on stdout. Any failure prints
//! `Error: <message>` on stderr and exits nonzero. Logs go to stderr so
//! stdout stays machine-readable.

use std::process::ExitCode;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stride_media::{analyze_video, LandmarkerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .with(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(video_path), None) = (args.next(), args.next()) else {
        eprintln!("Usage: stride-cli <video-path>");
        return ExitCode::FAILURE;
    };

    let config = LandmarkerConfig::from_env();

    match analyze_video(&video_path, &config).await {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
