// CLI module for running the server and one-off development commands

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::{Parser, Subcommand};

use crate::app_data::AppData;

/// APPLIXO backend CLI
#[derive(Parser)]
#[command(name = "applixo-backend")]
#[command(about = "APPLIXO waste-collection backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Classify one image file and print the structured result
    Detect {
        /// Path to the image file
        image: PathBuf,
    },
}

/// Run the one-shot detect command
///
/// Builds the same data URI the app sends and goes through the same
/// detector service as the HTTP endpoint.
pub async fn run_detect(
    app_data: &AppData,
    image: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(image)?;
    let mime_type = mime_type_for(image)
        .ok_or_else(|| format!("unsupported image extension: {}", image.display()))?;

    let data_uri = format!("data:{};base64,{}", mime_type, BASE64.encode(bytes));

    let record = app_data.detector.detect(&data_uri).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

fn mime_type_for(image: &Path) -> Option<&'static str> {
    match image
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => Some("image/jpeg"),
        Some("png") => Some("image/png"),
        Some("webp") => Some("image/webp"),
        Some("gif") => Some("image/gif"),
        _ => None,
    }
}
