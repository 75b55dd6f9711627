//! images2coco: build an unannotated COCO file from a directory of images.
//!
//! The tool walks an image directory, reads every image's pixel dimensions
//! from its header, copies the `categories` list out of an existing
//! annotation file, and writes a COCO document with one `images` entry per
//! file and an empty `annotations` list. The result is the usual input for
//! running a detector over a fresh, unlabeled test split.
//!
//! # Modules
//!
//! - [`scan`]: Lazy directory traversal
//! - [`collect`]: Extension filtering and image dimension probing
//! - [`coco`]: Category loading, document assembly, JSON output
//! - [`config`]: Run configuration and its defaults
//! - [`convert`]: The end-to-end pipeline
//! - [`error`]: Error types for images2coco operations
//!
//! # Example
//!
//! ```no_run
//! use images2coco::config::ConvertConfig;
//! use images2coco::convert::convert;
//!
//! let config = ConvertConfig::new("data/test_images", "data/annotations/train.json");
//! let summary = convert(&config)?;
//! println!("wrote {} images", summary.images);
//! # Ok::<(), images2coco::Images2CocoError>(())
//! ```

pub mod coco;
pub mod collect;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod scan;

use std::path::PathBuf;

use clap::Parser;

pub use error::Images2CocoError;

use collect::{ExcludeExtensions, FileNameMode};
use config::ConvertConfig;

/// The images2coco CLI application.
#[derive(Parser)]
#[command(name = "images2coco")]
#[command(version, about = "Convert images to COCO format without annotations")]
struct Cli {
    /// The root path of images.
    img_path: PathBuf,

    /// The train.json/val.json file to copy the categories list from.
    train_val: PathBuf,

    /// The output annotation JSON file (must end with 'json').
    #[arg(long, default_value = config::DEFAULT_OUT)]
    out: PathBuf,

    /// Extensions of files to exclude, such as "png" and "bmp".
    #[arg(short = 'e', long = "exclude-extensions", num_args = 1..)]
    exclude_extensions: Option<Vec<String>>,

    /// Only scan files directly inside the image root.
    #[arg(long)]
    no_recursive: bool,

    /// Follow symlinked directories while scanning.
    #[arg(long)]
    follow_links: bool,

    /// Sort directory entries by name for a stable image order.
    #[arg(long)]
    sort: bool,

    /// Use the scanned path as file_name instead of the basename.
    #[arg(long)]
    full_path: bool,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> Result<ConvertConfig, Images2CocoError> {
        let exclude_extensions = self
            .exclude_extensions
            .map(ExcludeExtensions::new)
            .transpose()?;

        Ok(ConvertConfig {
            image_root: self.img_path,
            categories_path: self.train_val,
            out: self.out,
            exclude_extensions,
            recursive: !self.no_recursive,
            follow_links: self.follow_links,
            sort: self.sort,
            file_name_mode: if self.full_path {
                FileNameMode::FullPath
            } else {
                FileNameMode::Basename
            },
            pretty: self.pretty,
        })
    }
}

/// Run the images2coco CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), Images2CocoError> {
    let cli = Cli::parse();
    logging::init_logger(logging::level_for(cli.verbose, cli.quiet));

    let quiet = cli.quiet;
    let config = cli.into_config()?;

    let summary = convert::convert(&config)?;

    if !quiet {
        println!("save json file: {}", summary.output.display());
        print!("{}", summary);
    }
    Ok(())
}
