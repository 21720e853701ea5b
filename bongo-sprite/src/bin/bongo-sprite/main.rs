use bongo_common::{
    frame::PixelFrame,
    globals::{OLED_HEIGHT, OLED_WIDTH},
};
use bongo_sprite::{diff, pretty_parse_sprite, pretty_parse_table, sprite::Bitmap, table};
use clap::{Args, Parser, Subcommand};
use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::{Context, Result, anyhow};

/// Build and inspect differential OLED frame tables
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a base table and one diff table per pose sprite
    Diff(DiffArgs),
    /// Validate a frame table against a raster size
    Validate(ValidateArgs),
    /// Draw a base table, optionally overlaid with a diff table
    Preview(PreviewArgs),
}

#[derive(Args)]
struct DiffArgs {
    /// Prefix for the generated constant names
    #[clap(long, short, default_value = "FRAME")]
    name: String,

    /// Sprite holding every pixel common to all poses
    base: PathBuf,

    /// Pose sprites; each must match the base dimensions
    poses: Vec<PathBuf>,
}

#[derive(Args)]
struct ValidateArgs {
    /// Display information about the table
    #[clap(long, short)]
    verbose: bool,

    #[clap(long, default_value_t = OLED_WIDTH)]
    width: u16,

    #[clap(long, default_value_t = OLED_HEIGHT)]
    height: u16,

    /// File containing the frame table
    file: PathBuf,
}

#[derive(Args)]
struct PreviewArgs {
    #[clap(long, default_value_t = OLED_WIDTH)]
    width: u16,

    #[clap(long, default_value_t = OLED_HEIGHT)]
    height: u16,

    /// Base frame table
    base: PathBuf,

    /// Diff frame table drawn over the base
    diff: Option<PathBuf>,
}

fn read(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}

fn read_sprite(file: &Path) -> Result<Bitmap> {
    let src = read(file)?;
    Ok(pretty_parse_sprite(file, &src)?)
}

fn read_table(file: &Path, width: u16, height: u16) -> Result<Vec<u16>> {
    let src = read(file)?;
    let table = pretty_parse_table(file, &src)?;
    if let Err(err) = table.check(width, height) {
        bongo_sprite::report(file, &src, &err);
        return Err(err.into());
    }
    Ok(table.words)
}

fn const_name(prefix: &str, file: &Path) -> String {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    format!("{prefix}_{stem}")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

fn diff_tables(args: &DiffArgs) -> Result<String> {
    let base = read_sprite(&args.base)?;
    let mut out = table::to_rust(&format!("{}_BASE", args.name), &diff::base_frame(&base));

    for pose_file in &args.poses {
        let pose = read_sprite(pose_file)?;
        let words = diff::diff_frame(&base, &pose)
            .map_err(|err| anyhow!("{}: {}", pose_file.display(), err.message))?;
        log::debug!("{}: {} changed pixels", pose_file.display(), words[0]);
        out.push('\n');
        out.push_str(&table::to_rust(&const_name(&args.name, pose_file), &words));
    }
    Ok(out)
}

fn validate(args: &ValidateArgs) -> Result<()> {
    let words = read_table(&args.file, args.width, args.height)?;
    if args.verbose {
        let frame = PixelFrame::new(&words);
        let lit = frame.pixels().filter(|p| p.on).count();
        println!("pixels: {}", frame.len());
        println!("lit:    {lit}");
        println!("unlit:  {}", frame.len() - lit);
    }
    Ok(())
}

fn preview(args: &PreviewArgs) -> Result<String> {
    let mut bitmap = Bitmap::new(args.width, args.height);
    let base = read_table(&args.base, args.width, args.height)?;
    diff::apply(&mut bitmap, PixelFrame::new(&base))?;
    if let Some(file) = &args.diff {
        let words = read_table(file, args.width, args.height)?;
        diff::apply(&mut bitmap, PixelFrame::new(&words))?;
    }
    Ok(bitmap.to_ascii())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = run(&cli);

    if let Err(message) = result {
        eprintln!("{message}");
        process::exit(1);
    };
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Diff(args) => diff_tables(args).map(|s| print!("{s}")),
        Commands::Validate(args) => validate(args),
        Commands::Preview(args) => preview(args).map(|s| print!("{s}")),
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod test;
