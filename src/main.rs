//! Hexatile CLI
//!
//! Usage:
//!   hexatile [OPTIONS] [LOOKUP]
//!
//! Reads a periodic-table lookup JSON, writes one SVG sheet of hexagon tiles
//! per chemical category, and converts each sheet with an external command
//! (inkscape by default).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hexatile::{
    conversion_tasks, plan_sheets, renderer, write_sheets, Converter, ElementTable,
    GenerateConfig, Sheet, SheetLayout, TileProfile,
};

#[derive(Parser)]
#[command(name = "hexatile")]
#[command(about = "Generate printable periodic-table hexagon sheets")]
struct Cli {
    /// Lookup table with element data and canonical ordering
    #[arg(default_value = "periodic-table-lookup.json")]
    lookup: PathBuf,

    /// Tile profile overriding the reference dimensions (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Directory for the rendered SVG sheets
    #[arg(long, default_value = "svg")]
    svg_dir: PathBuf,

    /// Directory for the converted sheets
    #[arg(long, default_value = "dxf")]
    dxf_dir: PathBuf,

    /// External converter command
    #[arg(long, default_value = "inkscape")]
    converter: String,

    /// Skip the conversion step and only write SVG
    #[arg(long)]
    no_convert: bool,

    /// Debug mode: dump each sheet's tile grid to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.profile {
        Some(path) => match TileProfile::from_file(path) {
            Ok(profile) => GenerateConfig::from_profile(&profile),
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => GenerateConfig::default(),
    };

    let source = match std::fs::read_to_string(&cli.lookup) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading lookup '{}': {}", cli.lookup.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let table = match ElementTable::from_str(&source) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let layouts = plan_sheets(&table, &config.tiles);

    if cli.debug {
        eprintln!("=== Sheet Debug ===");
        for layout in &layouts {
            print_sheet(layout);
        }
        eprintln!("===================");
    }

    let sheets: Vec<Sheet> = layouts
        .iter()
        .map(|layout| Sheet {
            category: layout.category.clone(),
            svg: renderer::render_sheet(layout, &config.tiles, &config.svg),
        })
        .collect();

    if let Err(e) = write_sheets(&sheets, &cli.svg_dir) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    println!(
        "Wrote {} sheet(s) to {}",
        sheets.len(),
        cli.svg_dir.display()
    );

    if cli.no_convert {
        return ExitCode::SUCCESS;
    }

    if let Err(e) = std::fs::create_dir_all(&cli.dxf_dir) {
        eprintln!("Error creating '{}': {}", cli.dxf_dir.display(), e);
        return ExitCode::FAILURE;
    }

    let tasks = conversion_tasks(&sheets, &cli.svg_dir, &cli.dxf_dir);
    let report = Converter::new(&cli.converter).run_all(&tasks);

    for category in &report.succeeded {
        println!("Converted {}", category);
    }
    for (category, err) in &report.failed {
        eprintln!("Conversion failed for {}: {}", category, err);
    }

    if report.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_sheet(layout: &SheetLayout) {
    eprintln!(
        "[{}] {:.1}x{:.1}mm {} tile(s)",
        layout.category,
        layout.width,
        layout.height,
        layout.tiles.len()
    );
    for tile in &layout.tiles {
        eprintln!(
            "  {} #{} col={} row={} x={:.1} y={:.1}",
            tile.key, tile.number, tile.grid.col, tile.grid.row, tile.center.x, tile.center.y
        );
    }
}
