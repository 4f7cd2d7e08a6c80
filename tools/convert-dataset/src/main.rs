//! XLSX -> JSON catalog converter for BrandGuard
//!
//! Reads one worksheet of a spreadsheet and writes the JSON catalog consumed
//! by the dataset loader. Columns are matched by header name
//! (case-insensitive aliases) with a positional fallback for anything the
//! headers don't cover; rows without an app name or package are dropped.

use brandguard_core::{AppListing, BrandGuardError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input spreadsheet (.xlsx)
    input: PathBuf,

    /// Output JSON catalog path
    output: PathBuf,

    /// Worksheet to read (defaults to the first sheet)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Force overwrite if the output file exists
    #[arg(short, long)]
    force: bool,
}

/// Column indices for the three catalog fields
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct ColumnMap {
    app_name: Option<usize>,
    package: Option<usize>,
    publisher: Option<usize>,
}

fn find_headers(headers: &[String]) -> ColumnMap {
    let mut map = ColumnMap::default();
    for (i, h) in headers.iter().enumerate() {
        match h.trim().to_lowercase().as_str() {
            "app_name" | "name" | "application" => map.app_name = Some(i),
            "package" | "pkg" | "package_name" => map.package = Some(i),
            "publisher" | "publisher_name" | "vendor" => map.publisher = Some(i),
            _ => {}
        }
    }
    map
}

/// Any field the headers didn't name falls back to the first three columns
fn with_positional_fallback(mut map: ColumnMap, width: usize) -> ColumnMap {
    if map.app_name.is_none() && width >= 1 {
        map.app_name = Some(0);
    }
    if map.package.is_none() && width >= 2 {
        map.package = Some(1);
    }
    if map.publisher.is_none() && width >= 3 {
        map.publisher = Some(2);
    }
    map
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR:{:?}", e),
        Data::DateTime(dt) => format!("{}", dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Map sheet rows (header row first) to catalog listings
fn convert_rows(rows: &[Vec<Data>]) -> Result<Vec<AppListing>> {
    if rows.len() < 2 {
        return Err(BrandGuardError::validation("no data rows found in sheet"));
    }

    let headers: Vec<String> = rows[0].iter().map(cell_to_string).collect();
    let map = with_positional_fallback(find_headers(&headers), headers.len());

    let mut out = Vec::new();
    for row in &rows[1..] {
        let field = |idx: Option<usize>| -> String {
            idx.and_then(|i| row.get(i))
                .map(cell_to_string)
                .unwrap_or_default()
                .trim()
                .to_string()
        };
        let name = field(map.app_name);
        let pkg = field(map.package);
        let publisher = field(map.publisher);
        if name.is_empty() || pkg.is_empty() {
            continue;
        }
        out.push(AppListing::new(name, pkg, publisher));
    }
    Ok(out)
}

fn read_rows(path: &Path, sheet: Option<&str>) -> Result<Vec<Vec<Data>>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        BrandGuardError::catalog(format!("failed to open {}: {}", path.display(), e))
    })?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| BrandGuardError::catalog("workbook has no sheets"))?,
    };

    let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
        BrandGuardError::catalog(format!("failed to read sheet '{}': {}", sheet_name, e))
    })?;
    Ok(range.rows().map(|r| r.to_vec()).collect())
}

fn main() {
    let cli = Cli::parse();

    if !cli.input.exists() {
        eprintln!("❌ Error: Input not found: {:?}", cli.input);
        std::process::exit(2);
    }
    if cli.output.exists() && !cli.force {
        eprintln!("❌ Error: File {:?} already exists!", cli.output);
        eprintln!("   Use --force to overwrite");
        std::process::exit(1);
    }

    let rows = match read_rows(&cli.input, cli.sheet.as_deref()) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let listings = match convert_rows(&rows) {
        Ok(listings) => listings,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = fs::create_dir_all(parent) {
                eprintln!("❌ Failed to create {:?}: {}", parent, e);
                std::process::exit(1);
            }
        }
    }

    let json = match serde_json::to_string_pretty(&listings) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("❌ Failed to serialize catalog: {}", e);
            std::process::exit(1);
        }
    };

    match fs::write(&cli.output, json) {
        Ok(_) => {
            println!("✓ Wrote {} records to {:?}", listings.len(), cli.output);
        }
        Err(e) => {
            eprintln!("❌ Failed to write file: {}", e);
            std::process::exit(1);
        }
    }
}
