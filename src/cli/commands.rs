use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::index::detail::parse_links_details;
use crate::index::main_index::{parse_main_index, write_main_index};
use crate::models::Link;
use crate::utils::get_output_dir;

#[derive(Parser)]
#[command(name = "linkvault")]
#[command(version)]
#[command(about = "File-based index for the LinkVault web archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the archive index
    Status,
    /// List the links recorded in the main index
    List,
    /// Rebuild the main index from the per-link detail indexes
    Rebuild,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Status) => {
            show_status()?;
        }
        Some(Commands::List) => {
            list_links()?;
        }
        Some(Commands::Rebuild) => {
            rebuild_main_index()?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_status() -> Result<()> {
    let out_dir = get_output_dir()?;
    let indexed: Vec<Link> = parse_main_index(&out_dir)?.collect::<Result<_>>()?;

    let mut on_disk = 0;
    let mut unreadable = 0;
    for parsed in parse_links_details(&out_dir)? {
        match parsed {
            Ok(_) => on_disk += 1,
            Err(e) => {
                unreadable += 1;
                eprintln!("Warning: Failed to read detail index: {}", e);
            }
        }
    }

    let archived = indexed.iter().filter(|link| link.is_archived()).count();

    println!("LinkVault Archive Status");
    println!("========================");
    println!("Output directory: {}", out_dir.display());
    println!("Links in main index: {}", indexed.len());
    println!("  Archived (>=1 method succeeded): {}", archived);
    println!("Detail indexes on disk: {}", on_disk);
    if unreadable > 0 {
        println!("  Unreadable: {}", unreadable);
    }

    // Snapshot order is insertion order, so take min/max explicitly
    if let Some(oldest) = indexed.iter().map(|link| link.timestamp.as_str()).min() {
        println!("Oldest link: {}", oldest);
    }
    if let Some(newest) = indexed.iter().map(|link| link.timestamp.as_str()).max() {
        println!("Newest link: {}", newest);
    }

    Ok(())
}

fn list_links() -> Result<()> {
    let out_dir = get_output_dir()?;

    for parsed in parse_main_index(&out_dir)? {
        let link = parsed?;
        match &link.title {
            Some(title) => println!("{}  {}  {}", link.timestamp, link.url, title),
            None => println!("{}  {}", link.timestamp, link.url),
        }
    }

    Ok(())
}

fn rebuild_main_index() -> Result<()> {
    let out_dir = get_output_dir()?;

    let mut links = Vec::new();
    let mut skipped = 0;
    for parsed in parse_links_details(&out_dir)? {
        match parsed {
            Ok(link) => links.push(link),
            Err(e) => {
                skipped += 1;
                eprintln!("Warning: Skipping unreadable detail index: {}", e);
            }
        }
    }

    // Directory enumeration order is filesystem-defined; sort for a stable index
    links.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    write_main_index(&links, &out_dir)?;
    println!("Rebuilt main index with {} links ({} skipped)", links.len(), skipped);

    Ok(())
}
