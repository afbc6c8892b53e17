// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use fundmatch::Catalog;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // The embedded catalog is the default; a JSON file with the same record
    // shape can stand in for it.
    let catalog = match args.get(1) {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::embedded()?,
    };

    run_ui_mode(catalog)
}

#[cfg(feature = "tui")]
fn run_ui_mode(catalog: Catalog) -> Result<()> {
    println!("📚 Loading FundMatch...");
    println!(
        "✓ Catalog ready: {} scholarships, {} loans\n",
        catalog.scholarships.len(),
        catalog.loans.len()
    );
    println!("Starting UI... (Press Esc to quit)\n");

    let mut app = fundmatch::App::new(catalog);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_catalog: Catalog) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    std::process::exit(1);
}
