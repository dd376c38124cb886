//! Levels command
//!
//! Usage: logwrapper levels [--json]

use clap::Args;
use logwrapper_core::level_converter::{external_to_internal, internal_to_external};
use logwrapper_core::Lvl;
use serde::Serialize;

/// A value outside the named range, shown to make the fallback visible
const OUT_OF_RANGE: Lvl = Lvl(16);

#[derive(Debug, Args)]
pub struct LevelsArgs {
    /// Print the table as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Row {
    value: u8,
    name: String,
    engine: &'static str,
    back: String,
    recognized: bool,
}

fn rows() -> Vec<Row> {
    Lvl::NAMED
        .iter()
        .copied()
        .chain(std::iter::once(OUT_OF_RANGE))
        .map(|level| {
            let engine = external_to_internal(level);
            Row {
                value: level.value(),
                name: level.to_string(),
                engine: engine.as_str(),
                back: internal_to_external(engine).to_string(),
                recognized: level.is_recognized(),
            }
        })
        .collect()
}

/// Execute levels command
pub fn execute(args: LevelsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let rows = rows();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("value  external engine    back");
    for row in &rows {
        println!(
            "{:<6} {:<8} {:<9} {}",
            row.value, row.name, row.engine, row.back
        );
    }
    Ok(())
}
