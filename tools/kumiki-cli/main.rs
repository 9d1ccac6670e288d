use clap::Parser;
use kumiki::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Generate Rholang source from a saved block workspace.
#[derive(Parser, Debug)]
#[command(name = "kumiki-cli", version, about)]
struct Args {
    /// Path to a workspace save JSON exported by the editor
    workspace: PathBuf,

    /// Path to a block-definitions JSON array; the built-in catalog is
    /// used when omitted
    #[arg(short, long)]
    definitions: Option<PathBuf>,

    /// Write the generated code to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut registry = BlockRegistry::new();
    let registered = match &args.definitions {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            registry.register_json(&json)?
        }
        None => registry.register(kumiki::blocks::all()),
    };
    eprintln!("Registered {} block definitions", registered);

    let save_json = fs::read_to_string(&args.workspace)?;
    let workspace = Workspace::from_save_json(&save_json)?;

    let start = Instant::now();
    let code = Generator::new(&registry).workspace_to_code(&workspace)?;
    eprintln!("Generated {} bytes in {:.2?}", code.len(), start.elapsed());

    match &args.output {
        Some(path) => fs::write(path, &code)?,
        None => print!("{}", code),
    }
    Ok(())
}
