use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "jsonfmt", about = "Validate and reformat JSON documents")]
struct Cli {
    /// File to read, or `-` for stdin
    path: PathBuf,

    /// Spaces per nesting level; 0 emits compact output
    #[arg(long, default_value_t = 0)]
    indent: usize,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let input = if cli.path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.path)?
    };

    let value = json::parse(&input)?;
    println!("{}", json::stringify(&value, cli.indent));

    Ok(())
}
