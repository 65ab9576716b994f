use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(about = "Gamma rank code a text file and report its cost", long_about = None)]
struct Args {
    /// UTF-8 text file to encode.
    path: PathBuf,

    /// Print every codeword, in input order.
    #[arg(long)]
    codes: bool,

    /// Print the ranked alphabet.
    #[arg(long)]
    alphabet: bool,

    /// Number of decoded characters to preview.
    #[arg(long, default_value_t = 100)]
    limit: usize,
}

/// Printable form of a symbol: space and control characters are spelled out.
fn display_symbol(c: char) -> Cow<'static, str> {
    match c {
        ' ' => Cow::Borrowed("(space)"),
        c if c.is_whitespace() || c.is_control() => Cow::Owned(c.escape_default().to_string()),
        c => Cow::Owned(c.to_string()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let text = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    if text.is_empty() {
        bail!("{} is empty", args.path.display());
    }

    info!("Entropy of {}: {:.2}", args.path.display(), elias::text_entropy(&text)?);

    let document = elias::encode(&text)?;
    info!("Total number of bits: {}", document.total_bits());
    info!("Average number of bits: {:.2}", document.average_bits());

    if args.codes {
        println!("Gamma code:");
        for code in document.codewords() {
            println!("{code}");
        }
    }

    if args.alphabet {
        println!("Characters:");
        for (rank, &c) in document.alphabet().iter().enumerate() {
            println!("{:>5}  {}", rank + 1, display_symbol(c));
        }
    }

    let decoded = elias::decode(&document)?;
    if decoded != text {
        bail!("decoded text does not match the input");
    }
    let preview: String = decoded.chars().take(args.limit).collect();
    info!("Part of decoded text: {}", preview);

    Ok(())
}
