use std::io::Read;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shield_codec::{DecodedTransaction, parse_hex_input};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let raw = parse_hex_input(&input).context("Input is not valid hex")?;
    info!("Decoding {} byte transaction", raw.len());

    let tx = DecodedTransaction::decode(&raw).context("Failed to decode transaction")?;
    println!("{}", tx);

    Ok(())
}
