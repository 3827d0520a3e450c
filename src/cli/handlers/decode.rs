use crate::cli::{args::DecodeArgs, commands::read_text};
use opb58::{DecodeWidth, Opb58, Opb58Config, OutputFormat};
use std::io::{self, Write};

pub fn handle(args: DecodeArgs, config: &Opb58Config) -> Result<(), Box<dyn std::error::Error>> {
    let output = args.output.unwrap_or(config.settings.output());
    let width = args.width.unwrap_or(config.settings.width());
    tracing::debug!(?output, ?width, "decode");

    let text = read_text(args.value.as_deref())?;
    let codec = Opb58::shared();

    match output {
        OutputFormat::Decimal => match width {
            DecodeWidth::I32 => println!("{}", codec.decode_to_i32(&text)?),
            DecodeWidth::I64 => println!("{}", codec.decode_to_i64(&text)?),
            DecodeWidth::Big => println!("{}", codec.decode_to_biguint(&text)?),
        },
        OutputFormat::Hex => println!("{}", hex::encode(codec.decode_to_bytes(&text)?)),
        OutputFormat::Raw => {
            let bytes = codec.decode_to_bytes(&text)?;
            let mut stdout = io::stdout();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
