use crate::cli::{
    args::EncodeArgs,
    commands::{parse_decimal, parse_hex, read_input},
};
use opb58::{InputFormat, Opb58, Opb58Config};

pub fn handle(args: EncodeArgs, config: &Opb58Config) -> Result<(), Box<dyn std::error::Error>> {
    let format = args.input.unwrap_or(config.settings.input());
    tracing::debug!(?format, "encode");

    let raw = read_input(args.value.as_deref())?;
    let codec = Opb58::shared();

    let encoded = match format {
        InputFormat::Text => codec.encode_bytes(&raw),
        InputFormat::Decimal | InputFormat::Hex => {
            let text = std::str::from_utf8(&raw)
                .map_err(|_| "Input must be valid UTF-8")?
                .trim();
            if format == InputFormat::Decimal {
                codec.encode_biguint(&parse_decimal(text)?)
            } else {
                codec.encode_bytes(&parse_hex(text)?)
            }
        }
    };

    println!("{}", encoded);
    Ok(())
}
