use clap::Args;
use opb58::{DecodeWidth, InputFormat, OutputFormat};

/// Arguments for encoding a value
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Value to encode (reads from stdin if not provided)
    #[arg(allow_negative_numbers = true)]
    pub value: Option<String>,

    /// How to read the value [default: from config]
    #[arg(short = 'i', long, value_enum)]
    pub input: Option<InputFormat>,
}

/// Arguments for decoding an encoded string
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Encoded string (reads from stdin if not provided)
    pub value: Option<String>,

    /// How to print the result [default: from config]
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Integer type for decimal output [default: from config]
    #[arg(short = 'w', long, value_enum)]
    pub width: Option<DecodeWidth>,
}

/// Arguments for the fixed-width fits-tests
#[derive(Args, Debug)]
pub struct FitsArgs {
    /// Encoded string to test
    pub value: String,
}
