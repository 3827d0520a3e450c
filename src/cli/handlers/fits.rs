use crate::cli::args::FitsArgs;
use opb58::{fits_i32, fits_i64};

pub fn handle(args: FitsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let value = args.value.trim();
    println!("i32: {}", fits_i32(value));
    println!("i64: {}", fits_i64(value));
    Ok(())
}
