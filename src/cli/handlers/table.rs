use opb58::core::alphabet;
use opb58::{I32_MAX, I64_MAX, Opb58};
use std::io::{self, Write};

/// Prints the alphabet, the boundary constants and the byte cache.
pub fn handle() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "alphabet: {}", alphabet::as_str())?;
    writeln!(out, "i32 max:  {}", I32_MAX)?;
    writeln!(out, "i64 max:  {}", I64_MAX)?;
    writeln!(out)?;
    for (byte, encoded) in Opb58::shared().cache().iter() {
        writeln!(out, "{:>3}  0x{:02x}  {}", byte, byte, encoded)?;
    }
    Ok(())
}
