use num_bigint::BigUint;
use opb58::Opb58Error;
use std::io::{self, Read};

/// Returns `value` as bytes, or all of stdin when no value was given.
pub fn read_input(value: Option<&str>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match value {
        Some(value) => Ok(value.as_bytes().to_vec()),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Like [`read_input`], but as trimmed UTF-8 text.
pub fn read_text(value: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    let raw = read_input(value)?;
    let text = String::from_utf8(raw).map_err(|_| "Input must be valid UTF-8")?;
    Ok(text.trim().to_string())
}

/// Parses a non-negative decimal integer of any size.
pub fn parse_decimal(text: &str) -> Result<BigUint, Box<dyn std::error::Error>> {
    if text.starts_with('-') {
        return Err(Opb58Error::negative(text).into());
    }
    text.parse::<BigUint>()
        .map_err(|e| format!("invalid decimal integer '{}': {}", text, e).into())
}

/// Parses big-endian hex digits, with or without a `0x` prefix. An odd digit
/// count is read as if it had a leading zero.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let padded = if digits.len() % 2 == 1 {
        format!("0{}", digits)
    } else {
        digits.to_string()
    };
    hex::decode(&padded).map_err(|e| format!("invalid hex '{}': {}", text, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("58").unwrap(), BigUint::from(58u32));
        let big = parse_decimal("18446744073709551616").unwrap();
        assert_eq!(big, BigUint::from(u64::MAX) + 1u32);
        assert!(parse_decimal("-1").is_err());
        assert!(parse_decimal("12a").is_err());
        assert!(parse_decimal("").is_err());
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("00ff").unwrap(), vec![0x00, 0xFF]);
        assert_eq!(parse_hex("0x100").unwrap(), vec![0x01, 0x00]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert!(parse_hex("zz").is_err());
    }
}
