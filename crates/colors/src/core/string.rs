use super::FloatExt;
use crate::error::{Channel, ColorFormatError};
use crate::Float;

/// Parse a 24-bit color in unhashed hexadecimal format.
///
/// The string must have exactly six hexadecimal digits, two per channel, with
/// no leading `#`. Digits may be upper or lower case. If successful, this
/// function returns the three channels scaled to unit range.
pub(crate) fn parse_hex(s: &str) -> Result<[Float; 3], ColorFormatError> {
    if s.len() != 6 {
        return Err(ColorFormatError::UnexpectedLength(s.len()));
    }

    fn parse_channel(digits: &[u8], index: usize) -> Result<Float, ColorFormatError> {
        // Unlike from_str_radix on its own, this rejects a leading `+`.
        let n = std::str::from_utf8(digits)
            .ok()
            .filter(|t| t.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|t| u8::from_str_radix(t, 16).ok())
            .ok_or_else(|| ColorFormatError::MalformedHex {
                channel: Channel::from_index(index),
                digits: String::from_utf8_lossy(digits).into_owned(),
            })?;

        Ok(n as Float / <Float as FloatExt>::MAX_24BIT)
    }

    let mut channels = [0.0; 3];
    for (index, digits) in s.as_bytes().chunks_exact(2).enumerate() {
        channels[index] = parse_channel(digits, index)?;
    }
    Ok(channels)
}

/// Format the channels in hashed hexadecimal format.
///
/// Each channel is scaled to `0..=255` and truncated, not rounded. Channels
/// outside unit range saturate at `00` and `ff`.
pub(crate) fn format_hex(channels: &[Float; 3]) -> String {
    // Float to integer casts saturate and map not-a-number to zero.
    let to_byte = |c: Float| (c * <Float as FloatExt>::MAX_24BIT) as u8;
    let [r, g, b] = *channels;
    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{format_hex, parse_hex};
    use crate::error::{Channel, ColorFormatError};
    use crate::Float;

    #[test]
    fn test_parse_hex() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hex("ff0000")?, [1.0, 0.0, 0.0]);
        assert_eq!(parse_hex("FFfF00")?, [1.0, 1.0, 0.0]);
        assert_eq!(
            parse_hex("336699")?,
            [0x33 as Float / 255.0, 0x66 as Float / 255.0, 0x99 as Float / 255.0]
        );

        assert_eq!(parse_hex("abc"), Err(ColorFormatError::UnexpectedLength(3)));
        assert_eq!(
            parse_hex("1234567"),
            Err(ColorFormatError::UnexpectedLength(7))
        );
        assert!(matches!(
            parse_hex("#12345"),
            Err(ColorFormatError::MalformedHex {
                channel: Channel::Red,
                ..
            })
        ));
        assert_eq!(
            parse_hex("zz0000"),
            Err(ColorFormatError::MalformedHex {
                channel: Channel::Red,
                digits: "zz".to_string()
            })
        );
        assert_eq!(
            parse_hex("00+f00"),
            Err(ColorFormatError::MalformedHex {
                channel: Channel::Green,
                digits: "+f".to_string()
            })
        );
        assert!(matches!(
            parse_hex("0000g0"),
            Err(ColorFormatError::MalformedHex {
                channel: Channel::Blue,
                ..
            })
        ));

        // Six bytes but only five characters
        assert!(matches!(
            parse_hex("\u{e9}0000"),
            Err(ColorFormatError::MalformedHex {
                channel: Channel::Red,
                ..
            })
        ));

        Ok(())
    }

    #[test]
    fn test_format_hex() {
        assert_eq!(format_hex(&[1.0, 0.0, 0.5]), "#ff007f");
        assert_eq!(format_hex(&[0x0a as Float / 255.0, 0.0, 0.0]), "#0a0000");
        assert_eq!(format_hex(&[-0.5, 2.0, Float::NAN]), "#00ff00");
    }

    #[test]
    fn test_every_channel_value() -> Result<(), ColorFormatError> {
        for n in 0..=255_u8 {
            let hex = format!("{:02x}{:02x}{:02x}", n, 255 - n, n);
            assert_eq!(format_hex(&parse_hex(&hex)?), format!("#{}", hex));
        }
        Ok(())
    }
}
