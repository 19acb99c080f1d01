use egui::Color32;

/// Theme colours are written as CSS hex strings.
pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    /// Accepts `#rrggbb` and the `#rgb` shorthand.
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match hex.len() {
            6 => Some(Color32::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let mut digits = hex.chars().map(|c| channel(&c.to_string()).map(|v| v * 17));
                Some(Color32::from_rgb(
                    digits.next()??,
                    digits.next()??,
                    digits.next()??,
                ))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_short_forms() {
        assert_eq!(
            <Color32 as ColorExt>::from_hex("#0d9488"),
            Some(Color32::from_rgb(13, 148, 136))
        );
        assert_eq!(
            <Color32 as ColorExt>::from_hex("fff"),
            Some(Color32::from_rgb(255, 255, 255))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(<Color32 as ColorExt>::from_hex("#12345"), None);
        assert_eq!(<Color32 as ColorExt>::from_hex("#zzzzzz"), None);
        assert_eq!(<Color32 as ColorExt>::from_hex("#é12"), None);
    }
}
