pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Human readable size for the file picker label, e.g. `12.5 KB`.
    pub fn format_size(size: u64) -> String {
        const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

        let mut value = size as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }

        match unit {
            0 => format!("{} B", size),
            _ => format!("{:.1} {}", value, UNITS[unit]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(FileSizeUtils::format_size(0), "0 B");
        assert_eq!(FileSizeUtils::format_size(1023), "1023 B");
        assert_eq!(FileSizeUtils::format_size(12_800), "12.5 KB");
        assert_eq!(FileSizeUtils::format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
