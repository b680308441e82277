/// Extensions accepted by the file selector.
const ACCEPTED_EXTENSIONS: &[&str] = &["csv"];

/// True iff the filename has an extension and it is in the accepted list,
/// case-insensitive. The extension is everything after the last `.`.
pub fn has_accepted_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, extension)) => {
            ACCEPTED_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_csv() {
        assert!(has_accepted_extension("report.csv"));
        assert!(has_accepted_extension("REPORT.CSV"));
        assert!(has_accepted_extension("data.backup.csv"));
        assert!(has_accepted_extension(".csv"));
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(!has_accepted_extension("report.txt"));
        assert!(!has_accepted_extension("report.xlsx"));
        assert!(!has_accepted_extension("archive.tar.gz"));
    }

    #[test]
    fn test_rejects_missing_extension() {
        assert!(!has_accepted_extension("report"));
        assert!(!has_accepted_extension(""));
        assert!(!has_accepted_extension("report."));
    }
}
