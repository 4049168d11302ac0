use crate::error::UploadError;

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["py", "java", "cpp", "js", "txt"];

/// Value for the file input's `accept` attribute.
pub fn accept_attr() -> String {
    ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn check_extension(file_name: &str) -> Result<(), UploadError> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(UploadError::UnsupportedExtension(file_name.to_string()))
    }
}

/// UTF-8 if valid, otherwise Latin-1 where each byte is its own code point.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeOutcome {
    Loaded,
    Appended,
}

/// Returns the new input text. Existing non-blank input is kept and the upload appended.
pub fn merge_into_input(existing: &str, uploaded: &str) -> (String, MergeOutcome) {
    if existing.trim().is_empty() {
        (uploaded.to_string(), MergeOutcome::Loaded)
    } else {
        (
            format!("{}\n\n{}", existing.trim_end(), uploaded),
            MergeOutcome::Appended,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        assert_eq!(decode_text("print('ñ')".as_bytes().to_vec()), "print('ñ')");
    }

    #[test]
    fn test_decode_falls_back_to_latin1() {
        // 0xE9 is 'é' in Latin-1 but an invalid lone byte in UTF-8.
        let bytes = vec![b'c', b'a', b'f', 0xE9];
        assert_eq!(decode_text(bytes), "café");
    }

    #[test]
    fn test_merge_into_empty_replaces() {
        let (text, outcome) = merge_into_input("  \n ", "x = 1\n");
        assert_eq!(text, "x = 1\n");
        assert_eq!(outcome, MergeOutcome::Loaded);
    }

    #[test]
    fn test_merge_into_existing_appends_after_blank_line() {
        let (text, outcome) = merge_into_input("a = 1", "b = 2");
        assert_eq!(text, "a = 1\n\nb = 2");
        assert_eq!(outcome, MergeOutcome::Appended);

        let (text, _) = merge_into_input("a = 1\n\n\n", "b = 2");
        assert_eq!(text, "a = 1\n\nb = 2");
    }

    #[test]
    fn test_extension_allow_list() {
        assert!(check_extension("main.py").is_ok());
        assert!(check_extension("Main.JAVA").is_ok());
        assert!(check_extension("notes.txt").is_ok());
        assert!(matches!(
            check_extension("image.png"),
            Err(UploadError::UnsupportedExtension(_))
        ));
        assert!(check_extension("Makefile").is_err());
        assert_eq!(accept_attr(), ".py,.java,.cpp,.js,.txt");
    }
}
