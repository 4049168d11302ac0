/// How the converted code is saved and highlighted for a target language.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputFormat {
    pub extension: &'static str,
    pub highlight: &'static str,
    pub mime: &'static str,
}

impl OutputFormat {
    pub fn for_language(lang: &str) -> Self {
        let (extension, highlight, mime) = match lang {
            "Python" => (".py", "python", "text/x-python"),
            "Java" => (".java", "java", "text/x-java-source"),
            "C++" => (".cpp", "cpp", "text/x-c++src"),
            "JavaScript" => (".js", "javascript", "application/javascript"),
            _ => (".txt", "text", "text/plain"),
        };
        Self { extension, highlight, mime }
    }

    pub fn file_name(&self) -> String {
        format!("converted{}", self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Language;

    #[test]
    fn test_known_languages() {
        let cpp = OutputFormat::for_language(Language::Cpp.name());
        assert_eq!(cpp.file_name(), "converted.cpp");
        assert_eq!(cpp.mime, "text/x-c++src");

        let js = OutputFormat::for_language("JavaScript");
        assert_eq!(js.mime, "application/javascript");
        assert_eq!(js.highlight, "javascript");
    }

    #[test]
    fn test_unknown_language_falls_back_to_text() {
        let fmt = OutputFormat::for_language("Fortran");
        assert_eq!(fmt.file_name(), "converted.txt");
        assert_eq!(fmt.mime, "text/plain");
    }
}
