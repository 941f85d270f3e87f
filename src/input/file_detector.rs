//! File type detection

/// OOXML word-processing MIME type, spelled out once.
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Word,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            "doc" | "docx" => FileType::Word,
            _ => FileType::Unknown,
        }
    }

    /// Detection from a declared MIME type, for callers that receive uploads
    /// rather than paths. Any `text/*` subtype is treated as plain text.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => FileType::Pdf,
            "application/msword" => FileType::Word,
            m if m == DOCX_MIME => FileType::Word,
            "text/markdown" => FileType::Markdown,
            m if m.starts_with("text/") => FileType::Text,
            _ => FileType::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("txt"), FileType::Text);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_extension("docx"), FileType::Word);
        assert_eq!(FileType::from_extension("xyz"), FileType::Unknown);
    }

    #[test]
    fn test_from_mime() {
        assert_eq!(FileType::from_mime("application/pdf"), FileType::Pdf);
        assert_eq!(FileType::from_mime("text/plain"), FileType::Text);
        assert_eq!(FileType::from_mime("text/markdown"), FileType::Markdown);
        assert_eq!(FileType::from_mime("application/msword"), FileType::Word);
        assert_eq!(FileType::from_mime(super::DOCX_MIME), FileType::Word);
        assert_eq!(FileType::from_mime("image/png"), FileType::Unknown);
    }
}
