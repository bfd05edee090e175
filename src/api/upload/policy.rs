//! Size, type and naming rules applied to every upload before it is stored.

/// Ceiling for `video/*` uploads
pub const MAX_VIDEO_BYTES: usize = 50 * 1024 * 1024;
/// Ceiling for everything else
pub const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

/// Upload folder whose files must be documents
pub const CV_FOLDER: &str = "cvs";
pub const DEFAULT_FOLDER: &str = "general";

const CV_CONTENT_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];
const CV_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

pub fn size_limit(content_type: &str) -> usize {
    if content_type.starts_with("video/") {
        MAX_VIDEO_BYTES
    } else {
        MAX_FILE_BYTES
    }
}

/// CVs pass on either an allowed content type or an allowed extension
pub fn is_allowed_cv(content_type: &str, filename: &str) -> bool {
    let filename = filename.to_ascii_lowercase();
    CV_CONTENT_TYPES.contains(&content_type)
        || CV_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}

/// Replace every character outside `[A-Za-z0-9.-]` with `_`
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Upload folder as a single safe path segment
pub fn sanitize_folder(folder: &str) -> String {
    let folder: String = folder
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if folder.is_empty() {
        DEFAULT_FOLDER.to_string()
    } else {
        folder
    }
}

/// `{folder}_{millis}_{sanitized name}`
pub fn unique_filename(folder: &str, original: &str, millis: i64) -> String {
    format!("{}_{}_{}", folder, millis, sanitize_filename(original))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn videos_get_the_larger_ceiling() {
        assert_eq!(size_limit("video/mp4"), MAX_VIDEO_BYTES);
        assert_eq!(size_limit("image/png"), MAX_FILE_BYTES);
        assert_eq!(size_limit("application/pdf"), MAX_FILE_BYTES);
    }

    #[test]
    fn cv_accepts_type_or_extension() {
        assert!(is_allowed_cv("application/pdf", "resume"));
        assert!(is_allowed_cv("application/octet-stream", "Resume.DOCX"));
        assert!(!is_allowed_cv("image/png", "resume.png"));
        assert!(!is_allowed_cv("text/plain", "resume.pdf.txt"));
    }

    #[test]
    fn filenames_and_folders_are_sanitized() {
        assert_eq!(sanitize_filename("my cv (final).pdf"), "my_cv__final_.pdf");
        assert_eq!(sanitize_folder("../etc"), "___etc");
        assert_eq!(sanitize_folder("  "), "general");
        assert_eq!(
            unique_filename("cvs", "Jane Doe.pdf", 1700000000000),
            "cvs_1700000000000_Jane_Doe.pdf"
        );
    }
}
