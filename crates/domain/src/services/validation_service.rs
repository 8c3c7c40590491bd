use crate::entities::video::file_extension;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 5] = ["mp4", "webm", "mkv", "avi", "mov"];
pub const DEFAULT_MAX_VIDEO_SIZE_MB: u64 = 500;

const BYTES_PER_MB: u64 = 1024 * 1024;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+\n?\z")
            .expect("email pattern is valid")
    })
}

fn disallowed_filename_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\w\s\-.]").expect("filename pattern is valid"))
}

fn whitespace_runs() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Upload policy checks shared by the user and video services.
///
/// Stateless apart from the configured policy: every check is a pure
/// function of its input.
#[derive(Debug, Clone)]
pub struct ValidationService {
    allowed_extensions: BTreeSet<String>,
    max_video_size_mb: u64,
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_VIDEO_SIZE_MB)
    }
}

impl ValidationService {
    pub fn new<I, S>(allowed_extensions: I, max_video_size_mb: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
            max_video_size_mb,
        }
    }

    pub fn allowed_extensions(&self) -> impl Iterator<Item = &str> {
        self.allowed_extensions.iter().map(String::as_str)
    }

    /// Allowed set rendered for error messages, e.g. `avi, mkv, mov`.
    pub fn allowed_extensions_display(&self) -> String {
        self.allowed_extensions().collect::<Vec<_>>().join(", ")
    }

    pub fn max_video_size_bytes(&self) -> u64 {
        self.max_video_size_mb.saturating_mul(BYTES_PER_MB)
    }

    /// Fails closed when the filename has no `.` at all.
    pub fn validate_file_extension(&self, filename: &str) -> bool {
        match file_extension(filename) {
            Some(ext) => self.allowed_extensions.contains(&ext),
            None => false,
        }
    }

    /// Upper bound is inclusive; zero and negative sizes are rejected.
    pub fn validate_file_size(&self, size_bytes: i64) -> bool {
        size_bytes > 0 && (size_bytes as u64) <= self.max_video_size_bytes()
    }

    /// Syntactic check only. A single trailing newline is tolerated; the
    /// `User` constructor trims it away.
    pub fn validate_email(email: &str) -> bool {
        email_pattern().is_match(email)
    }

    /// Strips everything except word characters, whitespace, `-` and `.`,
    /// then replaces each whitespace run with a single `_`.
    pub fn sanitize_filename(filename: &str) -> String {
        let stripped = disallowed_filename_chars().replace_all(filename, "");
        whitespace_runs().replace_all(&stripped, "_").into_owned()
    }
}
