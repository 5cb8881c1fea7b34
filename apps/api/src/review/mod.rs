pub mod handlers;
pub mod upload;

/// File name offered for the downloadable feedback.
pub const DOWNLOAD_FILE_NAME: &str = "analisis_cv.txt";
