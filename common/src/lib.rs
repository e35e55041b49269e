pub mod buffer2;
pub mod file_format;
pub mod log_setup;
pub mod parallel;
pub mod serde;

pub use buffer2::Buffer2;
pub use file_format::{get_file_extension, FileExtensionError, FileFormatResult, SerdeFormat};
