/// Filesystem adapters for input files, the logo cache, and map output
mod file_reader;
mod file_writer;
mod logo_cache;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use logo_cache::FileSystemLogoCache;
