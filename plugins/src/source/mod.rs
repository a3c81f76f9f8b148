mod fs;

pub use fs::FsMetadataSource;
