#[cfg(test)]
mod counting;
mod memory;
mod r#trait;

#[cfg(test)]
pub(crate) use counting::CountingSource;
pub use memory::MemoryMetadataSource;
pub use r#trait::MetadataSource;
