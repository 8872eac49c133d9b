mod index;

pub use index::MemoryTutorialIndex;
