mod identity;
mod memory;

pub use identity::MemoryIdentityProbe;
pub use memory::MemoryObjectStore;
