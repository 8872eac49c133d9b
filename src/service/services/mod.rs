mod tutorial;

pub use tutorial::{TutorialService, DEFAULT_STORAGE_TIMEOUT};
