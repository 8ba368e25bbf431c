// Capabilities injected into pages and actions

pub mod navigation;

pub use navigation::Navigate;
