// Utility functions
// Helper types shared by pages

pub mod load_state;
pub mod request_sequence;

pub use load_state::LoadState;
pub use request_sequence::RequestSequence;
