pub mod forces;

pub use forces::{force_components, ForceComponents};
