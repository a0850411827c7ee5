pub mod config {
    pub mod env_loader;
    pub mod model;
}

pub mod listing {
    pub mod aggregate;
    pub mod dto;
    pub mod error;
    pub mod lookup;
    pub mod model;
    pub mod path;
}

pub mod input;
pub mod output;
pub mod tracing;
