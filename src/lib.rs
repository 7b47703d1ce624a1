pub mod actors;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod http;
pub mod interactor;
pub mod models;
pub mod search;
pub mod terminal;
pub mod wireframe;
