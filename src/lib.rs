//! filmtime: a terminal browser for movies and TV shows backed by TMDB

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod usecase;
pub mod view;

pub use error::{ApiResult, GeneralError};
