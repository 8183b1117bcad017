// src/lib.rs

//! Parcel courier resolution and tracking library

pub mod error;
pub mod models;
pub mod services;
pub mod utils;
