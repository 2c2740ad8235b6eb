//! Client for the recipe service REST API

pub mod client;
pub mod models;

pub use client::RecipeClient;
