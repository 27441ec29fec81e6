//! Terminal Pokédex over PokeAPI.
//!
//! State lives in [`state::AppState`] and changes only through [`reducer::reducer`];
//! network work is described by [`effect::Effect`] and executed by the binary.

pub mod action;
pub mod api;
pub mod assets;
pub mod config;
pub mod dex;
pub mod effect;
pub mod evolution;
pub mod fetch;
pub mod forms;
pub mod logging;
pub mod normalize;
pub mod reducer;
pub mod router;
pub mod state;
pub mod type_chart;
pub mod ui;
