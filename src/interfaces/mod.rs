/// Interfaces Layer - External Entry Points
///
/// ## Modules
/// - `cli`: Command-line interface (main.rs logic)
/// - `http`: REST API

pub mod cli;
pub mod http;
