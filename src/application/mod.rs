/// Application layer - routing, routed views and the app shell
///
/// This layer drives the API ports on behalf of the views and hands view
/// state to the rendering adapters as DTOs.
pub mod dto;
pub mod factories;
pub mod routing;
pub mod shell;
pub mod views;
