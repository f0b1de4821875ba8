// Stateless or single-value services: address resolution and theming.

pub mod theme_engine;
pub mod url_resolver;
