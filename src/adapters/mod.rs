// Adapters layer: concrete implementations of the domain ports (http source, output surfaces)
// and the line-oriented operator prompt.

pub mod display;
pub mod http;
pub mod prompt;
