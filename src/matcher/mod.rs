mod matcher;
mod parsing;

pub use matcher::supports_band;
pub use parsing::parse_frequency_spec;
