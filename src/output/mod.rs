// Output module - report formatting (Terminal, JSON, CSV)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    JSON,
    JSONPretty,
    CSV,
}

pub mod csv;
pub mod json;
pub mod terminal;
