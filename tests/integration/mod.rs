mod rust_source;
mod scenarios;
