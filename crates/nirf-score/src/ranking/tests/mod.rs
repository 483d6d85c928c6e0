mod categories;
mod common;
