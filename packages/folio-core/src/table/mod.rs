//! Id-indexed entity tables.

#[allow(clippy::module_inception)]
mod table;

pub use table::Table;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
