//! Command implementations

mod categorize;
mod forecast;
mod train;

pub use categorize::{cmd_batch, cmd_categories, cmd_categorize};
pub use forecast::{cmd_forecast, cmd_trends};
pub use train::{cmd_info, cmd_train};

use std::path::Path;

use sift_core::{ExpenseCategorizer, ModelStore};

/// Build a categorizer backed by the given path, or the default location.
fn categorizer_for(model: Option<&Path>) -> ExpenseCategorizer {
    let store = match model {
        Some(path) => ModelStore::new(path),
        None => ModelStore::default(),
    };
    ExpenseCategorizer::new(store)
}
