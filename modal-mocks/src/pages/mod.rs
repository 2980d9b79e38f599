//! Mock pages

mod mock_index;

pub use mock_index::{MockIndex, MockModal};
