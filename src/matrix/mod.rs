// Matrix data structures and operations

pub mod add;
pub mod canonical;
pub mod config;
pub mod multiply;
pub mod output;
pub mod row_index;
pub mod sparse;
pub mod store;
pub mod transpose;
pub mod triplet;

pub use add::add;
pub use config::EngineConfig;
pub use multiply::multiply;
pub use output::DenseRows;
pub use row_index::RowIndex;
pub use sparse::SparseMatrix;
pub use store::TripletStore;
pub use transpose::transpose;
pub use triplet::{Scalar, Triplet};
