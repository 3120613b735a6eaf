pub mod repeats;
pub mod sort;
pub mod table;
pub mod text;

pub use table::SuffixArray;
pub use text::Text;
