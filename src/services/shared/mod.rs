// 共有リソース
// 全ワーカーが参照する入力キューと出力コレクション

pub mod queue;

// 公開API
pub use queue::{InputQueue, OutputCollection};
