// アイテム変換の具象実装

use crate::core::Transform;

/// 値を2倍にする変換
///
/// オーバーフロー時はラップアラウンドする
#[derive(Debug, Default, Clone, Copy)]
pub struct Doubling;

impl Doubling {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for Doubling {
    fn apply(&self, value: i64) -> i64 {
        value.wrapping_mul(2)
    }
}
