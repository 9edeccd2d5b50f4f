//! State - Parser の状態
//!
//! # 状態遷移
//! - initial → decoding → valid | invalid
//! - valid / invalid は終端（以降の遷移なし）

/// DecoderState は 1 メッセージ分のデコード状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// まだ decode していない
    #[default]
    Initial,
    /// decode 中
    Decoding,
    /// decode 成功（response を取得可能）
    Valid,
    /// decode 失敗
    Invalid,
}

impl DecoderState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DecoderState::Valid | DecoderState::Invalid)
    }

    /// `self -> next` が許される遷移か
    pub fn can_transition_to(self, next: DecoderState) -> bool {
        matches!(
            (self, next),
            (DecoderState::Initial, DecoderState::Decoding)
                | (DecoderState::Decoding, DecoderState::Valid)
                | (DecoderState::Decoding, DecoderState::Invalid)
        )
    }
}
