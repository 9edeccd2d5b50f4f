/// `atoi` と同じ読み方で `s` を整数にする（符号は扱わない）
///
/// 空文字列、または先頭が ASCII 数字でなければ `None`。
/// それ以外は先頭の数字列だけを読み、後ろは無視します（`"42x"` は `Some(42)`）。
/// `u32` に収まらない数字列は `None`。
pub fn string_to_integer(s: &str) -> Option<u32> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}
