//! CSV - カンマ区切りの整数列
//!
//! 空・非数値のフィールドは `None` として残します（全体を失敗にしない）。
//! 呼び出し側は `None` を探して不正な行を検出します。

use super::integer::string_to_integer;

/// `s` 中のカンマのバイト位置（0 始まり）
pub fn comma_positions(s: &str) -> Vec<usize> {
    s.bytes()
        .enumerate()
        .filter(|(_, b)| *b == b',')
        .map(|(i, _)| i)
        .collect()
}

/// `s` をカンマで分割し、各フィールドを [`string_to_integer`] で変換する
///
/// カンマ `n` 個なら常に `n + 1` フィールドになります。
/// `""` は不正フィールド 1 つ、`"1,2,"` は末尾が不正フィールドです。
pub fn decode_csv(s: &str) -> Vec<Option<u32>> {
    let mut fields = Vec::new();
    let mut start = 0;
    for pos in comma_positions(s) {
        fields.push(string_to_integer(&s[start..pos]));
        start = pos + 1;
    }
    fields.push(string_to_integer(&s[start..]));
    fields
}

/// 行列 chunk を行に分割して各行をデコードする
///
/// 行は `row_delimiter` で終端します（最後の行の終端は省略可）。空の chunk は 0 行です。
pub fn decode_rows(chunk: &str, row_delimiter: &str) -> Vec<Vec<Option<u32>>> {
    if chunk.is_empty() {
        return Vec::new();
    }
    let body = chunk.strip_suffix(row_delimiter).unwrap_or(chunk);
    body.split(row_delimiter).map(decode_csv).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_positions_are_zero_indexed() {
        assert_eq!(comma_positions("1,2,3"), vec![1, 3]);
        assert_eq!(comma_positions("12"), Vec::<usize>::new());
        assert_eq!(comma_positions(",,"), vec![0, 1]);
    }

    #[test]
    fn decode_csv_converts_fields() {
        assert_eq!(decode_csv("1,20,3"), vec![Some(1), Some(20), Some(3)]);
        assert_eq!(decode_csv("5"), vec![Some(5)]);
    }

    #[test]
    fn trailing_comma_leaves_invalid_last_field() {
        let fields = decode_csv("1,2,");
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.last(), Some(&None));
    }

    #[test]
    fn empty_and_garbage_fields_are_invalid() {
        assert_eq!(decode_csv(""), vec![None]);
        assert_eq!(decode_csv("1,,x3,4y"), vec![Some(1), None, None, Some(4)]);
    }

    #[test]
    fn decode_rows_with_and_without_terminator() {
        let expected = vec![vec![Some(0), Some(1)], vec![Some(1), Some(0)]];
        assert_eq!(decode_rows("0,1|1,0|", "|"), expected);
        assert_eq!(decode_rows("0,1|1,0", "|"), expected);
    }

    #[test]
    fn decode_rows_edge_cases() {
        assert!(decode_rows("", "|").is_empty());
        // 空行は 1 つの不正フィールドになる
        assert_eq!(decode_rows("0||", "|"), vec![vec![Some(0)], vec![None]]);
        assert_eq!(decode_rows("|", "|"), vec![vec![None]]);
    }
}
