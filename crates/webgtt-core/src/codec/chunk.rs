//! Chunk extraction.

/// `*cursor` から次の `sentinel` までを返し、cursor を sentinel の直後に進める
///
/// `None` は chunk 境界が見つからなかったことを表します。
/// その場合 cursor は `message` の末尾まで進むので、`None` を無視しても続きは読めません。
pub fn next_chunk<'a>(message: &'a str, sentinel: &str, cursor: &mut usize) -> Option<&'a str> {
    let start = *cursor;
    let Some(rest) = message.get(start..) else {
        *cursor = message.len();
        return None;
    };
    match rest.find(sentinel) {
        Some(offset) => {
            *cursor = start + offset + sentinel.len();
            Some(&rest[..offset])
        }
        None => {
            *cursor = message.len();
            None
        }
    }
}
