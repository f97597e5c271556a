use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Dictionary, Stream};
use std::io::{self, Write};

/// A stream object holding `data`, deflated when `compress` is set.
pub(crate) fn maybe_deflated(mut dict: Dictionary, data: Vec<u8>, compress: bool) -> io::Result<Stream> {
    if !compress {
        return Ok(Stream::new(dict, data));
    }
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&data)?;
    dict.set("Filter", "FlateDecode");
    Ok(Stream::new(dict, encoder.finish()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use lopdf::dictionary;
    use std::io::Read;

    #[test]
    fn deflated_stream_is_marked_and_inflates_back() {
        let data = b"0 0 m 10 10 l S\n".repeat(20);
        let stream = maybe_deflated(dictionary! {}, data.clone(), true).unwrap();
        assert_eq!(
            stream.dict.get(b"Filter").unwrap().as_name().unwrap(),
            b"FlateDecode"
        );
        assert!(stream.content.len() < data.len());

        let mut inflated = Vec::new();
        ZlibDecoder::new(stream.content.as_slice())
            .read_to_end(&mut inflated)
            .unwrap();
        assert_eq!(inflated, data);
    }

    #[test]
    fn plain_stream_is_left_alone() {
        let stream = maybe_deflated(dictionary! {}, b"BT ET".to_vec(), false).unwrap();
        assert!(stream.dict.get(b"Filter").is_err());
        assert_eq!(stream.content, b"BT ET");
    }
}
