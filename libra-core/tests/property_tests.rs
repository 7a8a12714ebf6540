//! Property tests for the codecs

use libra_core::decoder::{CsvDecoder, JsonLinesDecoder, XmlDecoder};
use libra_core::encoder::{CsvEncoder, JsonLinesEncoder, XmlEncoder};
use libra_core::{read_cover, write_cover, Book, Decoder, Encoder};
use proptest::prelude::*;
use tempfile::TempDir;

/// Free-form text: XML and CSV metacharacters, line breaks, tabs and
/// non-ASCII letters, anywhere in the value
fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 \t\n,.;#&<>'\"éüßøΩжд中文字🙂-]{0,24}",
        "[ \t\n]{1,4}[a-zé中]{1,8}[ \t\n]{1,4}",
        any::<String>().prop_filter("no carriage returns", |s| !s.contains('\r')),
    ]
}

fn book() -> impl Strategy<Value = Book> {
    (
        text(),
        text(),
        any::<u32>(),
        proptest::option::of("[a-z0-9_/]{1,16}\\.(png|jpg)"),
    )
        .prop_map(|(title, author, pages, cover_path)| Book {
            title,
            author,
            pages,
            cover_path,
        })
}

fn books() -> impl Strategy<Value = Vec<Book>> {
    proptest::collection::vec(book(), 1..8)
}

proptest! {
    #[test]
    fn json_lines_round_trip(books in books()) {
        let encoded = JsonLinesEncoder::new().encode_to_vec(&books).unwrap();
        prop_assert_eq!(JsonLinesDecoder::new().decode_bytes(&encoded).unwrap(), books);
    }

    #[test]
    fn xml_round_trip(books in books()) {
        let encoded = XmlEncoder::new().encode_to_vec(&books).unwrap();
        prop_assert_eq!(XmlDecoder::new().decode_bytes(&encoded).unwrap(), books);
    }

    #[test]
    fn csv_round_trip_clears_cover(books in books()) {
        let encoded = CsvEncoder::new().encode_to_vec(&books).unwrap();
        let expected: Vec<Book> = books
            .iter()
            .map(|b| Book::new(b.title.clone(), b.author.clone(), b.pages))
            .collect();
        prop_assert_eq!(CsvDecoder::new().decode_bytes(&encoded).unwrap(), expected);
    }

    #[test]
    fn cover_passthrough(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover.bin");
        write_cover(&path, &data).unwrap();
        prop_assert_eq!(read_cover(&path).unwrap(), data);
    }
}
