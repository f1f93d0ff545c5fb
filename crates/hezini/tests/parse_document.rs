use std::io;

use hezini::decode::parser::Parser;
use hezini::document::GLOBAL_SECTION;
use hezini::{Error, KeyCase, Options, parse_bytes, parse_lines, parse_reader, parse_str};

#[test]
fn end_to_end_sections_and_keys() -> Result<(), Box<dyn std::error::Error>> {
    let lines = [
        "[core]",
        "name = test",
        "; comment",
        "",
        "[net]",
        "host=\\=localhost",
    ];
    let doc = parse_lines(lines, &Options::default())?;

    assert_eq!(doc.section_names().collect::<Vec<_>>(), ["core", "net"]);
    let core = doc.section("core").ok_or("missing core")?;
    assert_eq!(core.iter().collect::<Vec<_>>(), [("name", &"test".to_string())]);
    let net = doc.section("net").ok_or("missing net")?;
    assert_eq!(net.keys().collect::<Vec<_>>(), ["host"]);
    assert_eq!(doc.value("net", "host"), Some("=localhost"));
    Ok(())
}

#[test]
fn keys_before_first_header_go_to_global_section() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_str("top = 1\n[s]\nk = v\n", &Options::default())?;
    assert_eq!(doc.section_names().collect::<Vec<_>>(), [GLOBAL_SECTION, "s"]);
    assert_eq!(doc.value("", "top"), Some("1"));
    Ok(())
}

#[test]
fn no_global_section_without_global_keys() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_str("; header comment\n\n[only]\n", &Options::default())?;
    assert_eq!(doc.len(), 1);
    assert!(doc.section("only").is_some_and(|s| s.is_empty()));
    Ok(())
}

#[test]
fn repeated_header_merges_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let input = "[a]\nx=1\ny=2\n[b]\nz=3\n[a]\nx=9\nw=4\n";
    let doc = parse_str(input, &Options::default())?;
    assert_eq!(doc.section_names().collect::<Vec<_>>(), ["a", "b"]);
    let a = doc.section("a").ok_or("missing a")?;
    assert_eq!(a.keys().collect::<Vec<_>>(), ["x", "y", "w"]);
    assert_eq!(doc.value("a", "x"), Some("9"));
    Ok(())
}

#[test]
fn duplicate_key_last_write_wins() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_str("[s]\nk=1\nother=2\n  k  =3\n", &Options::default())?;
    let s = doc.section("s").ok_or("missing s")?;
    assert_eq!(s.keys().collect::<Vec<_>>(), ["k", "other"]);
    assert_eq!(s.get_or_default("k"), "3");
    Ok(())
}

#[test]
fn unrecognized_lines_are_skipped_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_str("[s]\njust text\nk=v\n", &Options::default())?;
    assert_eq!(doc.value("s", "k"), Some("v"));
    assert_eq!(doc.section("s").map(|s| s.len()), Some(1));
    Ok(())
}

#[test]
fn strict_rejects_unrecognized_line() {
    let err = parse_str("[s]\nk=v\njust text\n", &Options::strict()).unwrap_err();
    match err {
        Error::Syntax { line, message } => {
            assert_eq!(line, 3);
            assert!(message.contains("just text"));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn strict_accepts_well_formed_input() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_str("; c\n\n[s]\nk=v\n", &Options::strict())?;
    assert_eq!(doc.value("s", "k"), Some("v"));
    Ok(())
}

#[test]
fn case_insensitive_sections_and_keys() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_str("[Net]\nHost = a\n[NET]\nHOST = b\n", &Options::case_insensitive())?;
    assert_eq!(doc.section_names().collect::<Vec<_>>(), ["net"]);
    assert_eq!(doc.value("nEt", "host"), Some("b"));
    assert_eq!(doc.section("net").map(|s| s.key_case()), Some(KeyCase::Insensitive));
    Ok(())
}

#[test]
fn case_sensitive_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_str("[Net]\nHost = a\n[net]\nhost = b\n", &Options::default())?;
    assert_eq!(doc.section_names().collect::<Vec<_>>(), ["Net", "net"]);
    assert_eq!(doc.value("Net", "host"), None);
    Ok(())
}

#[test]
fn bytes_with_bom_and_crlf() -> Result<(), Box<dyn std::error::Error>> {
    let buf = b"\xEF\xBB\xBF[core]\r\nname = test\r\n[net] ; x\r\nhost=h";
    let doc = parse_bytes(buf, &Options::default())?;
    assert_eq!(doc.section_names().collect::<Vec<_>>(), ["core", "net"]);
    assert_eq!(doc.value("core", "name"), Some("test"));
    assert_eq!(doc.value("net", "host"), Some("h"));
    Ok(())
}

#[test]
fn bytes_with_bom_and_escapes() -> Result<(), Box<dyn std::error::Error>> {
    let buf = b"\xEF\xBB\xBF[net]\r\nhost=\\=localhost\r\nk\\=ey = a\\=b\n";
    let doc = parse_bytes(buf, &Options::default())?;
    assert_eq!(doc.section_names().collect::<Vec<_>>(), ["net"]);
    let net = doc.section("net").ok_or("missing net")?;
    assert_eq!(net.keys().collect::<Vec<_>>(), ["host", "k=ey"]);
    assert_eq!(doc.value("net", "host"), Some("=localhost"));
    assert_eq!(doc.value("net", "k=ey"), Some("a=b"));
    Ok(())
}

#[test]
fn default_section_follows_document_case() {
    let mut doc = hezini::IniDocument::with_case(KeyCase::Insensitive);
    doc.get_or_insert_default("S").set("Key", "v".to_string());
    assert_eq!(doc.value("s", "KEY"), Some("v"));
    assert_eq!(doc.get_or_default("absent").key_case(), KeyCase::Insensitive);
}

#[test]
fn reader_input() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_reader(io::Cursor::new(b"[r]\na=1\n".to_vec()), &Options::default())?;
    assert_eq!(doc.value("r", "a"), Some("1"));
    Ok(())
}

struct FailingReader;

impl io::Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("disk gone"))
    }
}

#[test]
fn reader_failure_is_io_error() {
    let err = parse_reader(FailingReader, &Options::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("disk gone"));
}

#[test]
fn parser_tracks_cursor_and_line_count() -> Result<(), Box<dyn std::error::Error>> {
    let mut parser = Parser::new(&Options::default());
    assert_eq!(parser.current_section(), GLOBAL_SECTION);
    parser.feed("[one]")?;
    parser.feed("; still one")?;
    parser.feed("garbage")?;
    assert_eq!(parser.current_section(), "one");
    parser.feed("[two]")?;
    parser.feed("k=v")?;
    assert_eq!(parser.current_section(), "two");
    assert_eq!(parser.line(), 5);
    let doc = parser.finish();
    assert_eq!(doc.value("two", "k"), Some("v"));
    assert!(doc.section("one").is_some_and(|s| s.is_empty()));
    Ok(())
}

#[test]
fn document_helpers_create_sections() {
    let mut doc = hezini::IniDocument::with_case(KeyCase::Insensitive);
    assert_eq!(doc.set_value("Core", "Name", "x"), None);
    assert_eq!(doc.set_value("core", "name", "y"), Some("x".to_string()));
    assert_eq!(doc.value("CORE", "NAME"), Some("y"));
    assert_eq!(doc.section("core").map(|s| s.key_case()), Some(KeyCase::Insensitive));
}
