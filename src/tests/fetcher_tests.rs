// src/tests/fetcher_tests.rs

//! tests for `src/acquire/fetcher.rs`
//!
//! Nothing here touches the network.

#![allow(non_snake_case)]

use crate::acquire::fetcher::{
    join_url,
    master_label,
    scrape_data_corner_links,
    scrape_master_links,
    tag_dir_name,
    ArchiveListing,
    Credentials,
    HttpFetcher,
    BASE_URL_DEFAULT,
    MEMBER_PAGE_DEFAULT,
};
use crate::acquire::Url;
use crate::data::layout::RecordTypeTag;

use std::path::PathBuf;

use ::encoding_rs::SHIFT_JIS;
use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const DATA_CORNER_PAGE: &str = r#"<html><body>
<ul class="menu"><li><a href="../index.html">top</a></li></ul>
<h3>過去データ</h3>
<ul>
<li>単体データコーナー</li>
<li><a href="KYI240106.lzh">KYI240106.lzh</a></li>
<li><a HREF='./KYI240107.lzh'>KYI240107.lzh</a></li>
<li><a href="http://other.example/KYI240113.lzh">mirror</a></li>
</ul>
<ul><li><a href="Kyi_2023.zip">year pack</a></li></ul>
</body></html>"#;

const MASTER_PAGE: &str = r#"<html><body><table>
<tr><td>JRDB騎手データ(KZA)</td><td><a href="Kza/KZA240106.lzh">lzh</a></td><td><a href="Kza/KZA240106.zip">zip</a></td></tr>
<tr><td>JRDB調教師データ(CZA)</td><td><a href="Cza/CZA240106.lzh">lzh</a></td></tr>
<tr><td>JRDB騎手データ(KZA)</td><td><a href="Kza/KZA240113.LZH">lzh</a></td></tr>
</table></body></html>"#;

fn credentials() -> Credentials {
    Credentials::new(String::from("user"), String::from("pass"))
}

#[test]
fn test_Credentials_basic_authorization() {
    assert_eq!(credentials().basic_authorization(), "Basic dXNlcjpwYXNz");
}

#[test]
fn test_Credentials_debug_hides_password() {
    let debug: String = format!("{:?}", credentials());
    assert!(debug.contains("user"));
    assert!(!debug.contains("pass\""));
}

#[test_case(RecordTypeTag::KYI, "Kyi")]
#[test_case(RecordTypeTag::OZ, "Oz")]
#[test_case(RecordTypeTag::SRB, "Srb")]
fn test_tag_dir_name(
    record_type: RecordTypeTag,
    expect: &str,
) {
    assert_eq!(tag_dir_name(record_type), expect);
}

#[test_case(RecordTypeTag::KZA, true)]
#[test_case(RecordTypeTag::CZA, true)]
#[test_case(RecordTypeTag::MZA, true)]
#[test_case(RecordTypeTag::KYI, false)]
#[test_case(RecordTypeTag::BAC, false)]
fn test_master_label(
    record_type: RecordTypeTag,
    is_master: bool,
) {
    match master_label(record_type) {
        Some(label) => {
            assert!(is_master);
            assert!(label.contains(record_type.as_str()));
        }
        None => assert!(!is_master),
    }
}

#[test_case("http://h/data/Kyi/", "KYI240106.lzh", "http://h/data/Kyi/KYI240106.lzh")]
#[test_case("http://h/data/Kyi", "KYI240106.lzh", "http://h/data/Kyi/KYI240106.lzh"; "no slash")]
#[test_case("http://h/data/Kyi/", "./KYI240106.lzh", "http://h/data/Kyi/KYI240106.lzh"; "dot slash")]
#[test_case("http://h/data/Kyi/", "https://x/a.lzh", "https://x/a.lzh"; "absolute")]
#[test_case("http://h/data/", "", "http://h/data/"; "empty")]
fn test_join_url(
    base: &str,
    href: &str,
    expect: &str,
) {
    assert_eq!(join_url(base, href), expect);
}

#[test]
fn test_scrape_data_corner_links() {
    assert_eq!(
        scrape_data_corner_links(DATA_CORNER_PAGE),
        vec!["KYI240106.lzh", "./KYI240107.lzh", "http://other.example/KYI240113.lzh"]
    );
}

/// the whole outer list is taken when lists nest
#[test_case(
    "<ul>\n<li>単体データコーナー\n<ul><li><a href=\"KYI240106.lzh\">a</a></li></ul>\n</li>\n<li><a href=\"KYI240113.lzh\">b</a></li>\n</ul>\n<ul><li><a href=\"other.lzh\">c</a></li></ul>",
    &["KYI240106.lzh", "KYI240113.lzh"];
    "mark before nested list"
)]
#[test_case(
    "<UL><li><a href=\"KYI240106.lzh\">a</a><ul class=\"sub\"><li>単体データコーナー</li></ul></li><li><a href=\"KYI240113.lzh\">b</a></li></UL>",
    &["KYI240106.lzh", "KYI240113.lzh"];
    "mark inside nested list"
)]
#[test_case(
    "</ul><p>単体データコーナー</p><ul><li><a href=\"a.lzh\">a</a></li></ul><ul><li>単体データコーナー<a href=\"b.lzh\">b</a>",
    &["b.lzh"];
    "stray close and unclosed list"
)]
fn test_scrape_data_corner_links_nested(
    html: &str,
    expect: &[&str],
) {
    assert_eq!(scrape_data_corner_links(html), expect);
}

#[test]
fn test_scrape_data_corner_links_no_mark() {
    assert!(scrape_data_corner_links("<ul><li><a href=\"a.lzh\">a</a></li></ul>").is_empty());
    assert!(scrape_data_corner_links("単体データコーナー <a href=\"a.lzh\">a</a>").is_empty());
}

#[test]
fn test_scrape_master_links() {
    assert_eq!(
        scrape_master_links(MASTER_PAGE, "JRDB騎手データ(KZA)"),
        vec!["Kza/KZA240106.lzh", "Kza/KZA240113.LZH"]
    );
    assert_eq!(
        scrape_master_links(MASTER_PAGE, "JRDB調教師データ(CZA)"),
        vec!["Cza/CZA240106.lzh"]
    );
    assert!(scrape_master_links(MASTER_PAGE, "JRDB抹消馬データ(MZA)").is_empty());
}

#[test]
fn test_for_record_type() {
    let fetcher = HttpFetcher::for_record_type(
        RecordTypeTag::KYI,
        BASE_URL_DEFAULT,
        String::from(MEMBER_PAGE_DEFAULT),
        credentials(),
        PathBuf::from("tmp"),
    );
    assert_eq!(fetcher.page_url(), "http://www.jrdb.com/member/data/Kyi/index.html");
    assert_eq!(fetcher.listing(), ArchiveListing::DataCorner);

    let fetcher = HttpFetcher::for_record_type(
        RecordTypeTag::KZA,
        BASE_URL_DEFAULT,
        String::from(MEMBER_PAGE_DEFAULT),
        credentials(),
        PathBuf::from("tmp"),
    );
    assert_eq!(fetcher.page_url(), "http://www.jrdb.com/member/data/index.html");
    assert_eq!(fetcher.listing(), ArchiveListing::MasterTable("JRDB騎手データ(KZA)"));
}

/// member pages are Shift_JIS
#[test]
fn test_links_of_page_shift_jis() {
    let fetcher = HttpFetcher::for_record_type(
        RecordTypeTag::KYI,
        "http://h/data",
        String::from(MEMBER_PAGE_DEFAULT),
        credentials(),
        PathBuf::from("tmp"),
    );
    let (page, _encoding, had_errors) = SHIFT_JIS.encode(DATA_CORNER_PAGE);
    assert!(!had_errors);
    let links: Vec<Url> = fetcher.links_of_page(&page);
    assert_eq!(
        links,
        vec![
            "http://h/data/Kyi/KYI240106.lzh",
            "http://h/data/Kyi/KYI240107.lzh",
            "http://other.example/KYI240113.lzh",
        ]
    );
}

#[test]
fn test_links_of_page_master() {
    let fetcher = HttpFetcher::for_record_type(
        RecordTypeTag::CZA,
        "http://h/data/",
        String::from(MEMBER_PAGE_DEFAULT),
        credentials(),
        PathBuf::from("tmp"),
    );
    let (page, _encoding, _had_errors) = SHIFT_JIS.encode(MASTER_PAGE);
    assert_eq!(fetcher.links_of_page(&page), vec!["http://h/data/Cza/CZA240106.lzh"]);
}
