// src/acquire/fetcher.rs

//! Fetch the vendor's archives over HTTP.
//!
//! The member area is behind HTTP basic authentication. Each record type
//! has a directory `<base>/<Tag>/` whose `index.html` lists its archives in
//! the list holding the text `単体データコーナー`. The master types (`KZA`,
//! `CZA`, `MZA`) are instead listed as table rows of `<base>/index.html`.
//! Pages are Shift_JIS.

use crate::acquire::{Fetcher, Url};
use crate::data::layout::RecordTypeTag;

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Error, ErrorKind, Result, Write};
use std::path::PathBuf;

use ::base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use ::base64::Engine;
use ::encoding_rs::SHIFT_JIS;
use ::lazy_static::lazy_static;
use ::regex::Regex;
#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

/// Environment variable holding the member user name.
pub const ENV_USER: &str = "JRDB_USER";
/// Environment variable holding the member password.
pub const ENV_PASSWORD: &str = "JRDB_PASSWORD";
/// Environment variable overriding [`BASE_URL_DEFAULT`].
pub const ENV_BASE_URL: &str = "JRDB_BASE_URL";

pub const BASE_URL_DEFAULT: &str = "http://www.jrdb.com/member/data/";
pub const MEMBER_PAGE_DEFAULT: &str = "index.html";

/// Marks the list of archive links on a record type's page.
pub const DATA_CORNER_MARK: &str = "単体データコーナー";

lazy_static! {
    static ref REGEX_HREF: Regex = Regex::new(r#"(?i)href\s*=\s*["']([^"']+)["']"#).unwrap();
    /// opening or closing `ul` tag; group 1 is `/` for a closing tag
    static ref REGEX_UL_TAG: Regex = Regex::new(r"(?i)<(/?)ul[\s>]").unwrap();
}

/// Member credentials.
#[derive(Clone, Eq, PartialEq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter,
    ) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    pub fn new(
        user: String,
        password: String,
    ) -> Credentials {
        Credentials { user, password }
    }

    /// Read [`ENV_USER`] and [`ENV_PASSWORD`]. Both must be set and
    /// non-empty.
    pub fn from_env() -> Result<Credentials> {
        let user: String = std::env::var(ENV_USER).unwrap_or_default();
        let password: String = std::env::var(ENV_PASSWORD).unwrap_or_default();
        if user.is_empty() || password.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("set the environment variables {} and {}", ENV_USER, ENV_PASSWORD),
            ));
        }

        Ok(Credentials { user, password })
    }

    /// Value of the `Authorization` header.
    pub fn basic_authorization(&self) -> String {
        let token: String = BASE64_STANDARD.encode(format!("{}:{}", self.user, self.password));
        format!("Basic {}", token)
    }
}

/// How archive links are found on the member page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArchiveListing {
    /// Every link in the list holding [`DATA_CORNER_MARK`].
    DataCorner,
    /// `.lzh` links in table rows holding this label.
    MasterTable(&'static str),
}

/// Row label of a master type on the data index page.
pub const fn master_label(record_type: RecordTypeTag) -> Option<&'static str> {
    match record_type {
        RecordTypeTag::KZA => Some("JRDB騎手データ(KZA)"),
        RecordTypeTag::CZA => Some("JRDB調教師データ(CZA)"),
        RecordTypeTag::MZA => Some("JRDB抹消馬データ(MZA)"),
        _ => None,
    }
}

/// Directory name of a record type under the base URL, e.g. `Kyi` for
/// `KYI`.
pub fn tag_dir_name(record_type: RecordTypeTag) -> String {
    let tag: &str = record_type.as_str();
    let mut name: String = String::with_capacity(tag.len());
    for (at, c) in tag.chars().enumerate() {
        if at == 0 {
            name.push(c.to_ascii_uppercase());
        } else {
            name.push(c.to_ascii_lowercase());
        }
    }

    name
}

/// Join a link found on a page to the page's directory URL.
pub fn join_url(
    base: &str,
    href: &str,
) -> Url {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Url::from(href);
    }
    let href: &str = href.trim_start_matches("./");
    if base.ends_with('/') {
        format!("{}{}", base, href)
    } else {
        format!("{}/{}", base, href)
    }
}

fn hrefs(html: &str) -> impl Iterator<Item = &str> {
    REGEX_HREF
        .captures_iter(html)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Byte ranges of the outermost `<ul>` lists of `html`, each from its
/// opening tag to its matching `</ul>`. An unclosed list runs to the end.
fn outer_lists(html: &str) -> Vec<(usize, usize)> {
    let mut lists: Vec<(usize, usize)> = Vec::new();
    let mut depth: usize = 0;
    let mut beg: usize = 0;
    for captures in REGEX_UL_TAG.captures_iter(html) {
        let (tag, slash) = match (captures.get(0), captures.get(1)) {
            (Some(tag), Some(slash)) => (tag, slash),
            _ => continue,
        };
        if slash.as_str().is_empty() {
            if depth == 0 {
                beg = tag.start();
            }
            depth += 1;
        } else if depth > 0 {
            depth -= 1;
            if depth == 0 {
                lists.push((beg, tag.start()));
            }
        }
        // a stray `</ul>` outside any list is ignored
    }
    if depth > 0 {
        lists.push((beg, html.len()));
    }

    lists
}

/// The `href` values of the first `<ul>` list holding
/// [`DATA_CORNER_MARK`], nested lists included. Empty if there is no such
/// list.
pub fn scrape_data_corner_links(html: &str) -> Vec<String> {
    defn!("({} bytes)", html.len());
    let marks: Vec<usize> = html
        .match_indices(DATA_CORNER_MARK)
        .map(|(at, _)| at)
        .collect();
    if marks.is_empty() {
        defx!("no mark");
        return Vec::new();
    }
    let (beg, end): (usize, usize) = match outer_lists(html)
        .into_iter()
        .find(|(beg, end)| marks.iter().any(|mark| beg < mark && mark < end))
    {
        Some(list) => list,
        None => {
            defx!("no <ul> holds the mark");
            return Vec::new();
        }
    };
    let links: Vec<String> = hrefs(&html[beg..end]).map(String::from).collect();
    defx!("{} links", links.len());

    links
}

/// The `.lzh` `href` values of each `<tr>` row holding `label`.
pub fn scrape_master_links(
    html: &str,
    label: &str,
) -> Vec<String> {
    defn!("({} bytes, {:?})", html.len(), label);
    let lower: String = html.to_ascii_lowercase();
    let mut links: Vec<String> = Vec::new();
    let mut at: usize = 0;
    while let Some(beg) = lower[at..].find("<tr").map(|found| at + found) {
        let end: usize = match lower[beg..].find("</tr>") {
            Some(found) => beg + found,
            None => html.len(),
        };
        let row: &str = &html[beg..end];
        if row.contains(label) {
            links.extend(
                hrefs(row)
                    .filter(|href| href.to_ascii_lowercase().ends_with(".lzh"))
                    .map(String::from),
            );
        }
        at = end;
        if at >= html.len() {
            break;
        }
        // step past the `<` so the same row is not found again
        at += 1;
    }
    defx!("{} links", links.len());

    links
}

/// Fetch archives over HTTP with basic authentication.
///
/// Failures are returned to the caller; nothing is retried.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    /// Directory URL the member page and its links are relative to.
    page_base: Url,
    page: String,
    listing: ArchiveListing,
    credentials: Credentials,
    download_dir: PathBuf,
}

impl HttpFetcher {
    pub fn new(
        page_base: Url,
        page: String,
        listing: ArchiveListing,
        credentials: Credentials,
        download_dir: PathBuf,
    ) -> HttpFetcher {
        HttpFetcher {
            page_base,
            page,
            listing,
            credentials,
            download_dir,
        }
    }

    /// The fetcher for `record_type` under `base_url`.
    pub fn for_record_type(
        record_type: RecordTypeTag,
        base_url: &str,
        page: String,
        credentials: Credentials,
        download_dir: PathBuf,
    ) -> HttpFetcher {
        let (page_base, listing) = match master_label(record_type) {
            Some(label) => (join_url(base_url, ""), ArchiveListing::MasterTable(label)),
            None => (
                join_url(base_url, &format!("{}/", tag_dir_name(record_type))),
                ArchiveListing::DataCorner,
            ),
        };
        HttpFetcher::new(page_base, page, listing, credentials, download_dir)
    }

    pub fn page_url(&self) -> Url {
        join_url(&self.page_base, &self.page)
    }

    pub const fn listing(&self) -> ArchiveListing {
        self.listing
    }

    fn get(
        &self,
        url: &str,
    ) -> Result<::ureq::http::Response<::ureq::Body>> {
        let authorization: String = self.credentials.basic_authorization();
        ::ureq::get(url)
            .header("Authorization", authorization.as_str())
            .call()
            .map_err(|err| Error::other(format!("GET {}: {}", url, err)))
    }

    /// Archive links of a Shift_JIS member page.
    pub fn links_of_page(
        &self,
        page: &[u8],
    ) -> Vec<Url> {
        let (html, _encoding, _had_errors) = SHIFT_JIS.decode(page);
        defo!("page decoded with errors {}", _had_errors);
        let hrefs: Vec<String> = match self.listing {
            ArchiveListing::DataCorner => scrape_data_corner_links(&html),
            ArchiveListing::MasterTable(label) => scrape_master_links(&html, label),
        };
        hrefs
            .iter()
            .map(|href| join_url(&self.page_base, href))
            .collect()
    }
}

impl Fetcher for HttpFetcher {
    fn list_archives(&self) -> Result<Vec<Url>> {
        let url: Url = self.page_url();
        defn!("({:?})", url);
        let response = self.get(&url)?;
        let page: Vec<u8> = response
            .into_body()
            .read_to_vec()
            .map_err(|err| Error::other(format!("read {}: {}", url, err)))?;
        let links: Vec<Url> = self.links_of_page(&page);
        if links.is_empty() {
            defx!("no links");
            return Err(Error::new(
                ErrorKind::NotFound,
                format!("no archive links found on {}", url),
            ));
        }
        defx!("{} links", links.len());

        Ok(links)
    }

    fn download(
        &self,
        url: &Url,
    ) -> Result<PathBuf> {
        defn!("({:?})", url);
        let name: &str = match url.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => {
                defx!("no file name in URL");
                return Err(Error::new(
                    ErrorKind::InvalidInput,
                    format!("URL {:?} does not name a file", url),
                ));
            }
        };
        create_dir_all(&self.download_dir)?;
        let path: PathBuf = self.download_dir.join(name);
        let response = self.get(url)?;
        let mut reader = response.into_body().into_reader();
        let mut writer = BufWriter::new(File::create(&path)?);
        let _copied: u64 = std::io::copy(&mut reader, &mut writer)?;
        writer.flush()?;
        defx!("wrote {} bytes to {:?}", _copied, path);

        Ok(path)
    }
}
