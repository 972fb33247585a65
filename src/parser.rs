//! Parsing of UR Chintai listing URLs and listing pages.
//!
//! A property page lives at
//! `https://www.ur-net.go.jp/chintai/<area>/<prefecture>/AA_BBBC.html` and a
//! room page at `.../AA_BBBC_room.html?JKSS=DDDDDDDDD`, where
//! - AA: store code
//! - BBB: house code
//! - C: type
//! - DDDDDDDDD: room id

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{Result, UrError};
use crate::models::{PropertyCode, RoomCode};

static PROPERTY_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://www\.ur-net\.go\.jp/chintai/\w+/\w+/(\d{2})_(\d{3})(\d)\.html$")
        .expect("property URL pattern is valid")
});

static ROOM_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https://www\.ur-net\.go\.jp/chintai/\w+/\w+/(\d{2})_(\d{3})(\d)_room\.html\?JKSS=(\d{9})$",
    )
    .expect("room URL pattern is valid")
});

static ARTICLE_HEADING: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.article_headings").expect("heading selector is valid"));

static ITEM_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.item_title").expect("title selector is valid"));

/// Extract store code, house code and type from a property page URL
pub fn parse_property_code_from_url(url: Option<&str>) -> Result<PropertyCode> {
    let url = require_url(url)?;
    let caps = PROPERTY_URL.captures(url).ok_or_else(|| invalid(url))?;

    Ok(PropertyCode::from_parts(
        caps[1].to_string(),
        caps[2].to_string(),
        caps[3].to_string(),
    ))
}

/// Extract store code, house code, type and room id from a room page URL
pub fn parse_room_code_from_url(url: Option<&str>) -> Result<RoomCode> {
    let url = require_url(url)?;
    let caps = ROOM_URL.captures(url).ok_or_else(|| invalid(url))?;

    let property = PropertyCode::from_parts(
        caps[1].to_string(),
        caps[2].to_string(),
        caps[3].to_string(),
    );
    Ok(RoomCode::from_parts(property, caps[4].to_string()))
}

/// The property name is not part of any API response, so it is read from the
/// `span.item_title` inside the page's `h1.article_headings`.
pub fn parse_property_name_from_content(html_doc: &str) -> Result<String> {
    let document = Html::parse_document(html_doc);

    let heading = document
        .select(&ARTICLE_HEADING)
        .next()
        .ok_or(UrError::ParseError)?;
    let title = heading
        .select(&ITEM_TITLE)
        .next()
        .ok_or(UrError::ParseError)?;

    Ok(title.text().collect::<String>().trim().to_string())
}

fn require_url(url: Option<&str>) -> Result<&str> {
    url.ok_or(UrError::EmptyInput)
}

fn invalid(url: &str) -> UrError {
    UrError::InvalidFormat {
        url: url.to_string(),
    }
}
