// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Cookie attributes and `Cookie` header parsing.

use axum::http::{header::COOKIE, HeaderMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes applied to every cookie the server sets.
///
/// The default is the cross-site policy the web client needs:
/// `SameSite=None; Secure; HttpOnly` on path `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    pub same_site: SameSite,
    pub secure: bool,
    pub http_only: bool,
    pub path: String,
    pub max_age: Option<i64>,
}

impl Default for CookieAttributes {
    fn default() -> Self {
        Self {
            same_site: SameSite::None,
            secure: true,
            http_only: true,
            path: "/".to_string(),
            max_age: None,
        }
    }
}

impl CookieAttributes {
    /// Render a `Set-Cookie` header value.
    pub fn render(&self, name: &str, value: &str) -> String {
        let mut cookie = format!("{name}={value}; Path={}", self.path);
        if let Some(max_age) = self.max_age {
            cookie.push_str(&format!("; Max-Age={max_age}"));
        }
        cookie.push_str("; SameSite=");
        cookie.push_str(self.same_site.as_str());
        if self.secure {
            cookie.push_str("; Secure");
        }
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        cookie
    }
}

/// Value of the cookie called `name` in the request's `Cookie` headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
