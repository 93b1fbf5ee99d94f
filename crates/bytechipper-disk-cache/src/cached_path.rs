//! # URL-or-Path Classification
//!
//! `url_or_filename` references may name either a remote `http(s)` file,
//! which is downloaded into the cache, or an existing local file.

use std::path::PathBuf;

use crate::path_utils;

/// Cache subdirectory holding downloaded URL contents.
pub const URL_CACHE_CONTEXT: &str = "urls";

/// Schemes which may be downloaded.
pub const DOWNLOAD_SCHEMES: &[&str] = &["http", "https"];

/// The resolved source of a `url_or_filename` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    /// A downloadable remote file.
    Remote {
        /// The full URL.
        url: String,

        /// Cache context dirs; `["urls", host, dirs...]`.
        context: Vec<String>,

        /// The final file name.
        file_name: String,
    },

    /// A local file path; not yet checked for existence.
    Local(PathBuf),
}

impl PathSource {
    /// Classify a `url_or_filename` reference.
    ///
    /// ## Returns
    /// * `Ok(PathSource::Remote)` - for `http`/`https` URLs.
    /// * `Ok(PathSource::Local)` - for references without a scheme.
    /// * `Err(_)` - for any other scheme, or a URL without a file name.
    pub fn parse(url_or_filename: &str) -> anyhow::Result<Self> {
        let Some((scheme, rest)) = split_scheme(url_or_filename) else {
            return Ok(PathSource::Local(path_utils::expand_home(url_or_filename)));
        };

        let scheme = scheme.to_ascii_lowercase();
        if !DOWNLOAD_SCHEMES.contains(&scheme.as_str()) {
            anyhow::bail!("unable to parse {url_or_filename:?} as a URL or as a local path");
        }

        let rest = rest.split(['?', '#']).next().unwrap_or_default();
        let mut segments = rest.split('/').filter(|s| !s.is_empty());

        let host = match segments.next() {
            // Strip any userinfo; ports become part of the dir name.
            Some(host) => host.rsplit('@').next().unwrap_or(host).replace(':', "_"),
            None => anyhow::bail!("URL has no host: {url_or_filename:?}"),
        };
        if host.is_empty() || is_dot_segment(&host) {
            anyhow::bail!("URL host {host:?} is not cacheable: {url_or_filename:?}");
        }

        let mut dirs: Vec<String> = Vec::new();
        for segment in segments {
            if is_dot_segment(segment) {
                anyhow::bail!("URL path segment {segment:?} is not cacheable: {url_or_filename:?}");
            }
            dirs.push(segment.to_string());
        }

        let Some(file_name) = dirs.pop() else {
            anyhow::bail!("URL has no file name: {url_or_filename:?}");
        };

        let mut context = vec![URL_CACHE_CONTEXT.to_string(), host];
        context.extend(dirs);

        Ok(PathSource::Remote {
            url: url_or_filename.to_string(),
            context,
            file_name,
        })
    }
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Split `scheme://rest`; `None` when there is no well-formed scheme.
fn split_scheme(value: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = value.split_once("://")?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}
