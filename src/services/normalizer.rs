// src/services/normalizer.rs
// DOCUMENTATION: Extract image URLs and posts from backend payloads
// PURPOSE: The backend's response shape is not fixed; probe known shapes in
// a fixed priority order and never fail on unexpected input
//
// Every lookup is an ordered list of rules. A rule names a path of object
// keys and an extractor applied to the value found there; the first rule
// that yields something wins.

use crate::models::{CommunityPost, ImageReference};
use serde_json::Value;

type Extractor = fn(&Value) -> Option<String>;

/// One probe: walk `path` through nested objects, then run `extract`
struct Rule {
    path: &'static [&'static str],
    extract: Extractor,
}

impl Rule {
    const fn new(path: &'static [&'static str], extract: Extractor) -> Self {
        Self { path, extract }
    }

    fn apply(&self, value: &Value) -> Option<String> {
        lookup(value, self.path).and_then(self.extract)
    }
}

/// Keys holding the list of images, highest priority first
const IMAGE_CONTAINERS: &[&[&str]] = &[
    &["images"],
    &["results"],
    &["photos"],
    &["items"],
    &["data"],
    &["images_list"],
];

/// Fields of an image object that may carry its URL
const IMAGE_URL_RULES: &[Rule] = &[
    Rule::new(&["url"], url_or_size_variant),
    Rule::new(&["src"], url_or_size_variant),
    Rule::new(&["image"], url_or_size_variant),
    Rule::new(&["link"], url_or_size_variant),
    Rule::new(&["regular"], url_or_size_variant),
    Rule::new(&["original"], url_or_size_variant),
    Rule::new(&["large"], url_or_size_variant),
    Rule::new(&["medium"], url_or_size_variant),
];

/// Sub-keys of a nested size-variant object (e.g. `src: {large, medium}`)
const SIZE_VARIANT_RULES: &[Rule] = &[
    Rule::new(&["original"], non_empty_string),
    Rule::new(&["large2x"], non_empty_string),
    Rule::new(&["large"], non_empty_string),
    Rule::new(&["regular"], non_empty_string),
    Rule::new(&["medium"], non_empty_string),
    Rule::new(&["small"], non_empty_string),
    Rule::new(&["tiny"], non_empty_string),
    Rule::new(&["url"], non_empty_string),
];

const ATTRIBUTION_RULES: &[Rule] = &[
    Rule::new(&["photographer"], non_empty_string),
    Rule::new(&["author"], non_empty_string),
    Rule::new(&["attribution"], non_empty_string),
    Rule::new(&["credit"], non_empty_string),
    Rule::new(&["user", "name"], non_empty_string),
    Rule::new(&["source"], non_empty_string),
];

const POST_CONTAINERS: &[&[&str]] = &[
    &["posts"],
    &["results"],
    &["data"],
    &["items"],
    &["children"],
    &["data", "children"],
];

const POST_TITLE_RULES: &[Rule] = &[
    Rule::new(&["title"], non_empty_string),
    Rule::new(&["name"], non_empty_string),
    Rule::new(&["text"], non_empty_string),
    Rule::new(&["data", "title"], non_empty_string),
];

const POST_LINK_RULES: &[Rule] = &[
    Rule::new(&["link"], non_empty_string),
    Rule::new(&["url"], non_empty_string),
    Rule::new(&["permalink"], non_empty_string),
    Rule::new(&["data", "url"], non_empty_string),
    Rule::new(&["data", "permalink"], non_empty_string),
];

/// Flat list of image URLs, at most `per` long
#[allow(dead_code)]
pub fn normalize_image_urls(payload: &Value, per: usize) -> Vec<String> {
    normalize_image_refs(payload, per)
        .into_iter()
        .map(|r| r.url)
        .collect()
}

/// Image references (URL + optional attribution), at most `per` long
/// DOCUMENTATION: Source order is preserved. Entries that are neither a
/// string nor an object with a known URL field are skipped.
pub fn normalize_image_refs(payload: &Value, per: usize) -> Vec<ImageReference> {
    let Some(candidates) = find_container(payload, IMAGE_CONTAINERS) else {
        log::debug!("No image container found in backend payload");
        return Vec::new();
    };

    let mut refs = Vec::with_capacity(per.min(candidates.len()));

    for (idx, candidate) in candidates.iter().enumerate() {
        if refs.len() >= per {
            break;
        }

        match image_reference(candidate) {
            Some(reference) => refs.push(reference),
            None => log::debug!("Skipping image entry {}: no usable URL", idx),
        }
    }

    refs
}

/// Community posts, at most `limit` long
pub fn normalize_posts(payload: &Value, limit: usize) -> Vec<CommunityPost> {
    let Some(candidates) = find_container(payload, POST_CONTAINERS) else {
        log::debug!("No post container found in backend payload");
        return Vec::new();
    };

    let mut posts = Vec::with_capacity(limit.min(candidates.len()));

    for (idx, candidate) in candidates.iter().enumerate() {
        if posts.len() >= limit {
            break;
        }

        match community_post(candidate) {
            Some(post) => posts.push(post),
            None => log::debug!("Skipping post entry {}: no title", idx),
        }
    }

    posts
}

/// A root-level list is used as is; otherwise the first container path
/// whose value is a list.
fn find_container<'a>(payload: &'a Value, containers: &[&[&str]]) -> Option<&'a Vec<Value>> {
    if let Value::Array(items) = payload {
        return Some(items);
    }

    containers
        .iter()
        .find_map(|path| lookup(payload, path).and_then(Value::as_array))
}

fn image_reference(candidate: &Value) -> Option<ImageReference> {
    match candidate {
        Value::String(_) => non_empty_string(candidate).map(ImageReference::new),
        Value::Object(_) => {
            let url = first_match(candidate, IMAGE_URL_RULES)?;
            Some(ImageReference {
                url,
                attribution: first_match(candidate, ATTRIBUTION_RULES),
            })
        }
        _ => None,
    }
}

fn community_post(candidate: &Value) -> Option<CommunityPost> {
    match candidate {
        Value::String(_) => {
            non_empty_string(candidate).map(|title| CommunityPost::new(title, CommunityPost::NO_LINK))
        }
        Value::Object(_) => {
            let title = first_match(candidate, POST_TITLE_RULES)?;
            let link = first_match(candidate, POST_LINK_RULES)
                .unwrap_or_else(|| CommunityPost::NO_LINK.to_string());
            Some(CommunityPost { title, link })
        }
        _ => None,
    }
}

fn first_match(value: &Value, rules: &[Rule]) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(value))
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

fn non_empty_string(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn url_or_size_variant(value: &Value) -> Option<String> {
    match value {
        Value::Object(_) => first_match(value, SIZE_VARIANT_RULES),
        _ => non_empty_string(value),
    }
}
