//! Link-header pagination.

use std::future::Future;

use serde::{de::DeserializeOwned, Deserialize};

use crate::errors::GitHubError;

/// Max page size allowed by GitHub.
pub(crate) const PER_PAGE: u32 = 100;

/// One page of a listing, with the URL of the following page if any.
#[derive(Debug)]
pub(crate) struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Deserialize)]
struct ErrorDocument {
    message: String,
}

/// Extract the `rel="next"` target of a `Link` header.
pub(crate) fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            param
                .trim()
                .strip_prefix("rel=")
                .map(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"))
                .unwrap_or(false)
        });

        if is_next {
            target
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .map(str::to_string)
        } else {
            None
        }
    })
}

/// Read a GitHub error document, if the body is one.
pub(crate) fn parse_error_document(body: &str) -> Option<String> {
    if body.trim_start().starts_with('{') {
        serde_json::from_str::<ErrorDocument>(body)
            .ok()
            .map(|doc| doc.message)
    } else {
        None
    }
}

/// Decode a listing page body.
///
/// GitHub may answer an object like `{"message": "Bad credentials"}` where a
/// list is expected; its message is surfaced as a remote error.
pub(crate) fn parse_page_body<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<Vec<T>, GitHubError> {
    if let Some(message) = parse_error_document(body) {
        return Err(GitHubError::RemoteError { status, message });
    }

    Ok(serde_json::from_str(body)?)
}

/// Follow `next` links from `first_url` and aggregate every page.
pub(crate) async fn collect_pages<T, F, Fut>(
    first_url: String,
    mut fetch_page: F,
) -> Result<Vec<T>, GitHubError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>, GitHubError>>,
{
    let mut items = Vec::new();
    let mut next = Some(first_url);

    while let Some(url) = next {
        let page = fetch_page(url).await?;
        tracing::debug!(
            count = page.items.len(),
            has_next = page.next.is_some(),
            "Fetched page"
        );
        items.extend(page.items);
        next = page.next;
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_next_link() {
        let header = r#"<https://api.github.com/repositories/7634677/pulls?per_page=100&page=2>; rel="next", <https://api.github.com/repositories/7634677/pulls?per_page=100&page=4>; rel="last""#;
        assert_eq!(
            parse_next_link(header),
            Some("https://api.github.com/repositories/7634677/pulls?per_page=100&page=2".into())
        );

        let last_page = r#"<https://api.github.com/x?page=1>; rel="first", <https://api.github.com/x?page=3>; rel="prev""#;
        assert_eq!(parse_next_link(last_page), None);
        assert_eq!(parse_next_link(""), None);
    }

    #[test]
    fn test_parse_page_body() {
        let items: Vec<u64> = parse_page_body(200, "[1, 2, 3]").unwrap();
        assert_eq!(items, vec![1, 2, 3]);

        let body = r#"{"message": "Bad credentials", "documentation_url": "https://docs.github.com/rest"}"#;
        match parse_page_body::<u64>(401, body) {
            Err(GitHubError::RemoteError { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Bad credentials");
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            parse_page_body::<u64>(200, "[\"nope\"]"),
            Err(GitHubError::DecodeError { .. })
        ));
    }

    fn fake_pages(
        pages: Vec<(&'static str, Vec<u64>, Option<&'static str>)>,
    ) -> HashMap<String, Page<u64>> {
        pages
            .into_iter()
            .map(|(url, items, next)| {
                (
                    url.to_string(),
                    Page {
                        items,
                        next: next.map(str::to_string),
                    },
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_collect_pages_aggregates_all_pages() {
        let mut split = fake_pages(vec![
            ("page1", vec![1, 2], Some("page2")),
            ("page2", vec![3], None),
        ]);
        let mut single = fake_pages(vec![("page1", vec![1, 2, 3], None)]);

        let from_split = collect_pages("page1".into(), |url| {
            let page = split.remove(&url);
            async move { Ok(page.expect("unexpected page")) }
        })
        .await
        .unwrap();
        let from_single = collect_pages("page1".into(), |url| {
            let page = single.remove(&url);
            async move { Ok(page.expect("unexpected page")) }
        })
        .await
        .unwrap();

        assert_eq!(from_split, vec![1, 2, 3]);
        assert_eq!(from_split, from_single);
        assert!(split.is_empty());
    }

    #[tokio::test]
    async fn test_collect_pages_stops_on_error() {
        let result = collect_pages::<u64, _, _>("page1".into(), |_| async {
            Err(GitHubError::RemoteError {
                status: 404,
                message: "Not Found".into(),
            })
        })
        .await;

        assert!(matches!(result, Err(GitHubError::RemoteError { status: 404, .. })));
    }
}
