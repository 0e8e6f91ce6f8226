//! Stream URL resolution from a configurable template

use async_trait::async_trait;

use crate::error::{ApiResult, GeneralError};

use super::types::{VideoIds, VideoKind};

#[async_trait]
pub trait StreamRepository: Send + Sync {
    async fn stream_url(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<String>;
}

/// Expands `{tmdb_id}`, `{imdb_id}` and `{kind}` in a URL template.
/// Without a template, or when the template needs an id the item lacks,
/// resolution fails with `NotFound`.
#[derive(Clone, Debug, Default)]
pub struct TemplateStreamResolver {
    template: Option<String>,
}

impl TemplateStreamResolver {
    pub fn new(template: Option<String>) -> Self {
        Self {
            template: template.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn resolve(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<String> {
        let template = self.template.as_deref().ok_or(GeneralError::NotFound)?;

        let mut url = template.replace("{kind}", kind.tmdb_path());
        if url.contains("{tmdb_id}") {
            let id = ids.tmdb_id.ok_or(GeneralError::NotFound)?;
            url = url.replace("{tmdb_id}", &id.to_string());
        }
        if url.contains("{imdb_id}") {
            let id = ids.imdb_id.as_deref().ok_or(GeneralError::NotFound)?;
            url = url.replace("{imdb_id}", id);
        }
        Ok(url)
    }
}

#[async_trait]
impl StreamRepository for TemplateStreamResolver {
    async fn stream_url(&self, kind: VideoKind, ids: &VideoIds) -> ApiResult<String> {
        let result = self.resolve(kind, ids);
        if let Err(e) = &result {
            tracing::debug!(?kind, ?ids, error = %e, "No stream URL");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholders_are_expanded() {
        let resolver = TemplateStreamResolver::new(Some(
            "https://stream.example.org/{kind}/{tmdb_id}?imdb={imdb_id}".to_string(),
        ));
        let ids = VideoIds { tmdb_id: Some(550), imdb_id: Some("tt0137523".to_string()) };
        assert_eq!(
            resolver.resolve(VideoKind::Movie, &ids).unwrap(),
            "https://stream.example.org/movie/550?imdb=tt0137523"
        );
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let resolver = TemplateStreamResolver::new(Some("  ".to_string()));
        assert_eq!(
            resolver.resolve(VideoKind::Show, &VideoIds::tmdb(1396)),
            Err(GeneralError::NotFound)
        );
    }

    #[test]
    fn test_missing_imdb_id_is_not_found() {
        let resolver = TemplateStreamResolver::new(Some("https://x.example/{imdb_id}".to_string()));
        assert_eq!(
            resolver.resolve(VideoKind::Movie, &VideoIds::tmdb(550)),
            Err(GeneralError::NotFound)
        );
    }
}
