use crate::models::UrlCategory;

/// Label a URL by literal, case-sensitive prefix. The first rule that matches wins:
/// Hugging Face datasets, then other Hugging Face pages (models), then GitHub.
pub fn classify_url(url: &str) -> UrlCategory {
    if let Some(rest) = strip_scheme(url) {
        if rest.starts_with("huggingface.co/datasets/") {
            return UrlCategory::Dataset;
        }
        if rest.starts_with("huggingface.co/") {
            return UrlCategory::Model;
        }
        if rest.starts_with("github.com/") {
            return UrlCategory::Code;
        }
    }

    if url.is_empty() {
        UrlCategory::Empty
    } else {
        UrlCategory::Unknown
    }
}

fn strip_scheme(url: &str) -> Option<&str> {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
}
