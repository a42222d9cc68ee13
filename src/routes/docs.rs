//! Documentation page route handlers

use askama::Template;
use axum::{extract::State, response::Html};

use crate::error::Result;
use crate::AppState;

/// API documentation page template
#[derive(Template)]
#[template(path = "docs.html")]
struct DocsTemplate {
    version: String,
}

/// Documentation page handler
pub async fn docs(State(state): State<AppState>) -> Result<Html<String>> {
    let template = DocsTemplate {
        version: state.version.clone(),
    };
    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_template_renders() {
        let html = DocsTemplate {
            version: "9.9.9".to_string(),
        }
        .render()
        .unwrap();
        assert!(html.contains("POST /cotizar"));
        assert!(html.contains("size_code"));
        assert!(html.contains("9.9.9"));
    }
}
