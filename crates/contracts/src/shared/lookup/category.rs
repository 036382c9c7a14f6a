use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LookupError;

/// Category of records browsed in the overlay (`app.model`, e.g. `core.author`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub app: String,
    pub model: String,
}

impl Category {
    pub fn new(app: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            model: model.into(),
        }
    }

    /// Category from a raw-id trigger href.
    ///
    /// Takes the leftmost `<segment>/<segment>/` whose closing slash is followed by the
    /// end of input, `?` or `#`: `../../core/author/?pop` → `core.author`.
    pub fn from_lookup_href(href: &str) -> Result<Self, LookupError> {
        let bytes = href.as_bytes();
        for (end, _) in href.match_indices('/') {
            let terminated = matches!(bytes.get(end + 1), None | Some(b'?') | Some(b'#'));
            if !terminated {
                continue;
            }
            let head = &href[..end];
            let Some(model_start) = head.rfind('/').map(|i| i + 1) else {
                continue;
            };
            let model = &head[model_start..];
            let app_head = &head[..model_start - 1];
            let app = match app_head.rfind('/') {
                Some(i) => &app_head[i + 1..],
                None => app_head,
            };
            if !app.is_empty() && !model.is_empty() {
                return Ok(Self::new(app, model));
            }
        }
        Err(LookupError::UnexpectedHref {
            href: href.to_string(),
        })
    }

    /// Category from a content-type registry path (`/core/author/` → `core.author`).
    pub fn from_registry_path(path: &str) -> Result<Self, LookupError> {
        let malformed = || LookupError::MalformedContentTypePath {
            path: path.to_string(),
        };
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let (app, model) = trimmed.split_once('/').ok_or_else(malformed)?;
        if app.is_empty() || model.is_empty() {
            return Err(malformed());
        }
        Ok(Self::new(app, model))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.app, self.model)
    }
}

impl FromStr for Category {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((app, model)) if !app.is_empty() && !model.is_empty() => {
                Ok(Self::new(app, model))
            }
            _ => Err(LookupError::UnexpectedHref {
                href: s.to_string(),
            }),
        }
    }
}
