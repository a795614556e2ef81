//! `GET /process?image=<url>&hue=<degrees>`

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use hueshift_core::{DecodeOptions, HueAngle};

use crate::error::AppError;
use crate::state::AppState;

/// Raw query parameters. Both are optional here so that a missing value
/// produces our own JSON error instead of the extractor's rejection.
#[derive(Debug, Default)]
pub struct ProcessParams {
    pub image: Option<String>,
    pub hue: Option<String>,
}

impl ProcessParams {
    /// Collect parameters from decoded query pairs. A repeated key keeps its
    /// first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "image" => &mut params.image,
                "hue" => &mut params.hue,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    pub fn validate(self) -> Result<ProcessRequest, AppError> {
        let image = self.image.filter(|s| !s.is_empty());
        let hue = self.hue.filter(|s| !s.is_empty());

        let (Some(image), Some(hue)) = (image, hue) else {
            return Err(AppError::MissingParameters);
        };

        let hue = hue.parse::<HueAngle>().map_err(AppError::InvalidHue)?;
        Ok(ProcessRequest { image, hue })
    }
}

/// A request that passed validation and may reach the core.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRequest {
    pub image: String,
    pub hue: HueAngle,
}

#[tracing::instrument(skip(state, query))]
pub async fn process_image(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(pairs) = query.map_err(|_| AppError::MissingParameters)?;
    let request = ProcessParams::from_pairs(pairs).validate()?;

    tracing::debug!(image = %request.image, hue = %request.hue, "Processing image");

    let bytes = state.fetcher.fetch(&request.image).await?;

    let options = DecodeOptions {
        apply_orientation: state.config.apply_exif_orientation,
    };
    let hue = request.hue;
    let png = tokio::task::spawn_blocking(move || {
        hueshift_core::shift_hue_to_png(&bytes, hue, options)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Transform task failed: {e}")))??;

    tracing::info!(image = %request.image, hue = %request.hue, bytes = png.len(), "Image processed");

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueshift_core::HueError;

    fn params(image: Option<&str>, hue: Option<&str>) -> ProcessParams {
        ProcessParams {
            image: image.map(String::from),
            hue: hue.map(String::from),
        }
    }

    #[test]
    fn test_validate_ok() {
        let req = params(Some("http://example.com/a.png"), Some("120"))
            .validate()
            .unwrap();
        assert_eq!(req.image, "http://example.com/a.png");
        assert_eq!(req.hue.degrees(), 120.0);
    }

    #[test]
    fn test_validate_boundaries() {
        assert!(params(Some("u"), Some("0")).validate().is_ok());
        assert!(params(Some("u"), Some("360")).validate().is_ok());
    }

    #[test]
    fn test_validate_missing() {
        for p in [
            params(None, Some("10")),
            params(Some("u"), None),
            params(Some(""), Some("10")),
            params(Some("u"), Some("")),
            ProcessParams::default(),
        ] {
            assert!(matches!(p.validate(), Err(AppError::MissingParameters)));
        }
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_first_value_wins() {
        let p = ProcessParams::from_pairs(pairs(&[
            ("image", "http://a/1.png"),
            ("hue", "90"),
            ("hue", "10"),
            ("image", "http://b/2.png"),
            ("other", "x"),
        ]));
        assert_eq!(p.image.as_deref(), Some("http://a/1.png"));
        assert_eq!(p.hue.as_deref(), Some("90"));
    }

    #[test]
    fn test_from_pairs_empty_first_value_counts_as_missing() {
        let p = ProcessParams::from_pairs(pairs(&[("image", ""), ("image", "u"), ("hue", "5")]));
        assert!(matches!(p.validate(), Err(AppError::MissingParameters)));
    }

    #[test]
    fn test_validate_bad_hue() {
        assert!(matches!(
            params(Some("u"), Some("abc")).validate(),
            Err(AppError::InvalidHue(HueError::NotAnInteger(_)))
        ));
        assert!(matches!(
            params(Some("u"), Some("12.5")).validate(),
            Err(AppError::InvalidHue(HueError::NotAnInteger(_)))
        ));
        assert!(matches!(
            params(Some("u"), Some("361")).validate(),
            Err(AppError::InvalidHue(HueError::OutOfRange(_)))
        ));
        assert!(matches!(
            params(Some("u"), Some("-5")).validate(),
            Err(AppError::InvalidHue(HueError::OutOfRange(_)))
        ));
    }
}
