// Copyright (c) 2026, Swingmark contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Blocking HTTP client for the academy backend.
//!
//! All calls block and are made from background threads; the app polls
//! the results over channels. The agent carries an explicit timeout so
//! a dead backend fails the request instead of hanging the thread.

use super::types::{AnnotationDraft, AnnotationPage, Envelope, VideoMeta};
use super::ApiError;
use crate::config::AppConfig;
use crate::models::annotation::{self, Annotation};
use std::io::Read;
use std::time::Duration;

/// Cap on poster image size; a poster larger than this is a backend bug.
const MAX_POSTER_BYTES: u64 = 32 * 1024 * 1024;

#[derive(Clone)]
pub struct AcademyClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl AcademyClient {
    pub fn new(config: &AppConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs.max(1)))
            .build();
        Self {
            agent,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        }
    }

    /// `GET /videos/{id}` - metadata, including the duration the
    /// timeline needs.
    pub fn video(&self, video_id: &str) -> Result<VideoMeta, ApiError> {
        let resp = self.get(&format!("/videos/{video_id}"))?;
        parse_json::<Envelope<VideoMeta>>(resp).map(|e| e.data)
    }

    /// `GET /videos/{id}/annotations` - all annotations for a video,
    /// sorted for display (ascending timestamp).
    pub fn list_annotations(&self, video_id: &str) -> Result<Vec<Annotation>, ApiError> {
        let resp = self.get(&format!("/videos/{video_id}/annotations"))?;
        let mut annotations = parse_json::<Envelope<AnnotationPage>>(resp)?.data.annotations;
        annotation::sort_for_display(&mut annotations);
        log::info!("Fetched {} annotations for video {}", annotations.len(), video_id);
        Ok(annotations)
    }

    /// `POST /videos/{id}/annotations` - persist a finished stroke batch.
    pub fn create_annotation(
        &self,
        video_id: &str,
        draft: &AnnotationDraft,
    ) -> Result<Annotation, ApiError> {
        let body = serde_json::to_string(draft)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        let resp = self
            .request("POST", &format!("/videos/{video_id}/annotations"))
            .set("Content-Type", "application/json")
            .send_string(&body)
            .map_err(map_ureq_error)?;
        parse_json::<Envelope<Annotation>>(resp).map(|e| e.data)
    }

    /// `DELETE /annotations/{id}`.
    pub fn delete_annotation(&self, annotation_id: &str) -> Result<(), ApiError> {
        self.request("DELETE", &format!("/annotations/{annotation_id}"))
            .call()
            .map_err(map_ureq_error)?;
        log::info!("Deleted annotation {annotation_id}");
        Ok(())
    }

    /// `GET /videos/{id}/poster` - the still frame the canvas draws over.
    pub fn fetch_poster(&self, video_id: &str) -> Result<Vec<u8>, ApiError> {
        let resp = self.get(&format!("/videos/{video_id}/poster"))?;
        let mut bytes = Vec::new();
        resp.into_reader()
            .take(MAX_POSTER_BYTES)
            .read_to_end(&mut bytes)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(bytes)
    }

    fn get(&self, path: &str) -> Result<ureq::Response, ApiError> {
        self.request("GET", path).call().map_err(map_ureq_error)
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.agent.request(method, &url);
        if let Some(token) = &self.token {
            req = req.set("Authorization", &format!("Bearer {token}"));
        }
        req
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(resp: ureq::Response) -> Result<T, ApiError> {
    let body = resp
        .into_string()
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

fn map_ureq_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(code, resp) => ApiError::Status {
            code,
            message: resp.status_text().to_string(),
        },
        ureq::Error::Transport(transport) => {
            let message = transport.to_string();
            if message.contains("timed out") {
                ApiError::Timeout
            } else {
                ApiError::Network(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stroke::{Point, Stroke};

    fn client() -> AcademyClient {
        let config = AppConfig {
            api_base_url: "http://localhost:4000/api/v1/".to_string(),
            ..AppConfig::default()
        };
        AcademyClient::new(&config)
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let c = client();
        assert_eq!(c.base_url, "http://localhost:4000/api/v1");
    }

    #[test]
    fn empty_drawing_never_reaches_the_network() {
        // Draft construction is the validation gate, so there is no
        // client call to make: the error exists before any request.
        let result = AnnotationDraft::new(Vec::new(), 5.0, "#FF0000".to_string(), 3.0, None);
        assert!(matches!(result, Err(ApiError::EmptyDrawing)));
    }

    #[test]
    fn list_response_is_parsed_and_sorted() {
        let stroke = serde_json::to_value(Stroke::freehand(Point::new(0.1, 0.1), "#FF0000", 3.0))
            .unwrap();
        let body = serde_json::json!({
            "data": {
                "annotations": [
                    {"id": "late", "timestamp": 50.0,
                     "drawingData": {"strokes": [stroke.clone()]},
                     "color": "#FF0000", "strokeWidth": 3.0},
                    {"id": "early", "timestamp": 10.0,
                     "drawingData": {"strokes": [stroke.clone()]},
                     "color": "#FF0000", "strokeWidth": 3.0}
                ],
                "total": 2
            }
        });
        let page: Envelope<AnnotationPage> = serde_json::from_value(body).unwrap();
        let mut annotations = page.data.annotations;
        annotation::sort_for_display(&mut annotations);
        assert_eq!(annotations[0].id, "early");
        assert_eq!(annotations[1].id, "late");
    }
}
