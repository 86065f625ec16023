use pnghead::ImageSize;
use serde::Serialize;

/// One line of the plain report, matching the historical tool output.
pub fn plain_line(size: &ImageSize) -> String {
    format!("PNG size [{} ,{}]", size.width, size.height)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeReport {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SizeReport {
    pub fn success(path: String, size: ImageSize) -> Self {
        Self {
            path,
            width: Some(size.width),
            height: Some(size.height),
            error: None,
        }
    }

    pub fn failure(path: String, error: &anyhow::Error) -> Self {
        Self {
            path,
            width: None,
            height: None,
            error: Some(format!("{error:#}")),
        }
    }
}

pub fn to_yaml(reports: &[SizeReport]) -> anyhow::Result<String> {
    Ok(serde_yaml_ng::to_string(reports)?)
}
