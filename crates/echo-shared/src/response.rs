//! Response envelope and user-facing notices.

use serde::{Deserialize, Serialize};

use echo_core::error::{FeedError, ValidationError};

/// Standard envelope for a view payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            notice: None,
        }
    }

    pub fn rejected(notice: Notice) -> Self {
        Self {
            success: false,
            data: None,
            notice: Some(notice),
        }
    }
}

impl<T> From<Result<T, FeedError>> for ApiResponse<T> {
    fn from(result: Result<T, FeedError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::rejected(Notice::from_error(&e)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Toast shown after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn post_published() -> Self {
        Self::new(NoticeLevel::Success, "发布成功！AI正在为您生成温暖的回应...")
    }

    pub fn reply_ready() -> Self {
        Self::new(NoticeLevel::Success, "AI回复已生成！")
    }

    pub fn comment_published() -> Self {
        Self::new(NoticeLevel::Success, "评论发布成功！")
    }

    pub fn from_error(error: &FeedError) -> Self {
        let message = match error {
            FeedError::Validation(ValidationError::ContentTooShort { min, .. }) => {
                format!("内容至少需要{min}个字符")
            }
            FeedError::Validation(ValidationError::CommentTooShort { min, .. }) => {
                format!("评论至少需要{min}个字符")
            }
            FeedError::NotFound { .. } => "内容不存在或已被移除".to_string(),
        };
        Self::new(NoticeLevel::Error, message)
    }
}
