/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short toast-style notice for the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_notice() {
        let n = Notice::success("Saved", "We will be in touch");
        assert_eq!(n.level, NoticeLevel::Success);
        assert_eq!(n.title, "Saved");
        assert!(!n.is_error());
    }

    #[test]
    fn error_notice() {
        let n = Notice::error("Failed", "Try again");
        assert!(n.is_error());
        assert_eq!(n.body, "Try again");
    }
}
