use std::fmt::{Display, Formatter, Result as FmtResult};

/// Publication status, as Mihon numbers it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MangaStatus {
    #[default]
    Unknown,
    Ongoing,
    Completed,
    Licensed,
    PublishingFinished,
    Cancelled,
    OnHiatus,
    /// A value newer than this code knows about. Kept so it can be written
    /// back unchanged.
    Other(i32),
}
impl MangaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MangaStatus::Unknown => "unknown",
            MangaStatus::Ongoing => "ongoing",
            MangaStatus::Completed => "completed",
            MangaStatus::Licensed => "licensed",
            MangaStatus::PublishingFinished => "publishing finished",
            MangaStatus::Cancelled => "cancelled",
            MangaStatus::OnHiatus => "on hiatus",
            MangaStatus::Other(_) => "other",
        }
    }
}
impl From<i32> for MangaStatus {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unknown,
            1 => Self::Ongoing,
            2 => Self::Completed,
            3 => Self::Licensed,
            4 => Self::PublishingFinished,
            5 => Self::Cancelled,
            6 => Self::OnHiatus,
            other => Self::Other(other),
        }
    }
}
impl From<MangaStatus> for i32 {
    fn from(value: MangaStatus) -> Self {
        match value {
            MangaStatus::Unknown => 0,
            MangaStatus::Ongoing => 1,
            MangaStatus::Completed => 2,
            MangaStatus::Licensed => 3,
            MangaStatus::PublishingFinished => 4,
            MangaStatus::Cancelled => 5,
            MangaStatus::OnHiatus => 6,
            MangaStatus::Other(other) => other,
        }
    }
}
impl Display for MangaStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MangaStatus::Other(value) => write!(f, "other ({value})"),
            status => write!(f, "{}", status.as_str()),
        }
    }
}
