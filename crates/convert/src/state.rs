//! Publication status <-> Kotatsu `state`.

use bkconv_mihon::MangaStatus;

pub(crate) fn to_kotatsu(status: MangaStatus) -> Option<String> {
    let state = match status {
        MangaStatus::Ongoing => "ONGOING",
        MangaStatus::Completed | MangaStatus::PublishingFinished => "FINISHED",
        MangaStatus::Cancelled => "ABANDONED",
        MangaStatus::OnHiatus => "PAUSED",
        MangaStatus::Unknown | MangaStatus::Licensed | MangaStatus::Other(_) => return None,
    };
    Some(state.to_string())
}

pub(crate) fn from_kotatsu(state: Option<&str>) -> MangaStatus {
    match state {
        Some("ONGOING") => MangaStatus::Ongoing,
        Some("FINISHED") => MangaStatus::Completed,
        Some("ABANDONED") => MangaStatus::Cancelled,
        Some("PAUSED") => MangaStatus::OnHiatus,
        _ => MangaStatus::Unknown,
    }
}
