mod backup;
mod category;
mod chapter;
mod manga;
mod source;
mod status;

pub use self::backup::Backup;
pub use self::category::BackupCategory;
pub use self::chapter::BackupChapter;
pub use self::manga::BackupManga;
pub use self::source::BackupSource;
pub use self::status::MangaStatus;
