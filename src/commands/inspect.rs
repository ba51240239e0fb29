use crate::cli::InputArgs;
use crate::error::{ErrorKind, Result};
use bkconv_mihon::Backup;
use derive_more::Display;
use exn::ResultExt;

/// Something in a backup that commonly breaks a restore.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Issue {
    #[display("{_0} entries have source id 0")]
    ZeroSource(usize),
    #[display("{_0} entries are not initialized")]
    Uninitialized(usize),
    #[display("{_0} entries have no date added")]
    NoDateAdded(usize),
    #[display("no sources are registered")]
    NoSources,
    #[display("category #{index} `{name}` has id 0")]
    ZeroCategoryId { index: usize, name: String },
}

pub fn run(args: &InputArgs) -> Result<()> {
    let backup = bkconv_mihon::load(&args.input).or_raise(|| ErrorKind::Input)?;
    let chapters: usize = backup.mangas.iter().map(|manga| manga.chapters.len()).sum();
    println!("mangas: {}", backup.mangas.len());
    println!("chapters: {chapters}");
    println!("categories: {}", backup.categories.len());
    println!("sources: {}", backup.sources.len());

    let issues = issues(&backup);
    if issues.is_empty() {
        println!("no issues found");
    } else {
        println!("issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
    }
    Ok(())
}

pub fn issues(backup: &Backup) -> Vec<Issue> {
    let mut issues = Vec::new();
    // Only meaningful when there's a library to restore.
    if !backup.mangas.is_empty() {
        let count = |predicate: fn(&bkconv_mihon::BackupManga) -> bool| backup.mangas.iter().filter(|m| predicate(m)).count();
        let zero_source = count(|manga| manga.source == 0);
        if zero_source > 0 {
            issues.push(Issue::ZeroSource(zero_source));
        }
        let uninitialized = count(|manga| !manga.initialized);
        if uninitialized > 0 {
            issues.push(Issue::Uninitialized(uninitialized));
        }
        let no_date = count(|manga| manga.date_added == 0);
        if no_date > 0 {
            issues.push(Issue::NoDateAdded(no_date));
        }
        if backup.sources.is_empty() {
            issues.push(Issue::NoSources);
        }
    }
    for (index, category) in backup.categories.iter().enumerate() {
        if category.id == 0 {
            issues.push(Issue::ZeroCategoryId { index, name: category.name.clone() });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use bkconv_mihon::{BackupCategory, BackupManga, BackupSource};

    fn healthy() -> BackupManga {
        BackupManga { source: 1, date_added: 1, initialized: true, ..Default::default() }
    }

    #[test]
    fn test_healthy_backup() {
        let backup = Backup {
            mangas: vec![healthy()],
            categories: vec![BackupCategory { name: "A".to_string(), order: 0, id: 1 }],
            sources: vec![BackupSource { name: "One".to_string(), source_id: 1 }],
        };
        assert!(issues(&backup).is_empty());
    }

    #[test]
    fn test_empty_backup() {
        assert!(issues(&Backup::default()).is_empty());
    }

    #[test]
    fn test_every_issue() {
        let backup = Backup {
            mangas: vec![healthy(), BackupManga::default(), BackupManga { source: 3, ..Default::default() }],
            categories: vec![
                BackupCategory { name: "Fine".to_string(), order: 0, id: 4 },
                BackupCategory { name: "Broken".to_string(), order: 1, id: 0 },
            ],
            sources: vec![],
        };
        assert_eq!(
            issues(&backup),
            vec![
                Issue::ZeroSource(1),
                Issue::Uninitialized(2),
                Issue::NoDateAdded(2),
                Issue::NoSources,
                Issue::ZeroCategoryId { index: 1, name: "Broken".to_string() },
            ]
        );
        assert_eq!(Issue::ZeroCategoryId { index: 1, name: "Broken".to_string() }.to_string(), "category #1 `Broken` has id 0");
    }
}
