use crate::cli::{InputArgs, SourceIdArgs};
use crate::error::{ErrorKind, Result};
use bkconv_config::Config;
use bkconv_convert::{SourceResolver, derive_source_id};
use bkconv_mihon::Backup;
use exn::ResultExt;
use std::collections::BTreeMap;

/// One source as seen from a backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUsage {
    pub id: i64,
    /// Registered display name; `None` if entries use an id the backup
    /// never registered.
    pub name: Option<String>,
    pub mangas: usize,
    /// Kotatsu key the id maps back to, if any.
    pub kotatsu_key: Option<String>,
}

pub fn list(config: &Config, args: &InputArgs) -> Result<()> {
    let backup = bkconv_mihon::load(&args.input).or_raise(|| ErrorKind::Input)?;
    for usage in usage(&backup, &config.resolver()) {
        let name = usage.name.as_deref().unwrap_or("(unregistered)");
        let key = usage.kotatsu_key.map(|key| format!("  [{key}]")).unwrap_or_default();
        println!("{:>20}  {name}  {} mangas{key}", usage.id, usage.mangas);
    }
    Ok(())
}

/// Registered sources in registry order, then unregistered ids in id order.
pub fn usage(backup: &Backup, resolver: &SourceResolver) -> Vec<SourceUsage> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for manga in &backup.mangas {
        *counts.entry(manga.source).or_default() += 1;
    }
    let describe = |id: i64, name: Option<String>, mangas: usize| SourceUsage {
        id,
        name,
        mangas,
        kotatsu_key: resolver.key_for_id(id).map(str::to_string),
    };
    let mut usages: Vec<_> = backup
        .sources
        .iter()
        .map(|source| describe(source.source_id, Some(source.name.clone()), counts.remove(&source.source_id).unwrap_or(0)))
        .collect();
    usages.extend(counts.into_iter().map(|(id, mangas)| describe(id, None, mangas)));
    usages
}

pub fn source_id(config: &Config, args: &SourceIdArgs) -> Result<()> {
    println!("{}", derive_source_id(&args.name, &args.lang, args.source_version));
    let resolver = config.resolver();
    if let Some((target, resolution)) = resolver.lookup(&args.name) {
        println!("{} resolves to {target} ({resolution}): {}", args.name, target.id());
    }
    Ok(())
}
