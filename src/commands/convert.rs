use crate::cli::ConvertArgs;
use crate::error::{ErrorKind, Result};
use bkconv_config::Config;
use bkconv_convert::IdSequence;
use exn::ResultExt;

pub fn mihon_to_kotatsu(config: &Config, args: &ConvertArgs) -> Result<()> {
    let backup = bkconv_mihon::load(&args.input).or_raise(|| ErrorKind::Input)?;
    let archive = bkconv_convert::mihon_to_kotatsu(&backup, &config.resolver(), &mut IdSequence::new());
    bkconv_kotatsu::save(&args.out, &archive).or_raise(|| ErrorKind::Output)?;
    tracing::info!(
        favourites = archive.favourites.len(),
        categories = archive.categories.len(),
        chapters = archive.chapters.len(),
        out = %args.out.display(),
        "wrote kotatsu archive"
    );
    Ok(())
}

pub fn kotatsu_to_mihon(config: &Config, args: &ConvertArgs) -> Result<()> {
    let archive = bkconv_kotatsu::load(&args.input).or_raise(|| ErrorKind::Input)?;
    let backup = bkconv_convert::kotatsu_to_mihon(&archive, &config.resolver(), &config.map_options())
        .or_raise(|| ErrorKind::Convert)?;
    bkconv_mihon::save(&args.out, &backup).or_raise(|| ErrorKind::Output)?;
    tracing::info!(
        mangas = backup.mangas.len(),
        categories = backup.categories.len(),
        sources = backup.sources.len(),
        out = %args.out.display(),
        "wrote mihon backup"
    );
    Ok(())
}
